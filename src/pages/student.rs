use chrono::Local;

use super::PageView;
use crate::cache::keys;
use crate::error::AppError;
use crate::models::{Enrollment, EnrollmentStatus, Pageable, User};
use crate::state::AppState;
use crate::table::{Column, DataTable};

async fn fetch_enrollments(
    state: &AppState,
    student_id: i64,
) -> Result<Vec<Enrollment>, AppError> {
    state
        .cache
        .query(&keys::enrollments(student_id), || async {
            state.api.get_enrollments_by_student(student_id).await
        })
        .await
}

pub async fn dashboard(state: &AppState, user: &User) -> Result<PageView, AppError> {
    let enrollments = fetch_enrollments(state, user.id).await?;
    let active = enrollments
        .iter()
        .filter(|e| {
            matches!(
                e.status,
                EnrollmentStatus::NotStarted | EnrollmentStatus::Started
            )
        })
        .count();
    Ok(PageView::text(
        format!("Welcome, {}", user.full_name()),
        format!(
            "You are enrolled in {} section(s), {} active.\n\
             Browse the catalog at /student/courses or review /student/schedule.",
            enrollments.len(),
            active
        ),
    ))
}

/// Catalog view: every course with its sections, each badged Open or
/// Closed from the live registration-eligibility check.
pub async fn courses_catalog(state: &AppState, user: &User) -> Result<PageView, AppError> {
    let page = state
        .cache
        .query(keys::COURSES, || async {
            state.api.get_all_courses(Pageable::default()).await
        })
        .await?;
    let enrollments = fetch_enrollments(state, user.id).await?;
    let today = Local::now().date_naive();

    let mut out = String::new();
    for course in &page.content {
        out.push_str(&format!(
            "{} {} ({} credits)\n",
            course.label(),
            course.title,
            course.credits
        ));
        if !course.prerequisites.is_empty() {
            let required: Vec<String> = course
                .prerequisites
                .iter()
                .map(|p| format!("{} (min {})", p.required_course_label(), p.minimum_grade))
                .collect();
            out.push_str(&format!("    requires: {}\n", required.join(", ")));
        }
        for section in &course.course_sections {
            let open = section.is_open_for_registration(today);
            let enrolled = enrollments
                .iter()
                .any(|e| e.course_section.id == section.id);
            out.push_str(&format!(
                "  [{}] section {}  {}  room {}  {}  seats left: {}{}\n",
                if open { "Open" } else { "Closed" },
                section.id,
                section.schedule,
                section.room,
                section.instructor.full_name(),
                section.seats_remaining(),
                if enrolled { "  (enrolled)" } else { "" }
            ));
        }
        out.push('\n');
    }
    out.push_str("Commands: register <sectionId>, drop <sectionId>\n");
    Ok(PageView::text("Course Catalog", out))
}

pub async fn my_schedule(state: &AppState, user: &User) -> Result<PageView, AppError> {
    let enrollments = fetch_enrollments(state, user.id).await?;

    let columns = vec![
        Column::new("section", "Section", |e: &Enrollment| {
            format!("{}-{}", e.course_section.course.label(), e.course_section.id)
        }),
        Column::new("title", "Title", |e: &Enrollment| {
            e.course_section.course.title.clone()
        }),
        Column::new("schedule", "Schedule", |e: &Enrollment| {
            e.course_section.schedule.clone()
        }),
        Column::new("room", "Room", |e: &Enrollment| e.course_section.room.clone()),
        Column::new("instructor", "Instructor", |e: &Enrollment| {
            e.course_section.instructor.full_name()
        }),
        Column::new("grade", "Grade", |e: &Enrollment| e.grade.to_string()),
        Column::new("status", "Status", |e: &Enrollment| e.status.to_string()),
    ];

    Ok(PageView::table(
        "My Schedule",
        DataTable::new(columns, enrollments),
    ))
}
