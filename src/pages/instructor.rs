use super::PageView;
use crate::cache::keys;
use crate::error::AppError;
use crate::models::{InstructorCourseSection, InstructorEnrollment, User};
use crate::state::AppState;
use crate::table::{Column, DataTable};

async fn fetch_assigned(state: &AppState) -> Result<Vec<InstructorCourseSection>, AppError> {
    state
        .cache
        .query(keys::ASSIGNED_SECTIONS, || async {
            state.api.get_assigned_sections().await
        })
        .await
}

pub async fn dashboard(state: &AppState, user: &User) -> Result<PageView, AppError> {
    let assigned = fetch_assigned(state).await?;
    let students: u32 = assigned.iter().map(|s| s.enrolled_count).sum();
    Ok(PageView::text(
        format!("Welcome, {}", user.full_name()),
        format!(
            "You are assigned {} section(s) with {} enrolled student(s).\n\
             Manage them at /instructor/sections.",
            assigned.len(),
            students
        ),
    ))
}

pub async fn sections(state: &AppState) -> Result<PageView, AppError> {
    let assigned = fetch_assigned(state).await?;

    let columns = vec![
        Column::new("id", "Id", |s: &InstructorCourseSection| s.id.to_string()),
        Column::new("course", "Course", |s: &InstructorCourseSection| {
            s.course.label()
        }),
        Column::new("title", "Title", |s: &InstructorCourseSection| {
            s.course.title.clone()
        }),
        Column::new("term", "Term", |s: &InstructorCourseSection| {
            format!("{} - {}", s.term.start_date, s.term.end_date)
        }),
        Column::new("schedule", "Schedule", |s: &InstructorCourseSection| {
            s.schedule.clone()
        }),
        Column::new("room", "Room", |s: &InstructorCourseSection| s.room.clone()),
        Column::new("enrolled", "Enrolled", |s: &InstructorCourseSection| {
            format!("{}/{}", s.enrolled_count, s.capacity)
        }),
    ];

    Ok(PageView::table(
        "Assigned Sections",
        DataTable::new(columns, assigned),
    ))
}

/// Roster for one assigned section: the instructor-facing enrollment
/// projection, grade and status included.
pub async fn section_roster(state: &AppState, section_id: i64) -> Result<PageView, AppError> {
    let section = state
        .cache
        .query(&keys::assigned_section(section_id), || async {
            state.api.get_assigned_section_by_id(section_id).await
        })
        .await?;

    let title = format!(
        "{} section {} - {}",
        section.course.label(),
        section.id,
        section.course.title
    );

    let columns = vec![
        Column::new("student", "Student", |e: &InstructorEnrollment| {
            e.student.full_name()
        }),
        Column::new("username", "Username", |e: &InstructorEnrollment| {
            e.student.username.clone()
        }),
        Column::new("grade", "Grade", |e: &InstructorEnrollment| {
            e.grade.to_string()
        }),
        Column::new("status", "Status", |e: &InstructorEnrollment| {
            e.status.to_string()
        }),
        Column::new("since", "Enrolled On", |e: &InstructorEnrollment| {
            e.created_at.clone()
        }),
    ];

    Ok(PageView::table(
        title,
        DataTable::new(columns, section.enrollments),
    ))
}
