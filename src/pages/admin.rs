use super::PageView;
use crate::cache::keys;
use crate::error::AppError;
use crate::models::{
    Course, Enrollment, PageResponse, Pageable, Role, SortDirection, Term, User,
};
use crate::state::AppState;
use crate::table::{Column, DataTable};

pub async fn dashboard(state: &AppState, user: &User) -> Result<PageView, AppError> {
    let page = fetch_courses(state).await?;
    Ok(PageView::text(
        format!("Admin Dashboard - {}", user.full_name()),
        format!(
            "{} course(s) in the catalog.\n\
             Manage: /admin/courses, /admin/terms, /admin/instructors, /admin/students",
            page.total_elements
        ),
    ))
}

async fn fetch_courses(state: &AppState) -> Result<PageResponse<Course>, AppError> {
    state
        .cache
        .query(keys::COURSES, || async {
            state.api.get_all_courses(Pageable::default()).await
        })
        .await
}

pub async fn courses(state: &AppState) -> Result<PageView, AppError> {
    let page = fetch_courses(state).await?;

    let columns = vec![
        Column::new("id", "Id", |c: &Course| c.id.to_string()),
        Column::new("course", "Course", |c: &Course| c.label()),
        Column::new("title", "Title", |c: &Course| c.title.clone()),
        Column::new("credits", "Credits", |c: &Course| c.credits.to_string()),
        Column::new("sections", "Sections", |c: &Course| {
            c.course_sections.len().to_string()
        }),
        Column::new("prereqs", "Prerequisites", |c: &Course| {
            c.prerequisites.len().to_string()
        }),
    ];

    Ok(PageView::table(
        "Manage Courses",
        DataTable::new(columns, page.content),
    ))
}

/// One course in full: attributes, sections, prerequisites.
pub async fn course_detail(state: &AppState, course_id: i64) -> Result<PageView, AppError> {
    let course = state
        .cache
        .query(&keys::course(course_id), || async {
            state.api.get_course_by_id(course_id).await
        })
        .await?;

    let mut out = format!(
        "{} {} ({} credits)\n{}\n\nSections:\n",
        course.label(),
        course.title,
        course.credits,
        course.description
    );
    if course.course_sections.is_empty() {
        out.push_str("  none\n");
    }
    for section in &course.course_sections {
        out.push_str(&format!(
            "  section {}  {}  room {}  {}  enrolled {}/{}\n",
            section.id,
            section.schedule,
            section.room,
            section.instructor.full_name(),
            section.enrolled_count,
            section.capacity
        ));
    }
    out.push_str("\nPrerequisites:\n");
    if course.prerequisites.is_empty() {
        out.push_str("  none\n");
    }
    for prerequisite in &course.prerequisites {
        out.push_str(&format!(
            "  {}  minimum grade {}\n",
            prerequisite.required_course_label(),
            prerequisite.minimum_grade
        ));
    }

    Ok(PageView::text(format!("Manage Course {}", course.label()), out))
}

pub async fn terms(state: &AppState) -> Result<PageView, AppError> {
    let terms = state
        .cache
        .query(keys::TERMS, || async { state.api.get_all_terms().await })
        .await?;

    let columns = vec![
        Column::new("id", "Id", |t: &Term| t.id.to_string()),
        Column::new("start", "Start", |t: &Term| t.start_date.to_string()),
        Column::new("end", "End", |t: &Term| t.end_date.to_string()),
        Column::new("regStart", "Registration Start", |t: &Term| {
            t.registration_start.to_string()
        }),
        Column::new("regEnd", "Registration End", |t: &Term| {
            t.registration_end.to_string()
        }),
    ];

    Ok(PageView::table("Manage Terms", DataTable::new(columns, terms)))
}

/// Walks every page of the user list. The tables filter and sort
/// client-side, so a partial fetch would silently hide users.
async fn fetch_all_users(state: &AppState) -> Result<Vec<User>, AppError> {
    state
        .cache
        .query(keys::USERS, || async {
            let mut users = Vec::new();
            let mut page = 0;
            loop {
                let response = state
                    .api
                    .get_all_users(page, 100, SortDirection::Asc, None)
                    .await?;
                users.extend(response.content);
                if response.page_number + 1 >= response.total_pages {
                    break;
                }
                page = response.page_number + 1;
            }
            Ok(users)
        })
        .await
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "Id", |u: &User| u.id.to_string()),
        Column::new("username", "Username", |u: &User| u.username.clone()),
        Column::new("name", "Name", |u: &User| u.full_name()),
        Column::new("roles", "Roles", |u: &User| {
            u.granted_authorities
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }),
        Column::new("created", "Created", |u: &User| u.created_at.clone()),
    ]
}

pub async fn instructors(state: &AppState) -> Result<PageView, AppError> {
    // Admins can be assigned sections too, so they appear alongside
    // instructors here.
    let instructors: Vec<User> = fetch_all_users(state)
        .await?
        .into_iter()
        .filter(|u| u.has_role(Role::Instructor) || u.has_role(Role::Admin))
        .collect();
    Ok(PageView::table(
        "Manage Instructors",
        DataTable::new(user_columns(), instructors),
    ))
}

pub async fn students(state: &AppState) -> Result<PageView, AppError> {
    let students: Vec<User> = fetch_all_users(state)
        .await?
        .into_iter()
        .filter(|u| u.has_role(Role::Student))
        .collect();
    Ok(PageView::table(
        "Manage Students",
        DataTable::new(user_columns(), students),
    ))
}

/// One student's enrollments, as an admin sees them.
pub async fn student_detail(state: &AppState, student_id: i64) -> Result<PageView, AppError> {
    let enrollments = state
        .cache
        .query(&keys::enrollments(student_id), || async {
            state.api.get_enrollments_by_student(student_id).await
        })
        .await?;

    let columns = vec![
        Column::new("section", "Section", |e: &Enrollment| {
            format!("{}-{}", e.course_section.course.label(), e.course_section.id)
        }),
        Column::new("title", "Title", |e: &Enrollment| {
            e.course_section.course.title.clone()
        }),
        Column::new("grade", "Grade", |e: &Enrollment| e.grade.to_string()),
        Column::new("status", "Status", |e: &Enrollment| e.status.to_string()),
        Column::new("since", "Enrolled On", |e: &Enrollment| e.created_at.clone()),
    ];

    Ok(PageView::table(
        format!("Manage Student {}", student_id),
        DataTable::new(columns, enrollments),
    ))
}
