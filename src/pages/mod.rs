pub mod admin;
pub mod instructor;
pub mod student;

use crate::error::AppError;
use crate::models::User;
use crate::routes::Route;
use crate::state::AppState;
use crate::table::TableView;

/// What a route renders: a heading plus either prose or an interactive
/// table the shell can keep sorting/filtering/paging.
pub struct PageView {
    pub title: String,
    pub body: PageBody,
}

pub enum PageBody {
    Text(String),
    Table(Box<dyn TableView>),
}

impl PageView {
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: PageBody::Text(body.into()),
        }
    }

    pub fn table(title: impl Into<String>, table: impl TableView + 'static) -> Self {
        Self {
            title: title.into(),
            body: PageBody::Table(Box::new(table)),
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut dyn TableView> {
        match &mut self.body {
            PageBody::Table(table) => Some(table.as_mut()),
            PageBody::Text(_) => None,
        }
    }

    pub fn render(&self) -> String {
        let body = match &self.body {
            PageBody::Text(text) => text.clone(),
            PageBody::Table(table) => table.render_text(),
        };
        format!("== {} ==\n{}", self.title, body)
    }
}

/// Builds the page for an already-guarded route. The guard has run by the
/// time this is called; pages assume the user is authorized.
pub async fn render_route(
    state: &AppState,
    route: Route,
    user: Option<&User>,
) -> Result<PageView, AppError> {
    match route {
        Route::Home => Ok(home_page()),
        Route::Login => Ok(login_page()),
        Route::Signup => Ok(signup_page()),
        Route::StudentDashboard => student::dashboard(state, expect_user(user)?).await,
        Route::CoursesCatalog => student::courses_catalog(state, expect_user(user)?).await,
        Route::MySchedule => student::my_schedule(state, expect_user(user)?).await,
        Route::InstructorDashboard => instructor::dashboard(state, expect_user(user)?).await,
        Route::InstructorSections => instructor::sections(state).await,
        Route::InstructorSection(id) => instructor::section_roster(state, id).await,
        Route::AdminDashboard => admin::dashboard(state, expect_user(user)?).await,
        Route::ManageCourses => admin::courses(state).await,
        Route::ManageCourse(id) => admin::course_detail(state, id).await,
        Route::ManageTerms => admin::terms(state).await,
        Route::ManageInstructors => admin::instructors(state).await,
        Route::ManageStudents => admin::students(state).await,
        Route::ManageStudent(id) => admin::student_detail(state, id).await,
    }
}

fn expect_user(user: Option<&User>) -> Result<&User, AppError> {
    // The guard never routes here without a user; treat a miss as the
    // generic failure rather than panicking.
    user.ok_or_else(AppError::generic)
}

fn home_page() -> PageView {
    PageView::text(
        "Register R Us",
        "Your gateway to flexible, intuitive, and fast course registration.\n\
         Log in or sign up to browse the catalog and manage your schedule.",
    )
}

fn login_page() -> PageView {
    PageView::text("Log In", "Enter: login <username> <password>")
}

fn signup_page() -> PageView {
    PageView::text(
        "Sign Up",
        "Enter: signup <username> <first> <last> <password> <confirm>",
    )
}
