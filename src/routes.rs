//! Client-side routes and the guard that decides what renders for whom.
//! Authorization here is re-derived on every navigation so a role change
//! takes effect immediately; the backend still re-validates every request.

use crate::models::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    StudentDashboard,
    CoursesCatalog,
    MySchedule,
    InstructorDashboard,
    InstructorSections,
    InstructorSection(i64),
    AdminDashboard,
    ManageCourses,
    ManageCourse(i64),
    ManageTerms,
    ManageInstructors,
    ManageStudents,
    ManageStudent(i64),
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        let route = match path {
            "" | "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/student" => Route::StudentDashboard,
            "/student/courses" => Route::CoursesCatalog,
            "/student/schedule" => Route::MySchedule,
            "/instructor" => Route::InstructorDashboard,
            "/instructor/sections" => Route::InstructorSections,
            "/admin" => Route::AdminDashboard,
            "/admin/courses" => Route::ManageCourses,
            "/admin/terms" => Route::ManageTerms,
            "/admin/instructors" => Route::ManageInstructors,
            "/admin/students" => Route::ManageStudents,
            _ => {
                let (prefix, id) = path.rsplit_once('/')?;
                let id: i64 = id.parse().ok()?;
                match prefix {
                    "/instructor/sections" => Route::InstructorSection(id),
                    "/admin/courses" => Route::ManageCourse(id),
                    "/admin/students" => Route::ManageStudent(id),
                    _ => return None,
                }
            }
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::StudentDashboard => "/student".to_string(),
            Route::CoursesCatalog => "/student/courses".to_string(),
            Route::MySchedule => "/student/schedule".to_string(),
            Route::InstructorDashboard => "/instructor".to_string(),
            Route::InstructorSections => "/instructor/sections".to_string(),
            Route::InstructorSection(id) => format!("/instructor/sections/{}", id),
            Route::AdminDashboard => "/admin".to_string(),
            Route::ManageCourses => "/admin/courses".to_string(),
            Route::ManageCourse(id) => format!("/admin/courses/{}", id),
            Route::ManageTerms => "/admin/terms".to_string(),
            Route::ManageInstructors => "/admin/instructors".to_string(),
            Route::ManageStudents => "/admin/students".to_string(),
            Route::ManageStudent(id) => format!("/admin/students/{}", id),
        }
    }

    /// The role a route is gated on. Public routes return None.
    fn required_role(&self) -> Option<Role> {
        match self {
            Route::Home | Route::Login | Route::Signup => None,
            Route::StudentDashboard | Route::CoursesCatalog | Route::MySchedule => {
                Some(Role::Student)
            }
            Route::InstructorDashboard
            | Route::InstructorSections
            | Route::InstructorSection(_) => Some(Role::Instructor),
            Route::AdminDashboard
            | Route::ManageCourses
            | Route::ManageCourse(_)
            | Route::ManageTerms
            | Route::ManageInstructors
            | Route::ManageStudents
            | Route::ManageStudent(_) => Some(Role::Admin),
        }
    }
}

/// The three phases of the auth-user fetch.
#[derive(Debug, Clone)]
pub enum AuthPhase {
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl AuthPhase {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Auth fetch still in flight; render only a loading indicator.
    Loading,
    Render(Route),
    Redirect(Route),
}

/// One guard step for a single route.
pub fn resolve(route: Route, phase: &AuthPhase) -> Resolution {
    match phase {
        AuthPhase::Loading => Resolution::Loading,
        AuthPhase::Unauthenticated => match route {
            Route::Login | Route::Signup => Resolution::Render(route),
            _ => Resolution::Redirect(Route::Login),
        },
        AuthPhase::Authenticated(user) => match route {
            Route::Login | Route::Signup => Resolution::Redirect(Route::Home),
            Route::Home => {
                // Landing priority when several roles are held.
                if user.has_role(Role::Admin) {
                    Resolution::Redirect(Route::AdminDashboard)
                } else if user.has_role(Role::Instructor) {
                    Resolution::Redirect(Route::InstructorDashboard)
                } else if user.has_role(Role::Student) {
                    Resolution::Redirect(Route::StudentDashboard)
                } else {
                    Resolution::Render(Route::Home)
                }
            }
            _ => match route.required_role() {
                Some(role) if !user.has_role(role) => Resolution::Redirect(Route::Home),
                _ => Resolution::Render(route),
            },
        },
    }
}

/// Follows redirects until something renders. The route graph has no
/// cycles; the bound is a guard against future edits breaking that.
pub fn resolve_to_render(route: Route, phase: &AuthPhase) -> Resolution {
    let mut current = route;
    for _ in 0..8 {
        match resolve(current, phase) {
            Resolution::Redirect(next) => current = next,
            done => return done,
        }
    }
    Resolution::Render(current)
}

/// Navigation bar links for the current user.
pub fn nav_links(user: Option<&User>) -> Vec<(Route, &'static str)> {
    let mut links = vec![(Route::Home, "Home")];
    let Some(user) = user else {
        links.push((Route::Login, "Login"));
        links.push((Route::Signup, "Sign Up"));
        return links;
    };
    if user.has_role(Role::Admin) {
        links.push((Route::AdminDashboard, "Admin"));
        links.push((Route::ManageCourses, "Courses"));
        links.push((Route::ManageTerms, "Terms"));
        links.push((Route::ManageInstructors, "Instructors"));
        links.push((Route::ManageStudents, "Students"));
    }
    if user.has_role(Role::Instructor) {
        links.push((Route::InstructorDashboard, "Instructor"));
        links.push((Route::InstructorSections, "My Sections"));
    }
    if user.has_role(Role::Student) {
        links.push((Route::StudentDashboard, "Student"));
        links.push((Route::CoursesCatalog, "Course Catalog"));
        links.push((Route::MySchedule, "My Schedule"));
    }
    links
}
