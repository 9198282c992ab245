//! The interactive shell: navigation plus the handful of mutations the
//! screens expose. Route paths are the command surface; every auth
//! mutation invalidates the cached auth user so the guard re-evaluates on
//! the next navigation.

use crate::cache::keys;
use crate::error::AppError;
use crate::models::{
    CreateEnrollmentRequest, EnrollmentStatus, ManageEnrollmentRequest, Role, SignupRequest,
    UpdateUserRequest,
};
use crate::pages::{self, PageView};
use crate::routes::{self, AuthPhase, Resolution, Route};
use crate::state::AppState;

pub struct Shell {
    state: AppState,
    phase: AuthPhase,
    route: Route,
    page: Option<PageView>,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            phase: AuthPhase::Loading,
            route: Route::Home,
            page: None,
        }
    }

    pub fn current_path(&self) -> String {
        self.route.path()
    }

    /// Re-derives the auth phase from the cached auth user, fetching when
    /// the cache is cold.
    async fn resolve_auth(&mut self) -> Result<(), AppError> {
        let user = self
            .state
            .cache
            .query(keys::AUTH_USER, || async {
                Ok(self.state.api.get_auth_user().await)
            })
            .await?;
        self.phase = match user {
            Some(user) => AuthPhase::Authenticated(user),
            None => AuthPhase::Unauthenticated,
        };
        Ok(())
    }

    /// Guards the route, follows redirects, renders the landing page.
    pub async fn navigate(&mut self, route: Route) -> String {
        if let Err(e) = self.resolve_auth().await {
            return format!("Error: {}", e);
        }
        let target = match routes::resolve_to_render(route, &self.phase) {
            Resolution::Render(target) => target,
            Resolution::Redirect(target) => target,
            Resolution::Loading => return "Loading...".to_string(),
        };
        self.route = target;
        match pages::render_route(&self.state, target, self.phase.user()).await {
            Ok(page) => {
                let mut out = self.nav_bar();
                out.push_str(&page.render());
                self.page = Some(page);
                out
            }
            Err(e) => {
                self.page = None;
                format!("Error: {}", e)
            }
        }
    }

    fn nav_bar(&self) -> String {
        let links: Vec<String> = routes::nav_links(self.phase.user())
            .into_iter()
            .map(|(route, label)| format!("{} ({})", label, route.path()))
            .collect();
        format!("[ {} ]\n", links.join(" | "))
    }

    async fn rerender(&mut self) -> String {
        self.navigate(self.route).await
    }

    /// One line of input, one response. None means quit.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        let out = match command {
            "" => self.rerender().await,
            "quit" | "exit" => return None,
            "help" => help_text(),
            "login" => self.login(&args).await,
            "logout" => self.logout().await,
            "signup" => self.signup(&args).await,
            "register" => self.register(&args).await,
            "drop" => self.drop_enrollment(&args).await,
            "setrole" => self.set_role(&args).await,
            "grade" => self.grade(&args).await,
            "filter" => self.with_table(|t| {
                t.set_filter(&args.join(" "));
                None
            }),
            "sort" => self.with_table(|t| match args.first() {
                Some(id) if t.toggle_sort(id) => None,
                _ => Some(format!("Usage: sort <{}>", t.column_ids().join("|"))),
            }),
            "cols" => self.with_table(|t| match args.first() {
                Some(id) if t.toggle_column(id) => None,
                _ => Some(format!("Usage: cols <{}>", t.column_ids().join("|"))),
            }),
            "next" => self.with_table(|t| {
                t.next_page();
                None
            }),
            "prev" => self.with_table(|t| {
                t.prev_page();
                None
            }),
            _ if line.starts_with('/') => match Route::parse(line) {
                Some(route) => self.navigate(route).await,
                None => format!("Unknown route: {}", line),
            },
            _ => format!("Unknown command: {} (try 'help')", command),
        };
        Some(out)
    }

    /// Applies a table interaction to the current page, re-rendering it in
    /// place. Text pages have no table to interact with.
    fn with_table(&mut self, apply: impl FnOnce(&mut dyn crate::table::TableView) -> Option<String>) -> String {
        let Some(page) = self.page.as_mut() else {
            return "Nothing is rendered yet.".to_string();
        };
        let Some(table) = page.table_mut() else {
            return "No table on this page.".to_string();
        };
        if let Some(usage) = apply(table) {
            return usage;
        }
        page.render()
    }

    async fn login(&mut self, args: &[&str]) -> String {
        let [username, password] = args else {
            return "Usage: login <username> <password>".to_string();
        };
        match self.state.api.login(username, password).await {
            Ok(user) => {
                self.state.cache.invalidate(keys::AUTH_USER).await;
                tracing::info!("logged in as {}", user.username);
                self.navigate(Route::Home).await
            }
            // A failed login never touches the cached auth user.
            Err(e) => format!("Error: {}", e),
        }
    }

    async fn logout(&mut self) -> String {
        match self.state.api.logout().await {
            Ok(()) => {
                self.state.cache.invalidate(keys::AUTH_USER).await;
                self.navigate(Route::Home).await
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    async fn signup(&mut self, args: &[&str]) -> String {
        let [username, first_name, last_name, password, confirm_password] = args else {
            return "Usage: signup <username> <first> <last> <password> <confirm>".to_string();
        };
        let request = SignupRequest {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        match self.state.api.signup(&request).await {
            Ok(user) => {
                self.state.cache.invalidate(keys::AUTH_USER).await;
                tracing::info!("signed up as {}", user.username);
                self.navigate(Route::Home).await
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Catalog registration. Transient notification style: the outcome is
    /// a one-line message ahead of the refreshed page.
    async fn register(&mut self, args: &[&str]) -> String {
        let Some(user) = self.phase.user().cloned() else {
            return "Log in first.".to_string();
        };
        let Some(section_id) = args.first().and_then(|a| a.parse::<i64>().ok()) else {
            return "Usage: register <sectionId>".to_string();
        };
        let request = CreateEnrollmentRequest {
            course_section_id: section_id,
        };
        match self.state.api.create_enrollment(user.id, &request).await {
            Ok(_) => {
                self.state.cache.invalidate(&keys::enrollments(user.id)).await;
                self.state.cache.invalidate(keys::COURSES).await;
                format!("Registered for section {}.\n{}", section_id, self.rerender().await)
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// `drop <sectionId>` drops the session user's own enrollment;
    /// `drop <studentId> <sectionId>` removes a student from a roster.
    async fn drop_enrollment(&mut self, args: &[&str]) -> String {
        let ids: Vec<i64> = args.iter().filter_map(|a| a.parse().ok()).collect();
        match (ids.as_slice(), args.len()) {
            ([section_id], 1) => {
                let Some(user) = self.phase.user().cloned() else {
                    return "Log in first.".to_string();
                };
                match self.state.api.delete_enrollment(user.id, *section_id).await {
                    Ok(()) => {
                        self.state.cache.invalidate(&keys::enrollments(user.id)).await;
                        self.state.cache.invalidate(keys::COURSES).await;
                        format!("Dropped section {}.\n{}", section_id, self.rerender().await)
                    }
                    Err(e) => format!("Error: {}", e),
                }
            }
            ([student_id, section_id], 2) => {
                match self.state.api.delete_enrollment(*student_id, *section_id).await {
                    Ok(()) => {
                        self.state
                            .cache
                            .invalidate(&keys::enrollments(*student_id))
                            .await;
                        self.state
                            .cache
                            .invalidate(&keys::assigned_section(*section_id))
                            .await;
                        self.state.cache.invalidate(keys::ASSIGNED_SECTIONS).await;
                        format!(
                            "Dropped student {} from section {}.\n{}",
                            student_id,
                            section_id,
                            self.rerender().await
                        )
                    }
                    Err(e) => format!("Error: {}", e),
                }
            }
            _ => "Usage: drop <sectionId> | drop <studentId> <sectionId>".to_string(),
        }
    }

    /// Admin-only role change.
    async fn set_role(&mut self, args: &[&str]) -> String {
        let (Some(user_id), Some(role)) = (
            args.first().and_then(|a| a.parse::<i64>().ok()),
            args.get(1).and_then(|a| parse_role(a)),
        ) else {
            return "Usage: setrole <userId> <ADMIN|INSTRUCTOR|STUDENT>".to_string();
        };
        let request = UpdateUserRequest { role };
        match self.state.api.update_user_role(user_id, &request).await {
            Ok(user) => {
                self.state.cache.invalidate(keys::USERS).await;
                format!("Updated {} to {}.\n{}", user.username, role, self.rerender().await)
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Instructor/admin grade-and-status update on one enrollment.
    async fn grade(&mut self, args: &[&str]) -> String {
        let (Some(student_id), Some(section_id), Some(grade), Some(status)) = (
            args.first().and_then(|a| a.parse::<i64>().ok()),
            args.get(1).and_then(|a| a.parse::<i64>().ok()),
            args.get(2).and_then(|a| a.parse::<f64>().ok()),
            args.get(3).and_then(|a| parse_status(a)),
        ) else {
            return "Usage: grade <studentId> <sectionId> <grade> \
                    <NOT_STARTED|STARTED|COMPLETED|DROPPED|FAILED>"
                .to_string();
        };
        let request = ManageEnrollmentRequest { grade, status };
        match self
            .state
            .api
            .update_enrollment(student_id, section_id, &request)
            .await
        {
            Ok(_) => {
                self.state
                    .cache
                    .invalidate(&keys::assigned_section(section_id))
                    .await;
                self.state
                    .cache
                    .invalidate(&keys::enrollments(student_id))
                    .await;
                format!("Enrollment updated.\n{}", self.rerender().await)
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

fn parse_role(s: &str) -> Option<Role> {
    match s {
        "ADMIN" => Some(Role::Admin),
        "INSTRUCTOR" => Some(Role::Instructor),
        "STUDENT" => Some(Role::Student),
        _ => None,
    }
}

fn parse_status(s: &str) -> Option<EnrollmentStatus> {
    match s {
        "NOT_STARTED" => Some(EnrollmentStatus::NotStarted),
        "STARTED" => Some(EnrollmentStatus::Started),
        "COMPLETED" => Some(EnrollmentStatus::Completed),
        "DROPPED" => Some(EnrollmentStatus::Dropped),
        "FAILED" => Some(EnrollmentStatus::Failed),
        _ => None,
    }
}

fn help_text() -> String {
    "Commands:\n\
     /<path>                 navigate (e.g. /student/courses)\n\
     login <user> <pass>     log in\n\
     logout                  log out\n\
     signup <user> <first> <last> <pass> <confirm>\n\
     register <sectionId>    enroll in a section (student)\n\
     drop <sectionId>        drop your own section (student)\n\
     drop <studentId> <sectionId>  drop a student from a roster\n\
     setrole <userId> <role> change a user's role (admin)\n\
     grade <studentId> <sectionId> <grade> <status> (instructor)\n\
     filter <text>           filter the current table\n\
     sort <column>           sort by column, toggling direction\n\
     cols <column>           show/hide a column\n\
     next | prev             page through the current table\n\
     quit"
        .to_string()
}
