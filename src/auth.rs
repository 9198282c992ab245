//! Role predicates over the authenticated user. These gate what the UI
//! shows; the backend independently re-authorizes every request, so none
//! of this is a security boundary.

use crate::models::{Role, User};

/// True if the user holds the ADMIN authority.
pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.has_role(Role::Admin))
}

/// True if the user holds the INSTRUCTOR authority.
pub fn is_instructor(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.has_role(Role::Instructor))
}

/// True if the user holds the STUDENT authority.
pub fn is_student(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.has_role(Role::Student))
}
