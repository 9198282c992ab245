use std::fmt;

use serde::{Deserialize, Serialize};

use super::section::CourseSection;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    NotStarted,
    Started,
    Completed,
    Dropped,
    Failed,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::NotStarted => "NOT_STARTED",
            EnrollmentStatus::Started => "STARTED",
            EnrollmentStatus::Completed => "COMPLETED",
            EnrollmentStatus::Dropped => "DROPPED",
            EnrollmentStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}

/// A student's enrollment in a section. Identity is
/// (student.id, course_section.id); there is no surrogate key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student: User,
    pub course_section: CourseSection,
    pub grade: f64,
    pub status: EnrollmentStatus,
    pub created_at: String,
}

/// Enrollment projection for instructor rosters: carries only the
/// section id, not the full section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorEnrollment {
    pub student: User,
    pub course_section_id: i64,
    pub grade: f64,
    pub status: EnrollmentStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    pub course_section_id: i64,
}

/// Fields an instructor or admin may change on an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManageEnrollmentRequest {
    pub grade: f64,
    pub status: EnrollmentStatus,
}
