use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::course::CourseAttributes;
use super::enrollment::InstructorEnrollment;
use super::term::Term;
use super::user::User;

/// A scheduled offering of a Course within a Term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    pub id: i64,
    pub course: CourseAttributes,
    pub term: Term,
    pub instructor: User,
    pub room: String,
    pub capacity: u32,
    pub schedule: String,
    pub enrolled_count: u32,
    pub created_at: String,
}

impl CourseSection {
    /// A section is open for registration iff there is a free seat and
    /// `today` falls inside the term's registration window. The window
    /// boundaries count as open.
    pub fn is_open_for_registration(&self, today: NaiveDate) -> bool {
        self.enrolled_count < self.capacity
            && self.term.registration_start <= today
            && today <= self.term.registration_end
    }

    pub fn seats_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled_count)
    }
}

/// A section as seen by its assigned instructor, roster included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorCourseSection {
    pub id: i64,
    pub course: CourseAttributes,
    pub term: Term,
    pub instructor: User,
    pub room: String,
    pub capacity: u32,
    pub schedule: String,
    pub enrolled_count: u32,
    pub enrollments: Vec<InstructorEnrollment>,
    pub created_at: String,
}

/// Fields required to create or update a course section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageCourseSectionRequest {
    pub term_id: i64,
    pub instructor_id: i64,
    pub room: String,
    pub capacity: u32,
    pub schedule: String,
}
