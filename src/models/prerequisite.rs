use serde::{Deserialize, Serialize};

/// A required-course constraint attached to a course. Department and code
/// of the required course are denormalized for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisite {
    pub id: i64,
    pub course_id: i64,
    pub required_course_id: i64,
    pub required_course_department: String,
    pub required_course_code: u32,
    pub minimum_grade: f64,
    pub created_at: String,
}

impl Prerequisite {
    pub fn required_course_label(&self) -> String {
        format!(
            "{}-{}",
            self.required_course_department, self.required_course_code
        )
    }
}

/// Fields required to create or update a prerequisite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagePrerequisiteRequest {
    pub required_course_id: i64,
    pub minimum_grade: f64,
}
