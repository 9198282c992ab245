use serde::{Deserialize, Serialize};

use super::prerequisite::Prerequisite;
use super::section::CourseSection;

/// A catalog course. (department, code) is the human-facing identity;
/// the numeric id is the stable key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub department: String,
    pub code: u32,
    pub title: String,
    pub description: String,
    pub credits: u32,
    pub prerequisites: Vec<Prerequisite>,
    pub course_sections: Vec<CourseSection>,
    pub created_at: String,
}

impl Course {
    /// Display label like "CS-101".
    pub fn label(&self) -> String {
        format!("{}-{}", self.department, self.code)
    }
}

/// Course fields without the owned collections, as embedded in sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttributes {
    pub id: i64,
    pub department: String,
    pub code: u32,
    pub title: String,
    pub description: String,
    pub credits: u32,
}

impl CourseAttributes {
    pub fn label(&self) -> String {
        format!("{}-{}", self.department, self.code)
    }
}

/// Fields required to create or update a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageCourseRequest {
    pub department: String,
    pub code: u32,
    pub title: String,
    pub description: String,
    pub credits: u32,
}
