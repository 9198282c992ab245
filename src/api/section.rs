use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{CourseSection, InstructorCourseSection, ManageCourseSectionRequest};

#[async_trait]
pub trait SectionApi: Send + Sync {
    /// Retrieves all course sections, optionally restricted to one course.
    async fn get_all_sections(
        &self,
        course_id: Option<i64>,
    ) -> Result<Vec<CourseSection>, AppError>;

    async fn get_section_by_id(&self, section_id: i64) -> Result<CourseSection, AppError>;

    /// Creates a section under a course. Caller must be an admin.
    async fn create_section(
        &self,
        course_id: i64,
        request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError>;

    /// Updates a section. Caller must be an admin.
    async fn update_section(
        &self,
        section_id: i64,
        request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError>;

    /// Deletes a section. Caller must be an admin.
    async fn delete_section(&self, section_id: i64) -> Result<(), AppError>;

    /// Retrieves the caller's assigned sections, rosters included. Caller
    /// must be an instructor or admin.
    async fn get_assigned_sections(&self) -> Result<Vec<InstructorCourseSection>, AppError>;

    async fn get_assigned_section_by_id(
        &self,
        section_id: i64,
    ) -> Result<InstructorCourseSection, AppError>;
}

#[async_trait]
impl SectionApi for HttpApiClient {
    async fn get_all_sections(
        &self,
        course_id: Option<i64>,
    ) -> Result<Vec<CourseSection>, AppError> {
        let mut request = self.http().get(self.url("/sections"));
        if let Some(course_id) = course_id {
            request = request.query(&[("courseId", course_id)]);
        }
        let response = request.send().await.map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<CourseSection, AppError> {
        let response = self
            .http()
            .get(self.url(&format!("/sections/{}", section_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn create_section(
        &self,
        course_id: i64,
        request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError> {
        let response = self
            .http()
            .post(self.url("/sections"))
            .query(&[("courseId", course_id)])
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_section(
        &self,
        section_id: i64,
        request: &ManageCourseSectionRequest,
    ) -> Result<CourseSection, AppError> {
        let response = self
            .http()
            .put(self.url(&format!("/sections/{}", section_id)))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<(), AppError> {
        let response = self
            .http()
            .delete(self.url(&format!("/sections/{}", section_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }

    async fn get_assigned_sections(&self) -> Result<Vec<InstructorCourseSection>, AppError> {
        let response = self
            .http()
            .get(self.url("/sections/assigned"))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn get_assigned_section_by_id(
        &self,
        section_id: i64,
    ) -> Result<InstructorCourseSection, AppError> {
        let response = self
            .http()
            .get(self.url(&format!("/sections/assigned/{}", section_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }
}
