use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{Course, ManageCourseRequest, PageResponse, Pageable};

#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn get_all_courses(&self, pageable: Pageable) -> Result<PageResponse<Course>, AppError>;

    async fn get_course_by_id(&self, course_id: i64) -> Result<Course, AppError>;

    /// Creates a course. Caller must be an admin.
    async fn create_course(&self, request: &ManageCourseRequest) -> Result<Course, AppError>;

    /// Updates a course. Caller must be an admin.
    async fn update_course(
        &self,
        course_id: i64,
        request: &ManageCourseRequest,
    ) -> Result<Course, AppError>;

    /// Deletes a course. Caller must be an admin.
    async fn delete_course(&self, course_id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl CourseApi for HttpApiClient {
    async fn get_all_courses(&self, pageable: Pageable) -> Result<PageResponse<Course>, AppError> {
        let mut request = self.http().get(self.url("/courses"));
        if let Some(page) = pageable.page {
            request = request.query(&[("page", page)]);
        }
        if let Some(size) = pageable.size {
            request = request.query(&[("size", size)]);
        }
        if let Some(sort) = pageable.sort {
            request = request.query(&[("sort", sort.to_string())]);
        }
        let response = request.send().await.map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Course, AppError> {
        let response = self
            .http()
            .get(self.url(&format!("/courses/{}", course_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn create_course(&self, request: &ManageCourseRequest) -> Result<Course, AppError> {
        let response = self
            .http()
            .post(self.url("/courses"))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        request: &ManageCourseRequest,
    ) -> Result<Course, AppError> {
        let response = self
            .http()
            .put(self.url(&format!("/courses/{}", course_id)))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<(), AppError> {
        let response = self
            .http()
            .delete(self.url(&format!("/courses/{}", course_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }
}
