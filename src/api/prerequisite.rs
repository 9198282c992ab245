use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{ManagePrerequisiteRequest, Prerequisite};

#[async_trait]
pub trait PrerequisiteApi: Send + Sync {
    async fn get_prerequisites(&self, course_id: i64) -> Result<Vec<Prerequisite>, AppError>;

    /// Attaches a prerequisite to a course. Caller must be an admin.
    async fn create_prerequisite(
        &self,
        course_id: i64,
        request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError>;

    /// Updates a prerequisite. Caller must be an admin.
    async fn update_prerequisite(
        &self,
        course_id: i64,
        prerequisite_id: i64,
        request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError>;

    /// Deletes a prerequisite. Caller must be an admin.
    async fn delete_prerequisite(
        &self,
        course_id: i64,
        prerequisite_id: i64,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl PrerequisiteApi for HttpApiClient {
    async fn get_prerequisites(&self, course_id: i64) -> Result<Vec<Prerequisite>, AppError> {
        let response = self
            .http()
            .get(self.url(&format!("/courses/{}/prerequisites", course_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn create_prerequisite(
        &self,
        course_id: i64,
        request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError> {
        let response = self
            .http()
            .post(self.url(&format!("/courses/{}/prerequisites", course_id)))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_prerequisite(
        &self,
        course_id: i64,
        prerequisite_id: i64,
        request: &ManagePrerequisiteRequest,
    ) -> Result<Prerequisite, AppError> {
        let response = self
            .http()
            .put(self.url(&format!(
                "/courses/{}/prerequisites/{}",
                course_id, prerequisite_id
            )))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn delete_prerequisite(
        &self,
        course_id: i64,
        prerequisite_id: i64,
    ) -> Result<(), AppError> {
        let response = self
            .http()
            .delete(self.url(&format!(
                "/courses/{}/prerequisites/{}",
                course_id, prerequisite_id
            )))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }
}
