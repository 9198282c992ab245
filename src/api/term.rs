use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{ManageTermRequest, Term};

#[async_trait]
pub trait TermApi: Send + Sync {
    async fn get_all_terms(&self) -> Result<Vec<Term>, AppError>;

    async fn get_term_by_id(&self, term_id: i64) -> Result<Term, AppError>;

    /// Creates a term. Caller must be an admin.
    async fn create_term(&self, request: &ManageTermRequest) -> Result<Term, AppError>;

    /// Updates a term. Caller must be an admin.
    async fn update_term(
        &self,
        term_id: i64,
        request: &ManageTermRequest,
    ) -> Result<Term, AppError>;

    /// Deletes a term. Caller must be an admin.
    async fn delete_term(&self, term_id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl TermApi for HttpApiClient {
    async fn get_all_terms(&self) -> Result<Vec<Term>, AppError> {
        let response = self
            .http()
            .get(self.url("/terms"))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn get_term_by_id(&self, term_id: i64) -> Result<Term, AppError> {
        let response = self
            .http()
            .get(self.url(&format!("/terms/{}", term_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn create_term(&self, request: &ManageTermRequest) -> Result<Term, AppError> {
        let response = self
            .http()
            .post(self.url("/terms"))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_term(
        &self,
        term_id: i64,
        request: &ManageTermRequest,
    ) -> Result<Term, AppError> {
        let response = self
            .http()
            .put(self.url(&format!("/terms/{}", term_id)))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn delete_term(&self, term_id: i64) -> Result<(), AppError> {
        let response = self
            .http()
            .delete(self.url(&format!("/terms/{}", term_id)))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }
}
