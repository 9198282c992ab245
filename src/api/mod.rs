pub mod auth;
pub mod course;
pub mod enrollment;
pub mod prerequisite;
pub mod section;
pub mod term;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{AppError, GENERIC_MESSAGE};
use crate::models::ErrorBody;

pub use auth::AuthApi;
pub use course::CourseApi;
pub use enrollment::EnrollmentApi;
pub use prerequisite::PrerequisiteApi;
pub use section::SectionApi;
pub use term::TermApi;

/// The whole backend surface, one subtrait per resource module.
pub trait RegistrarApi:
    AuthApi + CourseApi + SectionApi + EnrollmentApi + PrerequisiteApi + TermApi
{
}

impl<T> RegistrarApi for T where
    T: AuthApi + CourseApi + SectionApi + EnrollmentApi + PrerequisiteApi + TermApi
{
}

/// Shared HTTP client. One base URL for every request; the cookie store
/// carries the session cookie across calls.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(AppError::Network)?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn error_from(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::normalize_error(status, &body)
    }

    /// Collapse a non-2xx response into the one thrown-error shape: the
    /// backend's message when the error body parses, the generic fallback
    /// otherwise. No status code survives for programmatic branching.
    pub(crate) fn normalize_error(status: StatusCode, body: &str) -> AppError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                tracing::debug!("API error {}: {}", status, parsed.message);
                AppError::Api(parsed.message)
            }
            Err(_) => {
                tracing::debug!("API error {} with opaque body", status);
                AppError::Api(GENERIC_MESSAGE.to_string())
            }
        }
    }

    pub(crate) async fn expect_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        response.json::<T>().await.map_err(AppError::Decode)
    }

    pub(crate) async fn expect_ok(response: Response) -> Result<(), AppError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }
}
