use async_trait::async_trait;

use super::HttpApiClient;
use crate::error::AppError;
use crate::models::{PageResponse, SignupRequest, SortDirection, UpdateUserRequest, User};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Retrieves the authenticated user, or None if the session is
    /// anonymous. This is the one call where failure is not an error:
    /// an unauthenticated visitor is an expected state.
    async fn get_auth_user(&self) -> Option<User>;

    /// Logs in with basic-auth credentials, establishing the session
    /// cookie.
    async fn login(&self, username: &str, password: &str) -> Result<User, AppError>;

    async fn logout(&self) -> Result<(), AppError>;

    async fn signup(&self, request: &SignupRequest) -> Result<User, AppError>;

    /// Retrieves a page of all users. Caller must be an admin.
    async fn get_all_users(
        &self,
        page: u32,
        size: u32,
        sort: SortDirection,
        search: Option<&str>,
    ) -> Result<PageResponse<User>, AppError>;

    /// Changes a user's role. Caller must be an admin.
    async fn update_user_role(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<User, AppError>;
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn get_auth_user(&self) -> Option<User> {
        let response = match self.http().get(self.url("/auth")).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("auth check failed: {}", e);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("auth check returned {}", response.status());
            return None;
        }
        match response.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("auth check body did not parse: {}", e);
                None
            }
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let response = self
            .http()
            .post(self.url("/auth/login"))
            .basic_auth(username, Some(password))
            .send()
            .await
            .map_err(AppError::Network)?;
        if !response.status().is_success() {
            // A response means the credentials were rejected; anything
            // else gets the generic message.
            return Err(AppError::Api("Incorrect Email or Password".to_string()));
        }
        response.json::<User>().await.map_err(AppError::Decode)
    }

    async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .http()
            .post(self.url("/auth/logout"))
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_ok(response).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<User, AppError> {
        let response = self
            .http()
            .post(self.url("/auth/signup"))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn get_all_users(
        &self,
        page: u32,
        size: u32,
        sort: SortDirection,
        search: Option<&str>,
    ) -> Result<PageResponse<User>, AppError> {
        let mut request = self.http().get(self.url("/auth/users")).query(&[
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("sort", sort.to_string()),
        ]);
        if let Some(search) = search {
            request = request.query(&[("search", search)]);
        }
        let response = request.send().await.map_err(AppError::Network)?;
        Self::expect_json(response).await
    }

    async fn update_user_role(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        let response = self
            .http()
            .put(self.url(&format!("/auth/users/{}", user_id)))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        Self::expect_json(response).await
    }
}
