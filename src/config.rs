use std::env;

const DEFAULT_API_URL: &str = "http://localhost:8484/api";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Base URL comes from RRU_API_URL, falling back to the local
    /// development backend.
    pub fn new_from_env() -> Self {
        let base_url =
            env::var("RRU_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        tracing::debug!("API URL: {}", base_url);
        Self { base_url }
    }
}
