use thiserror::Error;

/// Fallback shown whenever the backend gives us nothing better.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Try again later.";

/// Every failure carries a display-ready message; the UI never branches on
/// an error code, it only shows `Display` output next to the action that
/// triggered it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Api(String),

    #[error("Something went wrong. Try again later.")]
    Network(#[source] reqwest::Error),

    #[error("Something went wrong. Try again later.")]
    Decode(#[source] reqwest::Error),
}

impl AppError {
    pub fn generic() -> Self {
        AppError::Api(GENERIC_MESSAGE.to_string())
    }
}
