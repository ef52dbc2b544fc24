use thiserror::Error;

pub type Result<T, E = ApiError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("http client error: {0}")]
    Client(String),
    #[error("transport error on {path}: {reason}")]
    Transport { path: &'static str, reason: String },
}
