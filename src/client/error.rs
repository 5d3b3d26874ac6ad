use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("retro id is missing")]
    MissingRetroId,

    #[error("CSRF token is missing")]
    MissingCsrfToken,

    #[error("retro id {0:?} is not a single path segment")]
    InvalidRetroId(String),

    #[error("CSRF token is not a valid header value")]
    InvalidCsrfToken,

    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected idea with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, SubmitError>;
