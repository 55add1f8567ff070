use thiserror::Error;

/// Errors raised while decoding requests, reading configuration or building a composer
#[derive(Error, Debug)]
pub enum BemError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid separators: {0}")]
    InvalidSeparators(String),
}

pub type BemResult<T> = Result<T, BemError>;
