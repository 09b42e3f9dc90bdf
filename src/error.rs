use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Transport or HTTP-status failure from a GET, carried unchanged.
    #[error(transparent)]
    HttpError(Box<ureq::Error>),

    #[error("failed to read response body: {0}")]
    BodyError(#[source] std::io::Error),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

// ureq errors are large; box them so AppError stays small.
impl From<ureq::Error> for AppError {
    fn from(e: ureq::Error) -> Self {
        AppError::HttpError(Box::new(e))
    }
}
