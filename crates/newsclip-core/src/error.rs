use thiserror::Error;

/// Application-wide error types for newsclip.
#[derive(Error, Debug)]
pub enum AppError {
    /// URL could not be parsed or uses a forbidden scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Host is not on the configured domain allow-list.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// HTTP request failed (transport error or error status).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// A CSS selector failed to parse when building the extractor.
    #[error("Selector error: {0}")]
    SelectorError(String),
}
