use std::future::Future;

use crate::error::AppError;
use crate::models::ArticleResult;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Extracts article content and byline from an HTML document.
///
/// Extraction is infallible: a malformed or unexpected document produces
/// empty or partial fields, never an error.
pub trait Extractor: Send + Sync + Clone {
    fn extract(&self, html: &str) -> ArticleResult;
}
