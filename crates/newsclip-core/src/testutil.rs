//! Handwritten test doubles for the core traits, so pipeline tests can run
//! without touching the network.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::Fetcher;

/// Fetcher double that serves canned responses instead of doing HTTP.
#[derive(Clone)]
pub struct MockFetcher {
    /// Remaining responses, consumed front to back. Once drained, further
    /// calls get a minimal placeholder page.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
}

impl MockFetcher {
    /// A fetcher whose first call yields the given HTML.
    pub fn new(html: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(html.to_string())])),
        }
    }

    /// A fetcher whose first call fails with the given error.
    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>placeholder</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}
