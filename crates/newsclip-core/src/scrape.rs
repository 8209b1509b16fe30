use crate::error::AppError;
use crate::models::ArticleResult;
use crate::traits::{Extractor, Fetcher};

/// Orchestrates the scrape pipeline for one article: fetch → extract.
///
/// Generic over its dependencies via traits, enabling dependency injection
/// and testability without real HTTP calls.
pub struct ScrapeService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
}

impl<F, E> ScrapeService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Run the pipeline for a single URL.
    ///
    /// One HTTP GET, one parse-and-extract pass, no retry. A fetch failure
    /// aborts the whole operation with no partial result.
    pub async fn scrape(&self, url: &str) -> Result<ArticleResult, AppError> {
        tracing::info!("Fetching {}", url);
        let html = self.fetcher.fetch(url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        let result = self.extractor.extract(&html);
        tracing::info!(
            content_bytes = result.content.len(),
            byline_found = result.has_byline(),
            "Extraction complete"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PageExtractor;
    use crate::testutil::MockFetcher;

    const ARTICLE_HTML: &str = r#"<html><body>
        <div class="Page-authors">By <a href="/jane">Jane Doe</a></div>
        <p>The first paragraph.</p>
        <p>The second paragraph.</p>
    </body></html>"#;

    #[tokio::test]
    async fn test_scrape_returns_content_and_byline() {
        let service = ScrapeService::new(
            MockFetcher::new(ARTICLE_HTML),
            PageExtractor::new().unwrap(),
        );

        let result = service.scrape("https://example.com/article").await.unwrap();
        assert_eq!(
            result.content,
            "The first paragraph.\nThe second paragraph.\n"
        );
        assert_eq!(result.byline, "By Jane Doe");
    }

    #[tokio::test]
    async fn test_scrape_empty_page() {
        let service = ScrapeService::new(
            MockFetcher::new("<html><body></body></html>"),
            PageExtractor::new().unwrap(),
        );

        let result = service.scrape("https://example.com/empty").await.unwrap();
        assert!(!result.has_content());
        assert!(!result.has_byline());
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_without_result() {
        let service = ScrapeService::new(
            MockFetcher::with_error(AppError::NetworkError("connection refused".into())),
            PageExtractor::new().unwrap(),
        );

        let err = service.scrape("https://unreachable.invalid").await.unwrap_err();
        assert!(matches!(err, AppError::NetworkError(_)));
    }
}
