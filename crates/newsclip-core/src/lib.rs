pub mod error;
pub mod extract;
pub mod models;
pub mod scrape;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::AppError;
pub use extract::PageExtractor;
pub use models::ArticleResult;
pub use scrape::ScrapeService;
pub use traits::{Extractor, Fetcher};
