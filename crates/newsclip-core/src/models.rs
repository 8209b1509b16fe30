/// The result of scraping one article page.
///
/// `content` holds the text of every `<p>` element in document order, each
/// followed by a newline. `byline` holds the author attribution, or the
/// empty string when the page carries none.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ArticleResult {
    pub content: String,
    pub byline: String,
}

impl ArticleResult {
    /// True if at least one paragraph of text was collected.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// True if author information was found.
    pub fn has_byline(&self) -> bool {
        !self.byline.is_empty()
    }
}
