use scraper::{Html, Selector};

use crate::error::AppError;
use crate::models::ArticleResult;
use crate::traits::Extractor;

/// CSS-selector-driven article extractor.
///
/// Runs two independent queries over the parsed document:
/// - `div.Page-authors` for the byline (the class AP News uses for author
///   attribution), reading both the combined element text and each nested
///   `<a>` as an individual author name;
/// - `p` for the article body, concatenating paragraph text in document
///   order with one newline per paragraph.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    authors: Selector,
    anchor: Selector,
    paragraph: Selector,
}

impl PageExtractor {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            authors: parse_selector("div.Page-authors")?,
            anchor: parse_selector("a")?,
            paragraph: parse_selector("p")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::SelectorError(format!("{css}: {e}")))
}

/// True if the element contains at least one non-whitespace text node that
/// is not inside a nested `<a>`. Anchor text is excluded so that a byline
/// made up purely of author links falls through to the name list.
fn has_text_outside_anchors(element: &scraper::ElementRef<'_>) -> bool {
    element.descendants().any(|node| {
        let Some(text) = node.value().as_text() else {
            return false;
        };
        if text.trim().is_empty() {
            return false;
        }
        !node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != element.id())
            .any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| el.name() == "a")
            })
    })
}

impl Extractor for PageExtractor {
    fn extract(&self, html: &str) -> ArticleResult {
        let doc = Html::parse_document(html);

        // Byline: combined element text, plus each linked author name.
        // A div whose only text lives inside its anchors contributes no
        // combined byline; the name list covers it. With several
        // Page-authors divs the combined text is last-match-wins while
        // names accumulate across all of them, matching the
        // selector-callback behavior this replaces.
        let mut combined = String::new();
        let mut names: Vec<String> = Vec::new();
        for element in doc.select(&self.authors) {
            if has_text_outside_anchors(&element) {
                let text = element.text().collect::<String>();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    combined = trimmed.to_string();
                }
            }
            for link in element.select(&self.anchor) {
                let name = link.text().collect::<String>();
                let name = name.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }

        let mut content = String::new();
        for paragraph in doc.select(&self.paragraph) {
            for piece in paragraph.text() {
                content.push_str(piece);
            }
            content.push('\n');
        }

        let byline = if combined.is_empty() && !names.is_empty() {
            names.join(" and ")
        } else {
            combined
        };

        ArticleResult { content, byline }
    }
}
