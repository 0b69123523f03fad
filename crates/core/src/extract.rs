//! Main content extraction.
//!
//! This module locates the primary content container of a page using an
//! ordered chain of CSS-selector strategies, strips page chrome (navigation,
//! header, footer, aside) from the matched container, and collapses the
//! remaining text into a single line. When no strategy matches, extraction
//! fails with an explicit [`RecastError::NoContent`] instead of crashing.

use crate::parse::Document;
use crate::{RecastError, Result};

/// Selectors tried in order when locating the content container.
const DEFAULT_STRATEGIES: &[&str] = &["main", "#content", ".content", "article", "section"];

/// Tags whose subtrees are removed from the matched container before
/// text extraction.
const DEFAULT_STRIP_TAGS: &[&str] = &["nav", "header", "footer", "aside", "script", "style", "noscript"];

/// Configuration for content extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// CSS selectors tried in sequence; the first non-empty match wins.
    pub strategies: Vec<String>,
    /// Tags stripped from the matched container.
    pub strip_tags: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect(),
            strip_tags: DEFAULT_STRIP_TAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The cleaned text of a page's primary content region.
///
/// Created by [`extract_content`], consumed by the prompt builder, and
/// never mutated after creation.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Single-line cleaned text.
    pub text: String,
    /// The selector that matched the content container.
    pub matched: String,
}

/// Collapses every whitespace run (including line breaks) into a single
/// space and trims leading and trailing whitespace.
///
/// This operation is idempotent: applying it twice yields the same result
/// as applying it once.
///
/// # Example
///
/// ```rust
/// use recast_core::extract::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \n\n b\tc  "), "a b c");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the main content from a document.
///
/// Each configured strategy is tried in sequence. A strategy matches when
/// its selector finds an element whose chrome-stripped text is non-empty;
/// a matched but empty container falls through to the next strategy.
///
/// # Errors
///
/// Returns [`RecastError::NoContent`] when no strategy yields text, and
/// [`RecastError::HtmlParseError`] for an invalid configured selector.
pub fn extract_content(doc: &Document, config: &ExtractConfig) -> Result<PageContent> {
    for selector in &config.strategies {
        if let Some(container) = doc.select_first(selector)? {
            let text = collapse_whitespace(&container.text_excluding(&config.strip_tags));
            if !text.is_empty() {
                return Ok(PageContent { text, matched: selector.clone() });
            }
        }
    }

    Err(RecastError::NoContent)
}

/// Extract the whole document's text without container narrowing.
///
/// Script and style subtrees are still skipped. This mirrors simple
/// `get_text`-style scraping where the full page body is treated as
/// content.
pub fn extract_document_text(doc: &Document) -> Result<PageContent> {
    let skip = vec!["script".to_string(), "style".to_string(), "noscript".to_string()];

    let text = match doc.body() {
        Some(body) => collapse_whitespace(&body.text_excluding(&skip)),
        None => collapse_whitespace(&doc.text_content()),
    };

    if text.is_empty() {
        return Err(RecastError::NoContent);
    }

    Ok(PageContent { text, matched: "body".to_string() })
}
