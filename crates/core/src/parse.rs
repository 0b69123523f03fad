//! HTML parsing and DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the DOM tree using CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use recast_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let title = doc.title();
//! let paragraphs = doc.select("p.content").unwrap();
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{RecastError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and reading text content.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recast_core::parse::Document;
    ///
    /// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
    /// let doc = Document::parse(html).unwrap();
    /// assert_eq!(doc.title(), Some("Test".to_string()));
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| RecastError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector, if any.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| RecastError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets the `<body>` element of the document, if present.
    pub fn body(&'_ self) -> Option<Element<'_>> {
        let selector = Selector::parse("body").ok()?;
        self.html.select(&selector).next().map(|el| Element { element: el })
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef for easier DOM access.
///
/// # Example
///
/// ```rust
/// use recast_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the text content of this element, skipping any descendant
    /// subtree whose tag name appears in `skip_tags`.
    ///
    /// Text nodes are joined with spaces at element boundaries so words
    /// from adjacent blocks do not run together.
    pub fn text_excluding(&self, skip_tags: &[String]) -> String {
        let mut out = String::new();
        collect_text(self.element, skip_tags, &mut out);
        out
    }
}

fn collect_text(element: ElementRef<'_>, skip_tags: &[String], out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name().to_lowercase();
            if skip_tags.iter().any(|tag| *tag == name) {
                continue;
            }
            collect_text(child_el, skip_tags, out);
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph 2</p>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
    }

    #[test]
    fn test_select_first() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let first = doc.select_first("p.content").unwrap();

        assert_eq!(first.unwrap().text(), "Paragraph 1");
        assert!(doc.select_first("article").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(RecastError::HtmlParseError(_))));
    }

    #[test]
    fn test_text_excluding() {
        let html = r#"
            <div>
                <nav><a href="/">Home</a></nav>
                <p>Body text</p>
                <footer>Footer text</footer>
            </div>
        "#;
        let doc = Document::parse(html).unwrap();
        let div = doc.select_first("div").unwrap().unwrap();
        let skip = vec!["nav".to_string(), "footer".to_string()];
        let text = div.text_excluding(&skip);

        assert!(text.contains("Body text"));
        assert!(!text.contains("Home"));
        assert!(!text.contains("Footer text"));
    }

    #[test]
    fn test_body() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let body = doc.body().unwrap();
        assert_eq!(body.tag_name(), "body");
        assert!(body.text().contains("Heading"));
    }
}
