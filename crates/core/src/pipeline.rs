//! The fetch → extract → prompt → rewrite pipeline.
//!
//! This module provides the primary API for turning a URL into rewritten
//! content. The main entry point is the [`Recaster`] struct, along with the
//! convenience function [`fetch_and_rewrite`].
//!
//! The pipeline is strictly linear: fetch the page, extract its main text,
//! build the prompt, call the model. One request is in flight at a time and
//! nothing is shared or retained between runs.
//!
//! # Example
//!
//! ```no_run
//! use recast_core::{AccessContext, Audience, Recaster, Rewriter, RewriterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rewriter = Rewriter::new(RewriterConfig::from_env()?)?;
//!     let recaster = Recaster::new(rewriter);
//!
//!     let rewrite = recaster
//!         .rewrite_url(
//!             "https://example.com/article",
//!             Audience::Journalist,
//!             AccessContext::Desktop,
//!             None,
//!         )
//!         .await?;
//!
//!     println!("{}", rewrite.rewritten);
//!     Ok(())
//! }
//! ```

use serde::Serialize;

use crate::extract::{ExtractConfig, extract_content};
use crate::fetch::{FetchConfig, fetch_url};
use crate::parse::Document;
use crate::prompt::{AccessContext, Audience, Channel, RewriteRequest};
use crate::rewrite::{Rewriter, RewriterConfig};
use crate::Result;

/// The complete result of one rewrite interaction.
///
/// Displayed then discarded; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Rewrite {
    /// Cleaned text extracted from the page.
    pub original: String,

    /// Text generated by the model.
    pub rewritten: String,

    /// Source URL if the content came from a fetch.
    pub source_url: Option<String>,

    /// Page title if the document had one.
    pub title: Option<String>,

    /// Word count of the rewritten text.
    pub word_count: usize,
}

impl Rewrite {
    fn new(original: String, rewritten: String, source_url: Option<String>, title: Option<String>) -> Self {
        let word_count = rewritten.split_whitespace().count();
        Self { original, rewritten, source_url, title, word_count }
    }
}

/// Drives the full rewrite pipeline.
pub struct Recaster {
    fetch_config: FetchConfig,
    extract_config: ExtractConfig,
    rewriter: Rewriter,
}

impl Recaster {
    /// Creates a pipeline with default fetch and extraction settings.
    pub fn new(rewriter: Rewriter) -> Self {
        Self { fetch_config: FetchConfig::default(), extract_config: ExtractConfig::default(), rewriter }
    }

    /// Creates a pipeline with a custom fetch configuration.
    pub fn with_fetch_config(rewriter: Rewriter, fetch_config: FetchConfig) -> Self {
        Self { fetch_config, extract_config: ExtractConfig::default(), rewriter }
    }

    /// Fetches a URL and rewrites its main content.
    ///
    /// # Errors
    ///
    /// Propagates fetch, extraction, and model errors as their distinct
    /// [`crate::RecastError`] variants; a fetch failure aborts the run
    /// rather than being passed downstream as content.
    pub async fn rewrite_url(
        &self, url: &str, audience: Audience, context: AccessContext, channel: Option<Channel>,
    ) -> Result<Rewrite> {
        let html = fetch_url(url, &self.fetch_config).await?;
        self.rewrite_html(&html, Some(url), audience, context, channel).await
    }

    /// Rewrites the main content of pre-fetched HTML.
    pub async fn rewrite_html(
        &self, html: &str, source_url: Option<&str>, audience: Audience, context: AccessContext,
        channel: Option<Channel>,
    ) -> Result<Rewrite> {
        // `Document` wraps a non-`Send` DOM; read everything we need and drop
        // it before awaiting so the returned future is `Send`.
        let (page, title) = {
            let doc = Document::parse(html)?;
            let page = extract_content(&doc, &self.extract_config)?;
            (page, doc.title())
        };

        let request = RewriteRequest { original: page.text.clone(), audience, context, channel };
        let rewritten = self.rewriter.rewrite(&request).await?;

        Ok(Rewrite::new(
            page.text,
            rewritten,
            source_url.map(|u| u.to_string()),
            title,
        ))
    }
}

/// Convenience function: fetch a URL and rewrite it with settings from the
/// environment.
///
/// Builds the rewriter from [`RewriterConfig::from_env`] and uses default
/// fetch and extraction configuration.
pub async fn fetch_and_rewrite(
    url: &str, audience: Audience, context: AccessContext, channel: Option<Channel>,
) -> Result<Rewrite> {
    let rewriter = Rewriter::new(RewriterConfig::from_env()?)?;
    Recaster::new(rewriter).rewrite_url(url, audience, context, channel).await
}
