pub mod error;
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod rewrite;

pub use error::{RecastError, Result};
pub use extract::{ExtractConfig, PageContent, collapse_whitespace, extract_content, extract_document_text};
pub use fetch::{FetchConfig, fetch_url};
pub use parse::{Document, Element};
pub use pipeline::{Recaster, Rewrite, fetch_and_rewrite};
pub use prompt::{AccessContext, Audience, Channel, RewriteRequest, SYSTEM_PROMPT, build_prompt};
pub use rewrite::{DEFAULT_BASE_URL, DEFAULT_MODEL, Rewriter, RewriterConfig};
