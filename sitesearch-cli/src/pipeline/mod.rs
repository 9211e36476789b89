//! Content-to-search-document pipeline.
//!
//! Turns the feed's compressed page records into flat, per-section search
//! documents ready for ingestion by the hosted index:
//!
//! ```text
//! feed record ──decode──▶ markdown ──split──▶ sections ──build──▶ documents
//! ```
//!
//! - [`split_into_sections`] - heading-delimited segmentation
//! - [`build_documents`] - one uniquely-identified document per section
//! - [`PageIndexer`] - drives the pass over a [`ContentSource`]
//! - [`export_documents`] - newline-delimited JSON output
//!
//! Each stage is a pure transformation; pages are independent, so a bad
//! record costs only itself.

mod document;
mod export;
mod indexer;
mod sections;
mod slug;
mod source;

pub use document::{build_documents, DecodedPage};
pub use export::export_documents;
pub use indexer::{IndexStats, PageIndexer};
pub use sections::{split_into_sections, Section};
pub use slug::slugify;
pub use source::{ContentSource, FeedContentSource};
