use pagefeed::{decode_content, FeedError};
use searchcloud::domain::SearchDocument;
use tracing::{info, warn};

use super::document::{build_documents, DecodedPage};
use super::source::ContentSource;

/// Totals from one indexing pass.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    pub pages_indexed: usize,
    pub pages_skipped: usize,
    pub documents: usize,
}

/// Drives fetch → decode → split → build for the whole site.
///
/// Pages are independent of each other: a page whose content fails to
/// decode is logged and skipped without aborting the pass. Only a failed
/// feed fetch is fatal.
pub struct PageIndexer<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> PageIndexer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Produce the full document set for the current feed contents.
    ///
    /// The set is rebuilt from scratch on every pass; there is no
    /// incremental update.
    pub async fn build_all(&self) -> Result<(Vec<SearchDocument>, IndexStats), FeedError> {
        let pages = self.source.fetch_pages().await?;
        info!(pages = pages.len(), "Fetched page records");

        let mut stats = IndexStats::default();
        let mut documents = Vec::new();

        for page in &pages {
            let content = match decode_content(&page.content) {
                Ok(content) => content,
                Err(e) => {
                    warn!(pathname = %page.pathname, error = %e, "Skipping page with undecodable content");
                    stats.pages_skipped += 1;
                    continue;
                }
            };

            let docs = build_documents(&DecodedPage {
                pathname: page.pathname.clone(),
                title: page.title.clone(),
                content,
            });

            stats.pages_indexed += 1;
            stats.documents += docs.len();
            documents.extend(docs);
        }

        info!(
            pages = stats.pages_indexed,
            skipped = stats.pages_skipped,
            documents = stats.documents,
            "Document build completed"
        );

        Ok((documents, stats))
    }

    /// Decode every API-reference record, skipping corrupt ones.
    pub async fn decode_api_content(&self) -> Result<Vec<String>, FeedError> {
        let records = self.source.fetch_api_records().await?;
        let mut contents = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            match decode_content(&record.content) {
                Ok(content) => contents.push(content),
                Err(e) => warn!(index, error = %e, "Skipping undecodable API record"),
            }
        }

        Ok(contents)
    }
}
