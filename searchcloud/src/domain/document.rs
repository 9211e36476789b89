use serde::{Deserialize, Serialize};

/// A flat, per-section search document as stored in the hosted index.
///
/// One page yields one document per heading-delimited section; `path`
/// anchors straight to that section (`pathname#slug`). `id` is unique per
/// document, not per page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub id: String,
    pub path: String,
    pub site_section: String,
    pub page_title: String,
    pub page_section_title: String,
    pub page_section_content: String,
}
