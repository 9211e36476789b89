use serde::{Deserialize, Serialize};

/// One rendered page from the content feed.
///
/// `content` is a base64-encoded, deflate-compressed markdown blob; use
/// [`crate::decode_content`] to inflate it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub pathname: String,
    pub title: String,
    pub content: String,
}

/// One API-reference record. Carries only the compressed content blob.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecord {
    pub content: String,
}
