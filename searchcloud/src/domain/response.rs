use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SearchDocument;

/// One hit returned by the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub document: SearchDocument,
}

/// Facet value counts for one field.
///
/// The map preserves the order the service returned the entries in; that
/// order is a presentation contract downstream, so it must survive
/// deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FacetValues {
    pub values: IndexMap<String, u64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFacets {
    #[serde(default)]
    pub site_section: Option<FacetValues>,
}

/// A search response from the hosted index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: u64,
    pub hits: Vec<SearchHit>,
    #[serde(default)]
    pub facets: Option<ResponseFacets>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_response() {
        let json = r#"{
            "count": 2,
            "hits": [
                {
                    "id": "a",
                    "document": {
                        "id": "a",
                        "path": "learn/getting-started#install",
                        "siteSection": "learn",
                        "pageTitle": "Getting Started",
                        "pageSectionTitle": "Install",
                        "pageSectionContent": "Download and run the installer."
                    }
                }
            ],
            "facets": {
                "siteSection": {
                    "values": { "learn": 1, "api": 1 }
                }
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.hits[0].document.site_section, "learn");
        let values = &response.facets.unwrap().site_section.unwrap().values;
        assert_eq!(values["learn"], 1);
    }

    #[test]
    fn facet_order_survives_deserialization() {
        // "zebra" sorts after "api" alphabetically; the wire order must win.
        let json = r#"{
            "count": 3,
            "hits": [],
            "facets": {
                "siteSection": { "values": { "zebra": 2, "api": 1 } }
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let values = response.facets.unwrap().site_section.unwrap().values;
        let names: Vec<&str> = values.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zebra", "api"]);
    }

    #[test]
    fn facets_are_optional() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "count": 0, "hits": [] }"#).unwrap();
        assert!(response.facets.is_none());
    }
}
