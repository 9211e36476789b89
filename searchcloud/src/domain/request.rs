use serde::Serialize;

/// Relative per-field weights applied by the service during scoring.
///
/// Section titles rank above section bodies, which rank above page titles.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostWeights {
    pub page_section_title: f64,
    pub page_section_content: f64,
    pub page_title: f64,
}

/// Per-field facet aggregation parameters. The service expects an empty
/// object per requested field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FacetParams {}

/// Fields to aggregate facet counts for.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetRequest {
    pub site_section: FacetParams,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EqFilter {
    pub eq: String,
}

/// Equality filter constraining hits to one site section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFilter {
    pub site_section: EqFilter,
}

/// A search request as accepted by the hosted index.
///
/// An empty `term` matches the whole corpus; it is how initial facet
/// counts are obtained.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest {
    pub term: String,
    pub limit: usize,
    pub threshold: f64,
    pub boost: BoostWeights,
    pub facets: FacetRequest,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<SectionFilter>,
}
