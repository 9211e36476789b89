use searchcloud::domain::{
    BoostWeights, EqFilter, FacetRequest, SearchRequest, SectionFilter,
};
use tracing::warn;

use crate::facets::FacetMap;

/// Fixed number of hits shown in the dropdown.
pub const RESULT_LIMIT: usize = 8;

/// UI-owned search state: the free-text term and the position of the
/// selected facet pill.
///
/// `selected_facet` indexes into the current [`FacetMap`]; position 0 is
/// the synthetic "all" entry and always means "no filter".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub term: String,
    pub selected_facet: usize,
}

/// Map UI state to a concrete search request.
///
/// An empty term is sent as-is: the service treats it as match-all, which
/// is how the initial facet counts are obtained. A selected facet other
/// than position 0 becomes an equality filter on the site section; an
/// out-of-range selection falls back to unfiltered rather than producing a
/// filter on a facet that no longer exists.
pub fn build_search_request(state: &QueryState, facets: &FacetMap) -> SearchRequest {
    SearchRequest {
        term: state.term.clone(),
        limit: RESULT_LIMIT,
        threshold: 0.0,
        boost: BoostWeights {
            page_section_title: 4.0,
            page_section_content: 2.5,
            page_title: 1.0,
        },
        facets: FacetRequest::default(),
        filter: section_filter(state, facets),
    }
}

fn section_filter(state: &QueryState, facets: &FacetMap) -> Option<SectionFilter> {
    if state.selected_facet == 0 {
        return None;
    }

    match facets.name_at(state.selected_facet) {
        Some(name) => Some(SectionFilter {
            site_section: EqFilter {
                eq: name.to_string(),
            },
        }),
        None => {
            warn!(
                index = state.selected_facet,
                "Selected facet out of range, searching unfiltered"
            );
            None
        }
    }
}
