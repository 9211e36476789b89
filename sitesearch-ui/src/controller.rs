use searchcloud::domain::{SearchRequest, SearchResponse};
use searchcloud::SearchError;
use tracing::debug;

use crate::facets::{FacetMap, ALL_FACET};
use crate::presenter::{select_display_state, DisplayState};
use crate::query::{build_search_request, QueryState};

/// A search the caller should now execute, tagged with the sequence number
/// to hand back to [`SearchController::on_response`].
#[derive(Clone, Debug)]
pub struct PlannedSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

/// Event-driven search-session state, independent of any UI framework.
///
/// The UI layer forwards term and facet events here, executes the returned
/// request against its search client, and reports the outcome via
/// [`SearchController::on_response`] together with the sequence number it
/// was handed. Every event bumps the sequence, so a response belonging to
/// a superseded search is recognized and discarded - a slow earlier search
/// can never overwrite the results of a later one.
pub struct SearchController {
    state: QueryState,
    facets: FacetMap,
    display: DisplayState,
    error: Option<String>,
    seq: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            state: QueryState::default(),
            facets: FacetMap::default(),
            display: DisplayState::Empty,
            error: None,
            seq: 0,
        }
    }

    /// The empty-term search issued when the panel opens, populating the
    /// initial facet counts.
    pub fn initial_request(&mut self) -> PlannedSearch {
        self.plan()
    }

    pub fn on_term_changed(&mut self, term: impl Into<String>) -> PlannedSearch {
        self.state.term = term.into();
        self.plan()
    }

    pub fn on_facet_changed(&mut self, index: usize) -> PlannedSearch {
        self.state.selected_facet = index;
        self.plan()
    }

    /// Apply a search outcome if it belongs to the current search.
    ///
    /// Returns false when the response was stale and ignored. A service
    /// error leaves the current results on screen; typing further retries
    /// naturally.
    pub fn on_response(
        &mut self,
        seq: u64,
        result: Result<SearchResponse, SearchError>,
    ) -> bool {
        if seq != self.seq {
            debug!(seq, current = self.seq, "Discarding stale search response");
            return false;
        }

        match result {
            Ok(response) => {
                self.facets = FacetMap::from_response(&response);
                let facet_name = self.selected_facet_name().to_string();
                self.display = select_display_state(&self.state.term, &response, &facet_name);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Clear term, results, and facet selection, e.g. when the panel
    /// closes. In-flight responses are orphaned by the sequence bump.
    pub fn reset(&mut self) {
        self.state = QueryState::default();
        self.facets = FacetMap::default();
        self.display = DisplayState::Empty;
        self.error = None;
        self.seq += 1;
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn facets(&self) -> &FacetMap {
        &self.facets
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Last search error, if the most recent current response failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Name of the selected facet; "all" when nothing narrower applies.
    pub fn selected_facet_name(&self) -> &str {
        self.facets
            .name_at(self.state.selected_facet)
            .unwrap_or(ALL_FACET)
    }

    fn plan(&mut self) -> PlannedSearch {
        self.seq += 1;
        PlannedSearch {
            seq: self.seq,
            request: build_search_request(&self.state, &self.facets),
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use searchcloud::domain::{FacetValues, ResponseFacets, SearchDocument, SearchHit};

    use super::*;

    fn response(count: u64, titles: &[&str]) -> SearchResponse {
        SearchResponse {
            count,
            hits: titles
                .iter()
                .enumerate()
                .map(|(index, title)| SearchHit {
                    id: format!("hit-{index}"),
                    document: SearchDocument {
                        id: format!("hit-{index}"),
                        path: format!("learn/page#{index}"),
                        site_section: "learn".to_string(),
                        page_title: "Page".to_string(),
                        page_section_title: title.to_string(),
                        page_section_content: String::new(),
                    },
                })
                .collect(),
            facets: Some(ResponseFacets {
                site_section: Some(FacetValues {
                    values: [("learn".to_string(), count)].into_iter().collect(),
                }),
            }),
        }
    }

    fn rendered_titles(controller: &SearchController) -> Vec<String> {
        match controller.display() {
            DisplayState::Results { hits, .. } => {
                hits.iter().map(|hit| hit.title_html.clone()).collect()
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = SearchController::new();

        let first = controller.on_term_changed("a");
        let second = controller.on_term_changed("ab");

        // The newer search answers first.
        assert!(controller.on_response(second.seq, Ok(response(1, &["abseil"]))));
        // The older response straggles in afterwards and must be ignored.
        assert!(!controller.on_response(first.seq, Ok(response(1, &["aardvark"]))));

        assert_eq!(rendered_titles(&controller), vec!["<span class=\"font-bold\">ab</span>seil"]);
    }

    #[test]
    fn error_keeps_previous_results() {
        let mut controller = SearchController::new();

        let planned = controller.on_term_changed("fs");
        assert!(controller.on_response(planned.seq, Ok(response(1, &["fs.read"]))));

        let retry = controller.on_term_changed("fs.w");
        assert!(controller.on_response(
            retry.seq,
            Err(SearchError::Transport("connection reset".to_string()))
        ));

        // Old results stay on screen, with the error surfaced separately.
        assert_eq!(rendered_titles(&controller).len(), 1);
        assert!(controller.error().unwrap().contains("connection reset"));
    }

    #[test]
    fn successful_response_clears_error() {
        let mut controller = SearchController::new();

        let failed = controller.on_term_changed("fs");
        controller.on_response(failed.seq, Err(SearchError::Unauthorized));
        assert!(controller.error().is_some());

        let retry = controller.on_term_changed("fs.read");
        controller.on_response(retry.seq, Ok(response(1, &["fs.read"])));
        assert!(controller.error().is_none());
    }

    #[test]
    fn facet_selection_filters_next_request() {
        let mut controller = SearchController::new();

        let initial = controller.initial_request();
        assert_eq!(initial.request.term, "");
        controller.on_response(initial.seq, Ok(response(3, &[])));

        // Facets are now ["all", "learn"]; selecting index 1 filters.
        let planned = controller.on_facet_changed(1);
        assert_eq!(planned.request.filter.unwrap().site_section.eq, "learn");
        assert_eq!(controller.selected_facet_name(), "learn");
    }

    #[test]
    fn reset_orphans_in_flight_searches() {
        let mut controller = SearchController::new();

        let planned = controller.on_term_changed("buffer");
        controller.reset();

        assert!(!controller.on_response(planned.seq, Ok(response(1, &["Buffer"]))));
        assert_eq!(controller.display(), &DisplayState::Empty);
        assert_eq!(controller.state().term, "");
    }

    #[test]
    fn empty_term_response_shows_placeholder() {
        let mut controller = SearchController::new();

        let initial = controller.initial_request();
        controller.on_response(initial.seq, Ok(response(10, &["ignored"])));

        assert_eq!(controller.display(), &DisplayState::Empty);
        assert_eq!(controller.facets().len(), 2);
    }
}
