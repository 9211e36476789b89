use searchcloud::domain::{SearchHit, SearchResponse};
use serde::Serialize;
use urlencoding::encode;

use crate::breadcrumbs::derive_breadcrumbs;
use crate::highlight::highlight_excerpt;
use crate::query::RESULT_LIMIT;

/// One hit prepared for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedHit {
    pub id: String,
    /// Section title with term matches wrapped in highlight spans.
    pub title_html: String,
    pub breadcrumbs: Vec<String>,
    pub page_title: String,
    pub href: String,
}

/// "See all N results" affordance below the hit list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeeAll {
    pub count: u64,
    pub href: String,
}

/// What the search panel should currently show.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DisplayState {
    /// No term typed yet; show the placeholder.
    Empty,
    /// A term produced zero hits; keyed by the literal term.
    NoResults { term: String },
    /// Ranked hits, with the see-all affordance when the corpus holds more
    /// than one page of results.
    Results {
        hits: Vec<RenderedHit>,
        see_all: Option<SeeAll>,
    },
}

/// Pick the display state for one term/response pair.
///
/// An empty term always yields [`DisplayState::Empty`], even when the
/// response carries hits - the empty-term search exists only to populate
/// facet counts.
pub fn select_display_state(
    term: &str,
    response: &SearchResponse,
    selected_facet: &str,
) -> DisplayState {
    if term.is_empty() {
        return DisplayState::Empty;
    }

    if response.count == 0 {
        return DisplayState::NoResults {
            term: term.to_string(),
        };
    }

    let hits = response
        .hits
        .iter()
        .map(|hit| render_hit(hit, term))
        .collect();

    let see_all = (response.count as usize > RESULT_LIMIT).then(|| SeeAll {
        count: response.count,
        href: see_all_href(term, selected_facet),
    });

    DisplayState::Results { hits, see_all }
}

fn render_hit(hit: &SearchHit, term: &str) -> RenderedHit {
    let doc = &hit.document;
    RenderedHit {
        id: hit.id.clone(),
        title_html: highlight_excerpt(&doc.page_section_title, term),
        breadcrumbs: derive_breadcrumbs(&doc.path),
        page_title: doc.page_title.clone(),
        href: format!("/{}", doc.path),
    }
}

/// Link to the full search page scoped by term and facet.
fn see_all_href(term: &str, facet: &str) -> String {
    format!("/search?q={}&section={}", encode(term), encode(facet))
}
