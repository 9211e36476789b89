//! Framework-free core of the site search box.
//!
//! The UI layer owns rendering and input wiring; everything that decides
//! *what* to search for and *what* to show lives here:
//!
//! - [`FacetMap`] - ordered facet pills derived from a search response
//! - [`build_search_request`] - maps [`QueryState`] to a wire request
//! - [`select_display_state`] - picks empty / no-results / results / see-all
//! - [`derive_breadcrumbs`] / [`highlight_excerpt`] - per-hit rendering prep
//! - [`SearchController`] - event-driven session state with stale-response
//!   suppression
//!
//! # Example
//!
//! ```ignore
//! let mut controller = SearchController::new();
//! let planned = controller.on_term_changed("promise");
//! let response = client.search(&planned.request).await;
//! controller.on_response(planned.seq, response);
//! render(controller.display());
//! ```

mod breadcrumbs;
mod controller;
mod facets;
mod highlight;
mod presenter;
mod query;

pub use breadcrumbs::derive_breadcrumbs;
pub use controller::{PlannedSearch, SearchController};
pub use facets::{FacetMap, ALL_FACET};
pub use highlight::{highlight, highlight_excerpt, EXCERPT_BUDGET};
pub use presenter::{select_display_state, DisplayState, RenderedHit, SeeAll};
pub use query::{build_search_request, QueryState, RESULT_LIMIT};
