//! Home page and section-fragment route handlers.
//!
//! The home page renders in the loading state: the collections region is
//! empty and the products section shows the placeholder grid. Both regions
//! request their resolved fragment on load, and the same fragment endpoints
//! serve search-as-you-type and collection selection afterwards.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use luxlamp_core::CollectionId;

use crate::compose::{self, Heading, ProductsSection};
use crate::filters;
use crate::state::AppState;
use crate::template::Shell;
use crate::views::CollectionView;

/// Selection state carried in query parameters.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    /// Search term (`q`).
    pub q: Option<String>,
    /// Selected collection id; unset means "show all".
    pub collection: Option<String>,
}

impl SelectionQuery {
    fn search_term(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    fn selected(&self) -> Option<CollectionId> {
        self.collection
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(CollectionId::new)
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub search_term: String,
    pub heading: Heading,
    pub section: ProductsSection,
    /// Raw selected collection id, for the hidden selection input.
    pub selected: Option<String>,
    /// Fragment URL carrying the current selection state.
    pub products_fragment_url: String,
}

/// Products section fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/products_section.html")]
pub struct ProductsSectionTemplate {
    pub heading: Heading,
    pub section: ProductsSection,
    pub selected: Option<String>,
}

/// Collections section fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/collections_section.html")]
pub struct CollectionsSectionTemplate {
    pub collections: Vec<CollectionView>,
}

/// Display the home page in its loading state.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> impl IntoResponse {
    let selected = query.selected();
    let heading = compose::resolve_heading(state.catalog().collections(), selected.as_ref());
    // Nothing is resolved on the first paint; fragments fill both sections.
    let section = compose::products_section(true, &[], query.search_term());

    HomeTemplate {
        shell: Shell::new(&state, "/"),
        search_term: query.search_term().to_owned(),
        heading,
        section,
        products_fragment_url: products_fragment_url(query.search_term(), selected.as_ref()),
        selected: selected.map(String::from),
    }
}

/// Resolved products section (HTMX).
#[instrument(skip(state))]
pub async fn products_fragment(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> impl IntoResponse {
    let selected = query.selected();
    let catalog = state.catalog();
    let filtered = catalog.filtered_products(query.search_term(), selected.as_ref());

    ProductsSectionTemplate {
        heading: compose::resolve_heading(catalog.collections(), selected.as_ref()),
        section: compose::products_section(false, &filtered, query.search_term()),
        selected: selected.map(String::from),
    }
}

/// Resolved collections section (HTMX).
///
/// Returns an empty body when there is nothing to show, which leaves the
/// region suppressed exactly like the loading state.
#[instrument(skip(state))]
pub async fn collections_fragment(State(state): State<AppState>) -> Response {
    match compose::collections_section(false, state.catalog().collections()) {
        Some(collections) => CollectionsSectionTemplate { collections }.into_response(),
        None => ().into_response(),
    }
}

/// Build the products fragment URL for the given selection state.
fn products_fragment_url(search_term: &str, selected: Option<&CollectionId>) -> String {
    let mut url = String::from("/fragments/products");
    let mut separator = '?';
    if !search_term.is_empty() {
        url.push(separator);
        url.push_str("q=");
        url.push_str(&urlencoding::encode(search_term));
        separator = '&';
    }
    if let Some(id) = selected {
        url.push(separator);
        url.push_str("collection=");
        url.push_str(&urlencoding::encode(id.as_str()));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_url_without_state() {
        assert_eq!(products_fragment_url("", None), "/fragments/products");
    }

    #[test]
    fn test_fragment_url_encodes_term_and_selection() {
        let id = CollectionId::new("lámparas de pie");
        let url = products_fragment_url("luz cálida", Some(&id));
        assert_eq!(
            url,
            "/fragments/products?q=luz%20c%C3%A1lida&collection=l%C3%A1mparas%20de%20pie"
        );
    }

    #[test]
    fn test_selection_query_ignores_empty_collection() {
        let query = SelectionQuery {
            q: None,
            collection: Some(String::new()),
        };
        assert!(query.selected().is_none());
        assert_eq!(query.search_term(), "");
    }
}
