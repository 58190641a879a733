//! Page composition rules for the landing page.
//!
//! These are the decisions that tie loading flags, selection state, and the
//! filtered product list together. They are plain functions over snapshots
//! so every branch can be tested without rendering.

use luxlamp_core::{Collection, CollectionId, Product};

use crate::views::{CollectionView, ProductView};

/// Number of placeholder cells rendered while products are loading.
pub const SKELETON_CELLS: usize = 8;

/// Heading when no collection is selected.
pub const DEFAULT_TITLE: &str = "Productos Destacados";
/// Subtitle when no collection is selected.
pub const DEFAULT_SUBTITLE: &str = "Las mejores lámparas seleccionadas para ti";
/// Heading when the selected collection no longer resolves.
pub const FALLBACK_TITLE: &str = "Productos";

/// Empty-state message when a search term yielded nothing.
pub const EMPTY_SEARCH_MESSAGE: &str =
    "No encontramos lámparas que coincidan con tu búsqueda.";
/// Empty-state message when the catalog simply has nothing to show.
pub const EMPTY_GENERIC_MESSAGE: &str = "No hay productos disponibles en este momento.";

/// Badge total above which the literal "99+" is shown.
const BADGE_CAP: u32 = 99;

/// Resolved section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

/// Resolve the products section heading from the selection state.
///
/// Total over all inputs: a selected id that no longer references an
/// existing collection falls back to generic literals instead of failing.
#[must_use]
pub fn resolve_heading(collections: &[Collection], selected: Option<&CollectionId>) -> Heading {
    selected.map_or_else(
        || Heading {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        },
        |id| {
            collections.iter().find(|c| &c.id == id).map_or_else(
                || Heading {
                    title: FALLBACK_TITLE.to_string(),
                    subtitle: String::new(),
                },
                |collection| Heading {
                    title: collection.name.clone(),
                    subtitle: collection.description.clone().unwrap_or_default(),
                },
            )
        },
    )
}

/// What the products section renders.
#[derive(Debug, Clone)]
pub enum ProductsSection {
    /// Fixed-size placeholder grid, regardless of the eventual result size.
    Loading,
    /// One card per product, in supplied order.
    Grid(Vec<ProductView>),
    /// Empty-state message.
    Empty(&'static str),
}

impl ProductsSection {
    /// Indices of the placeholder cells, empty unless loading.
    #[must_use]
    pub fn skeleton_cells(&self) -> Vec<usize> {
        match self {
            Self::Loading => (0..SKELETON_CELLS).collect(),
            Self::Grid(_) | Self::Empty(_) => Vec::new(),
        }
    }
}

/// Decide the products section from the loading flag, the filtered product
/// list, and the current search term.
#[must_use]
pub fn products_section(
    loading: bool,
    products: &[Product],
    search_term: &str,
) -> ProductsSection {
    if loading {
        return ProductsSection::Loading;
    }
    if products.is_empty() {
        // Any non-empty term counts as a search, whitespace included.
        let message = if search_term.is_empty() {
            EMPTY_GENERIC_MESSAGE
        } else {
            EMPTY_SEARCH_MESSAGE
        };
        return ProductsSection::Empty(message);
    }
    ProductsSection::Grid(products.iter().map(ProductView::from).collect())
}

/// Decide the collections section: suppressed entirely while loading or when
/// there is nothing to show, otherwise one card per collection in supplied
/// order.
#[must_use]
pub fn collections_section(
    loading: bool,
    collections: &[Collection],
) -> Option<Vec<CollectionView>> {
    if loading || collections.is_empty() {
        return None;
    }
    Some(collections.iter().map(CollectionView::from).collect())
}

/// Header badge text for a cart total.
///
/// Zero suppresses the badge entirely; totals above 99 render as "99+".
#[must_use]
pub fn cart_badge(total_items: u32) -> Option<String> {
    match total_items {
        0 => None,
        n if n > BADGE_CAP => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}
