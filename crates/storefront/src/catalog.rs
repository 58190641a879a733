//! Catalog data source for collections and products.
//!
//! The catalog is loaded once at startup from a directory of JSON files
//! (`collections.json`, `products.json`) and held in memory for the lifetime
//! of the process. Handlers consume already-resolved snapshots; there is no
//! fetching at request time.

use std::path::Path;

use luxlamp_core::{Collection, CollectionId, Product, ProductId};
use thiserror::Error;

/// Errors loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory catalog of collections and products.
///
/// Collections and products keep the order of the underlying files; listing
/// operations are pass-through and never re-sort.
#[derive(Debug, Clone)]
pub struct Catalog {
    collections: Vec<Collection>,
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a directory containing `collections.json` and
    /// `products.json`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if either file is unreadable or fails to parse.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let collections = read_json(&dir.join("collections.json"))?;
        let products = read_json(&dir.join("products.json"))?;
        Ok(Self {
            collections,
            products,
        })
    }

    /// Build a catalog from already-loaded records. Used in tests and by
    /// anything embedding the storefront with its own data source.
    #[must_use]
    pub const fn from_records(collections: Vec<Collection>, products: Vec<Product>) -> Self {
        Self {
            collections,
            products,
        }
    }

    /// All collections, in data-source order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Look up a collection by id.
    #[must_use]
    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products matching the current selection state, in data-source order.
    ///
    /// An empty (or whitespace-only) search term matches everything. A set
    /// collection id restricts results to that collection's members; the
    /// term matches case-insensitively against product name and description.
    #[must_use]
    pub fn filtered_products(
        &self,
        search_term: &str,
        collection_id: Option<&CollectionId>,
    ) -> Vec<Product> {
        let term = search_term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| collection_id.is_none_or(|id| p.collection_id.as_ref() == Some(id)))
            .filter(|p| term.is_empty() || matches_term(p, &term))
            .cloned()
            .collect()
    }

    /// Whether the catalog holds any products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Case-insensitive substring match against name and description.
fn matches_term(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(term))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: display,
        source,
    })
}
