//! Display data passed to templates.
//!
//! View structs are flat, owned, and pre-formatted so templates stay free of
//! logic. Conversions from core catalog records live here.

use luxlamp_core::{Collection, Product};
use rust_decimal::Decimal;

use crate::cart::CartStore;
use crate::catalog::Catalog;

/// Image display data for templates.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Collection display data for cards.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub id: String,
    /// URL-encoded id, safe to splice into query strings.
    pub encoded_id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<ImageView>,
    pub featured: bool,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        Self {
            id: collection.id.as_str().to_owned(),
            encoded_id: urlencoding::encode(collection.id.as_str()).into_owned(),
            name: collection.name.clone(),
            description: collection.description.clone(),
            image: collection.image.as_ref().map(|url| ImageView {
                url: url.clone(),
                alt: collection.name.clone(),
            }),
            featured: collection.featured,
        }
    }
}

/// Product display data for cards.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub image: Option<ImageView>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_owned(),
            name: product.name.clone(),
            price: product.price.display(),
            compare_at_price: product.compare_at_price.map(|p| p.display()),
            image: product.image.as_ref().map(|url| ImageView {
                url: url.clone(),
                alt: product.name.clone(),
            }),
        }
    }
}

/// Cart line display data for the drawer.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub line_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<ImageView>,
}

/// Cart display data for the drawer.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: luxlamp_core::Price::from_cents(0, luxlamp_core::CurrencyCode::EUR)
                .display(),
            item_count: 0,
        }
    }

    /// Build the drawer view from the store snapshot, resolving products
    /// through the catalog. Lines whose product no longer resolves are
    /// skipped rather than failing the render.
    #[must_use]
    pub fn from_store(cart: &CartStore, catalog: &Catalog) -> Self {
        let mut items = Vec::new();
        let mut item_count: u32 = 0;
        let mut subtotal_amount = Decimal::ZERO;
        let mut currency = luxlamp_core::CurrencyCode::EUR;

        for line in cart.lines() {
            let Some(product) = catalog.product(&line.product_id) else {
                tracing::warn!(
                    product_id = %line.product_id,
                    "cart line references unknown product, skipping"
                );
                continue;
            };
            let line_price = product.price.times(line.quantity);
            subtotal_amount += line_price.amount;
            currency = product.price.currency_code;
            item_count += line.quantity;
            items.push(CartItemView {
                line_id: line.id.as_str().to_owned(),
                name: product.name.clone(),
                quantity: line.quantity,
                price: product.price.display(),
                line_price: line_price.display(),
                image: product.image.as_ref().map(|url| ImageView {
                    url: url.clone(),
                    alt: product.name.clone(),
                }),
            });
        }

        Self {
            items,
            subtotal: luxlamp_core::Price::new(subtotal_amount, currency).display(),
            item_count,
        }
    }
}
