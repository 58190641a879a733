//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page (loading-state shell)
//! GET  /blog                    - Blog index
//! GET  /health                  - Health check
//!
//! # Fragments (HTMX)
//! GET  /fragments/collections   - Collections section, resolved
//! GET  /fragments/products      - Products section, resolved and filtered
//!
//! # Cart (HTMX fragments)
//! POST /cart/add                - Add to cart (returns count badge)
//! POST /cart/update             - Update quantity (returns drawer)
//! POST /cart/remove             - Remove item (returns drawer)
//! POST /cart/open               - Open the cart drawer
//! POST /cart/close              - Close the cart drawer
//! GET  /cart/count              - Cart count badge (fragment)
//! ```

pub mod blog;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create the fragment routes router.
pub fn fragment_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(home::collections_fragment))
        .route("/products", get(home::products_fragment))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Blog
        .route("/blog", get(blog::index))
        // Section fragments
        .nest("/fragments", fragment_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
