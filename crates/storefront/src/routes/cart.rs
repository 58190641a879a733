//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Mutating responses carry an `HX-Trigger: cart-updated` header so the
//! header badge refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use luxlamp_core::{LineId, ProductId};

use crate::compose;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::CartView;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub badge: Option<String>,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub open: bool,
    pub cart: CartView,
}

fn badge(state: &AppState) -> CartCountTemplate {
    CartCountTemplate {
        badge: compose::cart_badge(state.cart().total_items()),
    }
}

fn drawer(state: &AppState) -> CartDrawerTemplate {
    CartDrawerTemplate {
        open: state.cart().is_open(),
        cart: CartView::from_store(state.cart(), state.catalog()),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    badge(&state)
}

/// Add item to cart (HTMX).
///
/// Returns the refreshed badge plus an HTMX trigger so other cart elements
/// update themselves.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let quantity = form.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("quantity must be positive".to_string()));
    }

    let product_id = ProductId::new(form.product_id);
    if state.catalog().product(&product_id).is_none() {
        return Err(AppError::NotFound(format!("product {product_id}")));
    }

    state.cart().add(product_id, quantity);
    Ok((AppendHeaders([("HX-Trigger", "cart-updated")]), badge(&state)).into_response())
}

/// Update cart item quantity (HTMX). Quantity 0 removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    state.cart().update(&LineId::new(form.line_id), form.quantity);
    (AppendHeaders([("HX-Trigger", "cart-updated")]), drawer(&state))
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    state.cart().remove(&LineId::new(form.line_id));
    (AppendHeaders([("HX-Trigger", "cart-updated")]), drawer(&state))
}

/// Open the cart drawer (HTMX). Idempotent.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> impl IntoResponse {
    state.cart().open();
    drawer(&state)
}

/// Close the cart drawer (HTMX). Idempotent.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> impl IntoResponse {
    state.cart().close();
    drawer(&state)
}
