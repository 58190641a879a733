//! In-process integration tests for the storefront router.
//!
//! Each test builds the full router around a fixture catalog and drives it
//! with `tower::ServiceExt::oneshot`, asserting on the rendered HTML.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use luxlamp_core::{Collection, CollectionId, CurrencyCode, Price, Product, ProductId};
use luxlamp_storefront::catalog::Catalog;
use luxlamp_storefront::config::StorefrontConfig;
use luxlamp_storefront::middleware::request_id_middleware;
use luxlamp_storefront::routes;
use luxlamp_storefront::state::AppState;

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        catalog_dir: "catalog".into(),
    }
}

fn collection(id: &str, name: &str, featured: bool) -> Collection {
    Collection {
        id: CollectionId::new(id),
        name: name.to_string(),
        description: Some(format!("Colección {name}")),
        image: None,
        featured,
    }
}

fn product(id: &str, name: &str, cents: i64, collection: Option<&str>) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: None,
        price: Price::from_cents(cents, CurrencyCode::EUR),
        compare_at_price: None,
        image: None,
        collection_id: collection.map(CollectionId::new),
    }
}

fn fixture_catalog() -> Catalog {
    Catalog::from_records(
        vec![
            collection("mesa", "Lámparas de Mesa", true),
            collection("pie", "Lámparas de Pie", false),
        ],
        vec![
            product("nordica", "Lámpara Nórdica", 4990, Some("mesa")),
            product("flexo", "Flexo de Estudio", 3450, Some("mesa")),
            product("arco", "Lámpara de Arco", 18900, Some("pie")),
        ],
    )
}

fn app() -> Router {
    app_with_catalog(fixture_catalog())
}

fn app_with_catalog(catalog: Catalog) -> Router {
    let state = AppState::with_catalog(test_config(), catalog);
    routes::routes().with_state(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router never fails");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("valid request"),
        )
        .await
        .expect("router never fails")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

// ============================================================================
// Home page
// ============================================================================

#[tokio::test]
async fn test_home_renders_loading_state() {
    let app = app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    // Products render as the fixed placeholder grid on first paint.
    assert_eq!(body.matches("product-card-skeleton").count(), 8);
    // Collections are suppressed until their fragment resolves.
    assert!(!body.contains("Explora Nuestras Colecciones"));
    // The heading is already resolved from the query.
    assert!(body.contains("Productos Destacados"));
    assert!(body.contains("Las mejores lámparas seleccionadas para ti"));
}

#[tokio::test]
async fn test_home_with_selection_resolves_heading_immediately() {
    let app = app();
    let (status, body) = get(&app, "/?collection=mesa").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lámparas de Mesa"));
    assert!(!body.contains("Productos Destacados"));
    // Still the loading grid; products arrive via the fragment.
    assert_eq!(body.matches("product-card-skeleton").count(), 8);
}

#[tokio::test]
async fn test_home_defers_to_fragment_url_with_state() {
    let app = app();
    let (_, body) = get(&app, "/?q=arco&collection=pie").await;
    assert!(body.contains("/fragments/products?q=arco&amp;collection=pie"));
}

// ============================================================================
// Products fragment
// ============================================================================

#[tokio::test]
async fn test_products_fragment_lists_everything_by_default() {
    let app = app();
    let (status, body) = get(&app, "/fragments/products").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Productos Destacados"));
    assert!(body.contains("Lámpara Nórdica"));
    assert!(body.contains("Flexo de Estudio"));
    assert!(body.contains("Lámpara de Arco"));
    assert!(body.contains("€49.90"));
    // No selection, so no reset control.
    assert!(!body.contains("Ver Todos"));
    assert_eq!(body.matches("product-card-skeleton").count(), 0);
}

#[tokio::test]
async fn test_products_fragment_filters_by_collection() {
    let app = app();
    let (_, body) = get(&app, "/fragments/products?collection=mesa").await;

    assert!(body.contains("Lámparas de Mesa"));
    assert!(body.contains("Lámpara Nórdica"));
    assert!(!body.contains("Lámpara de Arco"));
    // Selection shows the reset control and the hidden selection input.
    assert!(body.contains("Ver Todos"));
    assert!(body.contains("id=\"selected-collection\""));
}

#[tokio::test]
async fn test_products_fragment_search_miss_shows_search_message() {
    let app = app();
    let (_, body) = get(&app, "/fragments/products?q=inexistente").await;
    assert!(body.contains("No encontramos lámparas que coincidan con tu búsqueda."));
}

#[tokio::test]
async fn test_products_fragment_empty_catalog_shows_generic_message() {
    let app = app_with_catalog(Catalog::from_records(vec![], vec![]));
    let (_, body) = get(&app, "/fragments/products").await;
    assert!(body.contains("No hay productos disponibles en este momento."));
}

#[tokio::test]
async fn test_products_fragment_unknown_collection_falls_back() {
    let app = app();
    let (status, body) = get(&app, "/fragments/products?collection=eliminada").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Productos"));
    assert!(!body.contains("Productos Destacados"));
    // Unknown collection matches no products.
    assert!(body.contains("No hay productos disponibles en este momento."));
}

#[tokio::test]
async fn test_products_fragment_search_within_collection() {
    let app = app();
    let (_, body) = get(&app, "/fragments/products?q=flexo&collection=mesa").await;
    assert!(body.contains("Flexo de Estudio"));
    assert!(!body.contains("Lámpara Nórdica"));
}

// ============================================================================
// Collections fragment
// ============================================================================

#[tokio::test]
async fn test_collections_fragment_renders_cards() {
    let app = app();
    let (status, body) = get(&app, "/fragments/collections").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Explora Nuestras Colecciones"));
    assert!(body.contains("Lámparas de Mesa"));
    assert!(body.contains("Lámparas de Pie"));
    // Only "mesa" is featured in the fixture.
    assert_eq!(body.matches("Destacada").count(), 1);
    assert!(body.contains("Ver Productos"));
}

#[tokio::test]
async fn test_collections_fragment_empty_catalog_renders_nothing() {
    let app = app_with_catalog(Catalog::from_records(vec![], vec![]));
    let (status, body) = get(&app, "/fragments/collections").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_cart_count_starts_without_badge() {
    let app = app();
    let (status, body) = get(&app, "/cart/count").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("cart-badge"));
}

#[tokio::test]
async fn test_add_to_cart_returns_badge_and_trigger() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=nordica&quantity=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let body = body_text(response).await;
    assert!(body.contains("cart-badge"));
    assert!(body.contains(">2<"));
}

#[tokio::test]
async fn test_add_to_cart_defaults_to_one() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=nordica").await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get(&app, "/cart/count").await;
    assert!(body.contains(">1<"));
}

#[tokio::test]
async fn test_cart_badge_caps_at_ninety_nine() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=nordica&quantity=150").await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get(&app, "/cart/count").await;
    assert!(body.contains("99+"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=desaparecido").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_zero_quantity_is_rejected() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=nordica&quantity=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was added.
    let (_, body) = get(&app, "/cart/count").await;
    assert!(!body.contains("cart-badge"));
}

#[tokio::test]
async fn test_open_cart_renders_drawer_with_items() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=nordica&quantity=2").await;

    let response = post_form(&app, "/cart/open", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("cart-drawer-open"));
    assert!(body.contains("Tu Carrito"));
    assert!(body.contains("Lámpara Nórdica"));
    assert!(body.contains("€99.80"));
    assert!(body.contains("Subtotal"));
}

#[tokio::test]
async fn test_close_cart_hides_drawer() {
    let app = app();
    post_form(&app, "/cart/open", "").await;

    let response = post_form(&app, "/cart/close", "").await;
    let body = body_text(response).await;
    assert!(!body.contains("cart-drawer-open"));
    assert!(body.contains("hidden"));
}

#[tokio::test]
async fn test_update_and_remove_cart_lines() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=nordica&quantity=1").await;

    // The drawer carries the generated line id; pull it out of the markup.
    let drawer = body_text(post_form(&app, "/cart/open", "").await).await;
    let line_id = extract_input_value(&drawer, "line_id");

    let response = post_form(
        &app,
        "/cart/update",
        &format!("line_id={line_id}&quantity=3"),
    )
    .await;
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let body = body_text(response).await;
    assert!(body.contains("€149.70"));

    let response = post_form(&app, "/cart/remove", &format!("line_id={line_id}")).await;
    let body = body_text(response).await;
    assert!(body.contains("Tu carrito está vacío."));
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=flexo&quantity=2").await;
    let drawer = body_text(post_form(&app, "/cart/open", "").await).await;
    let line_id = extract_input_value(&drawer, "line_id");

    let response = post_form(
        &app,
        "/cart/update",
        &format!("line_id={line_id}&quantity=0"),
    )
    .await;
    let body = body_text(response).await;
    assert!(body.contains("Tu carrito está vacío."));

    let (_, count) = get(&app, "/cart/count").await;
    assert!(!count.contains("cart-badge"));
}

/// Pull the value of the first hidden input with the given name out of
/// rendered markup.
fn extract_input_value(html: &str, name: &str) -> String {
    let marker = format!("name=\"{name}\" value=\"");
    let start = html.find(&marker).expect("input present") + marker.len();
    let end = html[start..].find('"').expect("closing quote") + start;
    html[start..end].to_string()
}

// ============================================================================
// Shell and middleware
// ============================================================================

#[tokio::test]
async fn test_pages_emit_canonical_links() {
    let app = app();
    let (_, body) = get(&app, "/").await;
    assert!(body.contains("rel=\"canonical\" href=\"http://localhost:3000/\""));

    let (_, body) = get(&app, "/blog").await;
    assert!(body.contains("rel=\"canonical\" href=\"http://localhost:3000/blog\""));
}

#[tokio::test]
async fn test_request_id_header_roundtrip() {
    let app = app().layer(axum::middleware::from_fn(request_id_middleware));

    // An upstream-supplied id is echoed back unchanged.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "proxy-id-123")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router never fails");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("proxy-id-123")
    );

    // Otherwise one is generated.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router never fails");
    let generated = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id present");
    assert!(!generated.is_empty());
}

// ============================================================================
// Blog
// ============================================================================

#[tokio::test]
async fn test_blog_index_renders_posts() {
    let app = app();
    let (status, body) = get(&app, "/blog").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Blog"));
    assert!(body.contains("min de lectura"));
}
