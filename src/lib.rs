use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;
pub mod store;

pub use state::AppState;

/// Build the full router with the given capability bundle applied.
///
/// Routing is structured path-segment matching with explicit precedence;
/// anything that falls through (unknown path, or a known path hit with an
/// unsupported method) is answered with a JSON 405, matching the catch-all
/// contract clients of this endpoint already depend on.
pub fn app(state: AppState) -> Router {
    use handlers::{account, catalog, orders};

    Router::new()
        .route(
            "/products",
            get(catalog::list)
                .post(catalog::create_or_basket)
                .delete(catalog::delete)
                .patch(catalog::update)
                .fallback(method_not_allowed),
        )
        .route("/products/signup", post(account::signup).fallback(method_not_allowed))
        .route("/products/login", post(account::login).fallback(method_not_allowed))
        .route("/products/order", post(orders::place_order).fallback(method_not_allowed))
        .route("/products/cart", post(orders::add_to_cart).fallback(method_not_allowed))
        .route("/health", get(health))
        .fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> error::ApiError {
    error::ApiError::MethodNotAllowed
}

async fn health() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
