//! Router assembly for the web adapter.
//!
//! The todo routes live under `/api`; `/health` sits outside the
//! prefix and carries no CORS layer.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{delete, get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{CorsConfig, ServerContext};
use crate::handlers;
use crate::state::AppState;

/// Build the CORS layer from configuration.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config {
        CorsConfig::AllowAll => base.allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            base.allow_origin(allowed)
        }
    }
}

/// Todo routes, defined without the `/api` prefix.
///
/// The returned router is typed `Router<AppState>`; the caller applies
/// `.with_state()` before nesting.
pub(crate) fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todos::list)
                .post(handlers::todos::create)
                .put(handlers::todos::update),
        )
        // The literal segment wins over the `{id}` capture below
        .route("/todos/deleteAll", delete(handlers::todos::remove_all))
        .route(
            "/todos/{id}",
            get(handlers::todos::get).delete(handlers::todos::remove),
        )
}

/// Assemble the full application router.
///
/// Path parameters use axum 0.8 brace syntax (`{id}`).
pub fn build_router(ctx: ServerContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = cors_layer(cors_config);

    Router::new()
        .route("/health", get(health))
        .nest("/api", todo_routes().with_state(state).layer(cors))
}

/// Liveness probe; returns a bare "OK".
pub(crate) async fn health() -> &'static str {
    "OK"
}
