//! API Route Configuration

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{orders, pricing, settings, system, AppState};

/// Builds the router with all routes and middleware.
///
/// When `static_dir` is set, any path the API doesn't match is served
/// from that directory.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Orders
        .route(
            "/orders",
            get(orders::list_orders)
                .post(orders::create_order)
                .delete(orders::delete_order_without_id),
        )
        .route(
            "/orders/{id}",
            get(orders::get_order).delete(orders::delete_order),
        )
        // Pricing
        .route("/config", get(pricing::get_config))
        .route("/config/update", post(pricing::update_config))
        .route("/price/quote", post(pricing::quote_price))
        // Settings
        .route(
            "/settings",
            get(settings::get_settings)
                .put(settings::update_settings)
                .post(settings::update_settings),
        )
        // Stats & health
        .route("/stats", get(system::get_stats))
        .route("/health", get(system::health));

    let mut app = Router::new().nest("/api", api).with_state(state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    // Middleware (order matters - bottom runs first)
    app.layer(TraceLayer::new_for_http()).layer(cors)
}
