// ABOUTME: Route definitions for the qaforge HTTP server.
// ABOUTME: Assembles web UI, JSON API, and health routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::web;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(web::index).post(web::generate_scenarios))
        .route("/generate-scripts", get(web::generate_script))
        .route("/edit-combined-script", get(web::edit_script).post(web::save_script))
        .route("/push-to-git", get(web::push_to_git))
        .route("/scenarios", get(web::scenarios))
        .route("/health", get(health))
        .route(
            "/api/scenarios",
            get(api::scenarios::get_scenarios).post(api::scenarios::generate_scenarios),
        )
        .route("/api/script", get(api::script::get_script).put(api::script::put_script))
        .route("/api/script/generate", post(api::script::generate_script))
        .route("/api/publish", post(api::publish::publish))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
