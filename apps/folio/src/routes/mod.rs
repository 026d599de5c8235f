pub mod health;
pub mod site;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    Router::new()
        .route("/", get(site::handle_index))
        .route("/health", get(health::health_handler))
        .route("/profile.json", get(site::handle_profile))
        .route("/api/v1/sections/:name", get(site::handle_section))
        .nest_service("/assets", assets)
        .with_state(state)
}
