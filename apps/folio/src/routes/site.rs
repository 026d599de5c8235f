use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

/// GET /profile.json
pub async fn handle_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let profile = state.loader.profile().ok_or(AppError::ProfileNotLoaded)?;
    Ok(Json(profile.clone()))
}

/// GET /api/v1/sections/:name
pub async fn handle_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.loader.is_loaded() {
        return Err(AppError::ProfileNotLoaded);
    }
    let section = state
        .loader
        .section(&name)
        .ok_or_else(|| AppError::NotFound(format!("Profile has no section '{name}'")))?;
    let value = serde_json::to_value(section).map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(value))
}
