//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GetProfileResponse {
    pub success: bool,
    pub profile: Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub profile: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/profile
/// Answers `{}` as the profile until one has been saved.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<GetProfileResponse>, AppError> {
    let profile = state.store.load().await?.unwrap_or_else(|| json!({}));
    Ok(Json(GetProfileResponse {
        success: true,
        profile,
    }))
}

/// POST /api/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    let profile = req
        .profile
        .filter(has_content)
        .ok_or_else(|| AppError::Validation("No profile data provided".to_string()))?;

    let name = profile
        .pointer("/personal_info/name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    state.store.save(&profile).await?;
    info!("Profile updated for '{name}'");

    Ok(Json(UpdateProfileResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
    }))
}

fn has_content(profile: &Value) -> bool {
    match profile {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
