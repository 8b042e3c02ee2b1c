use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::dropdowns::{load_dropdown, load_locations, DropdownKind};
use crate::errors::AppError;
use crate::models::dropdown::DropdownOption;
use crate::state::AppState;

/// GET /api/v1/dropdowns/:kind
///
/// Locations are `{city, country}` rows; every other kind is `{id, label}`.
pub async fn handle_get_dropdown(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Value>, AppError> {
    let kind: DropdownKind = kind.parse()?;
    let cache = state.cache.as_ref();
    let ttl = state.config.dropdown_cache_ttl();

    let rows = match kind {
        DropdownKind::Locations => json!(load_locations(cache, &state.backend, ttl).await?),
        _ => json!(load_dropdown::<DropdownOption>(cache, &state.backend, kind, ttl).await?),
    };
    Ok(Json(rows))
}

/// DELETE /api/v1/dropdowns/:kind
pub async fn handle_invalidate_dropdown(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<StatusCode, AppError> {
    let kind: DropdownKind = kind.parse()?;
    state.cache.invalidate(&kind.cache_key()).await?;
    info!("Invalidated '{kind}' dropdown cache");
    Ok(StatusCode::NO_CONTENT)
}
