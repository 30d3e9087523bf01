//! Provider directory routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::provider::{self, NewProvider, ProviderRow};
use crate::state::AppState;

/// Query parameters for the exact-match finder.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub service_type: String,
    pub area: String,
}

pub(crate) fn provider_error_to_status(err: provider::ProviderError) -> StatusCode {
    match err {
        provider::ProviderError::NotFound(_) => StatusCode::NOT_FOUND,
        provider::ProviderError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/providers` — create a provider profile.
pub async fn create_provider(
    State(state): State<AppState>,
    Json(body): Json<NewProvider>,
) -> Result<(StatusCode, Json<ProviderRow>), StatusCode> {
    let row = provider::create_provider(&state.pool, body)
        .await
        .map_err(provider_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/providers` — list all providers.
pub async fn list_providers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProviderRow>>, StatusCode> {
    let rows = provider::list_providers(&state.pool)
        .await
        .map_err(provider_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/providers/search?serviceType=..&area=..` — exact-match filter.
pub async fn search_providers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProviderRow>>, StatusCode> {
    let rows = provider::find_by_service_type_and_area(&state.pool, &query.service_type, &query.area)
        .await
        .map_err(provider_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/providers/:id` — fetch one provider, 404 when absent.
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProviderRow>, StatusCode> {
    let row = provider::get_provider(&state.pool, id)
        .await
        .map_err(provider_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/providers/:id` — remove by id. Always 204: deleting an
/// absent id is a no-op, and the response does not distinguish the two.
pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let removed = provider::delete_provider(&state.pool, id)
        .await
        .map_err(provider_error_to_status)?;
    if !removed {
        tracing::debug!(%id, "delete of absent provider");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "providers_test.rs"]
mod tests;
