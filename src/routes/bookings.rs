//! Booking ledger routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::booking::{self, BookingRow, NewBooking};
use crate::state::AppState;

/// Optional list filters. At most one is applied; `user` wins when both are
/// present.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub user: Option<i64>,
    pub provider: Option<i64>,
}

pub(crate) fn booking_error_to_status(err: booking::BookingError) -> StatusCode {
    match err {
        booking::BookingError::NotFound(_) => StatusCode::NOT_FOUND,
        booking::BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/bookings` — create a booking request against a provider.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingRow>), StatusCode> {
    let row = booking::create_booking(&state.pool, body)
        .await
        .map_err(booking_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/bookings` — list all bookings, or filter by `?user=` /
/// `?provider=`.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<BookingRow>>, StatusCode> {
    let rows = match (query.user, query.provider) {
        (Some(user_id), _) => booking::find_by_user(&state.pool, user_id).await,
        (None, Some(provider_id)) => booking::find_by_provider(&state.pool, provider_id).await,
        (None, None) => booking::list_bookings(&state.pool).await,
    }
    .map_err(booking_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/bookings/:id` — fetch one booking, 404 when absent.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingRow>, StatusCode> {
    let row = booking::get_booking(&state.pool, id)
        .await
        .map_err(booking_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/bookings/:id` — remove by id. Always 204, no-op when absent.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let removed = booking::delete_booking(&state.pool, id)
        .await
        .map_err(booking_error_to_status)?;
    if !removed {
        tracing::debug!(%id, "delete of absent booking");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
