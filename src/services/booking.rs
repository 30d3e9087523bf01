//! Booking ledger — requests linking a user to a provider.
//!
//! DESIGN
//! ======
//! A booking references exactly one user (the requester) and exactly one
//! provider (the target). Status is a free-text tag assigned once at
//! creation — `"PENDING"` unless the caller supplies one — and never
//! transitioned by any code path here; a richer lifecycle would be an
//! external concern. Double-booking the same user/provider pair is not
//! prevented.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Status assigned to bookings created without an explicit one.
pub const DEFAULT_STATUS: &str = "PENDING";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from booking queries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    pub id: i64,
    pub user_id: i64,
    pub provider_id: i64,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a booking. The entity references are the
/// one place this system requires input: a booking without both ends is
/// meaningless. `status` and `created_at` are defaulted when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(rename = "user")]
    pub user_id: i64,
    #[serde(rename = "provider")]
    pub provider_id: i64,
    pub message: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a booking. Status defaults to [`DEFAULT_STATUS`] and `created_at`
/// to the server clock when not supplied. The user/provider references are
/// persisted as-is; a dangling reference fails at the store layer via FK.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_booking(pool: &PgPool, new: NewBooking) -> Result<BookingRow, BookingError> {
    let status = new.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned());
    let created_at = new.created_at.unwrap_or_else(Utc::now);

    let id: i64 = sqlx::query_scalar(
        r"INSERT INTO bookings (user_id, provider_id, message, status, created_at)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id",
    )
    .bind(new.user_id)
    .bind(new.provider_id)
    .bind(&new.message)
    .bind(&status)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    tracing::info!(id, user_id = new.user_id, provider_id = new.provider_id, "booking created");
    Ok(BookingRow {
        id,
        user_id: new.user_id,
        provider_id: new.provider_id,
        message: new.message,
        status,
        created_at,
    })
}

const SELECT_BOOKING: &str =
    "SELECT id, user_id, provider_id, message, status, created_at FROM bookings";

/// List all bookings.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_bookings(pool: &PgPool) -> Result<Vec<BookingRow>, BookingError> {
    let rows = sqlx::query_as::<_, BookingRow>(SELECT_BOOKING)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch one booking by id.
///
/// # Errors
///
/// Returns `NotFound` if no row exists, or a database error if the query
/// fails.
pub async fn get_booking(pool: &PgPool, id: i64) -> Result<BookingRow, BookingError> {
    let row = sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or(BookingError::NotFound(id))
}

/// Delete a booking by id. Returns whether a row was actually removed;
/// deleting an absent id is not an error.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn delete_booking(pool: &PgPool, id: i64) -> Result<bool, BookingError> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// List bookings requested by one user.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<BookingRow>, BookingError> {
    let rows = sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE user_id = $1"))
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// List bookings targeting one provider.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_by_provider(
    pool: &PgPool,
    provider_id: i64,
) -> Result<Vec<BookingRow>, BookingError> {
    let rows = sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE provider_id = $1"))
        .bind(provider_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
