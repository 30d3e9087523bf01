//! Provider directory — CRUD and the service-type/area finder.
//!
//! DESIGN
//! ======
//! A provider profile optionally links to exactly one user account
//! (`user_id`, nullable, UNIQUE at the schema level). The link is accepted
//! as-is at write time: neither existence nor uniqueness is re-checked here,
//! so a constraint violation surfaces as a store-layer failure.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from provider queries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub service_type: Option<String>,
    pub area: Option<String>,
    pub experience: Option<String>,
    pub price_range: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
}

/// Fields accepted when creating a provider profile. All optional; absent
/// fields persist as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub user_id: Option<i64>,
    pub service_type: Option<String>,
    pub area: Option<String>,
    pub experience: Option<String>,
    pub price_range: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a new provider profile.
///
/// # Errors
///
/// Returns a database error if the insert fails (including a violated
/// `user_id` FK or uniqueness constraint).
pub async fn create_provider(pool: &PgPool, new: NewProvider) -> Result<ProviderRow, ProviderError> {
    let id: i64 = sqlx::query_scalar(
        r"INSERT INTO providers (user_id, service_type, area, experience, price_range, description, phone)
          VALUES ($1, $2, $3, $4, $5, $6, $7)
          RETURNING id",
    )
    .bind(new.user_id)
    .bind(&new.service_type)
    .bind(&new.area)
    .bind(&new.experience)
    .bind(&new.price_range)
    .bind(&new.description)
    .bind(&new.phone)
    .fetch_one(pool)
    .await?;

    tracing::info!(id, user_id = new.user_id, "provider created");
    Ok(ProviderRow {
        id,
        user_id: new.user_id,
        service_type: new.service_type,
        area: new.area,
        experience: new.experience,
        price_range: new.price_range,
        description: new.description,
        phone: new.phone,
    })
}

const SELECT_PROVIDER: &str =
    "SELECT id, user_id, service_type, area, experience, price_range, description, phone FROM providers";

/// List all providers.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_providers(pool: &PgPool) -> Result<Vec<ProviderRow>, ProviderError> {
    let rows = sqlx::query_as::<_, ProviderRow>(SELECT_PROVIDER)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch one provider by id.
///
/// # Errors
///
/// Returns `NotFound` if no row exists, or a database error if the query
/// fails.
pub async fn get_provider(pool: &PgPool, id: i64) -> Result<ProviderRow, ProviderError> {
    let row = sqlx::query_as::<_, ProviderRow>(&format!("{SELECT_PROVIDER} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or(ProviderError::NotFound(id))
}

/// Delete a provider by id. Returns whether a row was actually removed;
/// deleting an absent id is not an error.
///
/// # Errors
///
/// Returns a database error if the delete fails (e.g. bookings still
/// reference the provider).
pub async fn delete_provider(pool: &PgPool, id: i64) -> Result<bool, ProviderError> {
    let result = sqlx::query("DELETE FROM providers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Exact-match filter on `service_type` and `area`. Case-sensitive equality
/// on both fields; rows with NULL in either column never match.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_by_service_type_and_area(
    pool: &PgPool,
    service_type: &str,
    area: &str,
) -> Result<Vec<ProviderRow>, ProviderError> {
    let rows = sqlx::query_as::<_, ProviderRow>(&format!(
        "{SELECT_PROVIDER} WHERE service_type = $1 AND area = $2"
    ))
    .bind(service_type)
    .bind(area)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
