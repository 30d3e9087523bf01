//! User registry — account creation, listing, and credential lookup.
//!
//! DESIGN
//! ======
//! Accounts are append-only in this scope: created on registration, never
//! updated or deleted by any exposed operation. Credentials are stored and
//! compared verbatim; hardening the login path is explicitly out of scope.
//!
//! Login resolves through an indexed equality lookup rather than a full
//! scan. Matching semantics are unchanged: exact case-sensitive equality on
//! both fields, and when duplicate credentials exist the earliest-created
//! row wins (`ORDER BY id`).

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from user queries. Serialized as-is in responses, password
/// included — the original wire format, preserved deliberately.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Fields accepted when registering an account. Everything is optional:
/// absent fields persist as NULL, never rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a new user. No uniqueness check on email.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_user(pool: &PgPool, new: NewUser) -> Result<UserRow, UserError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.password)
    .fetch_one(pool)
    .await?;

    tracing::info!(id, "user created");
    Ok(UserRow { id, name: new.name, email: new.email, password: new.password })
}

/// List all users in store-defined order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>, UserError> {
    let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email, password FROM users")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Look up a user by exact credentials.
///
/// # Errors
///
/// Returns `InvalidCredentials` when no stored record matches both fields
/// exactly — deliberately the same error for unknown email and wrong
/// password. Returns a database error if the query fails.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<UserRow, UserError> {
    let row = sqlx::query_as::<_, UserRow>(
        r"SELECT id, name, email, password
          FROM users
          WHERE email = $1 AND password = $2
          ORDER BY id
          LIMIT 1",
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    row.ok_or(UserError::InvalidCredentials)
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
