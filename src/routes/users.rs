//! User registry routes — registration, listing, login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::user::{self, NewUser, UserRow};
use crate::state::AppState;

/// Login credentials. Both fields are required here: a missing field could
/// never match a stored record, so rejecting the request early changes no
/// observable outcome.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub(crate) fn user_error_to_status(err: user::UserError) -> StatusCode {
    match err {
        user::UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        user::UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/users` — register an account.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<UserRow>), StatusCode> {
    let row = user::create_user(&state.pool, body)
        .await
        .map_err(user_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/users` — list all accounts.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRow>>, StatusCode> {
    let rows = user::list_users(&state.pool)
        .await
        .map_err(user_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/users/login` — credential lookup. Responds 401 with no body
/// when nothing matches; the failure is identical for unknown email and
/// wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<UserRow>, StatusCode> {
    let row = user::login(&state.pool, &body.email, &body.password)
        .await
        .map_err(user_error_to_status)?;
    Ok(Json(row))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
