//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST endpoints under `/api` into a single Axum
//! router. CORS is fully open (any origin, method, header) — the API is
//! consumed directly by browser frontends. Request/response logging comes
//! from `TraceLayer`.

pub mod bookings;
pub mod providers;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/login", post(users::login))
        .route(
            "/api/providers",
            get(providers::list_providers).post(providers::create_provider),
        )
        .route("/api/providers/search", get(providers::search_providers))
        .route(
            "/api/providers/{id}",
            get(providers::get_provider).delete(providers::delete_provider),
        )
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers;

    #[tokio::test]
    async fn app_router_builds() {
        let state = test_helpers::test_app_state();
        let _router = app(state);
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        assert_eq!(healthz().await, StatusCode::OK);
    }
}
