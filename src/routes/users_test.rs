use super::*;
use crate::services::user::UserError;

// =============================================================================
// LoginBody
// =============================================================================

#[test]
fn login_body_requires_both_fields() {
    assert!(serde_json::from_str::<LoginBody>(r#"{"email":"a@x.com"}"#).is_err());
    assert!(serde_json::from_str::<LoginBody>(r#"{"password":"p1"}"#).is_err());

    let body: LoginBody =
        serde_json::from_str(r#"{"email":"a@x.com","password":"p1"}"#).unwrap();
    assert_eq!(body.email, "a@x.com");
    assert_eq!(body.password, "p1");
}

// =============================================================================
// user_error_to_status
// =============================================================================

#[test]
fn invalid_credentials_maps_to_unauthorized() {
    assert_eq!(
        user_error_to_status(UserError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn database_error_maps_to_internal_server_error() {
    assert_eq!(
        user_error_to_status(UserError::from(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
