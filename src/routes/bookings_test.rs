use super::*;
use crate::services::booking::BookingError;

// =============================================================================
// ListQuery
// =============================================================================

#[test]
fn list_query_defaults_to_no_filters() {
    let query: ListQuery = serde_json::from_str("{}").unwrap();
    assert!(query.user.is_none());
    assert!(query.provider.is_none());
}

#[test]
fn list_query_accepts_either_filter() {
    let by_user: ListQuery = serde_json::from_str(r#"{"user":1}"#).unwrap();
    assert_eq!(by_user.user, Some(1));
    assert!(by_user.provider.is_none());

    let by_provider: ListQuery = serde_json::from_str(r#"{"provider":10}"#).unwrap();
    assert_eq!(by_provider.provider, Some(10));
    assert!(by_provider.user.is_none());
}

// =============================================================================
// booking_error_to_status
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    assert_eq!(
        booking_error_to_status(BookingError::NotFound(1)),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn database_error_maps_to_internal_server_error() {
    assert_eq!(
        booking_error_to_status(BookingError::from(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
