use super::*;
use crate::services::provider::ProviderError;

// =============================================================================
// SearchQuery
// =============================================================================

#[test]
fn search_query_uses_camel_case_params() {
    let query: SearchQuery = serde_json::from_value(serde_json::json!({
        "serviceType": "plumbing",
        "area": "downtown",
    }))
    .unwrap();
    assert_eq!(query.service_type, "plumbing");
    assert_eq!(query.area, "downtown");
}

#[test]
fn search_query_requires_both_params() {
    let missing_area = serde_json::from_value::<SearchQuery>(serde_json::json!({
        "serviceType": "plumbing",
    }));
    assert!(missing_area.is_err());
}

// =============================================================================
// provider_error_to_status
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    assert_eq!(
        provider_error_to_status(ProviderError::NotFound(1)),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn database_error_maps_to_internal_server_error() {
    assert_eq!(
        provider_error_to_status(ProviderError::from(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
