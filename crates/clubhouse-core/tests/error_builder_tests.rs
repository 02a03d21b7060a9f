use axum::http::StatusCode;
use clubhouse_core::error_builder::{
    bad_request, conflict, forbidden, internal_server_error, not_found, unauthorized, ErrorBuilder,
};

#[test]
fn test_error_builder_basic() {
    let error = ErrorBuilder::new(StatusCode::BAD_REQUEST)
        .type_("https://example.com/probs/validation-error")
        .title("Validation Error")
        .detail("The request contains invalid data")
        .instance("/blogs/123")
        .build();

    assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.body.get("type").unwrap().as_str().unwrap(),
        "https://example.com/probs/validation-error"
    );
    assert_eq!(
        error.body.get("title").unwrap().as_str().unwrap(),
        "Validation Error"
    );
    assert_eq!(
        error.body.get("detail").unwrap().as_str().unwrap(),
        "The request contains invalid data"
    );
    assert_eq!(
        error.body.get("instance").unwrap().as_str().unwrap(),
        "/blogs/123"
    );
}

#[test]
fn test_error_builder_with_values() {
    let error = ErrorBuilder::new(StatusCode::UNPROCESSABLE_ENTITY)
        .title("Validation Failed")
        .value("field", "email")
        .value("reason", "invalid format")
        .value("code", 422)
        .build();

    assert_eq!(error.status_code, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error.body.contains_key("field"));
    assert!(error.body.contains_key("reason"));
    assert!(error.body.contains_key("code"));
    assert!(error.body.contains_key("timestamp"));
}

#[test]
fn test_common_builders_status_codes() {
    assert_eq!(
        internal_server_error().build().status_code,
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(not_found().build().status_code, StatusCode::NOT_FOUND);
    assert_eq!(unauthorized().build().status_code, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_request().build().status_code, StatusCode::BAD_REQUEST);
    assert_eq!(forbidden().build().status_code, StatusCode::FORBIDDEN);
    assert_eq!(conflict().build().status_code, StatusCode::CONFLICT);
}

#[test]
fn test_bad_request_has_no_error_code_by_default() {
    let error = bad_request().detail("Start date must not be after end date").build();

    assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.body.get("detail").unwrap().as_str().unwrap(),
        "Start date must not be after end date"
    );
}
