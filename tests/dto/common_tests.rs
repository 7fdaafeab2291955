// Tests for common DTOs in src/api/dtos/common.rs
// Tests ReportQueryParams parsing, QueryDescriptor validation and the errors envelope

use chrono::NaiveDate;
use pop_report_api::api::dtos::common::{
    QueryDescriptor, ReportQueryParams, ValidationErrorResponse, MAX_PER_PAGE_CEILING,
};
use validator::Validate;

fn descriptor(max_per_page: i64) -> QueryDescriptor {
    QueryDescriptor {
        start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
        page: 1,
        max_per_page,
    }
}

#[test]
fn test_query_params_from_query_string_json() {
    let json = r#"{"start_date": "2022-01-01", "page": "3"}"#;
    let params: ReportQueryParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.start_date.as_deref(), Some("2022-01-01"));
    assert_eq!(params.page.as_deref(), Some("3"));
    assert!(params.end_date.is_none());
    assert!(params.max_per_page.is_none());
}

#[test]
fn test_query_params_ignore_unknown_keys() {
    let json = r#"{"max_per_page": "10", "sort": "desc"}"#;
    let params: ReportQueryParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.max_per_page.as_deref(), Some("10"));
}

#[test]
fn test_query_params_from_pairs_last_value_wins() {
    let params = ReportQueryParams::from_pairs([
        ("page", "1"),
        ("unknown", "x"),
        ("page", "7"),
        ("end_date", "2022-01-15"),
    ]);
    assert_eq!(params.page.as_deref(), Some("7"));
    assert_eq!(params.end_date.as_deref(), Some("2022-01-15"));
    assert!(params.start_date.is_none());
}

#[test]
fn test_query_params_from_empty_pairs() {
    let params = ReportQueryParams::from_pairs(Vec::<(String, String)>::new());
    assert_eq!(params, ReportQueryParams::default());
}

#[test]
fn test_descriptor_boundary_at_ceiling() {
    assert_eq!(MAX_PER_PAGE_CEILING, 3000);
    assert!(descriptor(MAX_PER_PAGE_CEILING).validate().is_ok());

    let result = descriptor(MAX_PER_PAGE_CEILING + 1).validate();
    let validation_err = result.unwrap_err();
    let errors = validation_err.field_errors();
    assert!(errors.contains_key("max_per_page"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_descriptor_has_no_lower_bound() {
    assert!(descriptor(0).validate().is_ok());
    assert!(descriptor(i64::MIN).validate().is_ok());
}

#[test]
fn test_descriptor_serializes_dates_as_iso() {
    let json = serde_json::to_value(descriptor(500)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "start_date": "2022-01-01",
            "end_date": "2022-01-15",
            "page": 1,
            "max_per_page": 500
        })
    );
}

#[test]
fn test_validation_error_response_shape() {
    let mut response = ValidationErrorResponse::default();
    response
        .errors
        .insert("page".to_string(), "Not a valid integer.".to_string());

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"errors":{"page":"Not a valid integer."}}"#);
}
