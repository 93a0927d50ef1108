//! Browser-side checks of the exported functions
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use reviewhub_wasm::{can_write_review, rating_label, validate_business_form};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const VALID_BUSINESS: &str = r#"{
    "name": "Joe's Pizza", "category": "Pizza", "address": "1 Main St",
    "city": "Austin", "state": "TX", "zipCode": "78701",
    "country": "United States of America", "priceRange": "$$",
    "description": "Slices"
}"#;

#[wasm_bindgen_test]
fn valid_business_form_has_no_errors() {
    assert_eq!(validate_business_form(VALID_BUSINESS).unwrap(), "{}");
}

#[wasm_bindgen_test]
fn blank_name_is_reported_by_field() {
    let input = VALID_BUSINESS.replace("Joe's Pizza", " ");
    let errors = validate_business_form(&input).unwrap();
    assert!(errors.contains(r#""name":"Business name is required""#));
}

#[wasm_bindgen_test]
fn malformed_json_becomes_js_error() {
    assert!(validate_business_form("{").is_err());
}

#[wasm_bindgen_test]
fn unrated_business_is_new() {
    assert_eq!(rating_label(r#"{"id": 1, "numReviews": 0}"#).unwrap(), "New");
}

#[wasm_bindgen_test]
fn logged_out_visitor_cannot_review() {
    assert!(!can_write_review("null", r#"{"id": 1, "ownerId": 2}"#, "[]").unwrap());
}
