//! WebAssembly module for the ReviewHub front end
//!
//! Exposes the pure parts of the state layer to the browser:
//! - Form validation (same rules the native client runs before a submit)
//! - Display labels for ratings, review counts and character counters
//! - Permission checks for review and image controls
//!
//! Inputs and outputs cross the boundary as JSON strings.

use serde::de::DeserializeOwned;
use shared::view;
use shared::{
    validate_business, validate_image, validate_review, ApiErrors, Business, BusinessInput,
    ImageId, NewBusinessImage, Review, ReviewInput, SessionUser,
};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_js(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// `{}` when valid, else the field errors keyed by wire name
fn errors_json(result: Result<(), ApiErrors>) -> Result<String, String> {
    let errors = result.err().unwrap_or_default();
    serde_json::to_string(&errors).map_err(|e| e.to_string())
}

fn business_form_errors(input_json: &str) -> Result<String, String> {
    let input: BusinessInput = parse("business form", input_json)?;
    errors_json(validate_business(&input))
}

fn review_form_errors(input_json: &str) -> Result<String, String> {
    let input: ReviewInput = parse("review form", input_json)?;
    errors_json(validate_review(&input))
}

fn image_form_errors(input_json: &str) -> Result<String, String> {
    let input: NewBusinessImage = parse("image form", input_json)?;
    errors_json(validate_image(&input))
}

fn user_from(user_json: &str) -> Result<Option<SessionUser>, String> {
    parse("session user", user_json)
}

fn review_permission(user_json: &str, business_json: &str, reviews_json: &str) -> Result<bool, String> {
    let user = user_from(user_json)?;
    let business: Business = parse("business", business_json)?;
    let reviews: Vec<Review> = parse("reviews", reviews_json)?;
    Ok(view::can_review(user.as_ref(), &business, &reviews))
}

fn image_permission(user_json: &str, business_json: &str, image_id: ImageId) -> Result<bool, String> {
    let user = user_from(user_json)?;
    let business: Business = parse("business", business_json)?;
    Ok(business
        .images
        .iter()
        .find(|image| image.id == image_id)
        .map(|image| view::can_manage_image(user.as_ref(), &business, image))
        .unwrap_or(false))
}

/// Validate the business form; returns an errors object as JSON
#[wasm_bindgen]
pub fn validate_business_form(input_json: &str) -> Result<String, JsValue> {
    business_form_errors(input_json).map_err(to_js)
}

#[wasm_bindgen]
pub fn validate_review_form(input_json: &str) -> Result<String, JsValue> {
    review_form_errors(input_json).map_err(to_js)
}

#[wasm_bindgen]
pub fn validate_image_form(input_json: &str) -> Result<String, JsValue> {
    image_form_errors(input_json).map_err(to_js)
}

/// `"New"` or the rating to one decimal
#[wasm_bindgen]
pub fn rating_label(business_json: &str) -> Result<String, JsValue> {
    parse::<Business>("business", business_json)
        .map(|business| view::rating_label(&business))
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn star_bar(rating: f64) -> String {
    view::star_bar(rating)
}

#[wasm_bindgen]
pub fn review_count_label(count: u32) -> String {
    view::review_count_label(count)
}

/// Counter shown under the review textarea
#[wasm_bindgen]
pub fn review_character_count(text: &str) -> String {
    view::character_count(text)
}

/// `user_json` may be `null` when logged out
#[wasm_bindgen]
pub fn can_write_review(user_json: &str, business_json: &str, reviews_json: &str) -> Result<bool, JsValue> {
    review_permission(user_json, business_json, reviews_json).map_err(to_js)
}

#[wasm_bindgen]
pub fn can_manage_image(user_json: &str, business_json: &str, image_id: u64) -> Result<bool, JsValue> {
    image_permission(user_json, business_json, image_id).map_err(to_js)
}
