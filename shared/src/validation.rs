//! Client-side validation, run before any request is issued
//!
//! Length, range and URL rules come from the `Validate` derives on the input
//! models; required-field rules trim first and are checked here. Errors are
//! keyed by the wire field names the forms display them under.

use validator::{Validate, ValidationErrors};

use crate::models::{BusinessInput, LoginInput, NewBusinessImage, ReviewInput, SignupInput};
use crate::types::ApiErrors;

/// Validate the business create/edit form
pub fn validate_business(input: &BusinessInput) -> Result<(), ApiErrors> {
    let mut errors = ApiErrors::new();

    require(&mut errors, "name", &input.name, "Business name is required");
    require(&mut errors, "address", &input.address, "Address is required");
    require(&mut errors, "city", &input.city, "City is required");
    require(&mut errors, "state", &input.state, "State is required");
    require(&mut errors, "country", &input.country, "Country is required");
    require(&mut errors, "zipCode", &input.zip_code, "ZIP code is required");
    require(&mut errors, "category", &input.category, "Category is required");
    require(&mut errors, "description", &input.description, "Description is required");
    if input.price_range.is_none() {
        errors.insert("priceRange", "Price range is required");
    }

    merge_rule_errors(&mut errors, input.validate());
    finish(errors)
}

/// Validate the review write/edit form
pub fn validate_review(input: &ReviewInput) -> Result<(), ApiErrors> {
    let mut errors = ApiErrors::new();

    require(&mut errors, "review", &input.review, "Review text is required");

    merge_rule_errors(&mut errors, input.validate());
    finish(errors)
}

/// Validate the add-photo form
pub fn validate_image(input: &NewBusinessImage) -> Result<(), ApiErrors> {
    let mut errors = ApiErrors::new();

    require(&mut errors, "url", &input.url, "Please enter an image URL");

    merge_rule_errors(&mut errors, input.validate());
    finish(errors)
}

pub fn validate_login(input: &LoginInput) -> Result<(), ApiErrors> {
    let mut errors = ApiErrors::new();

    require(&mut errors, "credential", &input.credential, "Username or email is required");
    require(&mut errors, "password", &input.password, "Password is required");

    finish(errors)
}

pub fn validate_signup(input: &SignupInput) -> Result<(), ApiErrors> {
    let mut errors = ApiErrors::new();

    require(&mut errors, "username", &input.username, "Username is required");
    require(&mut errors, "email", &input.email, "Email is required");
    require(&mut errors, "firstName", &input.first_name, "First name is required");
    require(&mut errors, "lastName", &input.last_name, "Last name is required");

    merge_rule_errors(&mut errors, input.validate());
    finish(errors)
}

fn require(errors: &mut ApiErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Add derive-rule failures for fields that have no error yet
fn merge_rule_errors(errors: &mut ApiErrors, result: Result<(), ValidationErrors>) {
    let Err(failures) = result else {
        return;
    };

    for (field, field_failures) in failures.field_errors() {
        let key = wire_field(field);
        if errors.contains(&key) {
            continue;
        }
        if let Some(message) = field_failures.iter().find_map(|f| f.message.as_ref()) {
            errors.insert(key, message.to_string());
        }
    }
}

fn finish(errors: ApiErrors) -> Result<(), ApiErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `zip_code` -> `zipCode`
pub(crate) fn wire_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
