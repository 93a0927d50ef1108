//! Wire envelopes and error maps shared by the gateway and the forms

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Business, Review, SessionUser};
use crate::validation::wire_field;

/// Field key used for errors that do not belong to a single input
pub const GENERAL_ERROR_KEY: &str = "general";

/// Field-keyed error messages, as carried by `{ errors: {...} }` bodies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrors(BTreeMap<String, String>);

impl ApiErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single `general` banner message
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(GENERAL_ERROR_KEY, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn general_message(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decode a non-success response body.
    ///
    /// Accepts `{errors: {field: msg}}`, `{errors: {field: [msg, ..]}}`,
    /// `{message: msg}` and bare form errors `{field: [msg, ..]}` with
    /// snake_case keys. Anything else decodes to an empty map, leaving the
    /// caller to pick its own fallback message.
    pub fn from_response_body(body: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return Self::new();
        };

        if let Some(errors) = value.get("errors") {
            let decoded = Self::from_errors_value(errors);
            if !decoded.is_empty() {
                return decoded;
            }
        }

        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return Self::general(message);
        }

        Self::from_form_errors(&value)
    }

    /// `general` banner with `message` when nothing else was decoded
    pub fn or_general(self, message: impl Into<String>) -> Self {
        if self.is_empty() {
            Self::general(message)
        } else {
            self
        }
    }

    fn from_form_errors(value: &Value) -> Self {
        let mut decoded = Self::new();
        if let Value::Object(fields) = value {
            for (field, messages) in fields {
                let message = match messages {
                    Value::String(message) => Some(message.as_str()),
                    Value::Array(items) => items.first().and_then(Value::as_str),
                    _ => None,
                };
                if let Some(message) = message {
                    decoded.insert(wire_field(field), message);
                }
            }
        }
        decoded
    }

    fn from_errors_value(errors: &Value) -> Self {
        let mut decoded = Self::new();
        match errors {
            Value::Object(fields) => {
                for (field, message) in fields {
                    if let Some(message) = message_text(message) {
                        decoded.insert(field.clone(), message);
                    }
                }
            }
            Value::String(message) => decoded.insert(GENERAL_ERROR_KEY, message.clone()),
            Value::Array(_) => {
                if let Some(message) = message_text(errors) {
                    decoded.insert(GENERAL_ERROR_KEY, message);
                }
            }
            _ => {}
        }
        decoded
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(message_text),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl FromIterator<(String, String)> for ApiErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, size: 20 }
    }
}

/// `{ Businesses: [...], page, size }` list envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessPage {
    #[serde(rename = "Businesses", default)]
    pub businesses: Vec<Business>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl BusinessPage {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            size: self.size,
        }
    }
}

fn default_page() -> u32 {
    Pagination::default().page
}

fn default_size() -> u32 {
    Pagination::default().size
}

/// `{ Reviews: [...] }` list envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewList {
    #[serde(rename = "Reviews", default)]
    pub reviews: Vec<Review>,
}

/// `{ user: {...} }` envelope returned by sign-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEnvelope {
    pub user: SessionUser,
}
