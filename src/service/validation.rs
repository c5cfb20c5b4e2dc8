//! Request body checks: required keys first, then a typed decode.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// First name in `fields` (argument order) that is absent from `body`, or `None` when all are present.
/// A key holding `null` counts as present.
pub fn verify_required<'a>(body: &Map<String, Value>, fields: &[&'a str]) -> Option<&'a str> {
    fields.iter().copied().find(|f| !body.contains_key(*f))
}

pub struct RequestValidator;

impl RequestValidator {
    /// `MissingField` for the first absent key.
    pub fn require(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        match verify_required(body, fields) {
            Some(missing) => Err(AppError::MissingField(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Check required keys, then decode into the endpoint's request type.
    pub fn decode<T: DeserializeOwned>(body: Map<String, Value>, required: &[&str]) -> Result<T, AppError> {
        Self::require(&body, required)?;
        serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
    }
}
