//! Field-by-field reading of untyped JSON write payloads.
//!
//! [`FieldReader`] walks a JSON object, coerces each required field to its
//! declared type and collects every violation before giving up, so a single
//! `400` response lists all problems at once. Fields the reader is never
//! asked about are ignored.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// The field is absent from the payload.
pub const MISSING_FIELD: &str = "Missing data for required field.";
/// The field is present but `null`.
pub const NULL_FIELD: &str = "Field may not be null.";
/// A string field received another JSON type.
pub const INVALID_STRING: &str = "Not a valid string.";
/// An integer field received something that does not coerce to an integer.
pub const INVALID_INTEGER: &str = "Not a valid integer.";
/// A non-empty string field received an empty string.
pub const EMPTY_STRING: &str = "Shorter than minimum length 1.";
/// The payload is not a JSON object.
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Reads required fields out of a JSON object, accumulating violations.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationError,
}

impl<'a> FieldReader<'a> {
    /// Start reading `value`.
    ///
    /// # Errors
    ///
    /// Returns a `_schema` [`ValidationError`] when `value` is not an object.
    pub fn new(value: &'a Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::schema(INVALID_INPUT))?;
        Ok(Self {
            object,
            errors: ValidationError::new(),
        })
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            None => {
                self.errors.push(field, MISSING_FIELD);
                None
            }
            Some(Value::Null) => {
                self.errors.push(field, NULL_FIELD);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Read a required string field.
    pub fn string(&mut self, field: &str) -> Option<String> {
        let value = self.required(field)?;
        if let Some(text) = value.as_str() {
            Some(text.to_owned())
        } else {
            self.errors.push(field, INVALID_STRING);
            None
        }
    }

    /// Read a required string field that must not be empty.
    ///
    /// Whitespace counts as content.
    pub fn non_empty_string(&mut self, field: &str) -> Option<String> {
        let text = self.string(field)?;
        if text.is_empty() {
            self.errors.push(field, EMPTY_STRING);
            return None;
        }
        Some(text)
    }

    /// Read a required integer field.
    ///
    /// Accepts JSON integers, integral floats and numeric strings.
    pub fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.required(field)?;
        let parsed = coerce_integer(value);
        if parsed.is_none() {
            self.errors.push(field, INVALID_INTEGER);
        }
        parsed
    }

    /// Finish reading and return the built record, or every violation seen.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`ValidationError`] if any field was invalid.
    pub fn finish<T>(self, record: Option<T>) -> Result<T, ValidationError> {
        match record {
            Some(record) if self.errors.is_empty() => Ok(record),
            _ => Err(self.errors),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_reject_non_object_payload_with_schema_error() {
        let payload = json!([1, 2]);
        let err = FieldReader::new(&payload).err().unwrap();
        assert_eq!(
            err.messages(ValidationError::SCHEMA_KEY),
            Some(&[INVALID_INPUT.to_string()][..])
        );
    }

    #[test]
    fn should_coerce_integer_from_numeric_string() {
        let payload = json!({ "age": " 29 " });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.integer("age"), Some(29));
        assert_eq!(reader.finish(Some(())), Ok(()));
    }

    #[test]
    fn should_coerce_integer_from_integral_float() {
        let payload = json!({ "age": 29.0 });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.integer("age"), Some(29));
    }

    #[test]
    fn should_reject_fractional_float_and_boolean_for_integer() {
        let payload = json!({ "a": 29.5, "b": true });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.integer("a"), None);
        assert_eq!(reader.integer("b"), None);

        let err = reader.finish(Some(())).unwrap_err();
        assert_eq!(err.messages("a"), Some(&[INVALID_INTEGER.to_string()][..]));
        assert_eq!(err.messages("b"), Some(&[INVALID_INTEGER.to_string()][..]));
    }

    #[test]
    fn should_distinguish_missing_from_null() {
        let payload = json!({ "b": null });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.string("a"), None);
        assert_eq!(reader.string("b"), None);

        let err = reader.finish(Some(())).unwrap_err();
        assert_eq!(err.messages("a"), Some(&[MISSING_FIELD.to_string()][..]));
        assert_eq!(err.messages("b"), Some(&[NULL_FIELD.to_string()][..]));
    }

    #[test]
    fn should_reject_number_for_string_field() {
        let payload = json!({ "name": 12 });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.string("name"), None);
        let err = reader.finish(Some(())).unwrap_err();
        assert_eq!(err.messages("name"), Some(&[INVALID_STRING.to_string()][..]));
    }

    #[test]
    fn should_reject_empty_non_empty_string() {
        let payload = json!({ "name": "" });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.non_empty_string("name"), None);
        let err = reader.finish(Some(())).unwrap_err();
        assert_eq!(err.messages("name"), Some(&[EMPTY_STRING.to_string()][..]));
    }

    #[test]
    fn should_accept_whitespace_only_non_empty_string() {
        let payload = json!({ "name": " " });
        let mut reader = FieldReader::new(&payload).unwrap();
        assert_eq!(reader.non_empty_string("name"), Some(" ".to_string()));
        assert_eq!(reader.finish(Some(())), Ok(()));
    }
}
