//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FitCenterError`] via `From`, so the HTTP adapter only has one enum to
//! map onto status codes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::id::MemberId;

/// Type-erased source error carried by the storage variants.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum FitCenterError {
    /// The write payload was malformed or incomplete.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// No database connection could be acquired.
    #[error("database connection failed")]
    Connection(#[source] BoxedError),

    /// A connection was acquired but a statement failed.
    #[error("database query failed")]
    Query(#[source] BoxedError),
}

/// Field-level rejection of a write payload.
///
/// Serializes as a bare `{ field: [message, ...] }` map, which is exactly
/// the body of a `400 Bad Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Key used for errors that apply to the payload as a whole.
    pub const SCHEMA_KEY: &'static str = "_schema";

    /// Create an empty error (no violations yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error describing the payload as a whole.
    #[must_use]
    pub fn schema(message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(Self::SCHEMA_KEY, message);
        err
    }

    /// Record one violation for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// `true` when no violation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, if any.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// All violations keyed by field name.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid payload fields:")?;
        for (idx, field) in self.fields.keys().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{sep}{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A member referenced by a request does not exist.
///
/// The two variants only differ in the caller-facing wording, which the HTTP
/// layer renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// The member targeted by a delete is absent.
    #[error("User not found")]
    Member(MemberId),

    /// The member whose sessions were requested is absent.
    #[error("Member ID does not exist")]
    SessionOwner(MemberId),
}

impl NotFoundError {
    /// Id of the missing member.
    #[must_use]
    pub fn member_id(&self) -> MemberId {
        match self {
            Self::Member(id) | Self::SessionOwner(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_validation_error_as_bare_field_map() {
        let mut err = ValidationError::new();
        err.push("age", "Missing data for required field.");
        err.push("name", "Not a valid string.");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "age": ["Missing data for required field."],
                "name": ["Not a valid string."],
            })
        );
    }

    #[test]
    fn should_accumulate_messages_for_same_field() {
        let mut err = ValidationError::new();
        err.push("name", "first");
        err.push("name", "second");
        assert_eq!(
            err.messages("name"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
    }

    #[test]
    fn should_list_fields_in_display() {
        let mut err = ValidationError::new();
        err.push("name", "x");
        err.push("age", "y");
        assert_eq!(err.to_string(), "invalid payload fields: age, name");
    }

    #[test]
    fn should_use_schema_key_for_whole_payload_errors() {
        let err = ValidationError::schema("Invalid input type.");
        assert_eq!(
            err.messages(ValidationError::SCHEMA_KEY),
            Some(&["Invalid input type.".to_string()][..])
        );
    }

    #[test]
    fn should_render_distinct_not_found_wording() {
        let id = MemberId::from(7);
        assert_eq!(NotFoundError::Member(id).to_string(), "User not found");
        assert_eq!(
            NotFoundError::SessionOwner(id).to_string(),
            "Member ID does not exist"
        );
        assert_eq!(NotFoundError::SessionOwner(id).member_id(), id);
    }

    #[test]
    fn should_wrap_domain_errors_via_from() {
        let err: FitCenterError = NotFoundError::Member(MemberId::from(1)).into();
        assert!(matches!(err, FitCenterError::NotFound(_)));

        let err: FitCenterError = ValidationError::schema("x").into();
        assert!(matches!(err, FitCenterError::Validation(_)));
    }
}
