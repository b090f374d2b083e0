//! Gym members.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::MemberId;
use crate::validation::FieldReader;

/// A stored gym member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub age: i64,
}

/// Validated member payload, used for both creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub age: i64,
}

impl MemberDraft {
    /// Validate an untyped JSON payload.
    ///
    /// `name` must be a non-empty string and `age` an integer; other keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every invalid field.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(value)?;
        let name = reader.non_empty_string("name");
        let age = reader.integer("age");
        reader.finish(name.zip(age).map(|(name, age)| Self { name, age }))
    }

    /// Attach a database-assigned id.
    #[must_use]
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
