//! Workout sessions, each scheduled for one member.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{MemberId, SessionId};
use crate::validation::FieldReader;

/// A stored workout session.
///
/// `member_id` is not guaranteed to reference an existing member: the link
/// is only checked when sessions are read per member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub session_id: SessionId,
    pub member_id: MemberId,
    pub session_date: String,
    pub session_time: String,
    pub activity: String,
}

/// Validated session payload.
///
/// Date and time are kept as opaque strings; only their presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSessionDraft {
    pub member_id: MemberId,
    pub session_date: String,
    pub session_time: String,
    pub activity: String,
}

impl WorkoutSessionDraft {
    /// Validate an untyped JSON payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every invalid field.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(value)?;
        let member_id = reader.integer("member_id");
        let session_date = reader.string("session_date");
        let session_time = reader.string("session_time");
        let activity = reader.string("activity");

        let draft = match (member_id, session_date, session_time, activity) {
            (Some(member_id), Some(session_date), Some(session_time), Some(activity)) => {
                Some(Self {
                    member_id: MemberId::from(member_id),
                    session_date,
                    session_time,
                    activity,
                })
            }
            _ => None,
        };
        reader.finish(draft)
    }

    /// Attach a database-assigned id.
    #[must_use]
    pub fn into_session(self, session_id: SessionId) -> WorkoutSession {
        WorkoutSession {
            session_id,
            member_id: self.member_id,
            session_date: self.session_date,
            session_time: self.session_time,
            activity: self.activity,
        }
    }
}
