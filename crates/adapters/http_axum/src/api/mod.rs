//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod members;
#[allow(clippy::missing_errors_doc)]
pub mod workout_sessions;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use serde::Serialize;

use fitcenter_app::ports::{MemberRepository, WorkoutSessionRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<MR, SR>() -> Router<AppState<MR, SR>>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    Router::new()
        // Members
        .route(
            "/members",
            get(members::list::<MR, SR>).post(members::create::<MR, SR>),
        )
        .route(
            "/members/{id}",
            put(members::update::<MR, SR>).delete(members::delete::<MR, SR>),
        )
        // Workout sessions
        .route(
            "/workoutsessions",
            get(workout_sessions::list::<MR, SR>).post(workout_sessions::create::<MR, SR>),
        )
        .route(
            "/workoutsessions/{member_id}",
            put(workout_sessions::update_for_member::<MR, SR>)
                .get(workout_sessions::list_for_member::<MR, SR>),
        )
}

/// `{"Message": ...}` body sent back by successful writes.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    #[serde(rename = "Message")]
    pub message: &'static str,
}

/// Response of every successful write endpoint.
pub enum WriteResponse {
    Created(&'static str),
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(message) => {
                (StatusCode::CREATED, Json(MessageBody { message })).into_response()
            }
        }
    }
}

/// Parse a path segment as a non-negative integer id.
///
/// Anything else (signs, decimals, words) is treated as a route miss.
pub(crate) fn path_id<T: From<i64>>(raw: &str) -> Result<T, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::UnknownRoute);
    }
    raw.parse::<i64>()
        .map(T::from)
        .map_err(|_| ApiError::UnknownRoute)
}
