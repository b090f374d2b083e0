//! JSON REST handlers for workout sessions.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use fitcenter_app::ports::{MemberRepository, WorkoutSessionRepository};
use fitcenter_domain::id::MemberId;
use fitcenter_domain::workout_session::{WorkoutSession, WorkoutSessionDraft};

use super::{WriteResponse, path_id};
use crate::error::ApiError;
use crate::state::AppState;

const CREATED: &str = "New workout session has successfully added";
const UPDATED: &str = "Workout session has been successfully updated.";

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<WorkoutSession>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /workoutsessions`
pub async fn list<MR, SR>(
    State(state): State<AppState<MR, SR>>,
) -> Result<ListResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let sessions = state.session_service.list_sessions().await?;
    Ok(ListResponse::Ok(Json(sessions)))
}

/// `POST /workoutsessions`
pub async fn create<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Json(payload) = body?;
    let draft = WorkoutSessionDraft::from_json(&payload)?;
    state.session_service.schedule_session(draft).await?;
    Ok(WriteResponse::Created(CREATED))
}

/// `PUT /workoutsessions/{member_id}`
///
/// The body goes through the full session schema, `member_id` included,
/// but the member is taken from the path.
pub async fn update_for_member<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Path(raw) = path?;
    let member_id: MemberId = path_id(&raw)?;
    let Json(payload) = body?;
    let draft = WorkoutSessionDraft::from_json(&payload)?;
    state
        .session_service
        .reschedule_member_sessions(member_id, draft)
        .await?;
    Ok(WriteResponse::Created(UPDATED))
}

/// `GET /workoutsessions/{member_id}`
pub async fn list_for_member<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<ListResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Path(raw) = path?;
    let member_id: MemberId = path_id(&raw)?;
    let sessions = state.session_service.member_sessions(member_id).await?;
    Ok(ListResponse::Ok(Json(sessions)))
}
