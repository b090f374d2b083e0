//! JSON REST handlers for members.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use fitcenter_app::ports::{MemberRepository, WorkoutSessionRepository};
use fitcenter_domain::id::MemberId;
use fitcenter_domain::member::{Member, MemberDraft};

use super::{WriteResponse, path_id};
use crate::error::ApiError;
use crate::state::AppState;

const CREATED: &str = "New member successfully added";
const UPDATED: &str = "Member details were successfully updated.";
const DELETED: &str = "Member has been removed from the database";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Member>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /members`
pub async fn list<MR, SR>(
    State(state): State<AppState<MR, SR>>,
) -> Result<ListResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let members = state.member_service.list_members().await?;
    Ok(ListResponse::Ok(Json(members)))
}

/// `POST /members`
pub async fn create<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Json(payload) = body?;
    let draft = MemberDraft::from_json(&payload)?;
    state.member_service.add_member(draft).await?;
    Ok(WriteResponse::Created(CREATED))
}

/// `PUT /members/{id}`
pub async fn update<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Path(raw) = path?;
    let id: MemberId = path_id(&raw)?;
    let Json(payload) = body?;
    let draft = MemberDraft::from_json(&payload)?;
    state.member_service.update_member(id, draft).await?;
    Ok(WriteResponse::Created(UPDATED))
}

/// `DELETE /members/{id}`
pub async fn delete<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    let Path(raw) = path?;
    let id: MemberId = path_id(&raw)?;
    state.member_service.remove_member(id).await?;
    Ok(WriteResponse::Created(DELETED))
}
