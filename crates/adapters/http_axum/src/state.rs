//! Shared application state for axum handlers.

use std::sync::Arc;

use fitcenter_app::ports::{MemberRepository, WorkoutSessionRepository};
use fitcenter_app::services::member_service::MemberService;
use fitcenter_app::services::workout_session_service::WorkoutSessionService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<MR, SR> {
    /// Member CRUD service.
    pub member_service: Arc<MemberService<MR>>,
    /// Workout session service.
    pub session_service: Arc<WorkoutSessionService<SR>>,
}

impl<MR, SR> Clone for AppState<MR, SR> {
    fn clone(&self) -> Self {
        Self {
            member_service: Arc::clone(&self.member_service),
            session_service: Arc::clone(&self.session_service),
        }
    }
}

impl<MR, SR> AppState<MR, SR>
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        member_service: MemberService<MR>,
        session_service: WorkoutSessionService<SR>,
    ) -> Self {
        Self {
            member_service: Arc::new(member_service),
            session_service: Arc::new(session_service),
        }
    }
}
