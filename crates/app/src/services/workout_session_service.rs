//! Workout session service — use-cases for scheduling sessions.

use fitcenter_domain::error::FitCenterError;
use fitcenter_domain::id::{MemberId, SessionId};
use fitcenter_domain::workout_session::{WorkoutSession, WorkoutSessionDraft};

use crate::ports::WorkoutSessionRepository;

/// Application service for workout session operations.
pub struct WorkoutSessionService<R> {
    repo: R,
}

impl<R: WorkoutSessionRepository> WorkoutSessionService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every session of every member.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_sessions(&self) -> Result<Vec<WorkoutSession>, FitCenterError> {
        self.repo.list().await
    }

    /// Schedule a new session. The member is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(member_id = %draft.member_id))]
    pub async fn schedule_session(
        &self,
        draft: WorkoutSessionDraft,
    ) -> Result<SessionId, FitCenterError> {
        let id = self.repo.create(draft).await?;
        tracing::debug!(session_id = %id, "session scheduled");
        Ok(id)
    }

    /// Reschedule all sessions of `member_id` with the same date, time and
    /// activity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn reschedule_member_sessions(
        &self,
        member_id: MemberId,
        draft: WorkoutSessionDraft,
    ) -> Result<(), FitCenterError> {
        let affected = self.repo.update_for_member(member_id, draft).await?;
        tracing::debug!(affected, "sessions rescheduled");
        Ok(())
    }

    /// List the sessions of one member.
    ///
    /// # Errors
    ///
    /// Returns [`FitCenterError::NotFound`] when the member does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn member_sessions(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<WorkoutSession>, FitCenterError> {
        self.repo.list_for_member(member_id).await
    }
}
