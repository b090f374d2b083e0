//! Storage port — repository traits for persistence.
//!
//! Every method is one unit of work against the database: implementations
//! acquire a connection, run at most two statements on it and release it
//! before the future resolves, whatever the outcome.

use std::future::Future;

use fitcenter_domain::error::FitCenterError;
use fitcenter_domain::id::{MemberId, SessionId};
use fitcenter_domain::member::{Member, MemberDraft};
use fitcenter_domain::workout_session::{WorkoutSession, WorkoutSessionDraft};

/// Repository for persisting and querying [`Member`]s.
pub trait MemberRepository {
    /// Get all members.
    fn list(&self) -> impl Future<Output = Result<Vec<Member>, FitCenterError>> + Send;

    /// Insert a new member and return its assigned id.
    fn create(
        &self,
        draft: MemberDraft,
    ) -> impl Future<Output = Result<MemberId, FitCenterError>> + Send;

    /// Overwrite name and age of the member with `id`.
    ///
    /// Returns the number of affected rows; zero is not an error.
    fn update(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> impl Future<Output = Result<u64, FitCenterError>> + Send;

    /// Delete the member with `id`.
    ///
    /// Fails with [`NotFoundError::Member`](fitcenter_domain::error::NotFoundError::Member)
    /// when no such member exists. Sessions are left untouched.
    fn delete(&self, id: MemberId) -> impl Future<Output = Result<(), FitCenterError>> + Send;
}

/// Repository for persisting and querying [`WorkoutSession`]s.
pub trait WorkoutSessionRepository {
    /// Get all sessions.
    fn list(&self) -> impl Future<Output = Result<Vec<WorkoutSession>, FitCenterError>> + Send;

    /// Insert a new session and return its assigned id.
    ///
    /// The referenced member is not checked.
    fn create(
        &self,
        draft: WorkoutSessionDraft,
    ) -> impl Future<Output = Result<SessionId, FitCenterError>> + Send;

    /// Overwrite date, time and activity of **every** session of `member_id`.
    ///
    /// `draft.member_id` is ignored. Returns the number of affected rows.
    fn update_for_member(
        &self,
        member_id: MemberId,
        draft: WorkoutSessionDraft,
    ) -> impl Future<Output = Result<u64, FitCenterError>> + Send;

    /// Get the sessions of `member_id`.
    ///
    /// Fails with
    /// [`NotFoundError::SessionOwner`](fitcenter_domain::error::NotFoundError::SessionOwner)
    /// when the member does not exist; an existing member without sessions
    /// yields an empty list.
    fn list_for_member(
        &self,
        member_id: MemberId,
    ) -> impl Future<Output = Result<Vec<WorkoutSession>, FitCenterError>> + Send;
}
