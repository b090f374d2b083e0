//! `SQLite` implementation of [`WorkoutSessionRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fitcenter_app::ports::WorkoutSessionRepository;
use fitcenter_domain::error::{FitCenterError, NotFoundError};
use fitcenter_domain::id::{MemberId, SessionId};
use fitcenter_domain::workout_session::{WorkoutSession, WorkoutSessionDraft};

use crate::error::StorageError;
use crate::pool::acquire;

/// Wrapper for converting database rows into domain [`WorkoutSession`].
struct Wrapper(WorkoutSession);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let session_id: i64 = row.try_get("session_id")?;
        let member_id: i64 = row.try_get("member_id")?;

        Ok(Self(WorkoutSession {
            session_id: SessionId::from(session_id),
            member_id: MemberId::from(member_id),
            session_date: row.try_get("session_date")?,
            session_time: row.try_get("session_time")?,
            activity: row.try_get("activity")?,
        }))
    }
}

const SELECT_ALL: &str = "SELECT * FROM workoutsessions";
const SELECT_BY_MEMBER: &str = "SELECT * FROM workoutsessions WHERE member_id = ?";
const SELECT_MEMBER: &str = "SELECT * FROM members WHERE id = ?";
const INSERT: &str = "INSERT INTO workoutsessions (member_id, session_date, session_time, activity) VALUES (?, ?, ?, ?)";
const UPDATE_BY_MEMBER: &str = "UPDATE workoutsessions SET session_date = ?, session_time = ?, activity = ? WHERE member_id = ?";

/// `SQLite`-backed workout session repository.
pub struct SqliteWorkoutSessionRepository {
    pool: SqlitePool,
}

impl SqliteWorkoutSessionRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl WorkoutSessionRepository for SqliteWorkoutSessionRepository {
    fn list(&self) -> impl Future<Output = Result<Vec<WorkoutSession>, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create(
        &self,
        draft: WorkoutSessionDraft,
    ) -> impl Future<Output = Result<SessionId, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let result = sqlx::query(INSERT)
                .bind(draft.member_id.get())
                .bind(&draft.session_date)
                .bind(&draft.session_time)
                .bind(&draft.activity)
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(SessionId::from(result.last_insert_rowid()))
        }
    }

    fn update_for_member(
        &self,
        member_id: MemberId,
        draft: WorkoutSessionDraft,
    ) -> impl Future<Output = Result<u64, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let result = sqlx::query(UPDATE_BY_MEMBER)
                .bind(&draft.session_date)
                .bind(&draft.session_time)
                .bind(&draft.activity)
                .bind(member_id.get())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn list_for_member(
        &self,
        member_id: MemberId,
    ) -> impl Future<Output = Result<Vec<WorkoutSession>, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let member: Option<(i64,)> = sqlx::query_as(SELECT_MEMBER)
                .bind(member_id.get())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            if member.is_none() {
                return Err(NotFoundError::SessionOwner(member_id).into());
            }

            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_MEMBER)
                .bind(member_id.get())
                .fetch_all(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
