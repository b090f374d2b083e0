//! `SQLite` implementation of [`MemberRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fitcenter_app::ports::MemberRepository;
use fitcenter_domain::error::{FitCenterError, NotFoundError};
use fitcenter_domain::id::MemberId;
use fitcenter_domain::member::{Member, MemberDraft};

use crate::error::StorageError;
use crate::pool::acquire;

/// Wrapper for converting database rows into domain [`Member`].
struct Wrapper(Member);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: i64 = row.try_get("age")?;

        Ok(Self(Member {
            id: MemberId::from(id),
            name,
            age,
        }))
    }
}

const SELECT_ALL: &str = "SELECT * FROM members";
const SELECT_BY_ID: &str = "SELECT * FROM members WHERE id = ?";
const INSERT: &str = "INSERT INTO members (name, age) VALUES (?, ?)";
const UPDATE: &str = "UPDATE members SET name = ?, age = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM members WHERE id = ?";

/// `SQLite`-backed member repository.
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MemberRepository for SqliteMemberRepository {
    fn list(&self) -> impl Future<Output = Result<Vec<Member>, FitCenterError>> + Send {
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
        draft: MemberDraft,
    ) -> impl Future<Output = Result<MemberId, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .bind(draft.age)
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(MemberId::from(result.last_insert_rowid()))
        }
    }

    fn update(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> impl Future<Output = Result<u64, FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let result = sqlx::query(UPDATE)
                .bind(&draft.name)
                .bind(draft.age)
                .bind(id.get())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: MemberId) -> impl Future<Output = Result<(), FitCenterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = acquire(&pool).await?;
            let existing: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            if existing.is_none() {
                return Err(NotFoundError::Member(id).into());
            }

            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteMemberRepository {
        let db = Config::new("sqlite::memory:").build().unwrap();
        db.ensure_schema().await.unwrap();
        SqliteMemberRepository::new(db.pool().clone())
    }

    fn ana() -> MemberDraft {
        MemberDraft {
            name: "Ana".to_string(),
            age: 29,
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let repo = setup().await;
        let first = repo.create(ana()).await.unwrap();
        let second = repo
            .create(MemberDraft {
                name: "Bo".to_string(),
                age: 41,
            })
            .await
            .unwrap();

        assert_eq!(first, MemberId::from(1));
        assert_eq!(second, MemberId::from(2));
    }

    #[tokio::test]
    async fn should_list_created_members() {
        let repo = setup().await;
        let id = repo.create(ana()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![ana().into_member(id)]);
    }

    #[tokio::test]
    async fn should_update_member_when_exists() {
        let repo = setup().await;
        let id = repo.create(ana()).await.unwrap();

        let affected = repo
            .update(
                id,
                MemberDraft {
                    name: "Ana Maria".to_string(),
                    age: 30,
                },
            )
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let all = repo.list().await.unwrap();
        assert_eq!(all[0].name, "Ana Maria");
        assert_eq!(all[0].age, 30);
    }

    #[tokio::test]
    async fn should_affect_no_rows_when_updating_missing_member() {
        let repo = setup().await;
        let affected = repo.update(MemberId::from(99), ana()).await.unwrap();
        assert_eq!(affected, 0);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_member_when_exists() {
        let repo = setup().await;
        let id = repo.create(ana()).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_member() {
        let repo = setup().await;
        let result = repo.delete(MemberId::from(12)).await;
        assert!(matches!(
            result,
            Err(FitCenterError::NotFound(NotFoundError::Member(_)))
        ));
    }

    #[tokio::test]
    async fn should_release_connection_when_delete_fails_with_not_found() {
        let mut config = Config::new("sqlite::memory:");
        config.max_connections = 1;
        config.acquire_timeout = std::time::Duration::from_millis(300);
        let db = config.build().unwrap();
        db.ensure_schema().await.unwrap();
        let repo = SqliteMemberRepository::new(db.pool().clone());

        for id in 1..=5 {
            let result = repo.delete(MemberId::from(id)).await;
            assert!(matches!(result, Err(FitCenterError::NotFound(_))));
        }

        assert_eq!(repo.list().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn should_return_connection_error_when_database_unreachable() {
        let mut config = Config::new("sqlite:/nonexistent-fitcenter-dir/nested/fitness.db");
        config.acquire_timeout = std::time::Duration::from_secs(1);
        let repo = SqliteMemberRepository::new(config.build().unwrap().pool().clone());

        let result = repo.list().await;
        assert!(matches!(result, Err(FitCenterError::Connection(_))));
    }

    #[tokio::test]
    async fn should_return_query_error_when_table_missing() {
        let db = Config::new("sqlite::memory:").build().unwrap();
        let repo = SqliteMemberRepository::new(db.pool().clone());

        let result = repo.list().await;
        assert!(matches!(result, Err(FitCenterError::Query(_))));
    }
}
