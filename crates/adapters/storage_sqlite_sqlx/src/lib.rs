//! # fitcenter-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `fitcenter-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Create the `members` and `workoutsessions` tables when they are missing
//! - Map between domain types and database rows
//!
//! Every repository call checks out exactly one connection from the pool and
//! gives it back when the call returns. Failing to check one out is reported
//! as [`FitCenterError::Connection`](fitcenter_domain::error::FitCenterError::Connection),
//! any later failure as
//! [`FitCenterError::Query`](fitcenter_domain::error::FitCenterError::Query).
//!
//! ## Dependency rule
//! Depends on `fitcenter-app` (for port traits) and `fitcenter-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod member_repo;
pub mod pool;
pub mod workout_session_repo;

pub use member_repo::SqliteMemberRepository;
pub use pool::{Config, Database};
pub use workout_session_repo::SqliteWorkoutSessionRepository;
