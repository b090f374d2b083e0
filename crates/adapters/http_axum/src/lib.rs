//! # fitcenter-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API over members (`/members`) and workout sessions
//!   (`/workoutsessions`), plus a plain-text welcome page at `/`
//! - Validate write payloads before any database access
//! - Map application results into HTTP responses, and every
//!   [`FitCenterError`](fitcenter_domain::error::FitCenterError) kind onto a
//!   status code and a JSON error body
//!
//! Successful writes (including updates and deletes) answer `201 Created`
//! with a `{"Message": ...}` body, which existing clients depend on.
//!
//! ## Dependency rule
//! Depends on `fitcenter-app` (for port traits and services) and `fitcenter-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
