//! # fitcenter-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `MemberRepository` — list, create, update and delete members
//!   - `WorkoutSessionRepository` — list, schedule and reschedule sessions,
//!     list the sessions of one member
//! - Define **driving/inbound ports** as use-case structs:
//!   - `MemberService`
//!   - `WorkoutSessionService`
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `fitcenter-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
