//! # fitcenter-domain
//!
//! Pure domain model for the fitness center API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error kinds
//! - Define **Members** (gym customers with a name and an age)
//! - Define **Workout sessions** (scheduled activities tied to a member)
//! - Validate untyped JSON write payloads into typed drafts
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod validation;

pub mod member;
pub mod workout_session;
