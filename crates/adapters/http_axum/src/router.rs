//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use fitcenter_app::ports::{MemberRepository, WorkoutSessionRepository};

use crate::error::ApiError;
use crate::state::AppState;

const WELCOME: &str = "Welcome to the Fitness Center Database!";

/// Build the top-level axum [`Router`].
///
/// Serves the welcome page at `/` and merges the members and workout
/// sessions routes. Unmatched paths answer a JSON `404`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<MR, SR>(state: AppState<MR, SR>) -> Router
where
    MR: MemberRepository + Send + Sync + 'static,
    SR: WorkoutSessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .merge(crate::api::routes())
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    WELCOME
}

async fn unknown_route() -> ApiError {
    ApiError::UnknownRoute
}
