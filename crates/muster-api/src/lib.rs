//! JSON REST API for Muster.
//!
//! Exposes an axum [`Router`] backed by any pair of
//! [`MeetingStore`](muster_core::store::MeetingStore) and
//! [`AttendanceStore`](muster_core::store::AttendanceStore)
//! implementations. Auth, TLS, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", muster_api::api_router(state))
//! ```

pub mod attendance;
pub mod error;
pub mod meetings;
pub mod stats;

use std::sync::Arc;

use axum::{Router, routing::get};
use muster_core::store::{AttendanceStore, MeetingStore};

pub use error::ApiError;

/// Shared state threaded through all API handlers.
pub struct ApiState<M, A> {
  pub meetings:   Arc<M>,
  pub attendance: Arc<A>,
}

impl<M, A> ApiState<M, A> {
  pub fn new(meetings: Arc<M>, attendance: Arc<A>) -> Self {
    Self { meetings, attendance }
  }
}

// Manual impl: `#[derive(Clone)]` would demand `M: Clone` and `A: Clone`,
// but only the Arcs are cloned.
impl<M, A> Clone for ApiState<M, A> {
  fn clone(&self) -> Self {
    Self {
      meetings:   self.meetings.clone(),
      attendance: self.attendance.clone(),
    }
  }
}

/// Build a fully-materialised API router for the given store pair.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<M, A>(state: ApiState<M, A>) -> Router<()>
where
  M: MeetingStore + 'static,
  A: AttendanceStore + 'static,
{
  Router::new()
    // Meetings
    .route(
      "/meetings",
      get(meetings::list::<M, A>).post(meetings::create::<M, A>),
    )
    .route(
      "/meetings/{id}",
      get(meetings::get_one::<M, A>)
        .put(meetings::replace_one::<M, A>)
        .delete(meetings::delete_one::<M, A>),
    )
    // Attendance
    .route(
      "/attendance",
      get(attendance::list::<M, A>).put(attendance::set_status::<M, A>),
    )
    .route("/attendance/status", get(attendance::status::<M, A>))
    // Statistics
    .route("/stats/years", get(stats::years::<M, A>))
    .route("/stats/{member_id}", get(stats::member::<M, A>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
