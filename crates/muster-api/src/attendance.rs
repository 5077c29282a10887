//! Handlers for `/attendance` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/attendance` | Optional `?member_id=<uuid>` |
//! | `PUT`  | `/attendance` | Body: `{member_id, meeting_id, status}` |
//! | `GET`  | `/attendance/status` | `?member_id=..&meeting_id=..` |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
};
use muster_core::{
  attendance::{Attendance, PresenceStatus},
  store::{AttendanceStore, MeetingStore},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub member_id: Option<Uuid>,
}

/// `GET /attendance[?member_id=<uuid>]`
pub async fn list<M, A>(
  State(state): State<ApiState<M, A>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Attendance>>, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let records = match params.member_id {
    Some(member_id) => state.attendance.list_for_member(member_id).await,
    None => state.attendance.list_all().await,
  }
  .map_err(ApiError::from_store)?;
  Ok(Json(records))
}

// ─── Set status ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetStatusBody {
  pub member_id:  Uuid,
  pub meeting_id: Uuid,
  pub status:     PresenceStatus,
}

/// `PUT /attendance` — write a status for a `(member, meeting)` pair. The
/// confirmation timestamp is stamped by the store.
pub async fn set_status<M, A>(
  State(state): State<ApiState<M, A>>,
  Json(body): Json<SetStatusBody>,
) -> Result<StatusCode, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  state
    .attendance
    .set_status(body.member_id, body.meeting_id, body.status)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Read status ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusParams {
  pub member_id:  Uuid,
  pub meeting_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
  pub status: PresenceStatus,
}

/// `GET /attendance/status?member_id=..&meeting_id=..` — always answers; an
/// unrecorded pair reports `unconfirmed`.
pub async fn status<M, A>(
  State(state): State<ApiState<M, A>>,
  Query(params): Query<StatusParams>,
) -> Json<StatusBody>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let status = state.attendance.status(params.member_id, params.meeting_id);
  Json(StatusBody { status })
}
