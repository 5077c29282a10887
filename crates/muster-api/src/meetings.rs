//! Handlers for `/meetings` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/meetings` | Full list |
//! | `POST`   | `/meetings` | Body: meeting fields, id assigned by server |
//! | `GET`    | `/meetings/{id}` | 404 if not found |
//! | `PUT`    | `/meetings/{id}` | Full-record replace; missing id is a no-op |
//! | `DELETE` | `/meetings/{id}` | Idempotent, 204 even when already absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use muster_core::{
  meeting::{Meeting, MeetingCategory, MeetingStatus, Venue},
  store::{AttendanceStore, MeetingStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

/// Body for `POST /meetings` and `PUT /meetings/{id}`. The identifier comes
/// from the URL (PUT) or is assigned by the server (POST), never from the
/// body.
#[derive(Debug, Deserialize)]
pub struct MeetingBody {
  pub title:     String,
  pub date:      DateTime<Utc>,
  pub category:  MeetingCategory,
  pub venue:     Venue,
  #[serde(default)]
  pub presenter: String,
  #[serde(default)]
  pub has_meal:  bool,
  #[serde(default)]
  pub notes:     Option<String>,
  #[serde(default)]
  pub status:    MeetingStatus,
}

impl MeetingBody {
  fn into_meeting(self, id: Uuid) -> Meeting {
    Meeting {
      id,
      title: self.title,
      date: self.date,
      category: self.category,
      venue: self.venue,
      presenter: self.presenter,
      has_meal: self.has_meal,
      notes: self.notes,
      status: self.status,
    }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /meetings`
pub async fn list<M, A>(
  State(state): State<ApiState<M, A>>,
) -> Result<Json<Vec<Meeting>>, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let meetings =
    state.meetings.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(meetings))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /meetings`
pub async fn create<M, A>(
  State(state): State<ApiState<M, A>>,
  Json(body): Json<MeetingBody>,
) -> Result<impl IntoResponse, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let meeting = body.into_meeting(Uuid::new_v4());
  state
    .meetings
    .create(meeting.clone())
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(meeting)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /meetings/{id}`
pub async fn get_one<M, A>(
  State(state): State<ApiState<M, A>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Meeting>, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let meeting = state
    .meetings
    .get_by_id(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("meeting {id} not found")))?;
  Ok(Json(meeting))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /meetings/{id}` — full-record replace.
pub async fn replace_one<M, A>(
  State(state): State<ApiState<M, A>>,
  Path(id): Path<Uuid>,
  Json(body): Json<MeetingBody>,
) -> Result<StatusCode, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  state
    .meetings
    .replace(body.into_meeting(id))
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /meetings/{id}` — idempotent; a missing id still answers 204.
pub async fn delete_one<M, A>(
  State(state): State<ApiState<M, A>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  state.meetings.delete(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}
