//! Handlers for `/stats` endpoints — thin wrappers over the pure engine in
//! [`muster_core::stats`].

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use muster_core::{
  stats::{self, PresenceStatistics},
  store::{AttendanceStore, MeetingStore},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── Member statistics ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatsParams {
  /// Calendar-year filter; `"all"` (the default) disables it, as does any
  /// token that does not parse as a year.
  pub year:      Option<String>,
  /// The member's joined-on date; meetings before it are ignored. The
  /// member directory lives outside this service, so the caller supplies
  /// the date.
  pub joined_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct StatsBody {
  #[serde(flatten)]
  pub stats:      PresenceStatistics,
  /// Formatted percentage, e.g. `"90%"`.
  pub percentage: String,
}

/// `GET /stats/{member_id}?year=..&joined_on=..`
pub async fn member<M, A>(
  State(state): State<ApiState<M, A>>,
  Path(member_id): Path<Uuid>,
  Query(params): Query<StatsParams>,
) -> Result<Json<StatsBody>, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let meetings =
    state.meetings.list_all().await.map_err(ApiError::from_store)?;
  let attendance = state
    .attendance
    .list_for_member(member_id)
    .await
    .map_err(ApiError::from_store)?;

  let token = params.year.as_deref().unwrap_or(stats::ALL_YEARS);
  let (attendance, meetings) =
    stats::filter_by_year(&attendance, &meetings, token);
  let summary = stats::statistics(&attendance, &meetings, params.joined_on);

  let percentage = summary.formatted_rate();
  Ok(Json(StatsBody { stats: summary, percentage }))
}

// ─── Available years ──────────────────────────────────────────────────────────

/// `GET /stats/years` — distinct meeting years, most recent first, for a
/// filter selector.
pub async fn years<M, A>(
  State(state): State<ApiState<M, A>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  M: MeetingStore,
  A: AttendanceStore,
{
  let meetings =
    state.meetings.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(stats::available_years(&meetings)))
}
