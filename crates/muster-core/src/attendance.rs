//! Attendance — one member's presence record for one meeting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member's presence status for a meeting.
///
/// `Unconfirmed` is the implicit state of any `(member, meeting)` pair with
/// no stored record; querying such a pair never creates one.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
  Present,
  Absent,
  #[default]
  Unconfirmed,
}

impl PresenceStatus {
  pub fn is_present(&self) -> bool { matches!(self, Self::Present) }
}

/// A presence record, identified by its `(member_id, meeting_id)` pair.
///
/// At most one record exists per pair; writing a status for an existing
/// pair replaces it in place rather than appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
  pub member_id:    Uuid,
  pub meeting_id:   Uuid,
  pub status:       PresenceStatus,
  /// Stamped by the store on every status write; never caller-supplied.
  pub confirmed_at: DateTime<Utc>,
}
