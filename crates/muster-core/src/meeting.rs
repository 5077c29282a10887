//! Meeting — the scheduled gathering that attendance is recorded against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of meeting on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingCategory {
  Ordinary,
  Ceremony,
}

/// Whether the meeting is held at the organization's own venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
  Home,
  Away,
}

/// Lifecycle status of a meeting.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
  #[default]
  Scheduled,
  Completed,
  Cancelled,
}

/// A scheduled organizational gathering.
///
/// `date` is the sole ordering key. Identity is `id` alone — two meetings
/// with identical content are still distinct records. Stores mutate a
/// meeting only by full-record replace, never by partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
  pub id:        Uuid,
  pub title:     String,
  pub date:      DateTime<Utc>,
  pub category:  MeetingCategory,
  pub venue:     Venue,
  /// Name of the member presenting; may be empty.
  pub presenter: String,
  pub has_meal:  bool,
  pub notes:     Option<String>,
  pub status:    MeetingStatus,
}
