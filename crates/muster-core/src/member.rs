//! Member — the person whose attendance is tracked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the organization.
///
/// The member directory itself is managed elsewhere; this type carries only
/// what the statistics engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
  pub id:        Uuid,
  pub name:      String,
  /// Meetings dated before this do not count toward the member's
  /// statistics. `None` means eligible for all meetings.
  pub joined_on: Option<DateTime<Utc>>,
}
