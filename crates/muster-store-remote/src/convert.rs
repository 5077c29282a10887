//! Wire-to-model conversion for remote meeting records.

use chrono::{DateTime, Utc};
use muster_core::meeting::{Meeting, MeetingCategory, MeetingStatus, Venue};
use uuid::Uuid;

use crate::client::MeetingDto;

/// Location substrings that classify a meeting as held at our own venue.
const HOME_VENUE_MARKERS: [&str; 2] = ["main hall", "clubhouse"];

/// Convert one wire record, or `None` when its date cannot be parsed.
///
/// A dropped record is logged and excluded from the fetch result; the rest
/// of the batch still converts.
pub(crate) fn meeting_from_dto(dto: &MeetingDto) -> Option<Meeting> {
  let date = match DateTime::parse_from_rfc3339(&dto.scheduled_at) {
    Ok(parsed) => parsed.with_timezone(&Utc),
    Err(error) => {
      tracing::warn!(
        id = dto.id,
        raw = %dto.scheduled_at,
        %error,
        "dropping meeting record with unparseable date"
      );
      return None;
    }
  };

  let category = match dto.category.to_ascii_lowercase().as_str() {
    "ceremony" => MeetingCategory::Ceremony,
    // Unrecognized categories fall back to ordinary.
    _ => MeetingCategory::Ordinary,
  };

  let location = dto.location.to_ascii_lowercase();
  let venue = if HOME_VENUE_MARKERS.iter().any(|m| location.contains(m)) {
    Venue::Home
  } else {
    Venue::Away
  };

  Some(Meeting {
    // Wire ids are small integers; embedding them keeps identities stable
    // across fetches, which client-side `get_by_id` relies on.
    id: Uuid::from_u128(dto.id as u64 as u128),
    title: dto.title.clone(),
    date,
    category,
    venue,
    presenter: dto.presenter.clone().unwrap_or_default(),
    has_meal: dto.has_meal == 1,
    notes: dto.notes.clone(),
    // The wire format carries no lifecycle status.
    status: MeetingStatus::Scheduled,
  })
}
