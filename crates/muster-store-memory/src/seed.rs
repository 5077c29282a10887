//! Fixed sample meetings loaded into every new
//! [`MemoryMeetingStore`](crate::MemoryMeetingStore).

use chrono::{TimeZone, Utc};
use muster_core::meeting::{Meeting, MeetingCategory, MeetingStatus, Venue};
use uuid::Uuid;

/// The seed set, most recent first. Attendance starts empty; records are
/// created lazily on the first status write.
pub fn meetings() -> Vec<Meeting> {
  vec![
    Meeting {
      id:        Uuid::new_v4(),
      title:     "Winter degree ceremony".into(),
      date:      Utc.with_ymd_and_hms(2025, 12, 22, 19, 30, 0).unwrap(),
      category:  MeetingCategory::Ceremony,
      venue:     Venue::Home,
      presenter: "The Chair".into(),
      has_meal:  true,
      notes:     None,
      status:    MeetingStatus::Scheduled,
    },
    Meeting {
      id:        Uuid::new_v4(),
      title:     "Open lecture night".into(),
      date:      Utc.with_ymd_and_hms(2025, 12, 10, 19, 30, 0).unwrap(),
      category:  MeetingCategory::Ordinary,
      venue:     Venue::Home,
      presenter: "R. Calloway".into(),
      has_meal:  false,
      notes:     None,
      status:    MeetingStatus::Scheduled,
    },
    Meeting {
      id:        Uuid::new_v4(),
      title:     "Autumn ordinary assembly".into(),
      date:      Utc.with_ymd_and_hms(2025, 11, 25, 19, 30, 0).unwrap(),
      category:  MeetingCategory::Ordinary,
      venue:     Venue::Home,
      presenter: "A. Whitfield".into(),
      has_meal:  true,
      notes:     Some("Guests from the visiting chapter expected.".into()),
      status:    MeetingStatus::Scheduled,
    },
  ]
}
