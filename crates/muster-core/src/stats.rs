//! The statistics engine — pure functions over already-fetched collections.
//!
//! Nothing here performs I/O or suspends. Callers fetch meetings and
//! attendance through the store ports first, then derive statistics; the
//! engine is safe to call from any number of concurrent callers.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{attendance::Attendance, meeting::Meeting};

/// Year-filter token meaning "no filter".
pub const ALL_YEARS: &str = "all";

// ─── Derived summary ─────────────────────────────────────────────────────────

/// Per-member attendance summary. Never stored; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceStatistics {
  pub total_meetings:  usize,
  pub present:         usize,
  pub absent:          usize,
  pub current_streak:  usize,
  /// No historical maximum is tracked; this always equals `current_streak`.
  pub personal_record: usize,
  /// `present / total_meetings`, or 0.0 when there are no eligible
  /// meetings.
  pub attendance_rate: f64,
}

impl PresenceStatistics {
  /// Attendance percentage as a rounded integer in `0..=100`.
  pub fn percentage(&self) -> u32 {
    (self.attendance_rate * 100.0).round() as u32
  }

  /// Formatted percentage, e.g. `"90%"`.
  pub fn formatted_rate(&self) -> String { format!("{}%", self.percentage()) }
}

// ─── Eligibility ─────────────────────────────────────────────────────────────

/// Keep only the meetings that count toward a member's statistics: those
/// dated on or after `joined_on`. `None` keeps everything.
pub fn eligible_meetings(
  meetings:  &[Meeting],
  joined_on: Option<DateTime<Utc>>,
) -> Vec<Meeting> {
  match joined_on {
    None => meetings.to_vec(),
    Some(joined) => {
      meetings.iter().filter(|m| m.date >= joined).cloned().collect()
    }
  }
}

// ─── Streak ──────────────────────────────────────────────────────────────────

/// Count consecutive `Present` records scanning backward from the most
/// recent meeting.
///
/// A meeting with no record, or with a non-Present status, ends the streak
/// — missing records break the chain, they are not skipped. Returns 0 when
/// the most recent meeting is not a confirmed presence.
pub fn consecutive_streak(
  attendance: &[Attendance],
  meetings:   &[Meeting],
) -> usize {
  let by_meeting: HashMap<Uuid, &Attendance> =
    attendance.iter().map(|a| (a.meeting_id, a)).collect();

  let mut recent_first: Vec<&Meeting> = meetings.iter().collect();
  recent_first.sort_by(|a, b| b.date.cmp(&a.date));

  let mut streak = 0;
  for meeting in recent_first {
    match by_meeting.get(&meeting.id) {
      Some(record) if record.status.is_present() => streak += 1,
      _ => break,
    }
  }
  streak
}

// ─── Year filter ─────────────────────────────────────────────────────────────

/// Restrict both collections to the calendar year named by `token`.
///
/// [`ALL_YEARS`] — or any token that does not parse as a year — returns the
/// inputs unchanged (fail open, not an error). The returned pair is
/// mutually consistent: attendance is restricted to the ids of the
/// surviving meetings.
pub fn filter_by_year(
  attendance: &[Attendance],
  meetings:   &[Meeting],
  token:      &str,
) -> (Vec<Attendance>, Vec<Meeting>) {
  if token == ALL_YEARS {
    return (attendance.to_vec(), meetings.to_vec());
  }
  let Ok(year) = token.parse::<i32>() else {
    return (attendance.to_vec(), meetings.to_vec());
  };

  let kept: Vec<Meeting> = meetings
    .iter()
    .filter(|m| m.date.year() == year)
    .cloned()
    .collect();
  let kept_ids: HashSet<Uuid> = kept.iter().map(|m| m.id).collect();
  let kept_attendance = attendance
    .iter()
    .filter(|a| kept_ids.contains(&a.meeting_id))
    .cloned()
    .collect();

  (kept_attendance, kept)
}

/// Distinct calendar years across all meetings, most recent first, as
/// strings ready for a filter selector.
pub fn available_years(meetings: &[Meeting]) -> Vec<String> {
  let mut years: Vec<i32> = meetings.iter().map(|m| m.date.year()).collect();
  years.sort_unstable();
  years.dedup();
  years.reverse();
  years.into_iter().map(|y| y.to_string()).collect()
}

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// Compute the full per-member summary.
///
/// Both the total and the present count are restricted to the member's
/// eligible meetings, so `absent` cannot go negative. `attendance` is
/// expected to hold one member's records; the pair-uniqueness invariant
/// then guarantees `present <= total_meetings`.
pub fn statistics(
  attendance: &[Attendance],
  meetings:   &[Meeting],
  joined_on:  Option<DateTime<Utc>>,
) -> PresenceStatistics {
  let eligible = eligible_meetings(meetings, joined_on);
  let eligible_ids: HashSet<Uuid> = eligible.iter().map(|m| m.id).collect();

  let present = attendance
    .iter()
    .filter(|a| a.status.is_present() && eligible_ids.contains(&a.meeting_id))
    .count();

  let total  = eligible.len();
  let streak = consecutive_streak(attendance, &eligible);
  let rate   = if total > 0 { present as f64 / total as f64 } else { 0.0 };

  PresenceStatistics {
    total_meetings:  total,
    present,
    absent:          total.saturating_sub(present),
    current_streak:  streak,
    personal_record: streak,
    attendance_rate: rate,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use uuid::Uuid;

  use super::*;
  use crate::{
    attendance::PresenceStatus,
    meeting::{MeetingCategory, MeetingStatus, Venue},
  };

  fn on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 19, 30, 0).unwrap()
  }

  fn meeting(date: DateTime<Utc>) -> Meeting {
    Meeting {
      id: Uuid::new_v4(),
      title: "Ordinary meeting".into(),
      date,
      category: MeetingCategory::Ordinary,
      venue: Venue::Home,
      presenter: String::new(),
      has_meal: false,
      notes: None,
      status: MeetingStatus::Scheduled,
    }
  }

  fn record(
    member_id: Uuid,
    meeting: &Meeting,
    status: PresenceStatus,
  ) -> Attendance {
    Attendance {
      member_id,
      meeting_id: meeting.id,
      status,
      confirmed_at: Utc::now(),
    }
  }

  // ── Eligibility ─────────────────────────────────────────────────────────

  #[test]
  fn eligibility_without_join_date_keeps_everything() {
    let meetings = vec![meeting(on(2024, 3, 1)), meeting(on(2025, 3, 1))];
    assert_eq!(eligible_meetings(&meetings, None).len(), 2);
  }

  #[test]
  fn eligibility_is_inclusive_on_the_join_date() {
    let joined = on(2025, 1, 15);
    let before = meeting(on(2025, 1, 14));
    let exact  = meeting(on(2025, 1, 15));
    let after  = meeting(on(2025, 2, 1));

    let kept = eligible_meetings(
      &[before.clone(), exact.clone(), after.clone()],
      Some(joined),
    );
    let ids: Vec<Uuid> = kept.iter().map(|m| m.id).collect();
    assert!(!ids.contains(&before.id));
    assert!(ids.contains(&exact.id));
    assert!(ids.contains(&after.id));
  }

  // ── Streak ──────────────────────────────────────────────────────────────

  #[test]
  fn streak_stops_at_first_break_from_most_recent() {
    // Jan 1 P, Jan 8 P, Jan 15 A, Jan 22 P — only Jan 22 counts.
    let member = Uuid::new_v4();
    let m1 = meeting(on(2025, 1, 1));
    let m2 = meeting(on(2025, 1, 8));
    let m3 = meeting(on(2025, 1, 15));
    let m4 = meeting(on(2025, 1, 22));

    let attendance = vec![
      record(member, &m1, PresenceStatus::Present),
      record(member, &m2, PresenceStatus::Present),
      record(member, &m3, PresenceStatus::Absent),
      record(member, &m4, PresenceStatus::Present),
    ];
    let meetings = vec![m1, m2, m3, m4];

    assert_eq!(consecutive_streak(&attendance, &meetings), 1);
  }

  #[test]
  fn streak_is_zero_when_most_recent_is_absent() {
    let member = Uuid::new_v4();
    let m1 = meeting(on(2025, 1, 1));
    let m2 = meeting(on(2025, 1, 8));

    let attendance = vec![
      record(member, &m1, PresenceStatus::Present),
      record(member, &m2, PresenceStatus::Absent),
    ];
    assert_eq!(consecutive_streak(&attendance, &[m1, m2]), 0);
  }

  #[test]
  fn streak_is_zero_when_most_recent_has_no_record() {
    let member = Uuid::new_v4();
    let m1 = meeting(on(2025, 1, 1));
    let m2 = meeting(on(2025, 1, 8));

    // A record exists only for the older meeting; the missing one breaks
    // the chain rather than being skipped.
    let attendance = vec![record(member, &m1, PresenceStatus::Present)];
    assert_eq!(consecutive_streak(&attendance, &[m1, m2]), 0);
  }

  #[test]
  fn streak_counts_all_when_unbroken() {
    let member = Uuid::new_v4();
    let m1 = meeting(on(2025, 1, 1));
    let m2 = meeting(on(2025, 1, 8));
    let m3 = meeting(on(2025, 1, 15));

    let attendance = vec![
      record(member, &m1, PresenceStatus::Present),
      record(member, &m2, PresenceStatus::Present),
      record(member, &m3, PresenceStatus::Present),
    ];
    assert_eq!(consecutive_streak(&attendance, &[m1, m2, m3]), 3);
  }

  // ── Year filter ─────────────────────────────────────────────────────────

  #[test]
  fn year_filter_all_sentinel_is_identity() {
    let member = Uuid::new_v4();
    let m1 = meeting(on(2024, 6, 1));
    let m2 = meeting(on(2025, 6, 1));
    let attendance = vec![record(member, &m1, PresenceStatus::Present)];
    let meetings = vec![m1, m2];

    let (a, m) = filter_by_year(&attendance, &meetings, ALL_YEARS);
    assert_eq!(a, attendance);
    assert_eq!(m, meetings);
  }

  #[test]
  fn year_filter_garbage_token_fails_open() {
    let meetings = vec![meeting(on(2024, 6, 1)), meeting(on(2025, 6, 1))];
    let (_, m) = filter_by_year(&[], &meetings, "not-a-year");
    assert_eq!(m, meetings);
  }

  #[test]
  fn year_filter_keeps_pair_consistent() {
    let member = Uuid::new_v4();
    let m_old = meeting(on(2024, 6, 1));
    let m_new = meeting(on(2025, 6, 1));
    let attendance = vec![
      record(member, &m_old, PresenceStatus::Present),
      record(member, &m_new, PresenceStatus::Present),
    ];

    let (a, m) =
      filter_by_year(&attendance, &[m_old.clone(), m_new.clone()], "2025");
    assert_eq!(m.len(), 1);
    assert_eq!(m[0].id, m_new.id);
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].meeting_id, m_new.id);
  }

  #[test]
  fn filtered_year_reappears_in_available_years() {
    let meetings = vec![
      meeting(on(2023, 2, 1)),
      meeting(on(2024, 6, 1)),
      meeting(on(2024, 9, 1)),
      meeting(on(2025, 1, 1)),
    ];
    let (_, kept) = filter_by_year(&[], &meetings, "2024");
    assert!(available_years(&kept).contains(&"2024".to_string()));
  }

  #[test]
  fn available_years_are_distinct_and_descending() {
    let meetings = vec![
      meeting(on(2023, 2, 1)),
      meeting(on(2025, 1, 1)),
      meeting(on(2024, 6, 1)),
      meeting(on(2024, 9, 1)),
    ];
    assert_eq!(available_years(&meetings), vec!["2025", "2024", "2023"]);
  }

  #[test]
  fn available_years_empty_input() {
    assert!(available_years(&[]).is_empty());
  }

  // ── Aggregate ───────────────────────────────────────────────────────────

  #[test]
  fn statistics_with_no_meetings_is_all_zero() {
    let stats = statistics(&[], &[], None);
    assert_eq!(stats.total_meetings, 0);
    assert_eq!(stats.attendance_rate, 0.0);
    assert_eq!(stats.formatted_rate(), "0%");
  }

  #[test]
  fn statistics_eighteen_of_twenty_is_ninety_percent() {
    let member = Uuid::new_v4();
    let mut meetings = Vec::new();
    let mut attendance = Vec::new();
    for day in 1..=20 {
      let m = meeting(on(2025, 3, day));
      let status = if day <= 18 {
        PresenceStatus::Present
      } else {
        PresenceStatus::Absent
      };
      attendance.push(record(member, &m, status));
      meetings.push(m);
    }

    let stats = statistics(&attendance, &meetings, None);
    assert_eq!(stats.total_meetings, 20);
    assert_eq!(stats.present, 18);
    assert_eq!(stats.absent, 2);
    assert!((stats.attendance_rate - 0.90).abs() < f64::EPSILON);
    assert_eq!(stats.formatted_rate(), "90%");
  }

  #[test]
  fn statistics_present_count_is_eligibility_filtered() {
    // Presences before the join date must not count toward `present`,
    // otherwise `absent` would underflow the eligible total.
    let member = Uuid::new_v4();
    let joined = on(2025, 1, 1);
    let m_before = meeting(on(2024, 12, 1));
    let m_after  = meeting(on(2025, 2, 1));

    let attendance = vec![
      record(member, &m_before, PresenceStatus::Present),
      record(member, &m_after, PresenceStatus::Present),
    ];
    let stats =
      statistics(&attendance, &[m_before, m_after], Some(joined));
    assert_eq!(stats.total_meetings, 1);
    assert_eq!(stats.present, 1);
    assert_eq!(stats.absent, 0);
  }

  #[test]
  fn personal_record_equals_current_streak() {
    let member = Uuid::new_v4();
    let m1 = meeting(on(2025, 1, 1));
    let m2 = meeting(on(2025, 1, 8));
    let attendance = vec![
      record(member, &m1, PresenceStatus::Present),
      record(member, &m2, PresenceStatus::Present),
    ];
    let stats = statistics(&attendance, &[m1, m2], None);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.personal_record, stats.current_streak);
  }
}
