//! Integration tests for the in-memory stores, run with zero latency.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use muster_core::{
  attendance::PresenceStatus,
  meeting::{Meeting, MeetingCategory, MeetingStatus, Venue},
  store::{AttendanceStore, MeetingStore},
};
use uuid::Uuid;

use crate::{MemoryAttendanceStore, MemoryMeetingStore};

fn meetings() -> MemoryMeetingStore {
  MemoryMeetingStore::with_latency(Duration::ZERO, Duration::ZERO)
}

fn attendance() -> MemoryAttendanceStore {
  MemoryAttendanceStore::with_latency(Duration::ZERO, Duration::ZERO)
}

fn sample_meeting(year: i32, month: u32, day: u32) -> Meeting {
  Meeting {
    id:        Uuid::new_v4(),
    title:     "Committee evening".into(),
    date:      Utc.with_ymd_and_hms(year, month, day, 20, 0, 0).unwrap(),
    category:  MeetingCategory::Ordinary,
    venue:     Venue::Away,
    presenter: "J. Barrow".into(),
    has_meal:  false,
    notes:     Some("Bring the quarterly report.".into()),
    status:    MeetingStatus::Scheduled,
  }
}

// ─── Meetings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_data_is_present_at_construction() {
  let store = meetings();
  let all = store.list_all().await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn create_then_get_round_trips_all_fields() {
  let store = meetings();
  let meeting = sample_meeting(2026, 1, 10);

  store.create(meeting.clone()).await.unwrap();
  let fetched = store.get_by_id(meeting.id).await.unwrap();
  assert_eq!(fetched, Some(meeting));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let store = meetings();
  assert_eq!(store.get_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn create_resorts_most_recent_first() {
  let store = meetings();
  let oldest = sample_meeting(2020, 1, 1);
  let newest = sample_meeting(2030, 1, 1);

  store.create(oldest.clone()).await.unwrap();
  store.create(newest.clone()).await.unwrap();

  let all = store.list_all().await.unwrap();
  assert_eq!(all.first().map(|m| m.id), Some(newest.id));
  assert_eq!(all.last().map(|m| m.id), Some(oldest.id));
  assert!(all.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn replace_updates_matching_id_in_place() {
  let store = meetings();
  let mut meeting = sample_meeting(2026, 2, 3);
  store.create(meeting.clone()).await.unwrap();

  meeting.title = "Rescheduled committee evening".into();
  meeting.status = MeetingStatus::Cancelled;
  store.replace(meeting.clone()).await.unwrap();

  let fetched = store.get_by_id(meeting.id).await.unwrap().unwrap();
  assert_eq!(fetched.title, "Rescheduled committee evening");
  assert_eq!(fetched.status, MeetingStatus::Cancelled);
  assert_eq!(store.list_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn replace_missing_id_is_a_silent_noop() {
  let store = meetings();
  let before = store.list_all().await.unwrap();
  store.replace(sample_meeting(2026, 3, 1)).await.unwrap();
  assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn delete_is_idempotent() {
  let store = meetings();
  let meeting = sample_meeting(2026, 4, 1);
  store.create(meeting.clone()).await.unwrap();

  store.delete(meeting.id).await.unwrap();
  assert_eq!(store.get_by_id(meeting.id).await.unwrap(), None);

  // Second delete of the same id: still success, same observable state.
  store.delete(meeting.id).await.unwrap();
  assert_eq!(store.get_by_id(meeting.id).await.unwrap(), None);
  assert_eq!(store.list_all().await.unwrap().len(), 3);
}

// ─── Attendance ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn attendance_starts_empty() {
  let store = attendance();
  assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn write_then_read_returns_written_status() {
  let store = attendance();
  let member = Uuid::new_v4();
  let meeting = Uuid::new_v4();

  store
    .set_status(member, meeting, PresenceStatus::Present)
    .await
    .unwrap();
  assert_eq!(store.status(member, meeting), PresenceStatus::Present);
}

#[tokio::test]
async fn unrecorded_pair_reads_unconfirmed_without_persisting() {
  let store = attendance();
  let member = Uuid::new_v4();
  let meeting = Uuid::new_v4();

  assert_eq!(store.status(member, meeting), PresenceStatus::Unconfirmed);
  // The query must not have created a record.
  assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn rewriting_a_pair_replaces_in_place() {
  let store = attendance();
  let member = Uuid::new_v4();
  let meeting = Uuid::new_v4();

  store
    .set_status(member, meeting, PresenceStatus::Present)
    .await
    .unwrap();
  store
    .set_status(member, meeting, PresenceStatus::Absent)
    .await
    .unwrap();

  assert_eq!(store.status(member, meeting), PresenceStatus::Absent);
  assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn confirmed_at_is_stamped_by_the_store() {
  let store = attendance();
  let member = Uuid::new_v4();
  let meeting = Uuid::new_v4();

  let before = Utc::now();
  store
    .set_status(member, meeting, PresenceStatus::Present)
    .await
    .unwrap();
  let after = Utc::now();

  let records = store.list_all().await.unwrap();
  assert_eq!(records.len(), 1);
  assert!(records[0].confirmed_at >= before);
  assert!(records[0].confirmed_at <= after);
}

#[tokio::test]
async fn list_for_member_filters_other_members_out() {
  let store = attendance();
  let alice = Uuid::new_v4();
  let bob = Uuid::new_v4();
  let meeting = Uuid::new_v4();

  store
    .set_status(alice, meeting, PresenceStatus::Present)
    .await
    .unwrap();
  store
    .set_status(bob, meeting, PresenceStatus::Absent)
    .await
    .unwrap();

  let records = store.list_for_member(alice).await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].member_id, alice);
}

#[tokio::test]
async fn concurrent_writers_serialize_on_the_lock() {
  let store = std::sync::Arc::new(attendance());
  let meeting = Uuid::new_v4();

  let mut handles = Vec::new();
  for _ in 0..8 {
    let store = store.clone();
    handles.push(tokio::spawn(async move {
      let member = Uuid::new_v4();
      store
        .set_status(member, meeting, PresenceStatus::Present)
        .await
        .unwrap();
    }));
  }
  for handle in handles {
    handle.await.unwrap();
  }

  assert_eq!(store.list_all().await.unwrap().len(), 8);
}
