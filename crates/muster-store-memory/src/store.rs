//! Mutex-guarded in-memory implementations of the store ports.

use std::{
  convert::Infallible,
  sync::{Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use chrono::Utc;
use muster_core::{
  attendance::{Attendance, PresenceStatus},
  meeting::Meeting,
  store::{AttendanceStore, MeetingStore},
};
use uuid::Uuid;

use crate::seed;

/// Latency applied to read operations, emulating a network round-trip.
pub const DEFAULT_READ_LATENCY: Duration = Duration::from_millis(300);
/// Latency applied to write operations.
pub const DEFAULT_WRITE_LATENCY: Duration = Duration::from_millis(500);

/// A poisoned lock only means another caller panicked mid-operation; the
/// collection itself is still a usable snapshot for demo purposes.
fn lock<T>(table: &Mutex<T>) -> MutexGuard<'_, T> {
  table.lock().unwrap_or_else(PoisonError::into_inner)
}

// ─── Meetings ────────────────────────────────────────────────────────────────

/// In-memory [`MeetingStore`] seeded with a fixed set of sample meetings.
///
/// Every operation sleeps before touching state so callers exercise their
/// loading paths even against local data. The sleep happens before the
/// lock is taken, so simulated latency never extends lock hold time.
pub struct MemoryMeetingStore {
  meetings:      Mutex<Vec<Meeting>>,
  read_latency:  Duration,
  write_latency: Duration,
}

impl MemoryMeetingStore {
  /// A seeded store with the default simulated latency.
  pub fn new() -> Self {
    Self::with_latency(DEFAULT_READ_LATENCY, DEFAULT_WRITE_LATENCY)
  }

  /// A seeded store with caller-chosen latency. Tests pass
  /// `Duration::ZERO`.
  pub fn with_latency(read: Duration, write: Duration) -> Self {
    Self {
      meetings:      Mutex::new(seed::meetings()),
      read_latency:  read,
      write_latency: write,
    }
  }
}

impl Default for MemoryMeetingStore {
  fn default() -> Self { Self::new() }
}

impl MeetingStore for MemoryMeetingStore {
  type Error = Infallible;

  async fn list_all(&self) -> Result<Vec<Meeting>, Infallible> {
    tokio::time::sleep(self.read_latency).await;
    Ok(lock(&self.meetings).clone())
  }

  async fn get_by_id(&self, id: Uuid) -> Result<Option<Meeting>, Infallible> {
    tokio::time::sleep(self.read_latency).await;
    Ok(lock(&self.meetings).iter().find(|m| m.id == id).cloned())
  }

  async fn create(&self, meeting: Meeting) -> Result<(), Infallible> {
    tokio::time::sleep(self.write_latency).await;
    let mut meetings = lock(&self.meetings);
    meetings.push(meeting);
    // Most recent first; callers must not assume insertion order.
    meetings.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(())
  }

  async fn replace(&self, meeting: Meeting) -> Result<(), Infallible> {
    tokio::time::sleep(self.write_latency).await;
    let mut meetings = lock(&self.meetings);
    if let Some(slot) = meetings.iter_mut().find(|m| m.id == meeting.id) {
      *slot = meeting;
    }
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<(), Infallible> {
    tokio::time::sleep(self.write_latency).await;
    lock(&self.meetings).retain(|m| m.id != id);
    Ok(())
  }
}

// ─── Attendance ──────────────────────────────────────────────────────────────

/// In-memory [`AttendanceStore`]. Starts empty; records are created lazily
/// on the first status write for a pair.
pub struct MemoryAttendanceStore {
  records:       Mutex<Vec<Attendance>>,
  read_latency:  Duration,
  write_latency: Duration,
}

impl MemoryAttendanceStore {
  /// An empty store with the default simulated latency.
  pub fn new() -> Self {
    Self::with_latency(DEFAULT_READ_LATENCY, DEFAULT_WRITE_LATENCY)
  }

  /// An empty store with caller-chosen latency.
  pub fn with_latency(read: Duration, write: Duration) -> Self {
    Self {
      records:       Mutex::new(Vec::new()),
      read_latency:  read,
      write_latency: write,
    }
  }
}

impl Default for MemoryAttendanceStore {
  fn default() -> Self { Self::new() }
}

impl AttendanceStore for MemoryAttendanceStore {
  type Error = Infallible;

  async fn list_all(&self) -> Result<Vec<Attendance>, Infallible> {
    tokio::time::sleep(self.read_latency).await;
    Ok(lock(&self.records).clone())
  }

  async fn list_for_member(
    &self,
    member_id: Uuid,
  ) -> Result<Vec<Attendance>, Infallible> {
    tokio::time::sleep(self.read_latency).await;
    Ok(
      lock(&self.records)
        .iter()
        .filter(|a| a.member_id == member_id)
        .cloned()
        .collect(),
    )
  }

  async fn set_status(
    &self,
    member_id: Uuid,
    meeting_id: Uuid,
    status: PresenceStatus,
  ) -> Result<(), Infallible> {
    tokio::time::sleep(self.write_latency).await;
    let mut records = lock(&self.records);
    match records
      .iter_mut()
      .find(|a| a.member_id == member_id && a.meeting_id == meeting_id)
    {
      Some(record) => {
        record.status = status;
        record.confirmed_at = Utc::now();
      }
      None => records.push(Attendance {
        member_id,
        meeting_id,
        status,
        confirmed_at: Utc::now(),
      }),
    }
    Ok(())
  }

  fn status(&self, member_id: Uuid, meeting_id: Uuid) -> PresenceStatus {
    lock(&self.records)
      .iter()
      .find(|a| a.member_id == member_id && a.meeting_id == meeting_id)
      .map(|a| a.status)
      .unwrap_or_default()
  }
}
