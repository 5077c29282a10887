//! The store port traits implemented by storage backends.
//!
//! The traits are implemented by backends (`muster-store-memory`,
//! `muster-store-remote`). Higher layers (`muster-api`, `muster-server`)
//! depend on these abstractions, not on any concrete backend.
//!
//! All async methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::{convert::Infallible, future::Future};

use uuid::Uuid;

use crate::{
  attendance::{Attendance, PresenceStatus},
  meeting::Meeting,
};

// ─── Error classification ────────────────────────────────────────────────────

/// Bound on backend error types, with enough classification for callers to
/// map failures without knowing the concrete backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// True when the failed operation is a permanent capability gap of the
  /// backend (HTTP 501 territory), as opposed to a transient transport or
  /// storage failure.
  fn is_not_implemented(&self) -> bool { false }
}

// Backends whose operations cannot fail use `Infallible` directly.
impl StoreError for Infallible {}

// ─── Meeting store ───────────────────────────────────────────────────────────

/// Abstraction over a meeting storage backend.
///
/// `replace` and `delete` are idempotent: a missing identifier is a silent
/// no-op, never an error. Callers must not use them as existence checks.
pub trait MeetingStore: Send + Sync {
  type Error: StoreError;

  /// All meetings, in no guaranteed order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Meeting>, Self::Error>> + Send + '_;

  /// Retrieve a meeting by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Meeting>, Self::Error>> + Send + '_;

  /// Persist a new meeting.
  fn create(
    &self,
    meeting: Meeting,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Replace an existing meeting wholesale, matched by id.
  fn replace(
    &self,
    meeting: Meeting,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete the meeting with `id`, if present.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

// ─── Attendance store ────────────────────────────────────────────────────────

/// Abstraction over an attendance storage backend.
pub trait AttendanceStore: Send + Sync {
  type Error: StoreError;

  /// All attendance records.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Attendance>, Self::Error>> + Send + '_;

  /// All records for one member.
  fn list_for_member(
    &self,
    member_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Attendance>, Self::Error>> + Send + '_;

  /// Write `status` for the pair, stamping `confirmed_at`. Creates the
  /// record on first write, replaces it in place afterwards.
  fn set_status(
    &self,
    member_id: Uuid,
    meeting_id: Uuid,
    status: PresenceStatus,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Current status for the pair. Synchronous and infallible: a pair with
  /// no record reports [`PresenceStatus::Unconfirmed`] without persisting
  /// anything.
  fn status(&self, member_id: Uuid, meeting_id: Uuid) -> PresenceStatus;
}
