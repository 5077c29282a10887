//! Runtime switch between the seeded in-memory backend and the read-only
//! remote feed.
//!
//! The two backends have different error types, so the dispatch happens
//! through enums rather than trait objects; the store ports return
//! `impl Future` and are not dyn-compatible anyway.

use std::{
  convert::Infallible,
  sync::{Arc, RwLock},
};

use muster_core::{
  attendance::{Attendance, PresenceStatus},
  meeting::Meeting,
  store::{AttendanceStore, MeetingStore, StoreError},
};
use muster_store_memory::{MemoryAttendanceStore, MemoryMeetingStore};
use muster_store_remote::{ApiClient, RemoteMeetingStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ─── Mode ─────────────────────────────────────────────────────────────────────

/// Which backend family serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  /// Seeded in-memory stores with simulated latency.
  #[default]
  Mock,
  /// Meetings from the remote HTTP feed; attendance stays local.
  Live,
}

// ─── Error ────────────────────────────────────────────────────────────────────

/// Union of the backend error types, so the dispatch enums can present a
/// single `Error` associated type.
#[derive(Debug, Error)]
pub enum EnvError {
  #[error(transparent)]
  Remote(#[from] muster_store_remote::Error),
  #[error(transparent)]
  Memory(#[from] Infallible),
}

impl StoreError for EnvError {
  fn is_not_implemented(&self) -> bool {
    match self {
      EnvError::Remote(e) => e.is_not_implemented(),
      EnvError::Memory(never) => match *never {},
    }
  }
}

// ─── Dispatch enums ───────────────────────────────────────────────────────────

/// A [`MeetingStore`] that is either in-memory or remote.
pub enum AnyMeetingStore {
  Memory(MemoryMeetingStore),
  Remote(RemoteMeetingStore),
}

impl MeetingStore for AnyMeetingStore {
  type Error = EnvError;

  async fn list_all(&self) -> Result<Vec<Meeting>, EnvError> {
    match self {
      Self::Memory(s) => Ok(s.list_all().await?),
      Self::Remote(s) => Ok(s.list_all().await?),
    }
  }

  async fn get_by_id(&self, id: Uuid) -> Result<Option<Meeting>, EnvError> {
    match self {
      Self::Memory(s) => Ok(s.get_by_id(id).await?),
      Self::Remote(s) => Ok(s.get_by_id(id).await?),
    }
  }

  async fn create(&self, meeting: Meeting) -> Result<(), EnvError> {
    match self {
      Self::Memory(s) => Ok(s.create(meeting).await?),
      Self::Remote(s) => Ok(s.create(meeting).await?),
    }
  }

  async fn replace(&self, meeting: Meeting) -> Result<(), EnvError> {
    match self {
      Self::Memory(s) => Ok(s.replace(meeting).await?),
      Self::Remote(s) => Ok(s.replace(meeting).await?),
    }
  }

  async fn delete(&self, id: Uuid) -> Result<(), EnvError> {
    match self {
      Self::Memory(s) => Ok(s.delete(id).await?),
      Self::Remote(s) => Ok(s.delete(id).await?),
    }
  }
}

/// An [`AttendanceStore`] dispatch enum. Currently memory-only: the remote
/// feed has no attendance endpoints, so confirmations are kept locally in
/// both modes.
pub enum AnyAttendanceStore {
  Memory(MemoryAttendanceStore),
}

impl AttendanceStore for AnyAttendanceStore {
  type Error = EnvError;

  async fn list_all(&self) -> Result<Vec<Attendance>, EnvError> {
    match self {
      Self::Memory(s) => Ok(s.list_all().await?),
    }
  }

  async fn list_for_member(
    &self,
    member_id: Uuid,
  ) -> Result<Vec<Attendance>, EnvError> {
    match self {
      Self::Memory(s) => Ok(s.list_for_member(member_id).await?),
    }
  }

  async fn set_status(
    &self,
    member_id: Uuid,
    meeting_id: Uuid,
    status: PresenceStatus,
  ) -> Result<(), EnvError> {
    match self {
      Self::Memory(s) => Ok(s.set_status(member_id, meeting_id, status).await?),
    }
  }

  fn status(&self, member_id: Uuid, meeting_id: Uuid) -> PresenceStatus {
    match self {
      Self::Memory(s) => s.status(member_id, meeting_id),
    }
  }
}

// ─── Stores ───────────────────────────────────────────────────────────────────

/// One consistent pair of backends plus the mode that produced them.
pub struct Stores {
  pub mode:       Mode,
  pub meetings:   AnyMeetingStore,
  pub attendance: AnyAttendanceStore,
}

impl Stores {
  fn build(mode: Mode, api: &ApiClient) -> Self {
    let meetings = match mode {
      Mode::Mock => AnyMeetingStore::Memory(MemoryMeetingStore::new()),
      Mode::Live => {
        AnyMeetingStore::Remote(RemoteMeetingStore::new(api.clone()))
      }
    };
    Self {
      mode,
      meetings,
      attendance: AnyAttendanceStore::Memory(MemoryAttendanceStore::new()),
    }
  }
}

// ─── Application context ──────────────────────────────────────────────────────

/// The live environment: the current [`Stores`] pair behind a swap lock.
///
/// Handlers see the context itself as their store; each call snapshots the
/// current pair, so a concurrent mode switch never mixes backends within a
/// single request.
pub struct AppContext {
  api:     ApiClient,
  current: RwLock<Arc<Stores>>,
}

impl AppContext {
  pub fn new(
    mode: Mode,
    api: muster_store_remote::ApiConfig,
  ) -> muster_store_remote::Result<Self> {
    let api = ApiClient::new(api)?;
    let current = RwLock::new(Arc::new(Stores::build(mode, &api)));
    Ok(Self { api, current })
  }

  /// Snapshot the current backend pair.
  pub fn current(&self) -> Arc<Stores> {
    match self.current.read() {
      Ok(guard) => guard.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  pub fn mode(&self) -> Mode { self.current().mode }

  /// Switch modes by rebuilding both backends from scratch. Anything
  /// written to the previous pair is discarded; switching back to mock
  /// starts again from the seed data.
  pub fn set_mode(&self, mode: Mode) {
    let stores = Arc::new(Stores::build(mode, &self.api));
    match self.current.write() {
      Ok(mut guard) => *guard = stores,
      Err(poisoned) => *poisoned.into_inner() = stores,
    }
  }
}

// The context is itself a store pair: requests delegate to whatever
// backends are current when they arrive. The snapshot is taken before any
// await, so the swap lock is never held across a suspension point.

impl MeetingStore for AppContext {
  type Error = EnvError;

  async fn list_all(&self) -> Result<Vec<Meeting>, EnvError> {
    self.current().meetings.list_all().await
  }

  async fn get_by_id(&self, id: Uuid) -> Result<Option<Meeting>, EnvError> {
    self.current().meetings.get_by_id(id).await
  }

  async fn create(&self, meeting: Meeting) -> Result<(), EnvError> {
    self.current().meetings.create(meeting).await
  }

  async fn replace(&self, meeting: Meeting) -> Result<(), EnvError> {
    self.current().meetings.replace(meeting).await
  }

  async fn delete(&self, id: Uuid) -> Result<(), EnvError> {
    self.current().meetings.delete(id).await
  }
}

impl AttendanceStore for AppContext {
  type Error = EnvError;

  async fn list_all(&self) -> Result<Vec<Attendance>, EnvError> {
    self.current().attendance.list_all().await
  }

  async fn list_for_member(
    &self,
    member_id: Uuid,
  ) -> Result<Vec<Attendance>, EnvError> {
    self.current().attendance.list_for_member(member_id).await
  }

  async fn set_status(
    &self,
    member_id: Uuid,
    meeting_id: Uuid,
    status: PresenceStatus,
  ) -> Result<(), EnvError> {
    self.current().attendance.set_status(member_id, meeting_id, status).await
  }

  fn status(&self, member_id: Uuid, meeting_id: Uuid) -> PresenceStatus {
    self.current().attendance.status(member_id, meeting_id)
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
