//! Remote backend for the Muster meeting store port.
//!
//! Adapts the [`MeetingStore`](muster_core::store::MeetingStore) port to an
//! external HTTP+JSON API. Only reads are available: the remote API has no
//! mutation endpoints yet, so `create`/`replace`/`delete` fail with
//! [`Error::NotImplemented`].

mod client;
mod convert;
mod store;

pub mod error;

pub use client::{ApiClient, ApiConfig, MeetingDto};
pub use error::{Error, Result};
pub use store::RemoteMeetingStore;
