//! In-memory backend for the Muster store ports.
//!
//! Deterministic seed data, simulated network latency, and mutex-guarded
//! collections — intended for development, demos, and tests.

mod seed;
mod store;

pub use store::{
  DEFAULT_READ_LATENCY, DEFAULT_WRITE_LATENCY, MemoryAttendanceStore,
  MemoryMeetingStore,
};

#[cfg(test)]
mod tests;
