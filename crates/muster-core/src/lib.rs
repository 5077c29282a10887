//! Core types and trait definitions for the Muster attendance tracker.
//!
//! This crate is deliberately free of HTTP and backend dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod attendance;
pub mod meeting;
pub mod member;
pub mod stats;
pub mod store;
