//! # emtrack-session - Session & Impression Engine
//!
//! Accumulates per-message impression durations and counts across a bounded
//! viewing session, then flushes one aggregated
//! [`SessionRecord`](emtrack_core::SessionRecord) per session lifecycle to a
//! [`Transport`](emtrack_transport::Transport).
//!
//! Depends on [`emtrack_core`] for domain types and error handling, and on
//! [`emtrack_transport`] for the delivery seam.
//!
//! ## Public API
//!
//! - [`SessionTracker`] - Session state machine and impression map owner
//!
//! The per-message accumulator is deliberately private: only immutable record
//! snapshots ever leave this crate.

pub mod tracker;

mod accumulator;

// Public API re-exports
pub use tracker::SessionTracker;
