//! # emtrack - Embedded-Message Session Tracking SDK
//!
//! In-process engine for reporting engagement telemetry from "embedded"
//! (placement-based) messaging surfaces. The host app drives a
//! [`SessionTracker`] from its UI-lifecycle callbacks; the tracker
//! accumulates per-message impression durations and counts, and flushes one
//! aggregated [`SessionRecord`] per viewing session to a [`Transport`].
//!
//! The SDK renders nothing, persists nothing, and performs no network I/O of
//! its own -- delivery to the backend is the host's concern, behind the
//! [`Transport`] trait.
//!
//! ## Quickstart
//!
//! ```rust
//! use emtrack::{ChannelTransport, SessionTracker};
//!
//! // The host's networking task drains `records` and POSTs each one.
//! let (transport, mut records) = ChannelTransport::channel();
//! let tracker = SessionTracker::new(transport);
//!
//! // Surface became visible
//! tracker.start_session();
//!
//! // A message scrolled into view at placement 7, then out again
//! tracker.start_impression("promo-42", 7);
//! tracker.pause_impression("promo-42");
//!
//! // Surface went away: one aggregated record is queued
//! tracker.end_session();
//! assert!(records.try_recv().is_ok());
//! ```
//!
//! ## Crate layout
//!
//! This facade re-exports the public surface of:
//! - `emtrack-core`: records, errors, clock abstraction, logging bootstrap
//! - `emtrack-session`: the session/impression engine
//! - `emtrack-transport`: the delivery seam and wire payload builder

// Re-export the public SDK surface
pub use emtrack_core::logging;
pub use emtrack_core::{
    Clock, Error, ImpressionRecord, ManualClock, Result, SessionRecord, SystemClock,
};
pub use emtrack_session::SessionTracker;
pub use emtrack_transport::{payload, ChannelTransport, Transport};

/// Prelude for common imports
pub mod prelude {
    pub use emtrack_core::prelude::*;
    pub use emtrack_session::SessionTracker;
    pub use emtrack_transport::Transport;
}
