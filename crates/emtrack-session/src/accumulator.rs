//! Per-message impression accumulation

use chrono::{DateTime, Utc};

use emtrack_core::ImpressionRecord;

/// Mutable per-message visibility state within a single session.
///
/// Owned exclusively by the tracker's impression map. Only immutable
/// [`ImpressionRecord`] snapshots leave the engine; the accumulator itself is
/// never handed out by reference.
#[derive(Debug, Clone)]
pub(crate) struct ImpressionAccumulator {
    message_id: String,
    placement_id: i64,
    display_count: u32,
    duration_secs: f64,
    /// Start of the currently open visible interval, `None` while paused
    start: Option<DateTime<Utc>>,
}

impl ImpressionAccumulator {
    pub(crate) fn new(message_id: impl Into<String>, placement_id: i64) -> Self {
        Self {
            message_id: message_id.into(),
            placement_id,
            display_count: 0,
            duration_secs: 0.0,
            start: None,
        }
    }

    /// Open (or restart) the visible interval at `now`.
    ///
    /// A second open without an intervening close restarts the interval; the
    /// elapsed time before the restart is dropped, since duration is only
    /// committed by [`close`](Self::close). This matches the shipped tracker
    /// behavior for hosts that report visibility without a paired pause.
    pub(crate) fn open(&mut self, now: DateTime<Utc>) {
        self.start = Some(now);
    }

    /// Close the open interval at `now`, committing one display and the
    /// elapsed seconds. Returns `false` if no interval was open.
    pub(crate) fn close(&mut self, now: DateTime<Utc>) -> bool {
        let Some(start) = self.start.take() else {
            return false;
        };

        let elapsed_secs = (now - start).num_milliseconds() as f64 / 1000.0;

        self.display_count += 1;
        // The wall clock can step backwards between open and close
        self.duration_secs += elapsed_secs.max(0.0);
        true
    }

    /// Whether a visible interval is currently open
    pub(crate) fn is_open(&self) -> bool {
        self.start.is_some()
    }

    /// Immutable snapshot of the accumulated state
    pub(crate) fn snapshot(&self) -> ImpressionRecord {
        ImpressionRecord {
            message_id: self.message_id.clone(),
            placement_id: self.placement_id,
            display_count: self.display_count,
            duration_secs: self.duration_secs,
        }
    }
}
