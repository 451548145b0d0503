//! Session lifecycle and impression map ownership
//!
//! One [`SessionTracker`] instance tracks one messaging surface. The host's
//! UI layer drives it from lifecycle callbacks: `start_session` when the
//! surface becomes visible, `start_impression`/`pause_impression` as
//! individual messages scroll in and out of view, and `end_session` when the
//! surface goes away. Ending a session with at least one impression flushes
//! exactly one [`SessionRecord`] to the transport.
//!
//! Guard violations (double start, pause of an unknown message, ...) are
//! integration bugs in the host, not recoverable conditions here. They are
//! logged and dropped so message rendering is never interrupted.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use emtrack_core::prelude::*;
use emtrack_core::{Clock, SessionRecord, SystemClock};
use emtrack_transport::Transport;

use crate::accumulator::ImpressionAccumulator;

/// Current viewing session, `None`-fielded while idle
#[derive(Debug, Default)]
struct SessionState {
    /// Identifier minted at `start_session`, carried into the record
    id: Option<Uuid>,
    /// Set while tracking, cleared on flush
    start: Option<DateTime<Utc>>,
    /// Populated at `end_session` just before the flush, then cleared
    end: Option<DateTime<Utc>>,
}

/// Mutable tracker state behind a single lock
#[derive(Debug, Default)]
struct TrackerState {
    session: SessionState,
    /// Accumulators keyed by message id, created lazily on first sight
    impressions: HashMap<String, ImpressionAccumulator>,
}

/// Tracks impression durations across a bounded viewing session.
///
/// All methods take `&self`; state lives behind a mutex so an
/// `Arc<SessionTracker>` can be driven from whichever thread delivers
/// lifecycle callbacks. Nothing here blocks or performs I/O -- the only
/// external calls are `Clock::now` and, once per session, the transport.
pub struct SessionTracker {
    state: Mutex<TrackerState>,
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
}

impl SessionTracker {
    /// Create a tracker using the system clock
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_clock(transport, SystemClock)
    }

    /// Create a tracker with an injected clock (deterministic tests)
    pub fn with_clock(transport: impl Transport + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            state: Mutex::new(TrackerState::default()),
            transport: Box::new(transport),
            clock: Box::new(clock),
        }
    }

    /// Whether a session is currently active
    pub fn is_tracking(&self) -> bool {
        self.lock().session.start.is_some()
    }

    /// Begin a new viewing session.
    ///
    /// Calling while a session is already active is reported and ignored; the
    /// original session id and start time are left untouched.
    pub fn start_session(&self) {
        let now = self.clock.now();
        let mut state = self.lock();

        if state.session.start.is_some() {
            report(&Error::SessionAlreadyStarted);
            return;
        }

        let id = Uuid::new_v4();
        state.session.id = Some(id);
        state.session.start = Some(now);
        debug!(session_id = %id, "embedded session started");
    }

    /// End the current session and flush it to the transport.
    ///
    /// Every still-open impression is closed at `now()` first, so dangling
    /// intervals keep their accumulated time. A session with zero impressions
    /// resets to idle without emitting anything. The tracker always ends up
    /// idle, even if the transport rejects the record.
    pub fn end_session(&self) {
        let now = self.clock.now();
        let mut state = self.lock();

        let (Some(id), Some(start)) = (state.session.id, state.session.start) else {
            report(&Error::session_not_started("end_session"));
            return;
        };
        state.session.end = Some(now);

        let record = if state.impressions.is_empty() {
            debug!(session_id = %id, "embedded session ended with no impressions");
            None
        } else {
            for acc in state.impressions.values_mut() {
                if acc.is_open() {
                    acc.close(now);
                }
            }
            Some(SessionRecord {
                session_id: id,
                start,
                end: state.session.end.unwrap_or(now),
                impressions: state.impressions.values().map(|a| a.snapshot()).collect(),
            })
        };

        state.session = SessionState::default();
        state.impressions.clear();

        // Hand off outside the lock: the transport may call back into code
        // that reads tracker state.
        drop(state);

        if let Some(record) = record {
            debug!(session_id = %id, "flushing embedded session record");
            if let Err(err) = self.transport.track_session(record) {
                warn!("failed to hand session record to transport: {err}");
            }
        }
    }

    /// Record that `message_id` became visible in `placement_id`.
    ///
    /// The first sighting of a message in a session seeds its placement id;
    /// repeat sightings keep the original value. An already-open interval is
    /// restarted, discarding its uncommitted time.
    pub fn start_impression(&self, message_id: &str, placement_id: i64) {
        let now = self.clock.now();
        let mut state = self.lock();

        state
            .impressions
            .entry(message_id.to_string())
            .or_insert_with(|| ImpressionAccumulator::new(message_id, placement_id))
            .open(now);
    }

    /// Record that `message_id` became hidden.
    ///
    /// Commits one display and the elapsed interval to the message's
    /// accumulator. Pausing an unknown message, or one without an open
    /// interval, is reported and ignored.
    pub fn pause_impression(&self, message_id: &str) {
        let now = self.clock.now();
        let mut state = self.lock();

        let Some(acc) = state.impressions.get_mut(message_id) else {
            report(&Error::impression_not_found(message_id));
            return;
        };

        if !acc.close(now) {
            report(&Error::impression_not_started(message_id));
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TrackerState> {
        // A poisoned lock means a panic mid-mutation; impression counts may
        // be off but the tracker stays usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for SessionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTracker")
            .field("tracking", &self.is_tracking())
            .finish_non_exhaustive()
    }
}

/// Log a guard violation and move on
fn report(err: &Error) {
    error!("session tracking misuse: {err}");
}
