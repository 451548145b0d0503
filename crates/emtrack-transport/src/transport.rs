//! Delivery seam between the session engine and the host's networking layer

use tokio::sync::mpsc;

use emtrack_core::prelude::*;
use emtrack_core::SessionRecord;

/// Receives completed session records for delivery to the messaging backend.
///
/// The tracker calls [`track_session`](Transport::track_session) at most once
/// per session lifecycle, synchronously from `end_session`. Retry, backoff,
/// and batching are entirely the implementor's concern.
pub trait Transport: Send + Sync {
    fn track_session(&self, record: SessionRecord) -> Result<()>;
}

/// Transport backed by an unbounded tokio channel.
///
/// The host's networking task owns the receiver and drains records at its own
/// pace; the sending side never blocks, so `end_session` stays cheap on the
/// UI-lifecycle thread.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: mpsc::UnboundedSender<SessionRecord>,
}

impl ChannelTransport {
    /// Create a transport and the receiver end the host drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Transport for ChannelTransport {
    fn track_session(&self, record: SessionRecord) -> Result<()> {
        debug!(
            session_id = %record.session_id,
            impressions = record.impressions.len(),
            "queueing session record for delivery"
        );
        self.sender.send(record).map_err(|_| Error::ChannelClosed)
    }
}
