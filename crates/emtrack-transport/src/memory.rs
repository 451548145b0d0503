//! In-memory transport for tests
//!
//! Records every delivered session record so assertions can inspect exactly
//! what the tracker flushed, and how many times.

use std::sync::{Arc, Mutex};

use emtrack_core::prelude::*;
use emtrack_core::SessionRecord;

use crate::transport::Transport;

/// Transport double that captures records instead of delivering them.
///
/// Clones share the same backing store, so a test can keep one handle while
/// handing another to the tracker.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    records: Arc<Mutex<Vec<SessionRecord>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far
    pub fn records(&self) -> Vec<SessionRecord> {
        self.records.lock().expect("record lock poisoned").clone()
    }

    /// Number of delivered records
    pub fn len(&self) -> usize {
        self.records.lock().expect("record lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Transport for MemoryTransport {
    fn track_session(&self, record: SessionRecord) -> Result<()> {
        self.records
            .lock()
            .expect("record lock poisoned")
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn empty_record() -> SessionRecord {
        SessionRecord {
            session_id: Uuid::new_v4(),
            start: DateTime::<Utc>::UNIX_EPOCH,
            end: DateTime::<Utc>::UNIX_EPOCH,
            impressions: vec![],
        }
    }

    #[test]
    fn test_memory_transport_captures_records() {
        let transport = MemoryTransport::new();
        assert!(transport.is_empty());

        transport.track_session(empty_record()).unwrap();
        transport.track_session(empty_record()).unwrap();

        assert_eq!(transport.len(), 2);
        assert_eq!(transport.records().len(), 2);
    }

    #[test]
    fn test_memory_transport_clones_share_store() {
        let transport = MemoryTransport::new();
        let handle = transport.clone();

        handle.track_session(empty_record()).unwrap();
        assert_eq!(transport.len(), 1);
    }
}
