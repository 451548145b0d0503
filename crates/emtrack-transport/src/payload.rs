//! JSON body for the backend's embedded-session tracking endpoint
//!
//! The backend accepts a single POST per completed session. Timestamps go
//! over the wire as epoch milliseconds; durations stay in fractional seconds.

use serde_json::{json, Value};

use emtrack_core::SessionRecord;

/// Build the request body for a completed session
pub fn session_payload(record: &SessionRecord) -> Value {
    json!({
        "session": {
            "id": record.session_id,
            "start": record.start.timestamp_millis(),
            "end": record.end.timestamp_millis(),
        },
        "impressions": record
            .impressions
            .iter()
            .map(|imp| {
                json!({
                    "messageId": imp.message_id,
                    "placementId": imp.placement_id,
                    "displayCount": imp.display_count,
                    "displayDuration": imp.duration_secs,
                })
            })
            .collect::<Vec<_>>(),
    })
}
