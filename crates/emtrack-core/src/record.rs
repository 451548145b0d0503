//! Immutable session and impression records emitted at flush time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a single message's accumulated visibility within a session.
///
/// Produced once, when the session is flushed. `duration_secs` is the total
/// wall-clock time the message was visible across all of its display
/// intervals in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpressionRecord {
    /// Message this impression belongs to
    pub message_id: String,

    /// Placement the message was rendered in
    pub placement_id: i64,

    /// How many visible intervals were closed for this message
    pub display_count: u32,

    /// Cumulative visible time in seconds
    pub duration_secs: f64,
}

/// Aggregated record of one completed viewing session.
///
/// Handed to the transport exactly once per session lifecycle, and only when
/// at least one impression was recorded. Impression order follows the
/// tracker's map iteration order and is not contractually sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Identifier assigned when the session started
    pub session_id: Uuid,

    /// When the surface became visible
    pub start: DateTime<Utc>,

    /// When the surface became invisible
    pub end: DateTime<Utc>,

    /// One entry per distinct message seen during the session
    pub impressions: Vec<ImpressionRecord>,
}

impl SessionRecord {
    /// Session length in seconds
    pub fn duration_secs(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1000.0
    }

    /// Total display count across all impressions
    pub fn total_display_count(&self) -> u32 {
        self.impressions.iter().map(|i| i.display_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_record() -> SessionRecord {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        SessionRecord {
            session_id: Uuid::nil(),
            start,
            end: start + Duration::seconds(12),
            impressions: vec![
                ImpressionRecord {
                    message_id: "abc".to_string(),
                    placement_id: 7,
                    display_count: 2,
                    duration_secs: 7.0,
                },
                ImpressionRecord {
                    message_id: "def".to_string(),
                    placement_id: 3,
                    display_count: 1,
                    duration_secs: 2.5,
                },
            ],
        }
    }

    #[test]
    fn test_session_duration() {
        let record = sample_record();
        assert_eq!(record.duration_secs(), 12.0);
    }

    #[test]
    fn test_total_display_count() {
        let record = sample_record();
        assert_eq!(record.total_display_count(), 3);
    }

    #[test]
    fn test_record_round_trips_through_serde() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = sample_record();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("sessionId").is_some());
        assert!(value["impressions"][0].get("messageId").is_some());
        assert!(value["impressions"][0].get("placementId").is_some());
        assert!(value["impressions"][0].get("displayCount").is_some());
    }
}
