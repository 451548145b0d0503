//! SDK error types with misuse classification

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// SDK error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup error: {message}")]
    Logging { message: String },

    // ─────────────────────────────────────────────────────────────
    // Session Lifecycle Misuse
    // ─────────────────────────────────────────────────────────────
    #[error("Session already started; ignoring duplicate start")]
    SessionAlreadyStarted,

    #[error("Session not started; ignoring {operation}")]
    SessionNotStarted { operation: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Impression Misuse
    // ─────────────────────────────────────────────────────────────
    #[error("No impression tracked for message: {message_id}")]
    ImpressionNotFound { message_id: String },

    #[error("Impression for message {message_id} has no open interval")]
    ImpressionNotStarted { message_id: String },

    // ─────────────────────────────────────────────────────────────
    // Transport Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Transport channel closed; session record dropped")]
    ChannelClosed,

    #[error("Transport error: {message}")]
    Transport { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn session_not_started(operation: &'static str) -> Self {
        Self::SessionNotStarted { operation }
    }

    pub fn impression_not_found(message_id: impl Into<String>) -> Self {
        Self::ImpressionNotFound {
            message_id: message_id.into(),
        }
    }

    pub fn impression_not_started(message_id: impl Into<String>) -> Self {
        Self::ImpressionNotStarted {
            message_id: message_id.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Check if this is an integration misuse.
    ///
    /// Misuse errors are absorbed at the point of detection: the offending
    /// call is logged and becomes a no-op, and nothing crosses the tracker's
    /// public boundary. Rendering availability wins over strict enforcement.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Error::SessionAlreadyStarted
                | Error::SessionNotStarted { .. }
                | Error::ImpressionNotFound { .. }
                | Error::ImpressionNotStarted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::SessionAlreadyStarted;
        assert_eq!(
            err.to_string(),
            "Session already started; ignoring duplicate start"
        );

        let err = Error::session_not_started("end_session");
        assert!(err.to_string().contains("end_session"));

        let err = Error::impression_not_found("msg-1");
        assert!(err.to_string().contains("msg-1"));

        let err = Error::impression_not_started("msg-2");
        assert!(err.to_string().contains("msg-2"));
        assert!(err.to_string().contains("open interval"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_misuse() {
        assert!(Error::SessionAlreadyStarted.is_misuse());
        assert!(Error::session_not_started("end_session").is_misuse());
        assert!(Error::impression_not_found("m").is_misuse());
        assert!(Error::impression_not_started("m").is_misuse());

        assert!(!Error::ChannelClosed.is_misuse());
        assert!(!Error::transport("backend unreachable").is_misuse());
        assert!(!Error::logging("double init").is_misuse());
    }

    #[test]
    fn test_transport_error_message() {
        let err = Error::transport("receiver dropped");
        assert_eq!(err.to_string(), "Transport error: receiver dropped");
    }
}
