//! # emtrack-core - Core Domain Types
//!
//! Foundation crate for the emtrack SDK. Provides the record types emitted at
//! session flush, error handling, the injectable clock abstraction, and the
//! tracing bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, uuid, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Records (`record`)
//! - [`SessionRecord`] - Aggregated record of one completed viewing session
//! - [`ImpressionRecord`] - Per-message snapshot inside a session record
//!
//! ### Time (`clock`)
//! - [`Clock`] - Injectable time source consumed by the session engine
//! - [`SystemClock`] - Wall-clock implementation
//! - [`ManualClock`] - Manually advanced clock for deterministic tests
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `misuse` vs transport classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use emtrack_core::prelude::*;
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod record;

/// Prelude for common imports used throughout all emtrack crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use record::{ImpressionRecord, SessionRecord};
