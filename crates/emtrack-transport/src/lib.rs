//! # emtrack-transport - Session Record Delivery
//!
//! The seam between the session engine and whatever actually talks to the
//! messaging backend. The engine hands a [`emtrack_core::SessionRecord`] to a
//! [`Transport`] exactly once per completed session; everything after that (HTTP, retries,
//! batching) lives on the other side of the trait.
//!
//! Depends on [`emtrack_core`] for record types and error handling.
//!
//! ## Public API
//!
//! ### Delivery
//! - [`Transport`] - Trait consumed by the session engine
//! - [`ChannelTransport`] - Queue records onto a tokio channel for the host's
//!   networking task
//!
//! ### Wire Format
//! - [`session_payload()`] - Build the JSON body for the backend's
//!   session-tracking endpoint
//!
//! ### Test Helpers (feature `test-helpers`)
//! - [`MemoryTransport`] - Captures delivered records for assertions

pub mod payload;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;

// Public API re-exports
pub use payload::session_payload;
pub use transport::{ChannelTransport, Transport};

#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryTransport;
