//! # LiveQuery
//!
//! Client half of a document-store live query: describe a query, open a
//! WebSocket subscription for it, and receive pushed result-set snapshots
//! until the subscription is cancelled.
//!
//! ## Design
//!
//! - **Push, not poll**: the server decides when a new snapshot is due; the
//!   client only decodes and forwards.
//! - **Whole snapshots**: every update is a complete result set. Consumers
//!   replace state instead of merging.
//! - **Single-shot feeds**: a feed that errors is over. The error is
//!   delivered once and the read task exits; reconnecting is the caller's
//!   decision, never this crate's.
//! - **Lock-free delivery**: events cross to the consumer over an unbounded
//!   crossbeam channel and are drained with `try_recv`.

pub mod traits;
pub mod core;

// Re-export all traits
pub use traits::*;

// Re-export core client functionality
pub use crate::core::{
    client::{FeedEvent, LiveQueryClient, Subscription},
    query::{Direction, Query},
    state::{AtomicConnectionState, ConnectionState},
};

/// Type alias for Result with LiveQueryError
pub type Result<T> = std::result::Result<T, traits::LiveQueryError>;
