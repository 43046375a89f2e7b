pub mod client;
pub mod query;
pub mod state;

pub use client::{FeedEvent, LiveQueryClient, Subscription};
pub use query::{Direction, Query};
pub use state::{AtomicConnectionState, ConnectionState};
