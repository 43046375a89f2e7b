//! Deal Tracker
//!
//! Live card view over a remote "deals" collection: open a live query,
//! render the most recent deals, refresh on demand.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export commonly used items
pub use application::viewer::{App, DealList, FeedPhase};
pub use config::{FeedConfig, ViewerConfig};
pub use domain::{Deal, PLACEHOLDER_IMAGE_URL};
pub use infrastructure::feed::{
    deals_query, DealSource, DealsDecoder, LiveDealFeed, DEALS_COLLECTION, SNAPSHOT_LIMIT,
};
pub use utils::{
    format_currency, init_tracing, init_tracing_with_level, sanitize_display, Heartbeat,
    ShutdownSignal,
};
