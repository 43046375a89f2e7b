//! Deal Tracker - Main Library
//!
//! Terminal client for a remote "deals" collection: open a live query,
//! render the most recent deals as cards, refresh on demand.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (config paths)
//! - **deals**: Core view logic (re-exported from workspace)
//! - **livequery**: Live-query WebSocket client (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use deal_tracker::bin_common::{load_config_from_env, ConfigType};
//! use deal_tracker::deals::application::viewer::App;
//! ```

// Re-export workspace libraries for convenience
pub use deals;
pub use livequery;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, ConfigType};
}
