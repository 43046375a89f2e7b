//! Deal list view: a live-updating card rendering of the deals collection.

pub mod app;
pub mod state;
pub mod ui;

pub use app::App;
pub use state::{DealList, FeedPhase};
