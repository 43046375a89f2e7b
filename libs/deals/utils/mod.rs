//! Common utilities for the deal tracker binaries and views.

pub mod format;
pub mod logging;
pub mod text;

mod heartbeat;
mod shutdown;

pub use format::format_currency;
pub use heartbeat::Heartbeat;
pub use logging::{init_tracing, init_tracing_with_level};
pub use shutdown::ShutdownSignal;
pub use text::sanitize_display;
