//! Domain types for the deal tracker.

mod deal;

pub use deal::{Deal, PLACEHOLDER_IMAGE_URL};
