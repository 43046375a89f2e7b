//! Application layer: the interactive deal viewer.

pub mod viewer;
