pub mod decoder;
pub mod error;

pub use decoder::{Frame, SnapshotDecoder};
pub use error::LiveQueryError;
