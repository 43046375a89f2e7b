use thiserror::Error;

/// Main error type for livequery
#[derive(Error, Debug)]
pub enum LiveQueryError {
    /// Opening the WebSocket connection failed
    #[error("connect failed: {0}")]
    Connect(String),

    /// Sending the subscribe frame failed
    #[error("subscribe failed: {0}")]
    Subscribe(String),

    /// The underlying transport broke mid-feed
    #[error("transport error: {0}")]
    Transport(String),

    /// A server frame could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}
