use crate::Result;

/// A decoded server frame.
#[derive(Debug)]
pub enum Frame<D> {
    /// A complete result set, replacing everything delivered before it.
    Snapshot(Vec<D>),
    /// A feed-level failure reported by the service.
    Error(String),
    /// A frame this subscription does not care about.
    Ignore,
}

/// Decodes raw text frames pushed by the document store.
///
/// One decoder instance is owned by the subscription's read task and called
/// for every text frame in arrival order. Returning `Err` is reserved for
/// frames the feed *should* understand but cannot (a malformed snapshot);
/// frames outside the contract should map to [`Frame::Ignore`].
pub trait SnapshotDecoder: Send + Sync + 'static {
    /// The document type carried by snapshots.
    type Doc: Send + 'static;

    /// Decode a single text frame.
    fn decode(&self, text: &str) -> Result<Frame<Self::Doc>>;
}
