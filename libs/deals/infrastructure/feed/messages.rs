//! Wire frames pushed by the deals feed, and their decoder.

use livequery::{Frame, LiveQueryError, SnapshotDecoder};
use serde::Deserialize;

use crate::domain::Deal;

/// Frames the deals subscription understands.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedFrame {
    /// Full result set; replaces everything rendered so far.
    Snapshot {
        #[serde(default)]
        docs: Vec<Deal>,
    },
    /// Feed-level failure reported by the store.
    Error { message: String },
}

/// Decoder for the deals collection.
///
/// Frames outside the contract are ignored; a frame that claims to be a
/// snapshot or error but fails to decode is a feed defect and surfaces as a
/// decode error.
pub struct DealsDecoder;

impl SnapshotDecoder for DealsDecoder {
    type Doc = Deal;

    fn decode(&self, text: &str) -> livequery::Result<Frame<Deal>> {
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(_) => return Ok(Frame::Ignore),
        };

        let known = matches!(
            value.get("type").and_then(serde_json::Value::as_str),
            Some("snapshot") | Some("error")
        );
        if !known {
            return Ok(Frame::Ignore);
        }

        let frame: FeedFrame =
            serde_json::from_value(value).map_err(|e| LiveQueryError::Decode(e.to_string()))?;
        Ok(match frame {
            FeedFrame::Snapshot { docs } => Frame::Snapshot(docs),
            FeedFrame::Error { message } => Frame::Error(message),
        })
    }
}
