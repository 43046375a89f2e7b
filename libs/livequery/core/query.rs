//! Query descriptions and the subscribe frame they serialize into.

use serde::Serialize;

use crate::{LiveQueryError, Result};

/// Sort direction for the query's ordering field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// An ordered, limited view over one collection.
///
/// ```ignore
/// let query = Query::collection("deals")
///     .order_by("timestamp", Direction::Desc)
///     .limit(50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Wire envelope for the initial subscribe frame.
#[derive(Serialize)]
struct SubscribeRequest<'a> {
    action: &'static str,
    query: &'a Query,
}

impl Query {
    /// Start a query over the named collection.
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            order_by: None,
            direction: None,
            limit: None,
        }
    }

    /// Order results by a field.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some(field.into());
        self.direction = Some(direction);
        self
    }

    /// Cap the result set size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The text frame sent to the store to open this subscription.
    pub fn subscribe_frame(&self) -> Result<String> {
        let request = SubscribeRequest {
            action: "subscribe",
            query: self,
        };
        serde_json::to_string(&request).map_err(|e| LiveQueryError::Subscribe(e.to_string()))
    }
}
