//! Live deals feed over the document store's push channel.
//!
//! The view never talks to the store directly; it is handed a [`DealSource`]
//! and asks it for subscriptions. The production source opens a live query
//! through [`livequery`]; tests substitute a channel-backed source.

mod messages;

pub use messages::{DealsDecoder, FeedFrame};

use async_trait::async_trait;
use livequery::{Direction, LiveQueryClient, Query, Subscription};

use crate::config::FeedConfig;
use crate::domain::Deal;

/// Collection holding deal documents.
pub const DEALS_COLLECTION: &str = "deals";

/// Upper bound on a snapshot: the most recent deals, newest first.
pub const SNAPSHOT_LIMIT: u32 = 50;

/// The standing query a deal view issues.
pub fn deals_query(collection: &str, page_size: u32) -> Query {
    Query::collection(collection)
        .order_by("timestamp", Direction::Desc)
        .limit(page_size.clamp(1, SNAPSHOT_LIMIT))
}

/// Where the view gets its subscriptions from.
#[async_trait]
pub trait DealSource: Send + Sync {
    /// Open a fresh subscription to the deal collection.
    async fn subscribe(&self) -> livequery::Result<Subscription<Deal>>;
}

/// Deal source backed by the hosted store's WebSocket endpoint.
pub struct LiveDealFeed {
    client: LiveQueryClient,
    query: Query,
}

impl LiveDealFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: LiveQueryClient::new(url),
            query: deals_query(DEALS_COLLECTION, SNAPSHOT_LIMIT),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            client: LiveQueryClient::new(config.url.clone()),
            query: deals_query(&config.collection, config.page_size),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[async_trait]
impl DealSource for LiveDealFeed {
    async fn subscribe(&self) -> livequery::Result<Subscription<Deal>> {
        self.client.subscribe(self.query.clone(), DealsDecoder).await
    }
}
