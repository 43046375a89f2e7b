//! Main application state and logic for the deal viewer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use livequery::{FeedEvent, Subscription};

use crate::domain::Deal;
use crate::infrastructure::feed::DealSource;

use super::state::DealList;

/// Main application state.
pub struct App {
    /// Where subscriptions come from (injected so tests can fake the feed).
    source: Arc<dyn DealSource>,
    /// The one live subscription. `refresh` releases it before acquiring a
    /// replacement, so a stale feed can never write into the view.
    subscription: Option<Subscription<Deal>>,
    /// The rendered list.
    pub list: DealList,
    /// Whether to quit.
    pub should_quit: bool,
    /// When the last snapshot was applied.
    pub last_update: Option<DateTime<Utc>>,
    /// Tokio runtime handle.
    runtime: Handle,
}

impl App {
    pub fn new(runtime: Handle, source: Arc<dyn DealSource>) -> Self {
        Self {
            source,
            subscription: None,
            list: DealList::new(),
            should_quit: false,
            last_update: None,
            runtime,
        }
    }

    /// Open the live query and start listening.
    pub fn subscribe(&mut self) {
        self.list.begin_loading();
        self.last_update = None;

        let source = Arc::clone(&self.source);
        match self.runtime.block_on(async { source.subscribe().await }) {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(e) => {
                warn!("Subscribe failed: {}", e);
                self.list.apply_error(e.to_string());
            }
        }
    }

    /// Cancel the current subscription, then open a fresh one.
    pub fn refresh(&mut self) {
        if let Some(previous) = self.subscription.take() {
            self.runtime.block_on(previous.cancel());
        }
        self.subscribe();
    }

    /// Drain pending feed events into the list.
    ///
    /// Called once per draw tick; events apply in arrival order, so the last
    /// snapshot wins and the view always shows the newest result set.
    pub fn drain_feed(&mut self) {
        while let Some(event) = self.subscription.as_ref().and_then(|s| s.try_recv()) {
            match event {
                FeedEvent::Connected => debug!("Feed connected"),
                FeedEvent::Snapshot(deals) => {
                    self.last_update = Some(Utc::now());
                    self.list.apply_snapshot(deals);
                }
                FeedEvent::Error(message) => self.list.apply_error(message),
                FeedEvent::Closed => self.list.apply_error("connection closed".to_string()),
            }
        }
    }

    /// Shutdown the application, releasing the live feed.
    pub fn shutdown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.runtime.block_on(subscription.cancel());
        }
    }
}
