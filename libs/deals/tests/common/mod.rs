//! Shared utilities for deal viewer integration tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use ratatui::backend::TestBackend;

use deals::domain::Deal;
use deals::infrastructure::feed::DealSource;
use livequery::Subscription;

/// A deal source that hands out pre-built subscriptions, in order.
///
/// Pair each queued subscription with `Subscription::channel()` and the test
/// controls the feed directly.
pub struct ChannelSource {
    feeds: Mutex<VecDeque<Subscription<Deal>>>,
}

impl ChannelSource {
    pub fn new(feeds: Vec<Subscription<Deal>>) -> Self {
        Self {
            feeds: Mutex::new(feeds.into()),
        }
    }
}

#[async_trait]
impl DealSource for ChannelSource {
    async fn subscribe(&self) -> livequery::Result<Subscription<Deal>> {
        Ok(self.feeds.lock().pop_front().expect("no feed queued"))
    }
}

pub fn deal(title: &str) -> Deal {
    Deal {
        title: title.to_string(),
        current_price: Some(9.99),
        source: "Amazon".to_string(),
        affiliate_url: format!("https://amazon.com/{}", title),
        timestamp: "2025-06-01T12:00:00Z".to_string(),
        ..Deal::default()
    }
}

pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

/// Flatten the rendered buffer into one string, row by row.
pub fn buffer_text(backend: &TestBackend) -> String {
    let buffer = backend.buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
