//! Deal Tail - headless follower for the deals feed
//!
//! Logs every snapshot the store pushes. Useful for checking the feed and
//! its credentials without a terminal UI.

use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, warn};

use deal_tracker::bin_common::{load_config_from_env, ConfigType};
use deals::config::ViewerConfig;
use deals::infrastructure::feed::{DealSource, LiveDealFeed};
use deals::utils::{format_currency, init_tracing_with_level, sanitize_display, Heartbeat, ShutdownSignal};
use livequery::FeedEvent;

/// Heartbeat interval while the feed is quiet.
const HEARTBEAT_SECS: u64 = 300;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config first (before logging is initialized)
    dotenv::dotenv().ok();
    let config_path = load_config_from_env(ConfigType::Viewer);
    let config = ViewerConfig::load(&config_path)?;

    init_tracing_with_level(&config.log_level);
    config.log();

    print_banner();

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_ctrl_c();

    let feed = LiveDealFeed::from_config(&config.feed);
    let subscription = feed.subscribe().await?;

    let mut heartbeat = Heartbeat::new(HEARTBEAT_SECS);
    let mut snapshots: u64 = 0;

    while shutdown.is_running() {
        while let Some(event) = subscription.try_recv() {
            match event {
                FeedEvent::Connected => info!("Feed connected"),
                FeedEvent::Snapshot(deals) => {
                    snapshots += 1;
                    info!("Snapshot {}: {} deals", snapshots, deals.len());
                    if let Some(top) = deals.first() {
                        info!(
                            "  Latest: {} ({})",
                            sanitize_display(&top.title),
                            format_currency(top.current_price)
                        );
                    }
                    heartbeat.beat();
                }
                FeedEvent::Error(message) => {
                    error!("Feed error: {}", sanitize_display(&message));
                    shutdown.trigger();
                }
                FeedEvent::Closed => {
                    warn!("Feed closed by server");
                    shutdown.trigger();
                }
            }
        }

        if heartbeat.should_beat() {
            info!("Heartbeat: no new snapshots in the last 5 minutes");
            heartbeat.beat();
        }

        shutdown.sleep_unless_stopped(Duration::from_millis(250)).await;
    }

    subscription.cancel().await;
    print_shutdown(snapshots);
    Ok(())
}

fn print_banner() {
    info!("");
    info!("========================================");
    info!("Starting Deal Tail");
    info!("Press Ctrl+C to stop");
    info!("========================================");
    info!("");
}

fn print_shutdown(snapshots: u64) {
    info!("");
    info!("========================================");
    info!("Deal Tail stopped gracefully");
    info!("Snapshots received: {}", snapshots);
    info!("========================================");
}
