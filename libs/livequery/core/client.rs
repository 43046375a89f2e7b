//! The subscription client: connect, subscribe, forward pushed snapshots.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use crate::core::query::Query;
use crate::core::state::{AtomicConnectionState, ConnectionState};
use crate::traits::{Frame, LiveQueryError, SnapshotDecoder};
use crate::Result;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How often the read task re-checks the cancellation flag while the feed is
/// quiet.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Events delivered to the subscription holder.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent<D> {
    /// The subscription is open; snapshots will follow.
    Connected,
    /// A complete result set. Replaces everything delivered before it.
    Snapshot(Vec<D>),
    /// The feed failed. Terminal: no further events arrive and no retry is
    /// attempted.
    Error(String),
    /// The server ended the feed without reporting an error.
    Closed,
}

/// Entry point for opening live queries against one store endpoint.
pub struct LiveQueryClient {
    url: String,
}

impl LiveQueryClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open a live query: connect, send the subscribe frame and spawn the
    /// read task. Must be called from within a tokio runtime.
    pub async fn subscribe<C>(&self, query: Query, decoder: C) -> Result<Subscription<C::Doc>>
    where
        C: SnapshotDecoder,
    {
        let (ws_stream, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| LiveQueryError::Connect(e.to_string()))?;
        let (mut write, read) = ws_stream.split();

        let frame = query.subscribe_frame()?;
        write
            .send(Message::Text(frame))
            .await
            .map_err(|e| LiveQueryError::Subscribe(e.to_string()))?;

        let (event_tx, event_rx) = unbounded();
        let active = Arc::new(AtomicBool::new(true));
        let state = Arc::new(AtomicConnectionState::new(ConnectionState::Connected));

        let _ = event_tx.send(FeedEvent::Connected);

        let task = tokio::spawn(run_feed(
            write,
            read,
            decoder,
            event_tx,
            Arc::clone(&active),
            Arc::clone(&state),
        ));

        debug!("Subscribed to '{}' at {}", query.collection, self.url);

        Ok(Subscription {
            events: event_rx,
            active,
            state,
            task: Some(task),
        })
    }
}

/// Read loop for one subscription. Exits on cancellation, feed error or
/// server close; never reconnects.
async fn run_feed<C>(
    mut write: SplitSink<WsStream, Message>,
    mut read: SplitStream<WsStream>,
    decoder: C,
    events: Sender<FeedEvent<C::Doc>>,
    active: Arc<AtomicBool>,
    state: Arc<AtomicConnectionState>,
) where
    C: SnapshotDecoder,
{
    let mut cancel_poll = tokio::time::interval(CANCEL_POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel_poll.tick() => {
                if !active.load(Ordering::Acquire) {
                    state.set(ConnectionState::Closing);
                    let _ = write.send(Message::Close(None)).await;
                    break;
                }
            }
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => match decoder.decode(&text) {
                    Ok(Frame::Snapshot(docs)) => {
                        let _ = events.send(FeedEvent::Snapshot(docs));
                    }
                    Ok(Frame::Error(message)) => {
                        warn!("Feed error from server: {}", message);
                        let _ = events.send(FeedEvent::Error(message));
                        break;
                    }
                    Ok(Frame::Ignore) => {
                        debug!("Ignoring frame: {}", text);
                    }
                    Err(e) => {
                        warn!("Undecodable frame: {}", e);
                        let _ = events.send(FeedEvent::Error(e.to_string()));
                        break;
                    }
                },
                Some(Ok(Message::Ping(payload))) => {
                    let _ = write.send(Message::Pong(payload)).await;
                }
                Some(Ok(Message::Close(_))) | None => {
                    let _ = events.send(FeedEvent::Closed);
                    break;
                }
                // Binary frames are not part of the contract
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    let error = LiveQueryError::Transport(e.to_string());
                    let _ = events.send(FeedEvent::Error(error.to_string()));
                    break;
                }
            },
        }
    }

    state.set(ConnectionState::Closed);
    active.store(false, Ordering::Release);
}

/// Handle to one standing live query.
///
/// Holds the receiving end of the feed; events are drained non-blockingly
/// with [`Subscription::try_recv`]. Cancelling (or dropping) the handle
/// terminates the feed.
pub struct Subscription<D> {
    events: Receiver<FeedEvent<D>>,
    active: Arc<AtomicBool>,
    state: Arc<AtomicConnectionState>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl<D> Subscription<D> {
    /// Build a subscription over a raw event channel. The feed is whatever
    /// the paired sender pushes; used by in-process sources and tests.
    pub fn from_receiver(events: Receiver<FeedEvent<D>>) -> Self {
        Self {
            events,
            active: Arc::new(AtomicBool::new(true)),
            state: Arc::new(AtomicConnectionState::new(ConnectionState::Connected)),
            task: None,
        }
    }

    /// Paired channel constructor: push events on the sender, drain them
    /// from the subscription.
    pub fn channel() -> (Sender<FeedEvent<D>>, Self) {
        let (tx, rx) = unbounded();
        (tx, Self::from_receiver(rx))
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<FeedEvent<D>> {
        self.events.try_recv().ok()
    }

    /// False once the feed has been cancelled or has died.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state.get()
    }

    /// Handle onto the cancellation flag, observable after the subscription
    /// itself has been consumed.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.active)
    }

    /// Cancel the feed and wait for the read task to wind down.
    pub async fn cancel(mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            if task.await.is_err() {
                warn!("Feed task aborted during cancel");
            }
        }
        self.state.set(ConnectionState::Closed);
    }
}

impl<D> Drop for Subscription<D> {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
