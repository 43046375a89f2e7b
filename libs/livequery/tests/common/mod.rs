//! Shared utilities for livequery integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// A mock document store: for each connection it records the subscribe frame,
/// pushes the scripted frames in order, then keeps the socket open until the
/// client closes or the server shuts down.
pub struct MockFeedServer {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
    received: Arc<Mutex<Vec<String>>>,
}

impl MockFeedServer {
    pub async fn start(frames: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let shutdown_accept = shutdown.clone();
        let received_accept = received.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                let frames = frames.clone();
                                let received = received_accept.clone();
                                let shutdown = shutdown_accept.clone();
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, frames, received, shutdown).await;
                                });
                            }
                            Err(_) => break,
                        }
                    }
                    _ = shutdown_accept.notified() => break,
                }
            }
        });

        Self {
            addr,
            shutdown,
            received,
        }
    }

    async fn handle_connection(
        stream: TcpStream,
        frames: Vec<String>,
        received: Arc<Mutex<Vec<String>>>,
        shutdown: Arc<Notify>,
    ) {
        let ws_stream = match accept_async(stream).await {
            Ok(ws) => ws,
            Err(_) => return,
        };
        let (mut write, mut read) = ws_stream.split();

        // First client message is the subscribe frame
        if let Some(Ok(msg)) = read.next().await {
            if let Ok(text) = msg.into_text() {
                received.lock().push(text);
            }
        }

        for frame in frames {
            if write.send(Message::Text(frame)).await.is_err() {
                return;
            }
        }

        loop {
            tokio::select! {
                msg = read.next() => match msg {
                    Some(Ok(msg)) if msg.is_close() => break,
                    Some(Ok(Message::Ping(payload))) => {
                        let _ = write.send(Message::Pong(payload)).await;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                },
                _ = shutdown.notified() => break,
            }
        }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Subscribe frames seen so far, one per connection.
    pub fn subscribe_frames(&self) -> Vec<String> {
        self.received.lock().clone()
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_waiters();
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
