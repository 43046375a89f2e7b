//! Lock-free connection state shared between the read task and its handle.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of one subscription's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Connecting = 0,
    Connected = 1,
    Closing = 2,
    Closed = 3,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Connected,
            2 => ConnectionState::Closing,
            _ => ConnectionState::Closed,
        }
    }
}

/// Atomic wrapper so both sides can observe the state without locking.
pub struct AtomicConnectionState(AtomicU8);

impl AtomicConnectionState {
    pub fn new(state: ConnectionState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    pub fn set(&self, state: ConnectionState) {
        self.0.store(state as u8, Ordering::Release);
    }

    pub fn get(&self) -> ConnectionState {
        ConnectionState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn is_connected(&self) -> bool {
        self.get() == ConnectionState::Connected
    }

    pub fn is_closed(&self) -> bool {
        self.get() == ConnectionState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_lifecycle() {
        let state = AtomicConnectionState::new(ConnectionState::Connecting);
        assert_eq!(state.get(), ConnectionState::Connecting);

        state.set(ConnectionState::Connected);
        assert!(state.is_connected());

        state.set(ConnectionState::Closing);
        assert_eq!(state.get(), ConnectionState::Closing);
        assert!(!state.is_connected());

        state.set(ConnectionState::Closed);
        assert!(state.is_closed());
    }

    #[test]
    fn test_unknown_value_reads_as_closed() {
        let state = AtomicConnectionState::new(ConnectionState::Closed);
        assert_eq!(ConnectionState::from_u8(200), ConnectionState::Closed);
        assert!(state.is_closed());
    }
}
