// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport capabilities consumed by the bridge endpoints.
//!
//! The side-channel is owned by the embedding application; the bridge only
//! needs "send a named opaque blob" in each direction. Both primitives are
//! synchronous fire-and-forget; no acknowledgment, retry, or timeout
//! semantics are defined at this layer.

use thiserror::Error;

use crate::bundle::EventBundle;

/// Errors from transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Client-side capability: send an opaque command payload to the service.
pub trait CommandSender {
    fn send(&self, channel: &str, payload: &[u8]) -> Result<(), TransportError>;
}

/// Service-side capability: publish a named event bundle to the client.
pub trait EventNotifier {
    fn notify(&self, event_name: &str, bundle: &EventBundle) -> Result<(), TransportError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use parking_lot::Mutex;
    use std::sync::Arc;

    use super::{CommandSender, EventNotifier, TransportError};
    use crate::bundle::EventBundle;

    /// Recorded command send
    #[derive(Debug, Clone)]
    pub struct SentCommand {
        pub channel: String,
        pub payload: Vec<u8>,
    }

    /// Recording command sender for testing
    #[derive(Clone, Default)]
    pub struct RecordingCommandSender {
        inner: Arc<Mutex<Vec<SentCommand>>>,
    }

    impl RecordingCommandSender {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded sends
        pub fn sent(&self) -> Vec<SentCommand> {
            self.inner.lock().clone()
        }
    }

    impl CommandSender for RecordingCommandSender {
        fn send(&self, channel: &str, payload: &[u8]) -> Result<(), TransportError> {
            self.inner
                .lock()
                .push(SentCommand { channel: channel.to_string(), payload: payload.to_vec() });
            Ok(())
        }
    }

    /// Command sender that rejects every send
    #[derive(Clone, Copy, Default)]
    pub struct FailingCommandSender;

    impl CommandSender for FailingCommandSender {
        fn send(&self, _channel: &str, _payload: &[u8]) -> Result<(), TransportError> {
            Err(TransportError::SendFailed("side-channel unavailable".to_string()))
        }
    }

    /// Recorded event publication
    #[derive(Debug, Clone)]
    pub struct NotifiedEvent {
        pub event_name: String,
        pub bundle: EventBundle,
    }

    /// Recording event notifier for testing
    #[derive(Clone, Default)]
    pub struct RecordingEventNotifier {
        inner: Arc<Mutex<Vec<NotifiedEvent>>>,
    }

    impl RecordingEventNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded publications
        pub fn notified(&self) -> Vec<NotifiedEvent> {
            self.inner.lock().clone()
        }
    }

    impl EventNotifier for RecordingEventNotifier {
        fn notify(&self, event_name: &str, bundle: &EventBundle) -> Result<(), TransportError> {
            self.inner
                .lock()
                .push(NotifiedEvent { event_name: event_name.to_string(), bundle: bundle.clone() });
            Ok(())
        }
    }

    /// Event notifier that rejects every publication
    #[derive(Clone, Copy, Default)]
    pub struct FailingEventNotifier;

    impl EventNotifier for FailingEventNotifier {
        fn notify(&self, _event_name: &str, _bundle: &EventBundle) -> Result<(), TransportError> {
            Err(TransportError::SendFailed("side-channel unavailable".to_string()))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{
    FailingCommandSender, FailingEventNotifier, NotifiedEvent, RecordingCommandSender,
    RecordingEventNotifier, SentCommand,
};
