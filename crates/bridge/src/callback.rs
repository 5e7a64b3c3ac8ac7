// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback capabilities exposed by the bridge endpoints.
//!
//! Each bridge holds at most one registered handler and invokes it
//! synchronously on the thread that delivered the message.

/// Events decoded by the client bridge.
pub trait EventCallbacks {
    /// Developer diagnostic toast from the peer.
    fn on_dev_toast(&self, peer_id: &str, message: &str);

    /// Signal strength report from the peer.
    fn on_signal_strength(&self, peer_id: &str, strength: i32);
}

/// Commands decoded by the service bridge.
pub trait CommandCallbacks {
    /// Developer diagnostic message from the client.
    fn on_dev_message(&self, peer_id: &str, message: &str);
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use parking_lot::Mutex;
    use std::sync::Arc;

    use super::{CommandCallbacks, EventCallbacks};

    /// Recorded dev toast
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ToastCall {
        pub peer_id: String,
        pub message: String,
    }

    /// Recorded signal strength report
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StrengthCall {
        pub peer_id: String,
        pub strength: i32,
    }

    #[derive(Default)]
    struct RecordedEvents {
        toasts: Vec<ToastCall>,
        strengths: Vec<StrengthCall>,
    }

    /// Recording event callbacks for testing
    #[derive(Clone, Default)]
    pub struct RecordingEventCallbacks {
        inner: Arc<Mutex<RecordedEvents>>,
    }

    impl RecordingEventCallbacks {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded toasts
        pub fn toasts(&self) -> Vec<ToastCall> {
            self.inner.lock().toasts.clone()
        }

        /// Get all recorded strength reports
        pub fn strengths(&self) -> Vec<StrengthCall> {
            self.inner.lock().strengths.clone()
        }
    }

    impl EventCallbacks for RecordingEventCallbacks {
        fn on_dev_toast(&self, peer_id: &str, message: &str) {
            self.inner
                .lock()
                .toasts
                .push(ToastCall { peer_id: peer_id.to_string(), message: message.to_string() });
        }

        fn on_signal_strength(&self, peer_id: &str, strength: i32) {
            self.inner
                .lock()
                .strengths
                .push(StrengthCall { peer_id: peer_id.to_string(), strength });
        }
    }

    /// Recorded dev message
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DevMessageCall {
        pub peer_id: String,
        pub message: String,
    }

    /// Recording command callbacks for testing
    #[derive(Clone, Default)]
    pub struct RecordingCommandCallbacks {
        inner: Arc<Mutex<Vec<DevMessageCall>>>,
    }

    impl RecordingCommandCallbacks {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded dev messages
        pub fn messages(&self) -> Vec<DevMessageCall> {
            self.inner.lock().clone()
        }
    }

    impl CommandCallbacks for RecordingCommandCallbacks {
        fn on_dev_message(&self, peer_id: &str, message: &str) {
            self.inner
                .lock()
                .push(DevMessageCall { peer_id: peer_id.to_string(), message: message.to_string() });
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{
    DevMessageCall, RecordingCommandCallbacks, RecordingEventCallbacks, StrengthCall, ToastCall,
};
