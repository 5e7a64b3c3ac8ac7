// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-tolerant bridge between a client facade and a service backend.
//!
//! The two sides exchange structured commands and events over a
//! side-channel that only carries named opaque payloads. Each endpoint
//! serializes through `pb-wire` envelopes and routes decoded messages to a
//! single registered callback. Sends are fire-and-forget: transport and
//! codec failures are logged and dropped, never propagated.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod bundle;
mod callback;
mod client;
mod service;
mod transport;

pub use bundle::{BundleValue, EventBundle};
pub use callback::{CommandCallbacks, EventCallbacks};
pub use client::{ClientBridge, SendError};
pub use service::ServiceBridge;
pub use transport::{CommandSender, EventNotifier, TransportError};

#[cfg(any(test, feature = "test-support"))]
pub use callback::{
    DevMessageCall, RecordingCommandCallbacks, RecordingEventCallbacks, StrengthCall, ToastCall,
};
#[cfg(any(test, feature = "test-support"))]
pub use transport::{
    FailingCommandSender, FailingEventNotifier, NotifiedEvent, RecordingCommandSender,
    RecordingEventNotifier, SentCommand,
};
