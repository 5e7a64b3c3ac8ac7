// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side bridge endpoint.
//!
//! Sends commands to the service through the opaque-send primitive and
//! routes inbound events from the side-channel to the registered
//! callback, tracking each peer's reported protocol revision.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use pb_wire::{
    encode, Command, CommandEnvelope, EventEnvelope, SessionEvent, WireError,
    CHANNEL_COMPAT_COMMAND, COMPAT_VERSION, EVENT_COMPAT_NOTIFY, EVENT_COMPAT_NOTIFY_ERROR,
    EVENT_REPORT_VERSION,
};

use crate::bundle::EventBundle;
use crate::callback::EventCallbacks;
use crate::transport::{CommandSender, TransportError};

/// Errors from the internal send path. Logged and discarded at the public
/// boundary; sends are advisory.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Client endpoint of the compat bridge.
///
/// Expects serial invocation from one logical dispatch thread; holds no
/// locks over the version table or callback slot.
pub struct ClientBridge<S: CommandSender> {
    sender: S,
    peer_versions: HashMap<String, i32>,
    callback: Option<Box<dyn EventCallbacks>>,
}

impl<S: CommandSender> ClientBridge<S> {
    pub fn new(sender: S) -> Self {
        Self { sender, peer_versions: HashMap::new(), callback: None }
    }

    /// Send a developer diagnostic message to the service.
    ///
    /// Best-effort: the caller cannot distinguish delivered from dropped.
    pub fn dev_message(&self, message: impl Into<String>) {
        self.send_command(Command::DevMessage { message: message.into() });
    }

    fn send_command(&self, command: Command) {
        if let Err(err) = self.try_send(command) {
            warn!(error = %err, "failed to send compat command");
        }
    }

    fn try_send(&self, command: Command) -> Result<(), SendError> {
        let envelope = CommandEnvelope::new(COMPAT_VERSION, command);
        let payload = encode(&envelope)?;
        self.sender.send(CHANNEL_COMPAT_COMMAND, &payload)?;
        Ok(())
    }

    /// Consume an inbound side-channel event.
    ///
    /// Returns whether the event name belongs to this bridge; `false` lets
    /// an outer dispatcher try other handlers. Payload problems never
    /// surface to the caller; the one event is dropped and logged.
    pub fn handle_event(&mut self, peer_id: &str, event_name: &str, args: &EventBundle) -> bool {
        match event_name {
            EVENT_REPORT_VERSION => {
                let version = args.int(EVENT_REPORT_VERSION).unwrap_or(0);
                self.peer_versions.insert(peer_id.to_string(), version);
                debug!(peer_id, version, "peer reported compat version");
                true
            }
            EVENT_COMPAT_NOTIFY => {
                self.handle_notify(peer_id, args);
                true
            }
            _ => false,
        }
    }

    fn handle_notify(&self, peer_id: &str, args: &EventBundle) {
        let Some(payload) = args.bytes(EVENT_COMPAT_NOTIFY) else {
            // No payload bytes: the peer sent an error report, or nothing.
            if let Some(detail) = args.text(EVENT_COMPAT_NOTIFY_ERROR) {
                warn!(peer_id, detail, "peer reported a notify error");
            }
            return;
        };
        match EventEnvelope::from_payload(payload) {
            Ok(Some(envelope)) => self.dispatch_event(peer_id, envelope),
            Ok(None) => {}
            Err(err) => match args.text(EVENT_COMPAT_NOTIFY_ERROR) {
                Some(detail) => warn!(peer_id, detail, "notify payload unusable"),
                None => warn!(peer_id, error = %err, "failed to parse notify payload"),
            },
        }
    }

    fn dispatch_event(&self, peer_id: &str, envelope: EventEnvelope) {
        match envelope.event {
            Some(SessionEvent::DevToast { message }) => {
                if let Some(callback) = &self.callback {
                    callback.on_dev_toast(peer_id, &message);
                }
            }
            Some(SessionEvent::SignalStrength { strength }) => {
                if let Some(callback) = &self.callback {
                    callback.on_signal_strength(peer_id, strength);
                }
            }
            None => warn!(peer_id, "notify envelope has no event set"),
        }
    }

    /// Replace the registered event handler. At most one is active.
    pub fn set_callback(&mut self, callback: impl EventCallbacks + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Protocol revision the peer last reported, if it ever did.
    pub fn peer_version(&self, peer_id: &str) -> Option<i32> {
        self.peer_versions.get(peer_id).copied()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
