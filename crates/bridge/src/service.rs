// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service-side bridge endpoint.
//!
//! The mirror of the client bridge: decodes inbound command payloads and
//! publishes events and version reports back through the side-channel.

use tracing::warn;

use pb_wire::{
    encode, Command, CommandEnvelope, EventEnvelope, SessionEvent, CHANNEL_COMPAT_COMMAND,
    COMPAT_VERSION, EVENT_COMPAT_NOTIFY, EVENT_COMPAT_NOTIFY_ERROR, EVENT_REPORT_VERSION,
};

use crate::bundle::EventBundle;
use crate::callback::CommandCallbacks;
use crate::transport::EventNotifier;

/// Service endpoint of the compat bridge.
pub struct ServiceBridge<N: EventNotifier> {
    notifier: N,
    callback: Option<Box<dyn CommandCallbacks>>,
}

impl<N: EventNotifier> ServiceBridge<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier, callback: None }
    }

    /// Publish this build's protocol revision to the client.
    ///
    /// The embedding application calls this when a session comes up; the
    /// bridge defines no timing of its own.
    pub fn report_version(&self) {
        let bundle = EventBundle::new().with_int(EVENT_REPORT_VERSION, COMPAT_VERSION);
        if let Err(err) = self.notifier.notify(EVENT_REPORT_VERSION, &bundle) {
            warn!(error = %err, "failed to publish version report");
        }
    }

    /// Show a developer diagnostic toast on the client.
    pub fn dev_toast(&self, message: impl Into<String>) {
        self.notify_event(SessionEvent::DevToast { message: message.into() });
    }

    /// Report signal strength to the client.
    pub fn signal_strength(&self, strength: i32) {
        self.notify_event(SessionEvent::SignalStrength { strength });
    }

    fn notify_event(&self, event: SessionEvent) {
        let envelope = EventEnvelope::new(COMPAT_VERSION, event);
        let bundle = match encode(&envelope) {
            Ok(payload) => EventBundle::new().with_bytes(EVENT_COMPAT_NOTIFY, payload),
            Err(err) => {
                // Deliver the failure as text so the client can log it.
                warn!(error = %err, "failed to encode notify payload");
                EventBundle::new().with_text(EVENT_COMPAT_NOTIFY_ERROR, err.to_string())
            }
        };
        if let Err(err) = self.notifier.notify(EVENT_COMPAT_NOTIFY, &bundle) {
            warn!(error = %err, "failed to publish notify event");
        }
    }

    /// Consume an inbound command payload from the side-channel.
    ///
    /// Returns whether the channel name belongs to this bridge. Payload
    /// problems never surface to the caller.
    pub fn handle_command(&self, peer_id: &str, channel: &str, payload: &[u8]) -> bool {
        if channel != CHANNEL_COMPAT_COMMAND {
            return false;
        }
        match CommandEnvelope::from_payload(payload) {
            Ok(Some(envelope)) => self.dispatch_command(peer_id, envelope),
            Ok(None) => {}
            Err(err) => warn!(peer_id, error = %err, "failed to parse compat command"),
        }
        true
    }

    fn dispatch_command(&self, peer_id: &str, envelope: CommandEnvelope) {
        match envelope.command {
            Some(Command::DevMessage { message }) => {
                if let Some(callback) = &self.callback {
                    callback.on_dev_message(peer_id, &message);
                }
            }
            None => warn!(peer_id, "command envelope has no command set"),
        }
    }

    /// Replace the registered command handler. At most one is active.
    pub fn set_callback(&mut self, callback: impl CommandCallbacks + 'static) {
        self.callback = Some(Box::new(callback));
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
