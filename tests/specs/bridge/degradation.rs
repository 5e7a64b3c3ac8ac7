//! Degradation specs
//!
//! The bridge trades reliability for resilience: failed or unusable
//! traffic is dropped quietly and both endpoints keep operating.

use crate::prelude::*;
use pb_bridge::{FailingCommandSender, FailingEventNotifier};

#[test]
fn a_dead_side_channel_never_surfaces_to_callers() {
    let client = ClientBridge::new(FailingCommandSender);
    client.dev_message("first");
    client.dev_message("second");

    let service = ServiceBridge::new(FailingEventNotifier);
    service.report_version();
    service.dev_toast("unseen");
    service.signal_strength(-1);
}

#[test]
fn an_error_report_replaces_the_payload() {
    // When the service cannot produce notify bytes it publishes the error
    // text instead; the client recognizes the event and drops it quietly.
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let callback = RecordingEventCallbacks::new();
    client.set_callback(callback.clone());

    let bundle = EventBundle::new().with_text(EVENT_COMPAT_NOTIFY_ERROR, "proto encode failed");
    assert!(client.handle_event("input-1", EVENT_COMPAT_NOTIFY, &bundle));
    assert!(callback.toasts().is_empty());
    assert!(callback.strengths().is_empty());
}

#[test]
fn unrecognized_events_fall_through_to_the_outer_dispatcher() {
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let bundle = EventBundle::new().with_text("caption_style", "cc1");

    assert!(!client.handle_event("input-1", "platform_caption_event", &bundle));
    assert_eq!(client.peer_version("input-1"), None);
}
