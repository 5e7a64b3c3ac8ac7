//! Notify event specs
//!
//! The full service→client path: handshake, toast delivery, signal
//! strength, and resilience to corrupt payloads mid-stream.

use crate::prelude::*;

#[test]
fn toast_reaches_the_callback_exactly_once() {
    let notifier = RecordingEventNotifier::new();
    let service = ServiceBridge::new(notifier.clone());
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let callback = RecordingEventCallbacks::new();
    client.set_callback(callback.clone());

    service.dev_toast("hello");
    assert_eq!(deliver_events("input-1", &notifier, &mut client), 1);

    let toasts = callback.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].peer_id, "input-1");
    assert_eq!(toasts[0].message, "hello");
}

#[test]
fn signal_strength_reaches_the_callback() {
    let notifier = RecordingEventNotifier::new();
    let service = ServiceBridge::new(notifier.clone());
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let callback = RecordingEventCallbacks::new();
    client.set_callback(callback.clone());

    service.signal_strength(87);
    deliver_events("hdmi-1", &notifier, &mut client);

    let strengths = callback.strengths();
    assert_eq!(strengths.len(), 1);
    assert_eq!(strengths[0].peer_id, "hdmi-1");
    assert_eq!(strengths[0].strength, 87);
}

#[test]
fn full_session_scenario() {
    // Peer "input-1" reports version 3, toasts "hello", then sends junk.
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let callback = RecordingEventCallbacks::new();
    client.set_callback(callback.clone());

    let report = EventBundle::new().with_int(EVENT_REPORT_VERSION, 3);
    assert!(client.handle_event("input-1", EVENT_REPORT_VERSION, &report));
    assert_eq!(client.peer_version("input-1"), Some(3));

    let envelope =
        EventEnvelope::new(3, SessionEvent::DevToast { message: "hello".to_string() });
    let notify = EventBundle::new()
        .with_bytes(EVENT_COMPAT_NOTIFY, encode(&envelope).expect("encode failed"));
    assert!(client.handle_event("input-1", EVENT_COMPAT_NOTIFY, &notify));

    // Truncated bytes: recognized, logged, no callback.
    let corrupt = EventBundle::new()
        .with_bytes(EVENT_COMPAT_NOTIFY, br#"{"compat_version":3,"ev"#.to_vec());
    assert!(client.handle_event("input-1", EVENT_COMPAT_NOTIFY, &corrupt));

    let toasts = callback.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "hello");
    assert_eq!(client.peer_version("input-1"), Some(3));
}

#[test]
fn events_after_a_corrupt_one_still_flow() {
    let notifier = RecordingEventNotifier::new();
    let service = ServiceBridge::new(notifier.clone());
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let callback = RecordingEventCallbacks::new();
    client.set_callback(callback.clone());

    let corrupt = EventBundle::new().with_bytes(EVENT_COMPAT_NOTIFY, vec![0xde, 0xad]);
    assert!(client.handle_event("input-1", EVENT_COMPAT_NOTIFY, &corrupt));

    service.dev_toast("still alive");
    deliver_events("input-1", &notifier, &mut client);
    assert_eq!(callback.toasts().len(), 1);
}
