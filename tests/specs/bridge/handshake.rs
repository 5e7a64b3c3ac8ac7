//! Version handshake specs
//!
//! Verify the service's version report lands in the client's per-peer
//! table and that peers are tracked independently.

use crate::prelude::*;

#[test]
fn report_version_populates_the_peer_table() {
    let notifier = RecordingEventNotifier::new();
    let service = ServiceBridge::new(notifier.clone());
    let mut client = ClientBridge::new(RecordingCommandSender::new());

    assert_eq!(client.peer_version("input-1"), None);

    service.report_version();
    assert_eq!(deliver_events("input-1", &notifier, &mut client), 1);
    assert_eq!(client.peer_version("input-1"), Some(COMPAT_VERSION));
}

#[test]
fn peers_report_independently() {
    let mut client = ClientBridge::new(RecordingCommandSender::new());

    // Two sessions, each with its own service endpoint.
    for peer in ["input-1", "input-2"] {
        let notifier = RecordingEventNotifier::new();
        let service = ServiceBridge::new(notifier.clone());
        service.report_version();
        deliver_events(peer, &notifier, &mut client);
    }

    assert_eq!(client.peer_version("input-1"), Some(COMPAT_VERSION));
    assert_eq!(client.peer_version("input-2"), Some(COMPAT_VERSION));
    assert_eq!(client.peer_version("input-3"), None);
}

#[test]
fn a_newer_peer_version_is_stored_as_reported() {
    // A peer built from a later protocol revision reports a number this
    // build has never seen; the table stores it verbatim.
    let mut client = ClientBridge::new(RecordingCommandSender::new());
    let bundle = EventBundle::new().with_int(EVENT_REPORT_VERSION, 3);

    assert!(client.handle_event("input-1", EVENT_REPORT_VERSION, &bundle));
    assert_eq!(client.peer_version("input-1"), Some(3));
}
