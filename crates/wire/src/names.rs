// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known channel and event names shared by both peers.
//!
//! These strings are the interop surface of the side-channel: both sides
//! must agree on them exactly. Values are never reused for new meanings.

/// Protocol revision this build speaks, stamped into every envelope.
pub const COMPAT_VERSION: i32 = 1;

/// The single outbound channel name carrying all client commands.
pub const CHANNEL_COMPAT_COMMAND: &str = "compat_command";

/// Version handshake event. The reported integer is keyed by this name
/// inside the payload bundle.
pub const EVENT_REPORT_VERSION: &str = "compat_report_version";

/// Generic notify event. The encoded event envelope is keyed by this name
/// inside the payload bundle.
pub const EVENT_COMPAT_NOTIFY: &str = "compat_notify";

/// Side field carrying a human-readable error string when the sender could
/// not produce notify bytes.
pub const EVENT_COMPAT_NOTIFY_ERROR: &str = "compat_notify_error";
