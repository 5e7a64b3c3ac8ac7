// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compat protocol schema for the client/service bridge.
//!
//! Wire format: JSON payload, internally tagged unions wrapped in a
//! version-stamped envelope. Unknown fields are ignored on decode so the
//! two peers can be built from different protocol revisions.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod command;
mod envelope;
mod event;
mod names;
mod wire;

pub use command::Command;
pub use envelope::{CommandEnvelope, EventEnvelope};
pub use event::SessionEvent;
pub use names::{
    CHANNEL_COMPAT_COMMAND, COMPAT_VERSION, EVENT_COMPAT_NOTIFY, EVENT_COMPAT_NOTIFY_ERROR,
    EVENT_REPORT_VERSION,
};
pub use wire::{encode, WireError};
