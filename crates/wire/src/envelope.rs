// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-stamped envelopes wrapping the tagged unions.
//!
//! The version field and the inner payload decode independently: a peer
//! that does not understand the inner union can still read the version,
//! and an envelope whose inner field is missing decodes to the reserved
//! "unset" state instead of failing.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::event::SessionEvent;
use crate::wire::{self, WireError};

/// Outer wrapper for a client command in transit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandEnvelope {
    /// Protocol revision of the sending client.
    pub compat_version: i32,

    /// The command payload. `None` is the reserved unset state: decodable,
    /// never constructed locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

impl CommandEnvelope {
    /// Wrap a command with the sender's protocol revision.
    pub fn new(compat_version: i32, command: Command) -> Self {
        Self { compat_version, command: Some(command) }
    }

    /// Decode an envelope from an opaque payload.
    ///
    /// Empty payloads mean "no command present", a legitimate transport
    /// state rather than a decode error.
    pub fn from_payload(payload: &[u8]) -> Result<Option<Self>, WireError> {
        wire::decode_optional(payload)
    }
}

/// Outer wrapper for a session event in transit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventEnvelope {
    /// Protocol revision of the sending service.
    pub compat_version: i32,

    /// The event payload. `None` is the reserved unset state: decodable,
    /// never constructed locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<SessionEvent>,
}

impl EventEnvelope {
    /// Wrap an event with the sender's protocol revision.
    pub fn new(compat_version: i32, event: SessionEvent) -> Self {
        Self { compat_version, event: Some(event) }
    }

    /// Decode an envelope from an opaque payload.
    ///
    /// Empty payloads mean "no event present", a legitimate transport
    /// state rather than a decode error.
    pub fn from_payload(payload: &[u8]) -> Result<Option<Self>, WireError> {
        wire::decode_optional(payload)
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
