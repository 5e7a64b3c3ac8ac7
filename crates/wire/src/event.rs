// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session events, service to client.

use serde::{Deserialize, Serialize};

/// Event from the service backend to the client facade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Developer diagnostic toast to display on the client.
    DevToast { message: String },

    /// Signal strength report for the current session.
    SignalStrength { strength: i32 },
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
