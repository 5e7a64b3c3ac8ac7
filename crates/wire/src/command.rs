// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command messages, client to service.

use serde::{Deserialize, Serialize};

/// Command from the client facade to the service backend.
///
/// A closed set: new kinds get new tags, existing tags are never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Command {
    /// Developer diagnostic message for the service to surface.
    DevMessage { message: String },
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
