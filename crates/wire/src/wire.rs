// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON encoding and decoding for envelope payloads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from payload encoding/decoding.
#[derive(Debug, Error)]
pub enum WireError {
    /// Payload bytes do not parse as the expected envelope.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Value could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Encode a value to a JSON payload.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, WireError> {
    serde_json::to_vec(value).map_err(|e| WireError::Encode(e.to_string()))
}

/// Decode a payload, treating an empty byte sequence as "nothing present".
///
/// The same malformed input always produces the same error; decoding never
/// panics regardless of input.
pub(crate) fn decode_optional<T: DeserializeOwned>(payload: &[u8]) -> Result<Option<T>, WireError> {
    if payload.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(payload).map(Some).map_err(|e| WireError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
