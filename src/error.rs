// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ShellyR` library.
//!
//! This module provides the error hierarchy for failures across the
//! library: value validation, RPC communication, and JSON parsing.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during RPC communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },
}

/// Errors related to RPC communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the round-trip timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Device answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    Status {
        /// The HTTP status code returned by the device.
        status: u16,
    },
}

/// Errors related to parsing Shelly RPC responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::OutOfRange {
            min: 1,
            max: 100,
            actual: 0,
        };
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::OutOfRange { .. })));
    }

    #[test]
    fn timeout_display() {
        let err = ProtocolError::Timeout(5000);
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }

    #[test]
    fn status_display() {
        let err = ProtocolError::Status { status: 503 };
        assert_eq!(err.to_string(), "HTTP status 503");
    }
}
