// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `gohome_client` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, protocol communication, JSON parsing, and the failure side of
//! a submitted create-operation ([`SubmitError`]).

use thiserror::Error;

/// Message used when no structured error can be extracted from the server.
pub const FALLBACK_MESSAGE: &str = "Unknown error";

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a payload.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A create-operation was not accepted by the server.
    #[error("submit error: {0}")]
    Submit(#[from] SubmitError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An identifier used as a URL path segment was empty.
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier {
        /// What the identifier names (`"device"`, `"sensor"`).
        kind: &'static str,
    },

    /// An identifier consisting only of `.` or `..` would be resolved as a
    /// relative path segment.
    #[error("{kind} identifier must not be a dot segment: {value}")]
    DotSegment {
        /// What the identifier names (`"device"`, `"sensor"`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A string did not name any known variant of an enumerated value.
    #[error("invalid {kind}: {value}")]
    UnknownVariant {
        /// The enumerated type being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Errors related to protocol communication (HTTP/WebSocket).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP client could not be built or a request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// WebSocket handshake or transport failed.
    #[cfg(feature = "websocket")]
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The relay already owns a live connection.
    #[error("connection is already established")]
    AlreadyConnected,

    /// [`close`](crate::relay::EventRelay::close) was called before the
    /// handshake completed.
    #[cfg(feature = "websocket")]
    #[error("connection closed during handshake")]
    ClosedDuringHandshake,
}

/// Errors related to parsing JSON payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the payload.
    #[error("missing field in payload: {0}")]
    MissingField(String),
}

/// Failure outcome of a create-operation.
///
/// Every variant maps to a plain display string through [`SubmitError::message`]:
/// the server-supplied `error` field when one could be extracted, otherwise
/// [`FALLBACK_MESSAGE`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request never completed (connection refused, DNS, timeout, abort).
    #[cfg(feature = "http")]
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status other than `201 Created`.
    #[error("server rejected request with HTTP {status}: {}", message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// The `error` field of the JSON response body, if present.
        message: Option<String>,
    },
}

impl SubmitError {
    /// Returns the message intended for direct display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => FALLBACK_MESSAGE,
        }
    }

    /// Returns the HTTP status code if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request completed but was not accepted.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Result of a create-operation: `Ok(())` on `201 Created`.
pub type Outcome = std::result::Result<(), SubmitError>;

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::EmptyIdentifier { kind: "device" };
        assert_eq!(err.to_string(), "device identifier must not be empty");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EmptyIdentifier { kind: "sensor" }.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::EmptyIdentifier { kind: "sensor" })
        ));
    }

    #[test]
    fn rejected_with_server_message() {
        let err = SubmitError::Rejected {
            status: 400,
            message: Some("bad input".to_string()),
        };
        assert_eq!(err.message(), "bad input");
        assert_eq!(err.status(), Some(400));
        assert!(err.is_rejected());
        assert_eq!(
            err.to_string(),
            "server rejected request with HTTP 400: bad input"
        );
    }

    #[test]
    fn rejected_without_message_falls_back() {
        let err = SubmitError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn serialize_error_uses_fallback() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SubmitError::Serialize(json_err);
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.status(), None);
        assert!(!err.is_rejected());
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("sensor_id".to_string());
        assert_eq!(err.to_string(), "missing field in payload: sensor_id");
    }
}
