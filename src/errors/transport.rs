// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while carrying a call to the operator and back.

/// Failures that prevent a JSON-RPC call from producing a usable response.
///
/// Always surfaced to the caller; the client never retries.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The endpoint could not be reached or the HTTP exchange failed.
    #[error("Request {method} failed")]
    Connection {
        /// RPC method being invoked
        method: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The call did not complete within the configured timeout.
    #[error("Request {method} timed out")]
    Timeout {
        /// RPC method being invoked
        method: String,
    },

    /// The server answered with a non-success HTTP status and no JSON-RPC body.
    #[error("Request {method} returned HTTP {status}")]
    HttpStatus {
        /// RPC method being invoked
        method: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body or result could not be decoded.
    #[error("Malformed response to {method}: {reason}")]
    MalformedResponse {
        /// RPC method being invoked
        method: String,
        /// What was wrong with it
        reason: String,
    },

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TransportError {
    /// Helper to create a `Connection` error from any error type.
    pub fn connection(
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            method: method.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `MalformedResponse` error.
    pub fn malformed(method: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            method: method.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true for timeouts.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
