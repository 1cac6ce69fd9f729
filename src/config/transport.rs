// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport configuration options

use std::time::Duration;

use super::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Configuration for creating an [`HttpTransport`](crate::transport::HttpTransport)
///
/// # Example
///
/// ```rust
/// use plasma_client::TransportConfig;
/// use std::time::Duration;
///
/// let config = TransportConfig::new("http://localhost:9898")
///     .with_timeout(Duration::from_secs(10))
///     .with_request_logging();
/// assert!(config.log_requests);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// JSON-RPC endpoint URL
    pub endpoint: String,
    /// Per-call timeout (None applies `DEFAULT_TIMEOUT_SECS`)
    pub timeout: Option<Duration>,
    /// Log request payloads at TRACE level
    pub log_requests: bool,
    /// Log response payloads at TRACE level
    pub log_responses: bool,
}

impl TransportConfig {
    /// Create a new configuration for `endpoint` with the default timeout
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
            log_requests: false,
            log_responses: false,
        }
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set request timeout from an optional value
    #[must_use]
    pub fn with_timeout_opt(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Log request payloads
    #[must_use]
    pub fn with_request_logging(mut self) -> Self {
        self.log_requests = true;
        self
    }

    /// Log response payloads
    #[must_use]
    pub fn with_response_logging(mut self) -> Self {
        self.log_responses = true;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::local_node(DEFAULT_ENDPOINT)
    }
}

/// Preset configurations
impl TransportConfig {
    /// Configuration preset for an operator on the local machine
    #[must_use]
    pub fn local_node(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Configuration preset for a remote operator (longer timeout)
    #[must_use]
    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).with_timeout(Duration::from_secs(60))
    }
}
