// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! Connection settings live in [`TransportConfig`]; [`ClientConfig`] pairs one
//! for the client namespace with an optional second one for the operator
//! namespace. When no operator transport is configured, operator calls share
//! the client endpoint.
//!
//! # Examples
//!
//! ```rust
//! use plasma_client::ClientConfigBuilder;
//! use std::time::Duration;
//!
//! let config = ClientConfigBuilder::new()
//!     .endpoint("http://plasma.local:9898")
//!     .operator_endpoint("http://operator.local:3000")
//!     .timeout(Duration::from_secs(5))
//!     .build();
//!
//! assert_eq!(config.client.endpoint, "http://plasma.local:9898");
//! assert_eq!(config.operator_config().endpoint, "http://operator.local:3000");
//! ```

pub mod constants;
mod transport;

pub use transport::TransportConfig;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::client::PlasmaClient;
use crate::errors::TransportError;
use crate::operator::OperatorClient;
use crate::transport::{HttpTransport, SharedTransport};

use constants::env;

/// Settings for connecting a [`PlasmaClient`] to its endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Transport for `pg_*` methods
    pub client: TransportConfig,
    /// Transport for operator methods; `None` reuses [`client`](Self::client)
    pub operator: Option<TransportConfig>,
}

impl ClientConfig {
    /// Configuration for a single endpoint serving both namespaces.
    #[must_use]
    pub fn new(client: TransportConfig) -> Self {
        Self {
            client,
            operator: None,
        }
    }

    /// The settings used for operator calls.
    #[must_use]
    pub fn operator_config(&self) -> &TransportConfig {
        self.operator.as_ref().unwrap_or(&self.client)
    }

    /// Reads `PLASMA_RPC_URL`, `PLASMA_OPERATOR_URL` and `PLASMA_RPC_TIMEOUT_MS`.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Unset variables fall back to the defaults. A timeout that is not a
    /// whole number of milliseconds is an error.
    pub fn from_env() -> Result<Self, TransportError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), with variables missing from the
    /// process environment read from the dotenv file at `path`.
    ///
    /// The process environment is left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let invalid = |e: dotenvy::Error| {
            TransportError::InvalidConfig(format!("{}: {e}", path.display()))
        };
        let file = dotenvy::from_path_iter(path)
            .map_err(invalid)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(invalid)?;

        Self::from_lookup(|key| dotenvy::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TransportError> {
        let timeout = match lookup(env::RPC_TIMEOUT_MS) {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    TransportError::InvalidConfig(format!("{}={raw}: {e}", env::RPC_TIMEOUT_MS))
                })?;
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        let mut builder = ClientConfigBuilder::with_defaults();
        if let Some(endpoint) = lookup(env::RPC_URL) {
            builder = builder.endpoint(endpoint);
        }
        if let Some(endpoint) = lookup(env::OPERATOR_URL) {
            builder = builder.operator_endpoint(endpoint);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build())
    }

    /// Builds HTTP transports for both namespaces and wires up a client.
    pub fn connect(&self) -> Result<PlasmaClient, TransportError> {
        let client: SharedTransport = Arc::new(HttpTransport::new(&self.client)?);
        let operator: SharedTransport = match &self.operator {
            Some(config) => Arc::new(HttpTransport::new(config)?),
            None => Arc::clone(&client),
        };

        tracing::debug!(
            client_endpoint = %self.client.endpoint,
            operator_endpoint = %self.operator_config().endpoint,
            "Connecting plasma client"
        );

        Ok(PlasmaClient::new(client).with_operator(OperatorClient::new(operator)))
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder starting from the default local endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with default settings
    pub fn with_defaults() -> Self {
        Self::new()
    }

    /// Set the client endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.client.endpoint = endpoint.into();
        self
    }

    /// Send operator calls to a separate endpoint
    #[must_use]
    pub fn operator_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let mut operator = self
            .config
            .operator
            .take()
            .unwrap_or_else(|| self.config.client.clone());
        operator.endpoint = endpoint.into();
        self.config.operator = Some(operator);
        self
    }

    /// Set the timeout for both transports
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.client.timeout = Some(timeout);
        if let Some(operator) = self.config.operator.as_mut() {
            operator.timeout = Some(timeout);
        }
        self
    }

    /// Log request payloads on both transports
    #[must_use]
    pub fn request_logging(mut self) -> Self {
        self.config.client.log_requests = true;
        if let Some(operator) = self.config.operator.as_mut() {
            operator.log_requests = true;
        }
        self
    }

    /// Log response payloads on both transports
    #[must_use]
    pub fn response_logging(mut self) -> Self {
        self.config.client.log_responses = true;
        if let Some(operator) = self.config.operator.as_mut() {
            operator.log_responses = true;
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
