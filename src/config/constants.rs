// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol and configuration constants
//!
//! This module centralizes magic values used throughout the crate.

/// JSON-RPC protocol version written into every request envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Endpoint used when none is configured (a locally running operator)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9898";

/// Request timeout applied by the default configuration
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables read by [`ClientConfig::from_env`](super::ClientConfig::from_env)
pub mod env {
    /// Client namespace endpoint
    pub const RPC_URL: &str = "PLASMA_RPC_URL";
    /// Operator namespace endpoint; defaults to the client endpoint
    pub const OPERATOR_URL: &str = "PLASMA_OPERATOR_URL";
    /// Request timeout in milliseconds
    pub const RPC_TIMEOUT_MS: &str = "PLASMA_RPC_TIMEOUT_MS";
}
