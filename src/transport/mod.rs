// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transports that carry JSON-RPC calls to a plasma operator.
//!
//! Every façade call goes through a single capability, [`Transport::invoke`].
//! Two implementations are provided:
//!
//! - [`HttpTransport`] - JSON-RPC 2.0 over HTTP POST, built from Tower
//!   services ([`HttpService`] wrapped in [`LoggingLayer`])
//! - [`FixtureTransport`] - an in-memory table of canned responses for tests
//!
//! Implementations share no base type; anything that satisfies the trait can
//! be injected into [`PlasmaClient`](crate::PlasmaClient) or
//! [`OperatorClient`](crate::OperatorClient).
//!
//! # Usage
//!
//! ```rust,ignore
//! use plasma_client::transport::{HttpTransport, RpcMethod, Transport};
//! use plasma_client::TransportConfig;
//! use std::time::Duration;
//!
//! let transport = HttpTransport::new(
//!     &TransportConfig::new("http://localhost:9898").with_timeout(Duration::from_secs(10)),
//! )?;
//! let height = transport.invoke(RpcMethod::GetHeight, vec![], false).await?;
//! ```

mod envelope;
mod fixture;
mod http;
mod logging;
mod method;

pub use envelope::{RpcRequest, RpcResponse};
pub use fixture::{FixtureResponse, FixtureTransport, RecordedCall};
pub use http::{HttpService, HttpTransport};
pub use logging::{LoggingLayer, LoggingService};
pub use method::{Namespace, RpcMethod, UnknownMethod};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::PlasmaError;

/// Carries one JSON-RPC call to the operator and returns its result.
///
/// Implementations must:
/// - fail with [`RpcError`](crate::RpcError) when the response carries an
///   error indicator, keeping the server's message verbatim
/// - run the result through [`normalize_binary`](crate::codec::normalize_binary)
///   when `convert_binary` is set
/// - perform exactly one round trip per call, with no caching and no retry
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name of the implementation, e.g. `"http"`
    fn name(&self) -> &'static str;

    /// Invokes `method` with positional `params`.
    async fn invoke(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
        convert_binary: bool,
    ) -> Result<Value, PlasmaError>;
}

/// Shared transport handle used by the façades.
pub type SharedTransport = Arc<dyn Transport>;

