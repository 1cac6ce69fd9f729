// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory transport answering from a table of canned responses.
//!
//! Lets façade logic run without a live operator. Responses are keyed by
//! method and positional params; a per-method fallback answers any params.
//! Every call is recorded so tests can assert on what was (and was not) sent.
//!
//! # Example
//!
//! ```rust
//! use plasma_client::transport::{FixtureTransport, RpcMethod, Transport};
//! use serde_json::json;
//!
//! # tokio_test_block_on(async {
//! let transport = FixtureTransport::new()
//!     .respond(RpcMethod::GetBalances, vec![json!("0xabc")], json!({ "ETH": "64" }))
//!     .respond_any(RpcMethod::GetNextBlock, json!(7));
//!
//! let balances = transport
//!     .invoke(RpcMethod::GetBalances, vec![json!("0xabc")], false)
//!     .await
//!     .unwrap();
//! assert_eq!(balances, json!({ "ETH": "64" }));
//! assert_eq!(transport.call_count(RpcMethod::GetBalances), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

use super::method::RpcMethod;
use super::Transport;
use crate::codec::normalize_binary;
use crate::errors::{PlasmaError, RpcError};

/// A canned answer.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureResponse {
    /// The call succeeds with this result
    Result(Value),
    /// The call fails with this operator error
    Error(RpcError),
}

/// A call observed by [`FixtureTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Method invoked
    pub method: RpcMethod,
    /// Params passed
    pub params: Vec<Value>,
    /// Whether binary conversion was requested
    pub convert_binary: bool,
}

#[derive(Debug, Default)]
struct MethodTable {
    exact: Vec<(Vec<Value>, FixtureResponse)>,
    fallback: Option<FixtureResponse>,
}

impl MethodTable {
    fn lookup(&self, params: &[Value]) -> Option<&FixtureResponse> {
        self.exact
            .iter()
            .find(|(expected, _)| expected.as_slice() == params)
            .map(|(_, response)| response)
            .or(self.fallback.as_ref())
    }
}

/// [`Transport`] backed by an in-memory response table.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    table: HashMap<RpcMethod, MethodTable>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FixtureTransport {
    /// Creates an empty fixture; every call fails until responses are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method` called with exactly `params`.
    #[must_use]
    pub fn respond(mut self, method: RpcMethod, params: Vec<Value>, result: Value) -> Self {
        self.insert(method, Some(params), FixtureResponse::Result(result));
        self
    }

    /// Answers `method` regardless of params, unless an exact entry matches.
    #[must_use]
    pub fn respond_any(mut self, method: RpcMethod, result: Value) -> Self {
        self.insert(method, None, FixtureResponse::Result(result));
        self
    }

    /// Fails `method` called with exactly `params`.
    #[must_use]
    pub fn fail(mut self, method: RpcMethod, params: Vec<Value>, error: RpcError) -> Self {
        self.insert(method, Some(params), FixtureResponse::Error(error));
        self
    }

    /// Fails `method` regardless of params, unless an exact entry matches.
    #[must_use]
    pub fn fail_any(mut self, method: RpcMethod, error: RpcError) -> Self {
        self.insert(method, None, FixtureResponse::Error(error));
        self
    }

    fn insert(&mut self, method: RpcMethod, params: Option<Vec<Value>>, response: FixtureResponse) {
        let entry = self.table.entry(method).or_default();
        match params {
            Some(params) => {
                entry.exact.retain(|(existing, _)| existing != &params);
                entry.exact.push((params, response));
            }
            None => entry.fallback = Some(response),
        }
    }

    /// Methods with at least one canned response.
    pub fn methods(&self) -> Vec<RpcMethod> {
        let mut methods: Vec<_> = self.table.keys().copied().collect();
        methods.sort();
        methods
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Calls received for one method, in order.
    pub fn calls_to(&self, method: RpcMethod) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }

    /// Number of calls received for one method.
    pub fn call_count(&self, method: RpcMethod) -> usize {
        self.calls_to(method).len()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn invoke(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
        convert_binary: bool,
    ) -> Result<Value, PlasmaError> {
        trace!(%method, ?params, "fixture call");

        let response = self
            .table
            .get(&method)
            .and_then(|table| table.lookup(&params))
            .cloned();

        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method,
                params,
                convert_binary,
            });

        match response {
            Some(FixtureResponse::Result(result)) if convert_binary => {
                Ok(normalize_binary(result))
            }
            Some(FixtureResponse::Result(result)) => Ok(result),
            Some(FixtureResponse::Error(error)) => Err(error.into()),
            None => Err(RpcError::method_not_found(method.as_str()).into()),
        }
    }
}
