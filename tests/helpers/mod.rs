// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for plasma-client integration tests
//!
//! Provides fixture transports pre-loaded with operator answers, so the
//! façades can be exercised without a running node.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use alloy_primitives::{address, Address};
use plasma_client::{FixtureTransport, PlasmaClient, RpcMethod};
use serde_json::{json, Value};

/// Sender used across scenarios
pub const ALICE: Address = address!("a11ce00000000000000000000000000000000001");

/// Recipient used across scenarios
pub const BOB: Address = address!("b0b0000000000000000000000000000000000002");

/// Installs a fmt subscriber once, honouring `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A range as the operator serializes it
pub fn wire_range(start: &str, end: &str) -> Value {
    json!({ "start": start, "end": end })
}

/// Fixture answering every step of an assembled send
///
/// # Example
///
/// ```rust,ignore
/// let fixture = send_fixture(vec![wire_range("0", "32")], 7)
///     .respond_any(RpcMethod::Sign, json!("0xsig"));
/// ```
pub fn send_fixture(ranges: Vec<Value>, next_block: u64) -> FixtureTransport {
    FixtureTransport::new()
        .respond_any(RpcMethod::PickRanges, Value::Array(ranges))
        .respond_any(RpcMethod::GetNextBlock, json!(next_block))
        .respond_any(RpcMethod::Sign, json!("0xfeedface"))
        .respond_any(RpcMethod::SendTransaction, json!({ "accepted": true }))
}

/// Wraps a fixture in a client, returning both so calls can be inspected.
pub fn client_over(fixture: FixtureTransport) -> (PlasmaClient, Arc<FixtureTransport>) {
    let fixture = Arc::new(fixture);
    (PlasmaClient::new(fixture.clone()), fixture)
}
