// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for automatic transaction assembly
//!
//! Drives `send_transaction_auto` end to end against fixture transports and
//! checks the exact sequence of RPC calls it makes.

mod helpers;

use alloy_primitives::U256;
use helpers::{client_over, init_tracing, send_fixture, wire_range, ALICE, BOB};
use plasma_client::{
    PlasmaError, Range, RpcError, RpcMethod, ShapeError, SignedTransaction, UnsignedTransaction,
};
use serde_json::{json, Value};

#[tokio::test]
async fn test_two_range_send_signs_once_and_replicates_signature() {
    init_tracing();
    let (client, fixture) = client_over(send_fixture(
        vec![wire_range("0", "32"), wire_range("32", "64")],
        7,
    ));

    let receipt = client
        .send_transaction_auto(ALICE, BOB, "ETH", 100u64)
        .await
        .unwrap();
    assert_eq!(receipt, json!({ "accepted": true }));

    let methods: Vec<RpcMethod> = fixture.calls().iter().map(|c| c.method).collect();
    assert_eq!(
        methods,
        vec![
            RpcMethod::PickRanges,
            RpcMethod::GetNextBlock,
            RpcMethod::Sign,
            RpcMethod::SendTransaction,
        ]
    );

    // Range selection got the normalized token and amount
    let pick = &fixture.calls_to(RpcMethod::PickRanges)[0];
    assert_eq!(pick.params, vec![json!(ALICE), json!("ETH"), json!("64")]);

    let expected = UnsignedTransaction::from_ranges(
        7,
        [
            Range::new(U256::from(0), U256::from(50)).unwrap(),
            Range::new(U256::from(50), U256::from(100)).unwrap(),
        ],
        ALICE,
        BOB,
    );

    let sign = &fixture.calls_to(RpcMethod::Sign)[0];
    assert_eq!(sign.params, vec![json!(ALICE), json!(expected.hash())]);

    let submitted = &fixture.calls_to(RpcMethod::SendTransaction)[0].params[0];
    let signed: SignedTransaction = serde_json::from_value(submitted.clone()).unwrap();
    assert_eq!(signed.block(), 7);
    assert_eq!(signed.transfers().len(), 2);
    assert!(signed
        .transfers()
        .iter()
        .all(|t| t.sender == ALICE && t.recipient == BOB));
    assert_eq!(signed.signatures().len(), 2);
    assert!(signed
        .signatures()
        .iter()
        .all(|s| s.as_value() == &json!("0xfeedface")));
    assert_eq!(signed.hash(), expected.hash());
}

#[tokio::test]
async fn test_range_selection_error_propagates_unchanged() {
    let (client, fixture) = client_over(
        send_fixture(vec![], 7)
            .fail_any(RpcMethod::PickRanges, RpcError::new("insufficient ranges")),
    );

    let err = client
        .send_transaction_auto(ALICE, BOB, "ETH", 100u64)
        .await
        .unwrap_err();

    assert!(err.is_rpc());
    assert_eq!(err.to_string(), "insufficient ranges");
    assert_eq!(err.as_rpc().unwrap().message(), "insufficient ranges");
    assert_eq!(fixture.call_count(RpcMethod::Sign), 0);
    assert_eq!(fixture.call_count(RpcMethod::SendTransaction), 0);
}

#[tokio::test]
async fn test_malformed_amount_makes_no_calls() {
    let (client, fixture) = client_over(send_fixture(vec![wire_range("0", "1")], 1));

    let err = client
        .send_transaction_auto(ALICE, BOB, "ETH", "12abc")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlasmaError::Shape(ShapeError::InvalidAmount { .. })
    ));
    assert!(fixture.calls().is_empty());
}

#[tokio::test]
async fn test_empty_token_makes_no_calls() {
    let (client, fixture) = client_over(send_fixture(vec![wire_range("0", "1")], 1));

    let err = client
        .send_transaction_auto(ALICE, BOB, "", 1u64)
        .await
        .unwrap_err();

    assert!(err.is_shape());
    assert!(fixture.calls().is_empty());
}

#[tokio::test]
async fn test_numeric_token_is_hex_encoded() {
    let (client, fixture) = client_over(send_fixture(vec![wire_range("0", "ff")], 3));

    client
        .send_transaction_auto(ALICE, BOB, 255u64, 255u64)
        .await
        .unwrap();

    let pick = &fixture.calls_to(RpcMethod::PickRanges)[0];
    assert_eq!(pick.params[1], json!("ff"));
    assert_eq!(pick.params[2], json!("ff"));
}

#[tokio::test]
async fn test_submission_error_surfaces_after_signing() {
    let (client, fixture) = client_over(
        send_fixture(vec![wire_range("0", "a")], 4)
            .fail_any(RpcMethod::SendTransaction, RpcError::new("invalid signature").with_code(-32000)),
    );

    let err = client
        .send_transaction_auto(ALICE, BOB, "ETH", 10u64)
        .await
        .unwrap_err();

    assert_eq!(err.as_rpc().and_then(|e| e.code()), Some(-32000));
    assert_eq!(fixture.call_count(RpcMethod::Sign), 1);
}

#[tokio::test]
async fn test_prepare_leaves_signing_to_caller() {
    let (client, fixture) = client_over(send_fixture(
        vec![wire_range("32", "64"), wire_range("0", "32")],
        9,
    ));

    let tx = client
        .assembler()
        .prepare(ALICE, BOB, "ETH", 100u64)
        .await
        .unwrap();

    assert_eq!(tx.block, 9);
    assert_eq!(tx.transfers.len(), 2);
    assert_eq!(fixture.call_count(RpcMethod::Sign), 0);

    // Operator order does not change the digest
    let reordered = UnsignedTransaction::new(9, tx.transfers.iter().rev().cloned().collect());
    assert_eq!(tx.hash(), reordered.hash());

    let receipt: Value = client
        .send_transaction(&SignedTransaction::with_single_signature(
            tx,
            json!("0xabc").into(),
        ))
        .await
        .unwrap();
    assert_eq!(receipt, json!({ "accepted": true }));
}
