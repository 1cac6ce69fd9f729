// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Range-based transaction assembly.
//!
//! Sending `amount` of a token from one account to another takes four round
//! trips:
//!
//! 1. `pg_pickRanges` - the operator selects ranges owned by the sender
//! 2. `pg_getNextBlock` - the block the transaction will target
//! 3. `pg_sign` - one signature over the canonical transaction hash
//! 4. `pg_sendTransaction` - the signed transaction, with the signature
//!    repeated for every transfer
//!
//! Token and amount are normalized before the first call, so malformed input
//! never reaches the network. Every failure aborts the send; nothing is
//! retried and no partial state is kept.
//!
//! The operator is trusted to return ranges covering the requested amount.
//! The assembler only checks that it returned at least one range and that
//! every range is non-empty.

use alloy_primitives::{Address, B256};
use serde_json::{json, Value};
use tracing::{debug, Instrument};

use crate::client::decode_result;
use crate::errors::{PlasmaError, ShapeError, TransportError};
use crate::spans;
use crate::transport::{RpcMethod, SharedTransport};
use crate::types::{
    amount::{Amount, IntoAmount},
    quantity::parse_block_number,
    range::Range,
    token::{IntoToken, Token},
    transaction::{Signature, SignedTransaction, UnsignedTransaction},
};

/// Builds, signs and submits transfers over a transport.
///
/// # Examples
///
/// ```rust,ignore
/// use plasma_client::TransactionAssembler;
///
/// let assembler = TransactionAssembler::new(transport);
/// let receipt = assembler.send(alice, bob, "ETH", 100u64).await?;
/// ```
#[derive(Clone)]
pub struct TransactionAssembler {
    transport: SharedTransport,
}

impl std::fmt::Debug for TransactionAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionAssembler")
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl TransactionAssembler {
    /// Creates an assembler over `transport`.
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Selects ranges and builds the unsigned transaction, without signing.
    ///
    /// Useful for callers that sign elsewhere; the result's
    /// [`hash`](UnsignedTransaction::hash) is the digest to sign.
    pub async fn prepare(
        &self,
        from: Address,
        to: Address,
        token: impl IntoToken,
        amount: impl IntoAmount,
    ) -> Result<UnsignedTransaction, PlasmaError> {
        let token = token.into_token()?;
        let amount = amount.into_amount()?;
        self.prepare_normalized(from, to, &token, &amount).await
    }

    /// Sends `amount` of `token` from `from` to `to` and returns the receipt.
    pub async fn send(
        &self,
        from: Address,
        to: Address,
        token: impl IntoToken,
        amount: impl IntoAmount,
    ) -> Result<Value, PlasmaError> {
        let token = token.into_token()?;
        let amount = amount.into_amount()?;
        let span = spans::send_transaction_auto(from, to, &token, &amount);

        async move {
            let transaction = self.prepare_normalized(from, to, &token, &amount).await?;
            let hash = transaction.hash();

            let signature = self
                .sign(from, hash)
                .instrument(spans::sign_transaction(from, hash))
                .await?;

            let signed = SignedTransaction::with_single_signature(transaction, signature);
            debug!(
                hash = %hash,
                signatures = signed.signatures().len(),
                "Submitting signed transaction"
            );
            self.submit(&signed).await
        }
        .instrument(span)
        .await
    }

    async fn prepare_normalized(
        &self,
        from: Address,
        to: Address,
        token: &Token,
        amount: &Amount,
    ) -> Result<UnsignedTransaction, PlasmaError> {
        let span = spans::prepare_transaction(from, token, amount);
        let record_span = span.clone();

        async move {
            let ranges = pick_ranges(&self.transport, from, token, amount).await?;
            debug!(count = ranges.len(), "Received ranges from operator");

            let block = next_block(&self.transport).await?;
            debug!(block, "Targeting block");

            let transaction = UnsignedTransaction::from_ranges(block, ranges, from, to);
            record_span.record("block", block);
            record_span.record("transfers", transaction.transfers.len());
            debug!(hash = %transaction.hash(), "Built unsigned transaction");

            Ok(transaction)
        }
        .instrument(span)
        .await
    }

    async fn sign(&self, signer: Address, hash: B256) -> Result<Signature, PlasmaError> {
        let value = self
            .transport
            .invoke(RpcMethod::Sign, vec![json!(signer), json!(hash)], false)
            .await?;
        Ok(Signature::new(value))
    }

    async fn submit(&self, signed: &SignedTransaction) -> Result<Value, PlasmaError> {
        let payload = serde_json::to_value(signed)
            .map_err(|e| TransportError::malformed(RpcMethod::SendTransaction.as_str(), e))?;
        self.transport
            .invoke(RpcMethod::SendTransaction, vec![payload], false)
            .await
    }
}

/// Asks the operator for ranges owned by `address` covering `amount`.
///
/// Fails with [`ShapeError::NoRanges`] on an empty answer and with
/// [`ShapeError::EmptyRange`] if any range is empty or inverted.
pub(crate) async fn pick_ranges(
    transport: &SharedTransport,
    address: Address,
    token: &Token,
    amount: &Amount,
) -> Result<Vec<Range>, PlasmaError> {
    let method = RpcMethod::PickRanges;
    let result = transport
        .invoke(
            method,
            vec![json!(address), json!(token.to_wire()), json!(amount.to_wire())],
            false,
        )
        .await?;

    let ranges: Vec<Range> = decode_result(method, result)?;
    if ranges.is_empty() {
        return Err(ShapeError::NoRanges.into());
    }
    for range in &ranges {
        range.validate()?;
    }
    Ok(ranges)
}

/// The block number the next transaction should target.
pub(crate) async fn next_block(transport: &SharedTransport) -> Result<u64, PlasmaError> {
    let method = RpcMethod::GetNextBlock;
    let result = transport.invoke(method, vec![], false).await?;
    parse_block_number(&result)
        .map_err(|e| TransportError::malformed(method.as_str(), e).into())
}
