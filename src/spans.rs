// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for plasma client operations.
//!
//! Telemetry is kept out of the façade methods: instead of `#[instrument]`
//! attributes, each traced operation has a span helper here. Façade methods
//! are async, so spans are attached with [`tracing::Instrument`] rather than
//! entered:
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T, PlasmaError> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```
//!
//! Each RPC round trip opens its own `rpc_call` span inside the transport, so
//! these spans become the parents of one or more `rpc_call` spans.

use alloy_primitives::{Address, B256};
use tracing::{Level, Span};

use crate::types::{amount::Amount, token::Token};

/// Create span for an automatically assembled and signed transfer.
///
/// Parent: None (root span for this operation)
/// Children: prepare_transaction span, `rpc_call` spans for signing and submission
#[inline]
pub(crate) fn send_transaction_auto(
    from: Address,
    to: Address,
    token: &Token,
    amount: &Amount,
) -> Span {
    tracing::span!(
        Level::INFO,
        "plasma.send_transaction_auto",
        from = %from,
        to = %to,
        token = %token,
        amount = %amount,
    )
}

/// Create span for selecting ranges and building an unsigned transaction.
///
/// Parent: send_transaction_auto span (or None when called directly)
/// Children: `rpc_call` spans for range selection and next-block lookup
#[inline]
pub(crate) fn prepare_transaction(from: Address, token: &Token, amount: &Amount) -> Span {
    tracing::debug_span!(
        "plasma.prepare_transaction",
        from = %from,
        token = %token,
        amount = %amount,
        block = tracing::field::Empty,
        transfers = tracing::field::Empty,
    )
}

/// Create span for signing a transaction hash.
///
/// Parent: send_transaction_auto span
#[inline]
pub(crate) fn sign_transaction(signer: Address, hash: B256) -> Span {
    tracing::debug_span!("plasma.sign_transaction", signer = %signer, hash = %hash)
}

/// Create span for a deposit request.
#[inline]
pub(crate) fn deposit(token: &Token, amount: &Amount, address: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "plasma.deposit",
        token = %token,
        amount = %amount,
        address = %address,
    )
}

/// Create span for starting an exit.
#[inline]
pub(crate) fn start_exit(address: Address, token: &Token, amount: &Amount) -> Span {
    tracing::span!(
        Level::INFO,
        "plasma.start_exit",
        address = %address,
        token = %token,
        amount = %amount,
    )
}

/// Create span for finalizing exits.
#[inline]
pub(crate) fn finalize_exits(address: Address) -> Span {
    tracing::span!(Level::INFO, "plasma.finalize_exits", address = %address)
}

/// Create span for a block metadata query against the operator.
///
/// Children: `rpc_call` span
#[inline]
pub(crate) fn get_block_metadata(start: u64, end: u64) -> Span {
    tracing::debug_span!("plasma.operator.get_block_metadata", start = start, end = end)
}

/// Create span for submitting the pending block.
#[inline]
pub(crate) fn submit_block() -> Span {
    tracing::span!(Level::INFO, "plasma.operator.submit_block")
}
