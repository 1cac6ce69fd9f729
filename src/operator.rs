// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Façade over the operator's own RPC namespace.
//!
//! Operator queries return block and transaction data containing raw byte
//! buffers, so most of them ask the transport to convert binary values to hex
//! before the result reaches the caller.

use serde_json::{json, Value};
use tracing::Instrument;

use crate::errors::{PlasmaError, ShapeError};
use crate::spans;
use crate::transport::{RpcMethod, SharedTransport};

/// Typed entry points into the operator namespace.
///
/// Holds only its transport; cloning is cheap and clones share it.
#[derive(Clone)]
pub struct OperatorClient {
    transport: SharedTransport,
}

impl std::fmt::Debug for OperatorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorClient")
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl OperatorClient {
    /// Creates an operator client over `transport`.
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// The transport calls are sent through
    pub fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    /// Metadata for blocks `start..=end`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidSpan`] when `end < start`, before any call is made.
    pub async fn get_block_metadata(&self, start: u64, end: u64) -> Result<Value, PlasmaError> {
        if end < start {
            return Err(ShapeError::InvalidSpan { start, end }.into());
        }
        self.transport
            .invoke(
                RpcMethod::OperatorGetBlockMetadata,
                vec![json!(start), json!(end)],
                true,
            )
            .instrument(spans::get_block_metadata(start, end))
            .await
    }

    /// Metadata for the single block `start`.
    pub async fn get_block_metadata_at(&self, start: u64) -> Result<Value, PlasmaError> {
        self.get_block_metadata(start, start).await
    }

    /// Transactions `start..end` of `block`.
    pub async fn get_block_transactions(
        &self,
        block: u64,
        start: u64,
        end: u64,
    ) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(
                RpcMethod::OperatorGetBlockTransactions,
                vec![json!(block), json!(start), json!(end)],
                true,
            )
            .await
    }

    /// A transaction by its hash.
    pub async fn get_tx_from_hash(&self, hash: &str) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(RpcMethod::OperatorGetTxFromHash, vec![json!(hash)], true)
            .await
    }

    /// The most recent transactions, `start..end` counted from the newest.
    pub async fn get_recent_transactions(
        &self,
        start: u64,
        end: u64,
    ) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(
                RpcMethod::OperatorGetRecentTransactions,
                vec![json!(start), json!(end)],
                true,
            )
            .await
    }

    /// Current block number as reported by the operator.
    pub async fn get_block_number(&self) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(RpcMethod::OperatorGetBlockNumber, vec![], false)
            .await
    }

    /// Asks the operator to open a new block.
    pub async fn new_block(&self) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(RpcMethod::OperatorNewBlock, vec![], false)
            .await
    }

    /// Asks the operator to submit the pending block to the root chain.
    pub async fn submit_block(&self) -> Result<Value, PlasmaError> {
        self.transport
            .invoke(RpcMethod::SubmitBlock, vec![], false)
            .instrument(spans::submit_block())
            .await
    }
}
