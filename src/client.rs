// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The client façade: one typed method per `pg_*` RPC.
//!
//! Methods that take a token or an amount normalize them before calling the
//! transport, so a malformed value fails with
//! [`ShapeError`](crate::ShapeError) and nothing is sent. Results the client
//! understands (balances, accounts, block numbers, ranges, exits) are decoded
//! into typed values; everything else is returned as JSON.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::Instrument;

use crate::assembler::{self, TransactionAssembler};
use crate::errors::{PlasmaError, TransportError};
use crate::operator::OperatorClient;
use crate::spans;
use crate::transport::{RpcMethod, SharedTransport};
use crate::types::{
    amount::IntoAmount,
    quantity::{parse_block_number, parse_quantity},
    range::Range,
    token::IntoToken,
    transaction::{Signature, SignedTransaction},
};

/// Decodes an RPC result into `T`, reporting failures as malformed responses.
pub(crate) fn decode_result<T: DeserializeOwned>(
    method: RpcMethod,
    result: Value,
) -> Result<T, PlasmaError> {
    serde_json::from_value(result)
        .map_err(|e| TransportError::malformed(method.as_str(), e).into())
}

/// Typed access to a plasma chain through a [`Transport`](crate::transport::Transport).
///
/// # Examples
///
/// ```rust,ignore
/// use plasma_client::{ClientConfig, PlasmaClient};
///
/// let client = ClientConfig::from_env()?.connect()?;
/// let height = client.get_height().await?;
/// let balances = client.get_balances(address).await?;
/// ```
#[derive(Clone)]
pub struct PlasmaClient {
    transport: SharedTransport,
    operator: OperatorClient,
}

impl std::fmt::Debug for PlasmaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlasmaClient")
            .field("transport", &self.transport.name())
            .field("operator", &self.operator)
            .finish()
    }
}

impl PlasmaClient {
    /// Creates a client whose operator façade shares `transport`.
    pub fn new(transport: SharedTransport) -> Self {
        let operator = OperatorClient::new(transport.clone());
        Self {
            transport,
            operator,
        }
    }

    /// Replaces the operator façade, e.g. to target a separate endpoint.
    #[must_use]
    pub fn with_operator(mut self, operator: OperatorClient) -> Self {
        self.operator = operator;
        self
    }

    /// The transport client calls are sent through
    pub fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    /// The operator namespace
    pub fn operator(&self) -> &OperatorClient {
        &self.operator
    }

    /// An assembler over this client's transport
    pub fn assembler(&self) -> TransactionAssembler {
        TransactionAssembler::new(self.transport.clone())
    }

    async fn call(&self, method: RpcMethod, params: Vec<Value>) -> Result<Value, PlasmaError> {
        self.transport.invoke(method, params, false).await
    }

    async fn call_decoded<T: DeserializeOwned>(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
    ) -> Result<T, PlasmaError> {
        let result = self.call(method, params).await?;
        decode_result(method, result)
    }

    /// Deposits `amount` of `token` to `address`.
    pub async fn deposit(
        &self,
        token: impl IntoToken,
        amount: impl IntoAmount,
        address: Address,
    ) -> Result<Value, PlasmaError> {
        let token = token.into_token()?;
        let amount = amount.into_amount()?;
        let span = spans::deposit(&token, &amount, address);

        self.call(
            RpcMethod::Deposit,
            vec![
                json!(token.to_wire()),
                json!(amount.to_wire()),
                json!(address),
            ],
        )
        .instrument(span)
        .await
    }

    /// Asks the node to sign `data` with the key for `address`.
    pub async fn sign(&self, address: Address, data: &str) -> Result<Signature, PlasmaError> {
        self.call(RpcMethod::Sign, vec![json!(address), json!(data)])
            .await
            .map(Signature::new)
    }

    /// Submits a signed transaction and returns the receipt.
    pub async fn send_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<Value, PlasmaError> {
        let payload = serde_json::to_value(transaction)
            .map_err(|e| TransportError::malformed(RpcMethod::SendTransaction.as_str(), e))?;
        self.call(RpcMethod::SendTransaction, vec![payload]).await
    }

    /// Accounts managed by the node.
    pub async fn get_accounts(&self) -> Result<Vec<Address>, PlasmaError> {
        self.call_decoded(RpcMethod::GetAccounts, vec![]).await
    }

    /// Balances of `address`, keyed by token.
    ///
    /// The operator reports each balance as a hex string.
    pub async fn get_balances(
        &self,
        address: Address,
    ) -> Result<BTreeMap<String, U256>, PlasmaError> {
        let method = RpcMethod::GetBalances;
        let raw: BTreeMap<String, Value> = self.call_decoded(method, vec![json!(address)]).await?;

        raw.into_iter()
            .map(|(token, balance)| {
                parse_quantity(&balance)
                    .map(|balance| (token, balance))
                    .map_err(|e| PlasmaError::from(TransportError::malformed(method.as_str(), e)))
            })
            .collect()
    }

    /// A transaction by hash.
    pub async fn get_transaction(&self, hash: &str) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetTransaction, vec![json!(hash)]).await
    }

    /// A block by number.
    pub async fn get_block(&self, block: u64) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetBlock, vec![json!(block)]).await
    }

    /// Blocks `start` through `end`.
    pub async fn get_blocks(&self, start: u64, end: u64) -> Result<Vec<Value>, PlasmaError> {
        self.call_decoded(RpcMethod::GetBlocks, vec![json!(start), json!(end)])
            .await
    }

    /// The header of a block.
    pub async fn get_block_header(&self, block: u64) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetBlockHeader, vec![json!(block)])
            .await
    }

    /// Current chain height.
    pub async fn get_height(&self) -> Result<u64, PlasmaError> {
        let method = RpcMethod::GetHeight;
        let result = self.call(method, vec![]).await?;
        parse_block_number(&result)
            .map_err(|e| TransportError::malformed(method.as_str(), e).into())
    }

    /// Transactions `start..end` of `block`.
    pub async fn get_transactions_in_block(
        &self,
        block: u64,
        start: u64,
        end: u64,
    ) -> Result<Vec<Value>, PlasmaError> {
        self.call_decoded(
            RpcMethod::GetTransactionsInBlock,
            vec![json!(block), json!(start), json!(end)],
        )
        .await
    }

    /// The most recent transactions, `start..end` counted from the newest.
    pub async fn get_recent_transactions(
        &self,
        start: u64,
        end: u64,
    ) -> Result<Vec<Value>, PlasmaError> {
        self.call_decoded(
            RpcMethod::GetRecentTransactions,
            vec![json!(start), json!(end)],
        )
        .await
    }

    /// Account information for `address`.
    pub async fn get_account(&self, address: Address) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetAccount, vec![json!(address)]).await
    }

    /// Transactions sent or received by `address`.
    pub async fn get_transactions_by_address(
        &self,
        address: Address,
        start: u64,
        end: u64,
    ) -> Result<Vec<Value>, PlasmaError> {
        self.call_decoded(
            RpcMethod::GetTransactionsByAddress,
            vec![json!(address), json!(start), json!(end)],
        )
        .await
    }

    /// The block the next transaction should target.
    pub async fn get_next_block(&self) -> Result<u64, PlasmaError> {
        assembler::next_block(&self.transport).await
    }

    /// Ranges owned by `address` that cover `amount` of `token`.
    pub async fn pick_ranges(
        &self,
        address: Address,
        token: impl IntoToken,
        amount: impl IntoAmount,
    ) -> Result<Vec<Range>, PlasmaError> {
        let token = token.into_token()?;
        let amount = amount.into_amount()?;
        assembler::pick_ranges(&self.transport, address, &token, &amount).await
    }

    /// Builds, signs and submits a transfer in one step.
    ///
    /// See [`TransactionAssembler::send`].
    pub async fn send_transaction_auto(
        &self,
        from: Address,
        to: Address,
        token: impl IntoToken,
        amount: impl IntoAmount,
    ) -> Result<Value, PlasmaError> {
        self.assembler().send(from, to, token, amount).await
    }

    /// Registers an ERC-20 token contract with the operator.
    pub async fn list_token(&self, token_address: Address) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::ListToken, vec![json!(token_address)])
            .await
    }

    /// The plasma token id assigned to a token contract.
    pub async fn get_token_id(&self, token_address: Address) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetTokenId, vec![json!(token_address)])
            .await
    }

    /// Creates a new account on the node and returns its address.
    pub async fn create_account(&self) -> Result<Address, PlasmaError> {
        self.call_decoded(RpcMethod::CreateAccount, vec![]).await
    }

    /// Starts exiting `amount` of `token` held by `address`.
    ///
    /// Returns the hashes of the exit transactions, in the order reported.
    pub async fn start_exit(
        &self,
        address: Address,
        token: impl IntoToken,
        amount: impl IntoAmount,
    ) -> Result<Vec<String>, PlasmaError> {
        let token = token.into_token()?;
        let amount = amount.into_amount()?;
        let span = spans::start_exit(address, &token, &amount);

        self.call_decoded(
            RpcMethod::StartExit,
            vec![
                json!(address),
                json!(token.to_wire()),
                json!(amount.to_wire()),
            ],
        )
        .instrument(span)
        .await
    }

    /// Finalizes every exit of `address` whose challenge period has passed.
    pub async fn finalize_exits(&self, address: Address) -> Result<Vec<String>, PlasmaError> {
        self.call_decoded(RpcMethod::FinalizeExits, vec![json!(address)])
            .instrument(spans::finalize_exits(address))
            .await
    }

    /// Pending and finalized exits of `address`.
    pub async fn get_exits(&self, address: Address) -> Result<Value, PlasmaError> {
        self.call(RpcMethod::GetExits, vec![json!(address)]).await
    }
}
