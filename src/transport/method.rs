// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC method identifiers for both RPC namespaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which interface a method belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `pg_*` methods served to wallets and applications
    Client,
    /// Node-operator methods (block metadata, block production)
    Operator,
}

/// Every RPC method the client knows how to call.
///
/// Using an enum instead of string literals means a typo is a compile error
/// and fixture tables can be checked against the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RpcMethod {
    /// `pg_getAccounts`
    GetAccounts,
    /// `pg_getBalances`
    GetBalances,
    /// `pg_getTransaction`
    GetTransaction,
    /// `pg_getBlock`
    GetBlock,
    /// `pg_getBlocks`
    GetBlocks,
    /// `pg_getBlockHeader`
    GetBlockHeader,
    /// `pg_getHeight`
    GetHeight,
    /// `pg_getTransactionsInBlock`
    GetTransactionsInBlock,
    /// `pg_getRecentTransactions`
    GetRecentTransactions,
    /// `pg_getAccount`
    GetAccount,
    /// `pg_getTransactionsByAddress`
    GetTransactionsByAddress,
    /// `pg_getNextBlock`
    GetNextBlock,
    /// `pg_pickRanges`
    PickRanges,
    /// `pg_sendTransaction`
    SendTransaction,
    /// `pg_sign`
    Sign,
    /// `pg_deposit`
    Deposit,
    /// `pg_startExit`
    StartExit,
    /// `pg_finalizeExits`
    FinalizeExits,
    /// `pg_getExits`
    GetExits,
    /// `pg_listToken`
    ListToken,
    /// `pg_getTokenId`
    GetTokenId,
    /// `pg_createAccount`
    CreateAccount,
    /// `pg_submitBlock`
    SubmitBlock,
    /// `getBlockMetadata`
    OperatorGetBlockMetadata,
    /// `getBlockTransactions`
    OperatorGetBlockTransactions,
    /// `getTxFromHash`
    OperatorGetTxFromHash,
    /// `getRecentTransactions`
    OperatorGetRecentTransactions,
    /// `getBlockNumber`
    OperatorGetBlockNumber,
    /// `newBlock`
    OperatorNewBlock,
}

impl RpcMethod {
    /// All methods, client namespace first.
    pub const ALL: [RpcMethod; 29] = [
        Self::GetAccounts,
        Self::GetBalances,
        Self::GetTransaction,
        Self::GetBlock,
        Self::GetBlocks,
        Self::GetBlockHeader,
        Self::GetHeight,
        Self::GetTransactionsInBlock,
        Self::GetRecentTransactions,
        Self::GetAccount,
        Self::GetTransactionsByAddress,
        Self::GetNextBlock,
        Self::PickRanges,
        Self::SendTransaction,
        Self::Sign,
        Self::Deposit,
        Self::StartExit,
        Self::FinalizeExits,
        Self::GetExits,
        Self::ListToken,
        Self::GetTokenId,
        Self::CreateAccount,
        Self::SubmitBlock,
        Self::OperatorGetBlockMetadata,
        Self::OperatorGetBlockTransactions,
        Self::OperatorGetTxFromHash,
        Self::OperatorGetRecentTransactions,
        Self::OperatorGetBlockNumber,
        Self::OperatorNewBlock,
    ];

    /// Wire name of the method
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetAccounts => "pg_getAccounts",
            Self::GetBalances => "pg_getBalances",
            Self::GetTransaction => "pg_getTransaction",
            Self::GetBlock => "pg_getBlock",
            Self::GetBlocks => "pg_getBlocks",
            Self::GetBlockHeader => "pg_getBlockHeader",
            Self::GetHeight => "pg_getHeight",
            Self::GetTransactionsInBlock => "pg_getTransactionsInBlock",
            Self::GetRecentTransactions => "pg_getRecentTransactions",
            Self::GetAccount => "pg_getAccount",
            Self::GetTransactionsByAddress => "pg_getTransactionsByAddress",
            Self::GetNextBlock => "pg_getNextBlock",
            Self::PickRanges => "pg_pickRanges",
            Self::SendTransaction => "pg_sendTransaction",
            Self::Sign => "pg_sign",
            Self::Deposit => "pg_deposit",
            Self::StartExit => "pg_startExit",
            Self::FinalizeExits => "pg_finalizeExits",
            Self::GetExits => "pg_getExits",
            Self::ListToken => "pg_listToken",
            Self::GetTokenId => "pg_getTokenId",
            Self::CreateAccount => "pg_createAccount",
            Self::SubmitBlock => "pg_submitBlock",
            Self::OperatorGetBlockMetadata => "getBlockMetadata",
            Self::OperatorGetBlockTransactions => "getBlockTransactions",
            Self::OperatorGetTxFromHash => "getTxFromHash",
            Self::OperatorGetRecentTransactions => "getRecentTransactions",
            Self::OperatorGetBlockNumber => "getBlockNumber",
            Self::OperatorNewBlock => "newBlock",
        }
    }

    /// Namespace the method belongs to
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        match self {
            Self::OperatorGetBlockMetadata
            | Self::OperatorGetBlockTransactions
            | Self::OperatorGetTxFromHash
            | Self::OperatorGetRecentTransactions
            | Self::OperatorGetBlockNumber
            | Self::OperatorNewBlock => Namespace::Operator,
            _ => Namespace::Client,
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not in [`RpcMethod::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown RPC method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for RpcMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl Serialize for RpcMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RpcMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
