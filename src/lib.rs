// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed JSON-RPC client for plasma layer-2 operators.
//!
//! - [`PlasmaClient`] wraps the `pg_*` methods: balances, blocks, deposits,
//!   exits and transaction submission
//! - [`OperatorClient`] wraps the operator namespace (block metadata, block
//!   production)
//! - [`TransactionAssembler`] turns "send `amount` of `token` from A to B" into
//!   a signed, range-based transaction
//!
//! Every call goes through a [`Transport`](transport::Transport):
//! [`HttpTransport`] for a live node, [`FixtureTransport`] for tests.
//!
//! ```rust,ignore
//! use plasma_client::ClientConfig;
//!
//! let client = ClientConfig::from_env()?.connect()?;
//! let receipt = client
//!     .send_transaction_auto(alice, bob, "ETH", 100u64)
//!     .await?;
//! ```

mod assembler;
mod client;
pub mod codec;
mod config;
mod errors;
mod operator;
mod spans;
pub mod transport;
mod types;

pub use assembler::TransactionAssembler;
pub use client::PlasmaClient;
pub use config::{constants, ClientConfig, ClientConfigBuilder, TransportConfig};
pub use errors::{PlasmaError, RpcError, ShapeError, TransportError};
pub use operator::OperatorClient;
pub use transport::{FixtureTransport, HttpTransport, RpcMethod, SharedTransport, Transport};
pub use types::{
    amount::{Amount, IntoAmount},
    range::{Range, Transfer},
    token::{is_address_shaped, IntoToken, Token},
    transaction::{Signature, SignedTransaction, UnsignedTransaction},
};
