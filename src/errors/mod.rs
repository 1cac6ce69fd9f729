// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the plasma client.
//!
//! Every public async API returns [`PlasmaError`], which wraps one of three
//! error kinds:
//!
//! - [`TransportError`] - the call never produced a usable JSON-RPC response
//!   (connection refused, timeout, malformed body)
//! - [`RpcError`] - the operator answered with an explicit error indicator;
//!   its message is preserved verbatim
//! - [`ShapeError`] - an argument or an operator-supplied value failed a basic
//!   precondition; raised before the next network call is made
//!
//! No error kind is recovered locally. The client performs no retries and no
//! backoff, and there is no partial-transaction state to clean up.
//!
//! # Examples
//!
//! ```rust,ignore
//! use plasma_client::{PlasmaClient, PlasmaError};
//!
//! match client.send_transaction_auto(from, to, "ETH", 100).await {
//!     Ok(receipt) => println!("submitted: {receipt}"),
//!     Err(PlasmaError::Rpc(err)) => eprintln!("operator refused: {}", err.message()),
//!     Err(PlasmaError::Transport(err)) => eprintln!("network failure: {err}"),
//!     Err(PlasmaError::Shape(err)) => eprintln!("bad input: {err}"),
//! }
//! ```

mod rpc;
mod shape;
mod transport;

pub use rpc::RpcError;
pub use shape::ShapeError;
pub use transport::TransportError;

/// Unified error type for all plasma client operations.
///
/// All error kinds convert into `PlasmaError` via `From`, so `?` propagates
/// them naturally through the façades.
#[derive(Debug, thiserror::Error)]
pub enum PlasmaError {
    /// The request could not be carried to the operator or the reply was unusable.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The operator returned an explicit JSON-RPC error.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// A value failed a shape precondition.
    #[error("Invalid input: {0}")]
    Shape(#[from] ShapeError),
}

impl PlasmaError {
    /// Returns true if this is a network-level failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the operator rejected the call.
    #[must_use]
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// Returns true if the failure happened before reaching the network.
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// The operator's error, if this is an RPC failure.
    #[must_use]
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}
