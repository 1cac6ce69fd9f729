// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ownable ranges and the transfers that move them

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::codec::to_hex;
use crate::errors::ShapeError;

/// A half-open interval `[start, end)` over a token's unit space.
///
/// Ranges are the spendable units of the plasma chain, analogous to UTXOs.
/// They come from the operator's range selection and are consumed whole by a
/// single transfer, so the type exposes no mutation.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use plasma_client::Range;
///
/// let range = Range::new(U256::from(0), U256::from(50)).unwrap();
/// assert_eq!(range.len(), U256::from(50));
/// assert!(Range::new(U256::from(5), U256::from(5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::quantity::option"
    )]
    token: Option<U256>,
    #[serde(with = "super::quantity")]
    start: U256,
    #[serde(with = "super::quantity")]
    end: U256,
}

impl Range {
    /// Creates a range, rejecting empty or inverted bounds.
    pub fn new(start: U256, end: U256) -> Result<Self, ShapeError> {
        let range = Self {
            token: None,
            start,
            end,
        };
        range.validate()?;
        Ok(range)
    }

    /// Tags the range with the token it belongs to.
    #[must_use]
    pub fn with_token(mut self, token: U256) -> Self {
        self.token = Some(token);
        self
    }

    /// Token id, when the operator reported one
    pub fn token(&self) -> Option<U256> {
        self.token
    }

    /// First unit of the range
    pub fn start(&self) -> U256 {
        self.start
    }

    /// One past the last unit of the range
    pub fn end(&self) -> U256 {
        self.end
    }

    /// Number of units covered
    pub fn len(&self) -> U256 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the range covers no units.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Checks `start < end`.
    ///
    /// Deserialized ranges skip [`Range::new`], so callers that build
    /// transactions validate them explicitly.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.is_empty() {
            return Err(ShapeError::EmptyRange {
                start: to_hex(self.start),
                end: to_hex(self.end),
            });
        }
        Ok(())
    }
}

/// One leg of a transaction: a range moving from sender to recipient.
///
/// On the wire the range fields are inlined next to `sender` and `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Range being moved
    #[serde(flatten)]
    pub range: Range,
    /// Current owner
    pub sender: Address,
    /// New owner
    pub recipient: Address,
}

impl Transfer {
    /// Creates a transfer of `range` from `sender` to `recipient`.
    pub fn new(range: Range, sender: Address, recipient: Address) -> Self {
        Self {
            range,
            sender,
            recipient,
        }
    }
}
