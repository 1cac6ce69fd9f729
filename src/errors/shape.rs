// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Precondition failures detected locally, before the next network call.

/// A value that fails a basic shape precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The amount is not a non-negative integer.
    #[error("Invalid amount {input:?}: {reason}")]
    InvalidAmount {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// The amount was given as a negative integer.
    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(i128),

    /// The token identifier is empty or malformed.
    #[error("Invalid token identifier {0:?}")]
    InvalidToken(String),

    /// A hex string could not be decoded into an integer.
    #[error("Invalid hex value {input:?}: {reason}")]
    InvalidHex {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A range with `start >= end` covers no units.
    #[error("Range [{start}, {end}) is empty")]
    EmptyRange {
        /// Range start (hex)
        start: String,
        /// Range end (hex)
        end: String,
    },

    /// The operator returned no ranges for a send.
    #[error("No ranges available to build a transaction")]
    NoRanges,

    /// Signatures and transfers are not positionally aligned.
    #[error("Expected {expected} signatures, got {actual}")]
    SignatureCount {
        /// Number of transfers
        expected: usize,
        /// Number of signatures supplied
        actual: usize,
    },

    /// A start/end query window is inverted.
    #[error("Invalid span: start {start} is after end {end}")]
    InvalidSpan {
        /// First element requested
        start: u64,
        /// Last element requested
        end: u64,
    },
}
