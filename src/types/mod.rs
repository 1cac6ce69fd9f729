// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the plasma chain's domain values.
//!
//! This module provides:
//! - Token amounts and identifiers, with the shape checks that run before a call
//! - Ranges and transfers as returned by range selection
//! - Unsigned and signed transactions, including the canonical hash

pub mod amount;
pub(crate) mod quantity;
pub mod range;
pub mod token;
pub mod transaction;

// Note: Public types are re-exported from lib.rs, not here
