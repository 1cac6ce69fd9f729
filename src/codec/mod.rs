// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Value normalization between Rust types and the operator's wire format.
//!
//! Two independent passes:
//!
//! - **Outbound** ([`to_hex`], [`from_hex`]): amounts and numeric token ids
//!   travel as lowercase hex strings without a `0x` prefix.
//! - **Inbound** ([`RpcValue`], [`normalize_binary`]): the operator serializes
//!   raw byte buffers as `{"type": "Buffer", "data": [..]}`. Calls that expect
//!   such payloads run the result through [`normalize_binary`], which replaces
//!   every buffer node with its hex encoding.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use plasma_client::codec::{from_hex, normalize_binary, to_hex};
//! use serde_json::json;
//!
//! assert_eq!(to_hex(U256::from(100)), "64");
//! assert_eq!(from_hex("64").unwrap(), U256::from(100));
//!
//! let raw = json!({ "hash": { "type": "Buffer", "data": [222, 173] }, "number": 7 });
//! assert_eq!(normalize_binary(raw), json!({ "hash": "dead", "number": 7 }));
//! ```

mod binary;
mod hex;

pub use binary::{buffer_marker, normalize_binary, RpcValue, BUFFER_TAG};
pub use hex::{from_dec, from_hex, to_hex};
