// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unsigned and signed plasma transactions

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::range::{Range, Transfer};
use crate::errors::ShapeError;

/// Bytes in one canonical transfer record: sender, recipient, token flag,
/// token, start, end.
const TRANSFER_RECORD_LEN: usize = 20 + 20 + 1 + 32 + 32 + 32;

/// A signature produced by the signer, carried opaquely.
///
/// The client never inspects signatures; it replicates exactly what the
/// signer returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(Value);

impl Signature {
    /// Wraps a signer response.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw signer response
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Signature {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A transaction before signing: the target block and its transfers.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, U256};
/// use plasma_client::{Range, Transfer, UnsignedTransaction};
///
/// let a = Address::repeat_byte(1);
/// let b = Address::repeat_byte(2);
/// let first = Transfer::new(Range::new(U256::from(0), U256::from(50)).unwrap(), a, b);
/// let second = Transfer::new(Range::new(U256::from(50), U256::from(100)).unwrap(), a, b);
///
/// let forward = UnsignedTransaction::new(7, vec![first.clone(), second.clone()]);
/// let reverse = UnsignedTransaction::new(7, vec![second, first]);
/// assert_eq!(forward.hash(), reverse.hash());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    /// Block the transaction is meant for
    pub block: u64,
    /// One transfer per range
    pub transfers: Vec<Transfer>,
}

impl UnsignedTransaction {
    /// Creates a transaction from explicit transfers.
    pub fn new(block: u64, transfers: Vec<Transfer>) -> Self {
        Self { block, transfers }
    }

    /// Creates a transaction moving every range from `sender` to `recipient`.
    pub fn from_ranges(
        block: u64,
        ranges: impl IntoIterator<Item = Range>,
        sender: Address,
        recipient: Address,
    ) -> Self {
        let transfers = ranges
            .into_iter()
            .map(|range| Transfer::new(range, sender, recipient))
            .collect();
        Self { block, transfers }
    }

    /// Canonical byte encoding used for hashing.
    ///
    /// The block number as 8 big-endian bytes followed by one fixed-width
    /// record per transfer. Records are sorted bytewise so the encoding does
    /// not depend on the order the operator returned ranges in.
    pub fn encode(&self) -> Vec<u8> {
        let mut records: Vec<[u8; TRANSFER_RECORD_LEN]> =
            self.transfers.iter().map(encode_transfer).collect();
        records.sort_unstable();

        let mut out = Vec::with_capacity(8 + records.len() * TRANSFER_RECORD_LEN);
        out.extend_from_slice(&self.block.to_be_bytes());
        for record in &records {
            out.extend_from_slice(record);
        }
        out
    }

    /// Keccak-256 digest of [`encode`](Self::encode).
    pub fn hash(&self) -> B256 {
        keccak256(self.encode())
    }
}

fn encode_transfer(transfer: &Transfer) -> [u8; TRANSFER_RECORD_LEN] {
    let mut record = [0u8; TRANSFER_RECORD_LEN];
    let mut offset = 0;

    let mut put = |bytes: &[u8]| {
        record[offset..offset + bytes.len()].copy_from_slice(bytes);
        offset += bytes.len();
    };

    put(transfer.sender.as_slice());
    put(transfer.recipient.as_slice());
    match transfer.range.token() {
        Some(token) => {
            put(&[1]);
            put(&token.to_be_bytes::<32>());
        }
        None => {
            put(&[0]);
            put(&U256::ZERO.to_be_bytes::<32>());
        }
    }
    put(&transfer.range.start().to_be_bytes::<32>());
    put(&transfer.range.end().to_be_bytes::<32>());

    record
}

/// An unsigned transaction plus one signature per transfer.
///
/// Signatures are positionally aligned with transfers; construction enforces
/// equal lengths. Deserializing applies the same checks and also rejects
/// empty or inverted ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSignedTransaction")]
pub struct SignedTransaction {
    #[serde(flatten)]
    transaction: UnsignedTransaction,
    signatures: Vec<Signature>,
}

impl SignedTransaction {
    /// Pairs a transaction with its signatures.
    pub fn new(
        transaction: UnsignedTransaction,
        signatures: Vec<Signature>,
    ) -> Result<Self, ShapeError> {
        if signatures.len() != transaction.transfers.len() {
            return Err(ShapeError::SignatureCount {
                expected: transaction.transfers.len(),
                actual: signatures.len(),
            });
        }
        Ok(Self {
            transaction,
            signatures,
        })
    }

    /// Uses one signature for every transfer.
    ///
    /// Valid when all transfers share a sender, so one key covers them all.
    pub fn with_single_signature(transaction: UnsignedTransaction, signature: Signature) -> Self {
        let signatures = vec![signature; transaction.transfers.len()];
        Self {
            transaction,
            signatures,
        }
    }

    /// The signed payload
    pub fn transaction(&self) -> &UnsignedTransaction {
        &self.transaction
    }

    /// Target block
    pub fn block(&self) -> u64 {
        self.transaction.block
    }

    /// Transfers, in submission order
    pub fn transfers(&self) -> &[Transfer] {
        &self.transaction.transfers
    }

    /// Signatures, aligned with [`transfers`](Self::transfers)
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Hash of the unsigned payload; signatures are not included.
    pub fn hash(&self) -> B256 {
        self.transaction.hash()
    }
}

/// Wire form of [`SignedTransaction`] before validation.
#[derive(Deserialize)]
struct RawSignedTransaction {
    #[serde(flatten)]
    transaction: UnsignedTransaction,
    signatures: Vec<Signature>,
}

impl TryFrom<RawSignedTransaction> for SignedTransaction {
    type Error = ShapeError;

    fn try_from(raw: RawSignedTransaction) -> Result<Self, Self::Error> {
        for transfer in &raw.transaction.transfers {
            transfer.range.validate()?;
        }
        Self::new(raw.transaction, raw.signatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn range(start: u64, end: u64) -> Range {
        Range::new(U256::from(start), U256::from(end)).unwrap()
    }

    fn sample(block: u64) -> UnsignedTransaction {
        UnsignedTransaction::from_ranges(
            block,
            [range(0, 50), range(50, 100)],
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
        )
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(sample(7).hash(), sample(7).hash());
    }

    #[test]
    fn test_hash_ignores_transfer_order() {
        let mut reversed = sample(7);
        reversed.transfers.reverse();
        assert_eq!(sample(7).hash(), reversed.hash());
    }

    #[test]
    fn test_hash_changes_with_content() {
        let base = sample(7).hash();
        assert_ne!(base, sample(8).hash());

        let mut other = sample(7);
        other.transfers[0].recipient = Address::repeat_byte(0xcc);
        assert_ne!(base, other.hash());

        let mut other = sample(7);
        other.transfers[1].sender = Address::repeat_byte(0xcc);
        assert_ne!(base, other.hash());

        let mut other = sample(7);
        other.transfers[0].range = range(0, 49);
        assert_ne!(base, other.hash());

        let mut other = sample(7);
        other.transfers[0].range = range(0, 50).with_token(U256::ZERO);
        assert_ne!(base, other.hash());
    }

    #[test]
    fn test_encode_layout() {
        let encoded = sample(7).encode();
        assert_eq!(encoded.len(), 8 + 2 * TRANSFER_RECORD_LEN);
        assert_eq!(&encoded[..8], &7u64.to_be_bytes());
    }

    #[test]
    fn test_signed_requires_aligned_signatures() {
        let err = SignedTransaction::new(sample(7), vec![Signature::new(json!("0x01"))]);
        assert_eq!(
            err,
            Err(ShapeError::SignatureCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_single_signature_is_replicated() {
        let signature = Signature::new(json!({ "v": "1b", "r": "01", "s": "02" }));
        let signed = SignedTransaction::with_single_signature(sample(7), signature.clone());
        assert_eq!(signed.signatures().len(), signed.transfers().len());
        assert!(signed.signatures().iter().all(|s| s == &signature));
        assert_eq!(signed.hash(), sample(7).hash());
    }

    #[test]
    fn test_signed_wire_shape() {
        let signed =
            SignedTransaction::with_single_signature(sample(7), Signature::new(json!("0xsig")));
        let value = serde_json::to_value(&signed).unwrap();
        assert_eq!(value["block"], json!(7));
        assert_eq!(value["transfers"].as_array().unwrap().len(), 2);
        assert_eq!(value["signatures"], json!(["0xsig", "0xsig"]));
    }

    #[test]
    fn test_signed_round_trips_through_json() {
        let signed =
            SignedTransaction::with_single_signature(sample(7), Signature::new(json!("0xsig")));
        let value = serde_json::to_value(&signed).unwrap();
        let decoded: SignedTransaction = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, signed);
    }

    #[test]
    fn test_deserialize_rejects_misaligned_signatures() {
        let signed =
            SignedTransaction::with_single_signature(sample(7), Signature::new(json!("0xsig")));
        let mut value = serde_json::to_value(&signed).unwrap();
        value["signatures"] = json!(["0xsig"]);

        let err = serde_json::from_value::<SignedTransaction>(value).unwrap_err();
        assert!(err.to_string().contains("Expected 2 signatures, got 1"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let value = json!({
            "block": 7,
            "transfers": [{
                "start": "64",
                "end": "32",
                "sender": Address::repeat_byte(0xaa),
                "recipient": Address::repeat_byte(0xbb),
            }],
            "signatures": ["0xsig"],
        });

        assert!(serde_json::from_value::<SignedTransaction>(value).is_err());
    }
}
