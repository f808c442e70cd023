//! OP Stack deposit transactions (type 0x7E).
//!
//! A deposit is an L1-initiated transaction that executes on L2 without a signature. The
//! infrasound burn-info deposit is a *system* deposit: it mints nothing, moves no value and is
//! attributed to the L1 attributes depositor account.

pub mod encode;
pub mod source;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

pub use encode::DEPOSIT_TX_TYPE;
pub use source::compute_l1_info_source_hash;

/// A deposit transaction ready to be placed in an L2 block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositedTransaction {
    pub source_hash: B256,
    pub from: Address,
    pub to: Option<Address>,
    pub mint: U256,
    pub value: U256,
    pub gas_limit: u64,
    pub is_system_tx: bool,
    pub data: Bytes,
}

impl DepositedTransaction {
    /// Encode this deposit as an L2 transaction (type 0x7E).
    ///
    /// Writes `0x7E || rlp([source_hash, from, to, mint, value, gas, is_system_tx, data])`
    /// into the provided buffer.
    #[inline]
    pub fn encode(&self, out: &mut Vec<u8>) {
        encode::encode_deposit_tx(self, out)
    }

    /// Length of [`encode`](Self::encode)'s output, type byte included.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        encode::encoded_len(self)
    }

    /// Encode this deposit and return as `Bytes`.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        Bytes::from(buf)
    }

    /// Compute the L2 transaction hash.
    #[inline]
    pub fn tx_hash(&self) -> B256 {
        encode::tx_hash(self)
    }
}
