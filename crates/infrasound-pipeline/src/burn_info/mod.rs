//! Infrasound burn info carried by a system deposit in every L2 block.
//!
//! For each L1 block the derivation process observes, one deposit reports two L1 facts to the
//! infrasound contract on L2: the L1 block timestamp and the "burn", i.e. the fees consumed on
//! L1 (`basefee * gasUsed + blobBaseFee`). The calldata is shaped like a call to
//! `report(uint64,uint64)` so the L2 side can treat it as an ordinary contract invocation.
//!
//! See [`encode`] for the byte layout.

pub(crate) mod encode;

use core::fmt;

use alloy_primitives::{Bytes, B256};
use alloy_sol_types::{sol, SolCall};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deposits::DepositedTransaction;

pub use encode::INFRASOUND_CALLDATA_LEN;

sol! {
    /// Entry point of the infrasound contract the burn-info calldata targets.
    #[derive(Debug, PartialEq, Eq)]
    function report(uint64 timestamp, uint64 burn);
}

/// `report(uint64,uint64)`
pub const INFRASOUND_FUNC_SIGNATURE: &str = reportCall::SIGNATURE;

/// First 4 bytes of `keccak256("report(uint64,uint64)")`.
pub const INFRASOUND_SELECTOR: [u8; 4] = reportCall::SELECTOR;

/// The 32-byte word of the calldata a decoding error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurnInfoField {
    Timestamp,
    Burn,
}

impl fmt::Display for BurnInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp => f.write_str("timestamp"),
            Self::Burn => f.write_str("burn"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BurnInfoError {
    /// Calldata is not exactly [`INFRASOUND_CALLDATA_LEN`] bytes.
    #[error("burn info calldata has unexpected length: expected {expected}, got {got}")]
    WrongLength { expected: usize, got: usize },
    /// The upper 24 bytes of a `uint64` word are not zero. Carries the whole offending word.
    #[error("burn info {field} exceeds uint64 bounds: {slot}")]
    FieldOverflow { field: BurnInfoField, slot: B256 },
}

/// L1 facts reported by the infrasound deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct BurnInfo {
    /// L1 block timestamp
    pub timestamp: u64,
    /// Fees burned on L1 for the block: `basefee * gasUsed + blobBaseFee`
    pub burn: u64,
}

impl BurnInfo {
    pub const fn new(timestamp: u64, burn: u64) -> Self {
        Self { timestamp, burn }
    }

    /// Append the 68-byte calldata encoding to `out`.
    #[inline]
    pub fn encode(&self, out: &mut Vec<u8>) {
        encode::encode_burn_info(self, out)
    }

    /// Encode the burn info and return as `Bytes`.
    pub fn to_calldata(&self) -> Bytes {
        let mut buf = Vec::with_capacity(INFRASOUND_CALLDATA_LEN);
        self.encode(&mut buf);
        Bytes::from(buf)
    }

    /// Decode burn info from deposit calldata.
    ///
    /// The selector is not checked; use [`has_infrasound_selector`] first when the calldata may
    /// belong to another deposit kind.
    #[inline]
    pub fn decode_calldata(data: &[u8]) -> Result<Self, BurnInfoError> {
        encode::decode_burn_info(data)
    }

    /// Decode the burn info carried by a deposit's data field.
    #[inline]
    pub fn from_deposit(tx: &DepositedTransaction) -> Result<Self, BurnInfoError> {
        Self::decode_calldata(&tx.data)
    }
}

/// Whether `data` starts with the `report(uint64,uint64)` selector.
#[inline]
pub fn has_infrasound_selector(data: &[u8]) -> bool {
    data.starts_with(&INFRASOUND_SELECTOR)
}
