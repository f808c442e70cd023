//! Access to the L1 block a burn-info deposit is derived from.
//!
//! The builder only needs five facts about the block, read through [`L1BlockSource`].
//! [`L1BlockHeader`] deserializes them from an `eth_getBlockByNumber` response, so a header
//! fetched from any L1 node can be fed in directly.

use alloy_eips::eip7840::BlobParams;
use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read-only view of an L1 block.
pub trait L1BlockSource {
    /// L1 block hash
    fn hash(&self) -> B256;
    /// L1 block timestamp
    fn time(&self) -> u64;
    /// L1 base fee per gas
    fn base_fee(&self) -> U256;
    /// Gas used by the L1 block
    fn gas_used(&self) -> u64;
    /// L1 blob base fee
    fn blob_base_fee(&self) -> u64;
}

impl<T: L1BlockSource + ?Sized> L1BlockSource for &T {
    fn hash(&self) -> B256 {
        (**self).hash()
    }

    fn time(&self) -> u64 {
        (**self).time()
    }

    fn base_fee(&self) -> U256 {
        (**self).base_fee()
    }

    fn gas_used(&self) -> u64 {
        (**self).gas_used()
    }

    fn blob_base_fee(&self) -> u64 {
        (**self).blob_base_fee()
    }
}

/// The L1 block facts needed to derive a burn-info deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct L1BlockInfo {
    pub number: u64,
    pub hash: B256,
    pub timestamp: u64,
    pub basefee: U256,
    pub gas_used: u64,
    pub blob_basefee: u64,
}

impl L1BlockInfo {
    pub const fn new(
        number: u64,
        hash: B256,
        timestamp: u64,
        basefee: U256,
        gas_used: u64,
        blob_basefee: u64,
    ) -> Self {
        Self { number, hash, timestamp, basefee, gas_used, blob_basefee }
    }
}

impl L1BlockSource for L1BlockInfo {
    fn hash(&self) -> B256 {
        self.hash
    }

    fn time(&self) -> u64 {
        self.timestamp
    }

    fn base_fee(&self) -> U256 {
        self.basefee
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }

    fn blob_base_fee(&self) -> u64 {
        self.blob_basefee
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("blob base fee {0} exceeds uint64 bounds")]
    BlobBaseFeeOverflow(u128),
}

/// An L1 block header as returned by the JSON-RPC API.
///
/// Only the fields the burn-info deposit depends on are kept; everything else in the response
/// is ignored. Pre-London headers have no `baseFeePerGas` and pre-Cancun headers have no
/// `excessBlobGas`, both default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1BlockHeader {
    pub hash: B256,
    #[serde(with = "alloy_serde::quantity")]
    pub number: u64,
    #[serde(with = "alloy_serde::quantity")]
    pub timestamp: u64,
    #[serde(default)]
    pub base_fee_per_gas: U256,
    #[serde(with = "alloy_serde::quantity")]
    pub gas_used: u64,
    #[serde(default, with = "alloy_serde::quantity::opt", skip_serializing_if = "Option::is_none")]
    pub excess_blob_gas: Option<u64>,
    /// Explicit blob base fee. Not part of the standard header, takes precedence over
    /// `excessBlobGas` when present.
    #[serde(default, with = "alloy_serde::quantity::opt", skip_serializing_if = "Option::is_none")]
    pub blob_base_fee: Option<u64>,
}

impl L1BlockHeader {
    /// Resolve the header into [`L1BlockInfo`], pricing blob gas with `blob_params` when the
    /// header carries no explicit blob base fee.
    pub fn to_block_info(&self, blob_params: &BlobParams) -> Result<L1BlockInfo, HeaderError> {
        let blob_basefee = match (self.blob_base_fee, self.excess_blob_gas) {
            (Some(fee), _) => fee,
            (None, Some(excess)) => {
                let fee = blob_params.calc_blob_fee(excess);
                u64::try_from(fee).map_err(|_| HeaderError::BlobBaseFeeOverflow(fee))?
            }
            (None, None) => 0,
        };

        Ok(L1BlockInfo {
            number: self.number,
            hash: self.hash,
            timestamp: self.timestamp,
            basefee: self.base_fee_per_gas,
            gas_used: self.gas_used,
            blob_basefee,
        })
    }
}
