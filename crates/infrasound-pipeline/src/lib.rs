//! Infrasound burn-info deposits for OP Stack L2 blocks.
//!
//! Every L2 block carries a system deposit that reports L1 fee data to the infrasound
//! contract. This crate provides:
//! - Burn info calldata encoding and decoding (`report(uint64,uint64)`, 68 bytes)
//! - Deposit transaction assembly from L1 block data
//! - Source hash derivation and type 0x7E deposit serialization
//!
//! ```ignore
//! use infrasound_pipeline::{infrasound_deposit_bytes, BuilderConfig, L1BlockInfo};
//!
//! let block = L1BlockInfo::new(number, hash, timestamp, basefee, gas_used, blob_basefee);
//! let tx = infrasound_deposit_bytes(0, &block, &BuilderConfig::default())?;
//! ```

mod builder;
mod config;
mod l1_block;

pub mod burn_info;
pub mod deposits;

#[cfg(test)]
mod tests;

pub use builder::{
    compute_burn, infrasound_deposit, infrasound_deposit_bytes, BuildError, DepositEncoder,
    EncodingFailure, InfrasoundDepositBuilder, L1InfoSourceHasher, RlpDepositEncoder,
    SourceHasher,
};
pub use burn_info::{
    has_infrasound_selector, BurnInfo, BurnInfoError, BurnInfoField, INFRASOUND_CALLDATA_LEN,
    INFRASOUND_FUNC_SIGNATURE, INFRASOUND_SELECTOR,
};
pub use config::{
    BuilderConfig, BurnPolicy, UnknownBurnPolicy, INFRASOUND_ADDRESS, INFRASOUND_TX_GAS,
    L1_ATTRIBUTES_DEPOSITOR,
};
pub use deposits::{compute_l1_info_source_hash, DepositedTransaction, DEPOSIT_TX_TYPE};
pub use l1_block::{HeaderError, L1BlockHeader, L1BlockInfo, L1BlockSource};

pub use alloy_eips::eip7840::BlobParams;
