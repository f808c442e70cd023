//! Assembly of the infrasound burn-info deposit.
//!
//! ```text
//! L1 block ──► BurnInfo ──► calldata (68 bytes)
//!     │                          │
//!     └─► source hash ───────────┴─► DepositedTransaction ──► 0x7E || rlp(..)
//! ```
//!
//! Source hash derivation and transaction serialization are injected through
//! [`SourceHasher`] and [`DepositEncoder`]. The defaults implement the OP Stack rules.

use core::convert::Infallible;

use alloy_primitives::{Bytes, B256, U256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    burn_info::BurnInfo,
    config::{BuilderConfig, BurnPolicy},
    deposits::{compute_l1_info_source_hash, DepositedTransaction},
    l1_block::L1BlockSource,
};

/// Derives the identity of a deposit from its L1 origin.
pub trait SourceHasher {
    fn source_hash(&self, l1_block_hash: B256, sequence_number: u64) -> B256;
}

/// L1 info (domain 1) source hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct L1InfoSourceHasher;

impl SourceHasher for L1InfoSourceHasher {
    #[inline]
    fn source_hash(&self, l1_block_hash: B256, sequence_number: u64) -> B256 {
        compute_l1_info_source_hash(l1_block_hash, sequence_number)
    }
}

/// Serializes a deposit into the bytes placed in an L2 block.
pub trait DepositEncoder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn encode_deposit(
        &self,
        tx: &DepositedTransaction,
        out: &mut Vec<u8>,
    ) -> Result<(), Self::Error>;
}

/// EIP-2718 type 0x7E encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RlpDepositEncoder;

impl DepositEncoder for RlpDepositEncoder {
    type Error = Infallible;

    #[inline]
    fn encode_deposit(
        &self,
        tx: &DepositedTransaction,
        out: &mut Vec<u8>,
    ) -> Result<(), Self::Error> {
        tx.encode(out);
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "burn exceeds uint64 bounds: basefee {base_fee} * gas used {gas_used} + blob basefee {blob_base_fee}"
    )]
    BurnOverflow { base_fee: U256, gas_used: u64, blob_base_fee: u64 },
}

/// Failure to produce the serialized deposit, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum EncodingFailure {
    #[error("failed to create infrasound deposit tx: {0}")]
    Build(#[from] BuildError),
    #[error("failed to encode infrasound deposit tx: {0}")]
    Serialize(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Compute `base_fee * gas_used + blob_base_fee`, resolving overflow with `policy`.
pub fn compute_burn(
    policy: BurnPolicy,
    base_fee: U256,
    gas_used: u64,
    blob_base_fee: u64,
) -> Result<u64, BuildError> {
    let exact = base_fee
        .checked_mul(U256::from(gas_used))
        .and_then(|fees| fees.checked_add(U256::from(blob_base_fee)))
        .and_then(|burn| u64::try_from(burn).ok());

    if let Some(burn) = exact {
        return Ok(burn);
    }

    let burn = match policy {
        BurnPolicy::Wrapping => {
            base_fee.as_limbs()[0].wrapping_mul(gas_used).wrapping_add(blob_base_fee)
        }
        BurnPolicy::Saturating => u64::MAX,
        BurnPolicy::Checked => {
            return Err(BuildError::BurnOverflow { base_fee, gas_used, blob_base_fee });
        }
    };

    warn!(%base_fee, gas_used, blob_base_fee, burn, %policy, "burn exceeds uint64 bounds");
    Ok(burn)
}

/// Builds burn-info deposits for L1 blocks.
///
/// Holds no per-block state: the same inputs always give the same deposit.
#[derive(Debug, Clone)]
pub struct InfrasoundDepositBuilder<H = L1InfoSourceHasher, E = RlpDepositEncoder> {
    config: BuilderConfig,
    hasher: H,
    encoder: E,
}

impl InfrasoundDepositBuilder {
    /// Create a builder with the OP Stack source hash and encoding.
    pub const fn new(config: BuilderConfig) -> Self {
        Self { config, hasher: L1InfoSourceHasher, encoder: RlpDepositEncoder }
    }
}

impl Default for InfrasoundDepositBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl<H, E> InfrasoundDepositBuilder<H, E> {
    /// Replace the source hash derivation.
    pub fn with_source_hasher<H2: SourceHasher>(
        self,
        hasher: H2,
    ) -> InfrasoundDepositBuilder<H2, E> {
        InfrasoundDepositBuilder { config: self.config, hasher, encoder: self.encoder }
    }

    /// Replace the transaction encoding.
    pub fn with_encoder<E2: DepositEncoder>(
        self,
        encoder: E2,
    ) -> InfrasoundDepositBuilder<H, E2> {
        InfrasoundDepositBuilder { config: self.config, hasher: self.hasher, encoder }
    }

    #[inline]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Read the burn info of an L1 block.
    pub fn burn_info<B: L1BlockSource + ?Sized>(
        &self,
        block: &B,
    ) -> Result<BurnInfo, BuildError> {
        let burn = compute_burn(
            self.config.burn_policy,
            block.base_fee(),
            block.gas_used(),
            block.blob_base_fee(),
        )?;
        Ok(BurnInfo::new(block.time(), burn))
    }
}

impl<H: SourceHasher, E> InfrasoundDepositBuilder<H, E> {
    /// Build the burn-info deposit for the L2 block at `sequence_number` within the epoch of
    /// `block`.
    pub fn build_deposit<B: L1BlockSource + ?Sized>(
        &self,
        sequence_number: u64,
        block: &B,
    ) -> Result<DepositedTransaction, BuildError> {
        let info = self.burn_info(block)?;
        let l1_block_hash = block.hash();
        let source_hash = self.hasher.source_hash(l1_block_hash, sequence_number);

        debug!(
            %l1_block_hash,
            sequence_number,
            timestamp = info.timestamp,
            burn = info.burn,
            %source_hash,
            "built infrasound deposit"
        );

        Ok(DepositedTransaction {
            source_hash,
            from: self.config.depositor,
            to: Some(self.config.receiver),
            mint: U256::ZERO,
            value: U256::ZERO,
            gas_limit: self.config.gas_limit,
            is_system_tx: true,
            data: info.to_calldata(),
        })
    }
}

impl<H: SourceHasher, E: DepositEncoder> InfrasoundDepositBuilder<H, E> {
    /// Build the burn-info deposit and serialize it for inclusion in an L2 block.
    pub fn deposit_bytes<B: L1BlockSource + ?Sized>(
        &self,
        sequence_number: u64,
        block: &B,
    ) -> Result<Bytes, EncodingFailure> {
        let deposit = self.build_deposit(sequence_number, block)?;

        let mut buf = Vec::with_capacity(deposit.encoded_len());
        self.encoder
            .encode_deposit(&deposit, &mut buf)
            .map_err(|e| EncodingFailure::Serialize(Box::new(e)))?;

        Ok(Bytes::from(buf))
    }
}

/// Build the burn-info deposit for `block` with the OP Stack source hash.
pub fn infrasound_deposit<B: L1BlockSource + ?Sized>(
    sequence_number: u64,
    block: &B,
    config: &BuilderConfig,
) -> Result<DepositedTransaction, BuildError> {
    InfrasoundDepositBuilder::new(*config).build_deposit(sequence_number, block)
}

/// Build the burn-info deposit for `block` and return its type 0x7E encoding.
pub fn infrasound_deposit_bytes<B: L1BlockSource + ?Sized>(
    sequence_number: u64,
    block: &B,
    config: &BuilderConfig,
) -> Result<Bytes, EncodingFailure> {
    InfrasoundDepositBuilder::new(*config).deposit_bytes(sequence_number, block)
}
