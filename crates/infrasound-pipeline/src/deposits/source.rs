//! Source hashes: the unique, deterministic identity of a deposit.
//!
//! `keccak256(bytes32(domain) || keccak256(l1BlockHash || bytes32(index)))`
//!
//! Domain 1 covers system deposits derived from L1 block info, which is the domain the
//! infrasound deposit lives in. Its `index` is the L2 sequence number within the epoch.

use alloy_primitives::{keccak256, B256};

/// Source hash domain for deposits derived from L1 block info.
pub const L1_INFO_DEPOSIT_SOURCE_DOMAIN: u8 = 1;

/// Compute the source hash of an L1 info (domain 1) deposit.
pub fn compute_l1_info_source_hash(l1_block_hash: B256, sequence_number: u64) -> B256 {
    deposit_source_hash(L1_INFO_DEPOSIT_SOURCE_DOMAIN, l1_block_hash, sequence_number)
}

fn deposit_source_hash(domain: u8, l1_block_hash: B256, index: u64) -> B256 {
    let mut deposit_id_input = [0u8; 64];
    deposit_id_input[..32].copy_from_slice(l1_block_hash.as_slice());
    deposit_id_input[56..].copy_from_slice(&index.to_be_bytes());
    let deposit_id = keccak256(deposit_id_input);

    let mut source_hash_input = [0u8; 64];
    source_hash_input[31] = domain;
    source_hash_input[32..].copy_from_slice(deposit_id.as_slice());
    keccak256(source_hash_input)
}
