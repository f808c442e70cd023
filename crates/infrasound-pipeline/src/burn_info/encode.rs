//! Calldata layout for infrasound burn info (ABI-encoded, 68 bytes).
//!
//! ```text
//! | Offset | Size | Field             |
//! |--------|------|-------------------|
//! | 0      | 4    | Function selector |
//! | 4      | 24   | padding (zeros)   |
//! | 28     | 8    | l1BlockTimestamp  |
//! | 36     | 24   | padding (zeros)   |
//! | 60     | 8    | burn              |
//! ```
//!
//! Both values occupy a full ABI word, so a decoder must reject words whose padding is set
//! instead of truncating them.

use alloy_primitives::B256;

use super::{BurnInfo, BurnInfoError, BurnInfoField, INFRASOUND_SELECTOR};

const WORD_LEN: usize = 32;

/// Leading zero bytes of a `uint64` ABI word.
const UINT64_PADDING: usize = WORD_LEN - 8;

const TIMESTAMP_OFFSET: usize = 4;
const BURN_OFFSET: usize = TIMESTAMP_OFFSET + WORD_LEN;

/// 4 + 32 + 32 = 68 bytes
pub const INFRASOUND_CALLDATA_LEN: usize = 4 + WORD_LEN * 2;

/// Encode burn info into `out`. Always appends exactly [`INFRASOUND_CALLDATA_LEN`] bytes.
pub fn encode_burn_info(info: &BurnInfo, out: &mut Vec<u8>) {
    out.reserve(INFRASOUND_CALLDATA_LEN);
    let start = out.len();

    // Function selector (4 bytes)
    out.extend_from_slice(&INFRASOUND_SELECTOR);

    // timestamp (32 bytes)
    push_uint64_word(out, info.timestamp);

    // burn (32 bytes)
    push_uint64_word(out, info.burn);

    debug_assert_eq!(out.len() - start, INFRASOUND_CALLDATA_LEN);
}

/// Decode burn info from calldata of exactly [`INFRASOUND_CALLDATA_LEN`] bytes.
pub fn decode_burn_info(data: &[u8]) -> Result<BurnInfo, BurnInfoError> {
    // Checked against this record's own length, not the L1 attributes calldata length.
    if data.len() != INFRASOUND_CALLDATA_LEN {
        return Err(BurnInfoError::WrongLength {
            expected: INFRASOUND_CALLDATA_LEN,
            got: data.len(),
        });
    }

    let timestamp = read_uint64_word(data, TIMESTAMP_OFFSET, BurnInfoField::Timestamp)?;
    let burn = read_uint64_word(data, BURN_OFFSET, BurnInfoField::Burn)?;

    Ok(BurnInfo { timestamp, burn })
}

#[inline]
fn push_uint64_word(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&[0u8; UINT64_PADDING]);
    out.extend_from_slice(&value.to_be_bytes());
}

/// Read the `uint64` stored in the word at `offset`. Caller guarantees the word is in bounds.
fn read_uint64_word(
    data: &[u8],
    offset: usize,
    field: BurnInfoField,
) -> Result<u64, BurnInfoError> {
    let slot = B256::from_slice(&data[offset..offset + WORD_LEN]);
    let (padding, value) = slot.split_at(UINT64_PADDING);

    if padding.iter().any(|&b| b != 0) {
        return Err(BurnInfoError::FieldOverflow { field, slot });
    }

    let mut be = [0u8; 8];
    be.copy_from_slice(value);
    Ok(u64::from_be_bytes(be))
}
