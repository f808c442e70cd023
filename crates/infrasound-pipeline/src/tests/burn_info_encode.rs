use crate::burn_info::{
    encode::{decode_burn_info, encode_burn_info, INFRASOUND_CALLDATA_LEN},
    BurnInfo, BurnInfoError, BurnInfoField, INFRASOUND_SELECTOR,
};
use alloy_primitives::B256;
use proptest::prelude::*;

fn test_info() -> BurnInfo {
    BurnInfo { timestamp: 0xFEDCBA9876543210, burn: 0x0123456789ABCDEF }
}

#[test]
fn test_encoding_length() {
    let mut buf = Vec::new();
    encode_burn_info(&test_info(), &mut buf);

    assert_eq!(buf.len(), INFRASOUND_CALLDATA_LEN);
    assert_eq!(buf.len(), 68);
}

#[test]
fn test_field_positions() {
    let info = test_info();
    let mut buf = Vec::new();
    encode_burn_info(&info, &mut buf);

    assert_eq!(&buf[0..4], &INFRASOUND_SELECTOR);

    // timestamp word at offset 4, value in the last 8 bytes
    assert_eq!(&buf[4..28], &[0u8; 24]);
    assert_eq!(&buf[28..36], &info.timestamp.to_be_bytes());

    // burn word at offset 36
    assert_eq!(&buf[36..60], &[0u8; 24]);
    assert_eq!(&buf[60..68], &info.burn.to_be_bytes());
}

#[test]
fn test_encode_appends_to_buffer() {
    let mut buf = vec![0xAA, 0xBB];
    encode_burn_info(&test_info(), &mut buf);

    assert_eq!(buf.len(), 2 + INFRASOUND_CALLDATA_LEN);
    assert_eq!(&buf[..2], &[0xAA, 0xBB]);
    assert_eq!(&buf[2..6], &INFRASOUND_SELECTOR);
}

#[test]
fn test_encodings_deterministic() {
    let mut buf1 = Vec::new();
    let mut buf2 = Vec::new();

    encode_burn_info(&test_info(), &mut buf1);
    encode_burn_info(&test_info(), &mut buf2);
    assert_eq!(buf1, buf2);
}

#[test]
fn test_matches_abi_encoding() {
    use crate::burn_info::reportCall;
    use alloy_sol_types::SolCall;

    let info = test_info();
    let expected = reportCall { timestamp: info.timestamp, burn: info.burn }.abi_encode();

    let mut buf = Vec::new();
    encode_burn_info(&info, &mut buf);
    assert_eq!(buf, expected);
}

#[test]
fn test_decode_wrong_length() {
    for len in [0usize, 4, 67, 69, 136, 164] {
        let data = vec![0u8; len];
        assert_eq!(
            decode_burn_info(&data),
            Err(BurnInfoError::WrongLength { expected: INFRASOUND_CALLDATA_LEN, got: len }),
            "length {len}"
        );
    }
}

#[test]
fn test_decode_timestamp_padding_reports_slot() {
    let mut buf = Vec::new();
    encode_burn_info(&test_info(), &mut buf);
    buf[10] = 0x01;

    let slot = B256::from_slice(&buf[4..36]);
    assert_eq!(
        decode_burn_info(&buf),
        Err(BurnInfoError::FieldOverflow { field: BurnInfoField::Timestamp, slot })
    );
}

#[test]
fn test_decode_burn_padding_reports_slot() {
    let mut buf = Vec::new();
    encode_burn_info(&test_info(), &mut buf);
    buf[59] = 0x80; // last padding byte before the burn value

    let slot = B256::from_slice(&buf[36..68]);
    assert_eq!(
        decode_burn_info(&buf),
        Err(BurnInfoError::FieldOverflow { field: BurnInfoField::Burn, slot })
    );
}

#[test]
fn test_decode_ignores_selector() {
    let mut buf = Vec::new();
    encode_burn_info(&test_info(), &mut buf);
    buf[..4].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

    assert_eq!(decode_burn_info(&buf), Ok(test_info()));
}

proptest! {
    #[test]
    fn prop_roundtrip(timestamp in any::<u64>(), burn in any::<u64>()) {
        let info = BurnInfo { timestamp, burn };
        let mut buf = Vec::new();
        encode_burn_info(&info, &mut buf);

        prop_assert_eq!(buf.len(), INFRASOUND_CALLDATA_LEN);
        prop_assert_eq!(&buf[..4], &INFRASOUND_SELECTOR[..]);
        prop_assert_eq!(decode_burn_info(&buf), Ok(info));
    }

    #[test]
    fn prop_nonzero_padding_rejected(
        timestamp in any::<u64>(),
        burn in any::<u64>(),
        pos in 0usize..24,
        byte in 1u8..=255,
        in_burn_word in any::<bool>(),
    ) {
        let mut buf = Vec::new();
        encode_burn_info(&BurnInfo { timestamp, burn }, &mut buf);

        let (word_start, field) =
            if in_burn_word { (36, BurnInfoField::Burn) } else { (4, BurnInfoField::Timestamp) };
        buf[word_start + pos] = byte;

        let slot = B256::from_slice(&buf[word_start..word_start + 32]);
        prop_assert_eq!(decode_burn_info(&buf), Err(BurnInfoError::FieldOverflow { field, slot }));
    }

    #[test]
    fn prop_wrong_length_rejected(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        prop_assume!(data.len() != INFRASOUND_CALLDATA_LEN);
        let is_wrong_length = matches!(
            decode_burn_info(&data),
            Err(BurnInfoError::WrongLength { .. })
        );
        prop_assert!(is_wrong_length);
    }
}
