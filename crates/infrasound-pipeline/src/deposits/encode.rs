//! EIP-2718 encoding for deposit transactions.
//!
//! `0x7E || rlp([source_hash, from, to, mint, value, gas, is_system_tx, data])`
//! Spec: <https://specs.optimism.io/protocol/deposits.html>

use alloy_primitives::{keccak256, B256};
use alloy_rlp::{BufMut, Encodable, Header, EMPTY_STRING_CODE};

use super::DepositedTransaction;

/// EIP-2718 transaction type for deposits, arbitrarily chosen by OP
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;

/// Encode a deposit transaction into the provided buffer.
pub fn encode_deposit_tx(tx: &DepositedTransaction, out: &mut Vec<u8>) {
    out.reserve(encoded_len(tx));
    out.put_u8(DEPOSIT_TX_TYPE);
    rlp_header(tx).encode(out);

    tx.source_hash.encode(out);
    tx.from.encode(out);
    match &tx.to {
        Some(to) => to.encode(out),
        // contract creation
        None => out.put_u8(EMPTY_STRING_CODE),
    }
    tx.mint.encode(out);
    tx.value.encode(out);
    tx.gas_limit.encode(out);
    // true -> 0x01, false -> 0x80
    tx.is_system_tx.encode(out);
    tx.data.encode(out);
}

/// Total encoded length: type byte, list header and fields.
pub fn encoded_len(tx: &DepositedTransaction) -> usize {
    let header = rlp_header(tx);
    1 + header.length() + header.payload_length
}

/// Compute the keccak256 hash of the encoded deposit transaction.
#[inline]
pub fn tx_hash(tx: &DepositedTransaction) -> B256 {
    let mut buf = Vec::with_capacity(encoded_len(tx));
    encode_deposit_tx(tx, &mut buf);
    keccak256(&buf)
}

fn rlp_header(tx: &DepositedTransaction) -> Header {
    let to_len = tx.to.as_ref().map_or(1, |to| to.length());

    let payload_length = tx.source_hash.length() +
        tx.from.length() +
        to_len +
        tx.mint.length() +
        tx.value.length() +
        tx.gas_limit.length() +
        tx.is_system_tx.length() +
        tx.data.length();

    Header { list: true, payload_length }
}
