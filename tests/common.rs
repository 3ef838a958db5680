//! tests/common.rs
//! Common keys, payloads and helpers shared across test files

use openpgp_sed::{serialize_with_prefix_block, CipherFunction};
use std::io::{Read, Write};

/// Every cipher the crate registers.
#[allow(dead_code)] // Used across multiple test files
pub const ALL_CIPHERS: [CipherFunction; 8] = [
    CipherFunction::TripleDes,
    CipherFunction::Cast5,
    CipherFunction::Aes128,
    CipherFunction::Aes192,
    CipherFunction::Aes256,
    CipherFunction::Camellia128,
    CipherFunction::Camellia192,
    CipherFunction::Camellia256,
];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

#[allow(dead_code)] // Used across multiple test files
pub const HELLO_WORLD: &[u8] = b"hello world";

/// Key filled with `byte`, sized for `cipher`.
#[allow(dead_code)]
pub fn key_for(cipher: CipherFunction, byte: u8) -> Vec<u8> {
    vec![byte; cipher.key_size()]
}

/// Prefix block filled with `byte`, sized for `cipher`.
#[allow(dead_code)]
pub fn block_for(cipher: CipherFunction, byte: u8) -> Vec<u8> {
    vec![byte; cipher.block_size()]
}

/// Deterministically encrypt `plaintext` into a packet body.
#[allow(dead_code)]
pub fn seal(
    cipher: CipherFunction,
    key: &[u8],
    integrity_protected: bool,
    prefix_byte: u8,
    plaintext: &[u8],
) -> Vec<u8> {
    let block = block_for(cipher, prefix_byte);
    let mut writer =
        serialize_with_prefix_block(Vec::new(), cipher, key, integrity_protected, &block)
            .unwrap_or_else(|e| panic!("{cipher}: setup failed: {e}"));
    writer.write_all(plaintext).unwrap();
    writer.finish().unwrap()
}

/// Drain `reader` using `chunk`-sized reads.
#[allow(dead_code)]
pub fn read_in_chunks<R: Read>(reader: &mut R, chunk: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; chunk];
    loop {
        let n = reader
            .read(&mut buf)
            .unwrap_or_else(|e| panic!("read failed at chunk {chunk}: {e}"));
        if n == 0 {
            return out;
        }
        out.extend_from_slice(&buf[..n]);
    }
}
