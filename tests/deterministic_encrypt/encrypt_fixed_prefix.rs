//! tests/deterministic_encrypt/encrypt_fixed_prefix.rs
//! Byte-exact output for a fixed prefix block

use hex::decode;
use openpgp_sed::encryptor::{mdc_trailer, write_octets, write_version};
use openpgp_sed::{serialize_with_prefix_block, CipherFunction, SedError};
use secure_gate::RevealSecret;
use std::io::Write;

const KEY: [u8; 16] = [0x11; 16];
const PREFIX_BLOCK: [u8; 16] = [0x5A; 16];

fn seal(integrity_protected: bool, plaintext: &[u8]) -> Vec<u8> {
    let mut writer = serialize_with_prefix_block(
        Vec::new(),
        CipherFunction::Aes128,
        &KEY,
        integrity_protected,
        &PREFIX_BLOCK,
    )
    .unwrap();
    writer.write_all(plaintext).unwrap();
    writer.finish().unwrap()
}

#[test]
fn integrity_protected_output_is_exact() {
    let expected = decode(
        "01ba8f1b6b145a4a7737a6f2e65a2136d036fe91aa0997a68179b03e54f2eb4f\
         5f5bc21922bfc538480b75d44f237a63c2fc17ed",
    )
    .unwrap();
    assert_eq!(seal(true, b"hello world"), expected);
}

#[test]
fn legacy_output_is_exact() {
    let expected = decode("ba8f1b6b145a4a7737a6f2e65a2136d036feebcf895abda8dd533d248a").unwrap();
    assert_eq!(seal(false, b"hello world"), expected);
}

#[test]
fn both_modes_share_the_encrypted_prefix() {
    let protected = seal(true, b"");
    let legacy = seal(false, b"");
    assert_eq!(&protected[1..19], &legacy[..18]);
}

#[test]
fn split_writes_match_single_write() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let whole = seal(true, &data);

    let mut writer = serialize_with_prefix_block(
        Vec::new(),
        CipherFunction::Aes128,
        &KEY,
        true,
        &PREFIX_BLOCK,
    )
    .unwrap();
    for piece in data.chunks(333) {
        writer.write_all(piece).unwrap();
    }
    assert_eq!(writer.finish().unwrap(), whole);
}

#[test]
fn wrong_prefix_block_size_is_rejected() {
    let result = serialize_with_prefix_block(
        Vec::new(),
        CipherFunction::Aes128,
        &KEY,
        true,
        &[0u8; 8],
    );
    assert!(matches!(result, Err(SedError::Crypto(_))));
}

#[test]
fn write_helpers() {
    let mut out = Vec::new();
    write_version(&mut out, false).unwrap();
    assert!(out.is_empty());
    write_version(&mut out, true).unwrap();
    write_octets(&mut out, b"xy").unwrap();
    assert_eq!(out, b"\x01xy");

    let trailer = mdc_trailer(Default::default());
    assert_eq!(&trailer.expose_secret()[..2], &[0xD3, 0x14]);
}
