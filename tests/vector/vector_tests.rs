//! tests/vector/vector_tests.rs
//! Packets produced by GnuPG 2.2, decrypted with keys derived from their S2K specifiers

use hex::decode;
use openpgp_sed::aliases::PasswordString;
use openpgp_sed::{decrypt, CipherFunction, S2k, SedError, SymmetricallyEncrypted};
use secure_gate::RevealSecret;
use serde::Deserialize;
use std::io::{Cursor, Read};

fn load_json<T>(filename: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

#[derive(Debug, Deserialize)]
struct GpgVector {
    name: String,
    integrity_protected: bool,
    cipher_id: u8,
    passphrase: String,
    s2k_hex: String,
    key_hex: String,
    body_hex: String,
    plaintext_hex: String,
}

impl GpgVector {
    fn cipher(&self) -> CipherFunction {
        CipherFunction::from_id(self.cipher_id)
            .unwrap_or_else(|e| panic!("{}: bad cipher id: {e}", self.name))
    }

    fn bytes(&self, field: &str) -> Vec<u8> {
        let hex = match field {
            "s2k" => &self.s2k_hex,
            "key" => &self.key_hex,
            "body" => &self.body_hex,
            "plaintext" => &self.plaintext_hex,
            other => panic!("unknown field {other}"),
        };
        decode(hex).unwrap_or_else(|e| panic!("{}: invalid {field} hex: {e}", self.name))
    }
}

fn vectors() -> Vec<GpgVector> {
    load_json("gpg_vectors.json")
}

#[test]
fn s2k_reproduces_gpg_session_keys() {
    for v in vectors() {
        let s2k = S2k::parse(&v.bytes("s2k")[..]).unwrap();
        let mut key = vec![0u8; v.cipher().key_size()];
        let password = PasswordString::new(v.passphrase.clone());
        s2k.derive_key(password.expose_secret().as_bytes(), &mut key)
            .unwrap();
        assert_eq!(key, v.bytes("key"), "{}: derived key differs", v.name);
    }
}

#[test]
fn one_shot_decrypt_matches_gpg_plaintext() {
    for v in vectors() {
        let mut out = Vec::new();
        let n = decrypt(
            Cursor::new(v.bytes("body")),
            &mut out,
            v.cipher(),
            &v.bytes("key"),
            v.integrity_protected,
        )
        .unwrap_or_else(|e| panic!("{}: decrypt failed: {e}", v.name));

        assert_eq!(out, v.bytes("plaintext"), "{}", v.name);
        assert_eq!(n as usize, out.len());
    }
}

#[test]
fn gpg_vectors_in_small_reads() {
    for v in vectors() {
        let body = v.bytes("body");
        for chunk in [1usize, 3, 16, 22, 23, 64] {
            let mut packet = SymmetricallyEncrypted::parse(&body[..], v.integrity_protected).unwrap();
            let mut reader = packet.decrypt(v.cipher(), &v.bytes("key")).unwrap();
            let mut out = Vec::new();
            let mut buf = vec![0u8; chunk];
            loop {
                let n = reader.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                out.extend_from_slice(&buf[..n]);
            }
            reader.close().unwrap();
            assert_eq!(out, v.bytes("plaintext"), "{} chunk {chunk}", v.name);
        }
    }
}

#[test]
fn gpg_vectors_reject_zero_key() {
    for v in vectors() {
        let body = v.bytes("body");
        let zero = vec![0u8; v.cipher().key_size()];
        let mut packet = SymmetricallyEncrypted::parse(&body[..], v.integrity_protected).unwrap();
        assert!(
            matches!(packet.decrypt(v.cipher(), &zero), Err(SedError::KeyIncorrect)),
            "{}",
            v.name
        );
        // The captured prefix survives the failed attempt.
        let mut reader = packet.decrypt(v.cipher(), &v.bytes("key")).unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        reader.close().unwrap();
        assert_eq!(out, v.bytes("plaintext"), "{}", v.name);
    }
}

#[test]
fn gpg_protected_vector_detects_flipped_trailer_bits() {
    let v = vectors()
        .into_iter()
        .find(|v| v.integrity_protected)
        .unwrap();
    let body = v.bytes("body");
    for pos in body.len() - 22..body.len() {
        for bit in 0..8 {
            let mut tampered = body.clone();
            tampered[pos] ^= 1 << bit;
            let err = decrypt(
                Cursor::new(tampered),
                Vec::new(),
                v.cipher(),
                &v.bytes("key"),
                true,
            )
            .unwrap_err();
            assert!(
                err.is_signature_error(),
                "byte {pos} bit {bit}: expected signature error, got {err:?}"
            );
        }
    }
}
