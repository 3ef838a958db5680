//! tests/kdf/s2k_tests.rs
//! String-to-Key derivation against independently computed values

use hex::decode;
use openpgp_sed::aliases::PasswordString;
use openpgp_sed::crypto::kdf::s2k::decode_count;
use openpgp_sed::{CipherFunction, S2k, S2kBuilder, S2kHash, SedError};
use secure_gate::RevealSecret;

fn derive(s2k: &S2k, passphrase: &[u8], len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    s2k.derive_key(passphrase, &mut key).unwrap();
    key
}

#[test]
fn known_answers() {
    let cases: Vec<(S2k, &[u8], &str)> = vec![
        (
            S2k::Simple {
                hash: S2kHash::Sha1,
            },
            &b"password"[..],
            "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd89d33953d511c74f6c70241d2f7a65c34f97e666c",
        ),
        (
            S2k::Salted {
                hash: S2kHash::Sha224,
                salt: *b"saltsalt",
            },
            &b"password"[..],
            "395668da28d9616007165b4adb31790586074b637dd007e4",
        ),
        (
            S2k::IteratedSalted {
                hash: S2kHash::Sha512,
                salt: *b"saltsalt",
                coded_count: 0,
            },
            &b"password"[..],
            "ab6f8502caf498ac6567a4524b0fe3c64403d272880f865539e0a37d2dbc909e",
        ),
        (
            S2k::IteratedSalted {
                hash: S2kHash::Sha384,
                salt: [1, 2, 3, 4, 5, 6, 7, 8],
                coded_count: 0x10,
            },
            &b"password"[..],
            "a7ea5d5009b34c3e9541e41d9076d292f2f72738c3caf75c0b317045536bffae",
        ),
    ];

    for (s2k, passphrase, expected_hex) in cases {
        let expected = decode(expected_hex).unwrap();
        assert_eq!(
            derive(&s2k, passphrase, expected.len()),
            expected,
            "{s2k:?}"
        );
    }
}

#[test]
fn count_below_input_length_hashes_input_once() {
    // 2008 bytes of salt + passphrase exceed the 1024-byte count
    let passphrase = vec![b'x'; 2000];
    let s2k = S2k::IteratedSalted {
        hash: S2kHash::Sha1,
        salt: *b"saltsalt",
        coded_count: 0,
    };
    assert_eq!(decode_count(0), 1024);
    assert_eq!(
        derive(&s2k, &passphrase, 16),
        decode("530b299c8bbe87aa50fa34c9852066da").unwrap()
    );
}

#[test]
fn builder_matches_gpg_session_key() {
    let builder = S2kBuilder::from_salt([0x8b, 0xf7, 0x18, 0xc1, 0xbc, 0xd3, 0x4d, 0x39])
        .with_hash(S2kHash::Sha256)
        .with_coded_count(0x60);
    let passphrase = PasswordString::new("hunter2".to_string());

    let key = builder
        .derive_key(&passphrase, CipherFunction::Aes256)
        .unwrap();
    assert_eq!(
        key.expose_secret().as_slice(),
        &decode("93b6c56ff5218f3593fb941878b17d0e6531a564049bfb6cefffe03fefa8a63e").unwrap()[..]
    );

    let mut wire = Vec::new();
    builder.specifier().write(&mut wire).unwrap();
    assert_eq!(wire, decode("03088bf718c1bcd34d3960").unwrap());
}

#[test]
fn with_iterations_rounds_up() {
    let builder = S2kBuilder::from_salt([0; 8]).with_iterations(65_000);
    assert_eq!(builder.iterations(), 65_536);

    let builder = builder.with_iterations(1);
    assert_eq!(builder.iterations(), 1024);
}

#[test]
fn parse_errors() {
    assert!(matches!(
        S2k::parse(&[4u8, 2][..]),
        Err(SedError::UnsupportedS2k(4))
    ));
    assert!(matches!(
        S2k::parse(&[3u8, 3][..]),
        Err(SedError::UnsupportedHash(3))
    ));
    // salt cut short
    assert!(matches!(
        S2k::parse(&[3u8, 2, 1, 2, 3][..]),
        Err(SedError::Io(_))
    ));
}
