// src/lib.rs

//! Streaming reader and writer for OpenPGP symmetrically encrypted data
//! packets: tag 9 (legacy) and tag 18 (integrity protected, with MDC).
//!
//! ```
//! use openpgp_sed::{serialize_with_prefix_block, CipherFunction, SymmetricallyEncrypted};
//! use std::io::{Read, Write};
//!
//! let key = [0x24u8; 16];
//! let mut writer =
//!     serialize_with_prefix_block(Vec::new(), CipherFunction::Aes128, &key, true, &[7u8; 16])?;
//! writer.write_all(b"hello world")?;
//! let body = writer.finish()?;
//!
//! let mut packet = SymmetricallyEncrypted::parse(&body[..], true)?;
//! let mut plaintext = packet.decrypt(CipherFunction::Aes128, &key)?;
//! let mut out = Vec::new();
//! plaintext.read_to_end(&mut out)?;
//! plaintext.close()?; // MDC checked here
//! assert_eq!(out, b"hello world");
//! # Ok::<(), openpgp_sed::SedError>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;

// High-level API
pub use cipher::CipherFunction;
pub use decryptor::{decrypt, PlaintextReader, SymmetricallyEncrypted};
pub use encryptor::{serialize_with_prefix_block, SeWriter};
#[cfg(feature = "rand")]
pub use encryptor::{encrypt, serialize_symmetrically_encrypted};
pub use error::SedError;

// Key derivation
pub use builders::S2kBuilder;
pub use crypto::kdf::s2k::{S2k, S2kHash};

pub use header::read_version;
