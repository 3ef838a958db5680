// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`block`]: object-safe block cipher view
//! - [`ocfb`]: OpenPGP CFB keystream
//! - [`kdf`]: String-to-Key passphrase derivation
//! - `rng`: OS randomness (`rand` feature)

pub mod block;
pub mod kdf;
pub mod ocfb;
#[cfg(feature = "rand")]
pub mod rng;
