//! src/builders/s2k_builder.rs
//! Iterated+salted S2K builder

use crate::aliases::{KeyBytes, PasswordString, S2kSalt8};
use crate::cipher::CipherFunction;
use crate::consts::{DEFAULT_S2K_CODED_COUNT, S2K_SALT_LEN};
use crate::crypto::kdf::s2k::{decode_count, encode_count, S2k, S2kHash};
use crate::error::SedError;
use secure_gate::RevealSecret;

/// Iterated+salted String-to-Key builder.
///
/// Strong defaults: SHA-256, random 8-byte salt, the largest count OpenPGP can
/// encode ([`DEFAULT_S2K_CODED_COUNT`]).
#[derive(Debug)]
pub struct S2kBuilder {
    hash: S2kHash,
    salt: S2kSalt8,
    coded_count: u8,
}

impl S2kBuilder {
    /// Builder with a fresh random salt.
    ///
    /// # Errors
    ///
    /// [`SedError::Crypto`] if the OS RNG fails.
    #[cfg(feature = "rand")]
    pub fn new() -> Result<Self, SedError> {
        use crate::crypto::rng::SecureRandomExt;
        Ok(Self::from_salt(*S2kSalt8::random()?.expose_secret()))
    }

    /// Builder with a caller-chosen salt (e.g. one read off the wire).
    #[must_use]
    pub fn from_salt(salt: [u8; S2K_SALT_LEN]) -> Self {
        Self {
            hash: S2kHash::Sha256,
            salt: S2kSalt8::new(salt),
            coded_count: DEFAULT_S2K_CODED_COUNT,
        }
    }

    #[must_use]
    pub fn with_hash(mut self, hash: S2kHash) -> Self {
        self.hash = hash;
        self
    }

    /// Set the number of bytes hashed; rounded up to the next encodable count.
    #[must_use]
    pub fn with_iterations(mut self, count: usize) -> Self {
        self.coded_count = encode_count(count);
        self
    }

    #[must_use]
    pub fn with_coded_count(mut self, coded_count: u8) -> Self {
        self.coded_count = coded_count;
        self
    }

    #[must_use]
    pub fn salt(&self) -> &[u8; S2K_SALT_LEN] {
        self.salt.expose_secret()
    }

    /// Bytes hashed per derived digest.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        decode_count(self.coded_count)
    }

    /// The wire specifier to store next to the ciphertext.
    #[must_use]
    pub fn specifier(&self) -> S2k {
        S2k::IteratedSalted {
            hash: self.hash,
            salt: *self.salt.expose_secret(),
            coded_count: self.coded_count,
        }
    }

    /// Derive into a caller-provided buffer.
    pub fn derive_into(
        &self,
        passphrase: &PasswordString,
        out_key: &mut [u8],
    ) -> Result<(), SedError> {
        self.specifier()
            .derive_key(passphrase.expose_secret().as_bytes(), out_key)
    }

    /// Convenience: derive a key sized for `cipher`.
    pub fn derive_key(
        &self,
        passphrase: &PasswordString,
        cipher: CipherFunction,
    ) -> Result<KeyBytes, SedError> {
        let mut key = vec![0u8; cipher.key_size()];
        self.derive_into(passphrase, &mut key)?;
        Ok(KeyBytes::new(key))
    }
}
