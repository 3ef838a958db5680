//! # Cipher Registry
//!
//! OpenPGP symmetric algorithm identifiers (RFC 4880 §9.2, RFC 5581) and the
//! RustCrypto block ciphers behind them.

use crate::crypto::block::BlockFunction;
use crate::error::SedError;
use cipher::{BlockEncrypt, KeyInit};
use std::fmt;

/// An OpenPGP symmetric-key algorithm this crate can drive in OCFB mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CipherFunction {
    TripleDes = 2,
    Cast5 = 3,
    Aes128 = 7,
    Aes192 = 8,
    Aes256 = 9,
    Camellia128 = 11,
    Camellia192 = 12,
    Camellia256 = 13,
}

impl CipherFunction {
    /// Map a wire identifier to a cipher.
    ///
    /// # Errors
    ///
    /// [`SedError::UnsupportedCipher`] naming the rejected identifier.
    pub fn from_id(id: u8) -> Result<Self, SedError> {
        Ok(match id {
            2 => CipherFunction::TripleDes,
            3 => CipherFunction::Cast5,
            7 => CipherFunction::Aes128,
            8 => CipherFunction::Aes192,
            9 => CipherFunction::Aes256,
            11 => CipherFunction::Camellia128,
            12 => CipherFunction::Camellia192,
            13 => CipherFunction::Camellia256,
            other => return Err(SedError::UnsupportedCipher(other)),
        })
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Key size in bytes.
    #[must_use]
    pub const fn key_size(self) -> usize {
        match self {
            CipherFunction::Cast5 | CipherFunction::Aes128 | CipherFunction::Camellia128 => 16,
            CipherFunction::TripleDes
            | CipherFunction::Aes192
            | CipherFunction::Camellia192 => 24,
            CipherFunction::Aes256 | CipherFunction::Camellia256 => 32,
        }
    }

    /// Block size in bytes.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            CipherFunction::TripleDes | CipherFunction::Cast5 => 8,
            _ => 16,
        }
    }

    /// Instantiate the block cipher for `key`.
    ///
    /// # Errors
    ///
    /// [`SedError::InvalidKeyLength`] if `key` is not [`key_size`](Self::key_size) bytes.
    pub fn new_block_function(self, key: &[u8]) -> Result<Box<dyn BlockFunction>, SedError> {
        if key.len() != self.key_size() {
            return Err(self.key_length_error(key.len()));
        }

        let built = match self {
            CipherFunction::TripleDes => boxed::<des::TdesEde3>(key),
            CipherFunction::Cast5 => boxed::<cast5::Cast5>(key),
            CipherFunction::Aes128 => boxed::<aes::Aes128>(key),
            CipherFunction::Aes192 => boxed::<aes::Aes192>(key),
            CipherFunction::Aes256 => boxed::<aes::Aes256>(key),
            CipherFunction::Camellia128 => boxed::<camellia::Camellia128>(key),
            CipherFunction::Camellia192 => boxed::<camellia::Camellia192>(key),
            CipherFunction::Camellia256 => boxed::<camellia::Camellia256>(key),
        };
        built.map_err(|_| self.key_length_error(key.len()))
    }

    pub(crate) fn key_length_error(self, actual: usize) -> SedError {
        SedError::InvalidKeyLength {
            cipher: self,
            expected: self.key_size(),
            actual,
        }
    }
}

fn boxed<C>(key: &[u8]) -> Result<Box<dyn BlockFunction>, cipher::InvalidLength>
where
    C: KeyInit + BlockEncrypt + Send + 'static,
{
    Ok(Box::new(C::new_from_slice(key)?))
}

impl TryFrom<u8> for CipherFunction {
    type Error = SedError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl From<CipherFunction> for u8 {
    fn from(cipher: CipherFunction) -> Self {
        cipher.id()
    }
}

impl fmt::Display for CipherFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherFunction::TripleDes => "TripleDES",
            CipherFunction::Cast5 => "CAST5",
            CipherFunction::Aes128 => "AES-128",
            CipherFunction::Aes192 => "AES-192",
            CipherFunction::Aes256 => "AES-256",
            CipherFunction::Camellia128 => "Camellia-128",
            CipherFunction::Camellia192 => "Camellia-192",
            CipherFunction::Camellia256 => "Camellia-256",
        };
        f.write_str(name)
    }
}
