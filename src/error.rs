//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, SedError>`](SedError).
//!
//! Readers implement [`std::io::Read`], so errors raised while streaming travel
//! as [`std::io::Error`] values wrapping a [`SedError`]. Converting such an
//! `io::Error` back with `SedError::from` recovers the original variant.

use crate::cipher::CipherFunction;
use std::io;
use thiserror::Error;

/// The error type for all symmetrically encrypted packet operations.
#[derive(Error, Debug)]
pub enum SedError {
    /// Upstream I/O failure, passed through untouched.
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// Miscellaneous cryptographic failure (RNG, malformed parameters).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The integrity-protected packet carried a version byte other than 1.
    #[error("unknown SymmetricallyEncrypted version: {0}")]
    UnsupportedVersion(u8),

    /// The OpenPGP cipher identifier is not one this crate implements.
    #[error("unknown cipher: {0}")]
    UnsupportedCipher(u8),

    /// The supplied key does not match the cipher's key size.
    #[error("incorrect key length for {cipher}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        cipher: CipherFunction,
        expected: usize,
        actual: usize,
    },

    /// A retry used a cipher whose block size disagrees with the captured prefix.
    #[error("can't try ciphers with different block lengths (prefix is {prefix_len} bytes, {cipher} needs {expected})")]
    IncompatibleBlockSize {
        cipher: CipherFunction,
        prefix_len: usize,
        expected: usize,
    },

    /// The prefix quick check rejected the key.
    #[error("incorrect key")]
    KeyIncorrect,

    /// The decrypted stream ended before a complete MDC trailer arrived.
    #[error("unexpected EOF: decrypted stream shorter than the MDC trailer")]
    TruncatedStream,

    /// The reader already failed and cannot be used again.
    #[error("unexpected EOF: reader is unusable after an earlier error")]
    Poisoned,

    /// Reading failed before or while the integrity check ran.
    #[error("signature error: error during reading")]
    ReadFailed,

    /// The withheld trailer is not an MDC packet.
    #[error("signature error: MDC packet not found")]
    TrailerNotFound,

    /// The MDC digest does not match the decrypted contents.
    #[error("signature error: hash mismatch")]
    HashMismatch,

    /// Unknown String-to-Key specifier type.
    #[error("unsupported S2K type: {0}")]
    UnsupportedS2k(u8),

    /// Unknown OpenPGP hash algorithm identifier.
    #[error("unsupported hash function: {0}")]
    UnsupportedHash(u8),
}

impl SedError {
    /// True for the integrity failures reported by `close`.
    ///
    /// Any of these means the plaintext already handed out must be discarded.
    #[must_use]
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            SedError::ReadFailed | SedError::TrailerNotFound | SedError::HashMismatch
        )
    }

    /// Wrap this error in an `io::Error` of the given kind.
    pub(crate) fn into_io(self, kind: io::ErrorKind) -> io::Error {
        io::Error::new(kind, self)
    }
}

impl From<io::Error> for SedError {
    fn from(err: io::Error) -> Self {
        match err.downcast::<SedError>() {
            Ok(inner) => inner,
            Err(err) => SedError::Io(err),
        }
    }
}

impl From<&'static str> for SedError {
    fn from(msg: &'static str) -> Self {
        SedError::Crypto(msg.to_string())
    }
}
