// src/decryptor/stream/mod.rs
pub(crate) mod context;
pub(crate) mod trailer;

pub use context::KeystreamReader;
pub use trailer::{MdcReader, MdcState};

use crate::crypto::ocfb::OcfbDecrypter;
use crate::error::SedError;
use std::io::{self, Read};

type Decrypted<'a, R> = KeystreamReader<OcfbDecrypter, &'a mut R>;

/// Plaintext of a symmetrically encrypted packet.
///
/// Always finish with [`close`](Self::close): for integrity-protected packets
/// that is where the MDC is checked, and until it returns `Ok` every byte read
/// so far is unauthenticated.
pub enum PlaintextReader<'a, R> {
    /// Tag 9: no integrity protection, `close` is a no-op.
    Legacy(Decrypted<'a, R>),
    /// Tag 18: MDC verified on `close`.
    Protected(MdcReader<Decrypted<'a, R>>),
}

impl<R: Read> PlaintextReader<'_, R> {
    #[must_use]
    pub fn is_integrity_protected(&self) -> bool {
        matches!(self, PlaintextReader::Protected(_))
    }

    /// Finish reading and, for protected packets, verify the MDC.
    ///
    /// # Errors
    ///
    /// Only integrity-protected readers fail; see [`MdcReader::close`].
    pub fn close(&mut self) -> Result<(), SedError> {
        match self {
            PlaintextReader::Legacy(_) => Ok(()),
            PlaintextReader::Protected(mdc) => mdc.close(),
        }
    }
}

impl<R: Read> Read for PlaintextReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            PlaintextReader::Legacy(plain) => plain.read(buf),
            PlaintextReader::Protected(mdc) => mdc.read(buf),
        }
    }
}
