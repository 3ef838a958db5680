//! src/encryptor/stream.rs
//! Streaming OCFB encryption with an optional MDC trailer

use crate::aliases::MdcHash;
use crate::consts::ENCRYPT_CHUNK_SIZE;
use crate::crypto::ocfb::{KeystreamSession, OcfbEncrypter};
use crate::encryptor::write::{mdc_trailer, write_octets};
use crate::error::SedError;
use secure_gate::{RevealSecret, RevealSecretMut};
use sha1::Digest;
use std::io::{self, Write};
use tracing::debug;

/// Encrypting writer returned by the `serialize_*` functions.
///
/// Call [`finish`](Self::finish) when done: it appends the MDC packet for
/// integrity-protected output. Dropping the writer without finishing leaves a
/// stream that readers will reject.
pub struct SeWriter<W: Write> {
    inner: W,
    session: OcfbEncrypter,
    hash: Option<MdcHash>,
}

impl<W: Write> SeWriter<W> {
    pub(crate) fn new(inner: W, session: OcfbEncrypter, hash: Option<MdcHash>) -> Self {
        Self {
            inner,
            session,
            hash,
        }
    }

    #[must_use]
    pub fn is_integrity_protected(&self) -> bool {
        self.hash.is_some()
    }

    /// Write the encrypted MDC trailer (if any), flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W, SedError> {
        if let Some(hash) = self.hash.take() {
            let mut trailer = mdc_trailer(hash);
            self.session.xor_key_stream(trailer.expose_secret_mut());
            write_octets(&mut self.inner, trailer.expose_secret())?;
            debug!("MDC trailer written");
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for SeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(ENCRYPT_CHUNK_SIZE);
        let mut chunk = [0u8; ENCRYPT_CHUNK_SIZE];
        chunk[..n].copy_from_slice(&buf[..n]);

        if let Some(hash) = self.hash.as_mut() {
            hash.update(&buf[..n]);
        }
        self.session.xor_key_stream(&mut chunk[..n]);
        self.inner.write_all(&chunk[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
