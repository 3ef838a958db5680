//! src/decryptor/stream/trailer.rs
//! MDC trailer handling: withhold the last 22 plaintext bytes, hash the rest
//!
//! The Modification Detection Code packet (tag 19) is the final 22 bytes of the
//! decrypted stream, but nothing marks where it starts. The reader therefore
//! keeps a window of the most recent 22 bytes back from the caller; whatever is
//! in the window when the upstream runs dry is the trailer.

use crate::aliases::{MdcHash, TrailerWindow22};
use crate::consts::{DRAIN_CHUNK_SIZE, MDC_PACKET_TAG_BYTE, MDC_TRAILER_SIZE, SHA1_SIZE};
use crate::decryptor::read::read_up_to;
use crate::error::SedError;
use secure_gate::{RevealSecret, RevealSecretMut};
use sha1::Digest;
use std::io::{self, Read};
use subtle::ConstantTimeEq;
use tracing::{debug, trace, warn};

/// Where an [`MdcReader`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MdcState {
    /// The window has not yet seen 22 bytes.
    Filling,
    /// Window full; reads release its oldest bytes.
    Streaming,
    /// Upstream exhausted; the window holds the trailer.
    Draining,
    /// An error occurred. Terminal.
    Failed,
}

/// Plaintext reader that verifies the trailing MDC packet on [`close`](Self::close).
///
/// Bytes returned by `read` are unauthenticated until `close` returns `Ok`.
pub struct MdcReader<R> {
    inner: R,
    hash: MdcHash,
    trailer: TrailerWindow22,
    scratch: TrailerWindow22,
    trailer_used: usize,
    state: MdcState,
}

impl<R: Read> MdcReader<R> {
    /// `hash` must already contain the decrypted prefix.
    pub fn new(inner: R, hash: MdcHash) -> Self {
        Self {
            inner,
            hash,
            trailer: TrailerWindow22::new([0u8; MDC_TRAILER_SIZE]),
            scratch: TrailerWindow22::new([0u8; MDC_TRAILER_SIZE]),
            trailer_used: 0,
            state: MdcState::Filling,
        }
    }

    #[must_use]
    pub fn state(&self) -> MdcState {
        self.state
    }

    fn fail(&mut self, err: io::Error) -> io::Error {
        debug!(error = %err, previous = ?self.state, "MDC reader failed");
        self.state = MdcState::Failed;
        err
    }

    fn fill_trailer(&mut self) -> io::Result<()> {
        while self.trailer_used < MDC_TRAILER_SIZE {
            match self
                .inner
                .read(&mut self.trailer.expose_secret_mut()[self.trailer_used..])
            {
                Ok(0) => {
                    let err = SedError::TruncatedStream.into_io(io::ErrorKind::UnexpectedEof);
                    return Err(self.fail(err));
                }
                Ok(n) => self.trailer_used += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.fail(e)),
            }
        }
        trace!("MDC window filled");
        self.state = MdcState::Streaming;
        Ok(())
    }

    /// `buf.len() <= 22`: release as many window bytes as new bytes arrived.
    fn read_short(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let wanted = buf.len();
        let n = match read_up_to(&mut self.inner, &mut self.scratch.expose_secret_mut()[..wanted])
        {
            Ok(n) => n,
            Err(e) => return Err(self.fail(e)),
        };

        let window = self.trailer.expose_secret_mut();
        buf[..n].copy_from_slice(&window[..n]);
        self.hash.update(&buf[..n]);
        window.copy_within(n.., 0);
        window[MDC_TRAILER_SIZE - n..].copy_from_slice(&self.scratch.expose_secret()[..n]);

        if n < wanted {
            trace!(delivered = n, "upstream exhausted");
            self.state = MdcState::Draining;
        }
        Ok(n)
    }

    /// `buf.len() > 22`: read straight into the caller's buffer behind room for the window.
    fn read_long(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = loop {
            match self.inner.read(&mut buf[MDC_TRAILER_SIZE..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.fail(e)),
            }
        };

        if n == 0 {
            trace!("upstream exhausted");
            self.state = MdcState::Draining;
            return Ok(0);
        }

        buf[..MDC_TRAILER_SIZE].copy_from_slice(self.trailer.expose_secret());
        self.hash.update(&buf[..n]);
        self.trailer
            .expose_secret_mut()
            .copy_from_slice(&buf[n..n + MDC_TRAILER_SIZE]);
        Ok(n)
    }

    /// Drain the stream if needed and verify the MDC packet.
    ///
    /// # Errors
    ///
    /// - [`SedError::ReadFailed`] - the reader failed, now or earlier
    /// - [`SedError::TrailerNotFound`] - the last 22 bytes are not an MDC packet
    /// - [`SedError::HashMismatch`] - the contents were modified (or the key is wrong)
    pub fn close(&mut self) -> Result<(), SedError> {
        if self.state == MdcState::Failed {
            return Err(SedError::ReadFailed);
        }

        if self.state != MdcState::Draining {
            let mut sink = [0u8; DRAIN_CHUNK_SIZE];
            loop {
                match self.read(&mut sink) {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => {
                        debug!(error = %e, "error while draining before MDC check");
                        return Err(SedError::ReadFailed);
                    }
                }
            }
        }

        let trailer = self.trailer.expose_secret();
        if trailer[0] != MDC_PACKET_TAG_BYTE || usize::from(trailer[1]) != SHA1_SIZE {
            warn!("MDC packet not found at end of stream");
            return Err(SedError::TrailerNotFound);
        }

        let mut hash = self.hash.clone();
        hash.update(&trailer[..2]);
        let digest = hash.finalize();

        if !bool::from(digest.as_slice().ct_eq(&trailer[2..])) {
            warn!("MDC hash mismatch");
            return Err(SedError::HashMismatch);
        }

        debug!("MDC verified");
        Ok(())
    }
}

impl<R: Read> Read for MdcReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.state {
            MdcState::Failed => {
                return Err(SedError::Poisoned.into_io(io::ErrorKind::UnexpectedEof));
            }
            MdcState::Draining => return Ok(0),
            MdcState::Filling | MdcState::Streaming => {}
        }

        if buf.is_empty() {
            return Ok(0);
        }

        if self.state == MdcState::Filling {
            self.fill_trailer()?;
        }

        if buf.len() <= MDC_TRAILER_SIZE {
            self.read_short(buf)
        } else {
            self.read_long(buf)
        }
    }
}
