//! src/decryptor/stream/context.rs
//! Raw keystream decryption over an upstream reader

use crate::crypto::ocfb::KeystreamSession;
use std::io::{self, Read};

/// Pulls ciphertext from `inner` and hands back plaintext, byte for byte.
///
/// No buffering: every plaintext byte corresponds to the ciphertext byte read
/// by the same call, so the caller sees exactly the upstream chunking.
pub struct KeystreamReader<S, R> {
    session: S,
    inner: R,
}

impl<S, R> KeystreamReader<S, R>
where
    S: KeystreamSession,
    R: Read,
{
    #[inline(always)]
    pub fn new(session: S, inner: R) -> Self {
        Self { session, inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<S, R> Read for KeystreamReader<S, R>
where
    S: KeystreamSession,
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.session.xor_key_stream(&mut buf[..n]);
        Ok(n)
    }
}
