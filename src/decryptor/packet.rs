//! src/decryptor/packet.rs
//! Symmetrically encrypted packet body (RFC 4880 §5.7 / §5.13)

use crate::aliases::{MdcHash, PrefixBuffer};
use crate::cipher::CipherFunction;
use crate::consts::PREFIX_CHECK_BYTES;
use crate::crypto::ocfb::{OcfbDecrypter, OcfbResync};
use crate::decryptor::read::read_prefix;
use crate::decryptor::stream::{KeystreamReader, MdcReader, PlaintextReader};
use crate::error::SedError;
use secure_gate::RevealSecret;
use crate::header::read_version;
use sha1::Digest;
use std::io::Read;
use tracing::debug;

/// The body of a tag 9 or tag 18 packet, positioned after the version byte.
///
/// [`decrypt`](Self::decrypt) may be called repeatedly with different keys;
/// the encrypted prefix is read from the stream once and reused by every
/// attempt.
pub struct SymmetricallyEncrypted<R> {
    integrity_protected: bool,
    contents: R,
    prefix: Option<PrefixBuffer>,
}

impl<R: Read> SymmetricallyEncrypted<R> {
    /// Wrap a packet body. For tag 18 (`integrity_protected`) the version byte
    /// is consumed and checked.
    ///
    /// # Errors
    ///
    /// [`SedError::UnsupportedVersion`] or an I/O error from the version byte.
    pub fn parse(mut reader: R, integrity_protected: bool) -> Result<Self, SedError> {
        read_version(&mut reader, integrity_protected)?;
        Ok(Self {
            integrity_protected,
            contents: reader,
            prefix: None,
        })
    }

    #[must_use]
    pub fn is_integrity_protected(&self) -> bool {
        self.integrity_protected
    }

    /// Like [`decrypt`](Self::decrypt), taking the wire identifier of the cipher.
    ///
    /// # Errors
    ///
    /// [`SedError::UnsupportedCipher`] naming `cipher_id`, then everything
    /// `decrypt` can return.
    pub fn decrypt_with_cipher_id(
        &mut self,
        cipher_id: u8,
        key: &[u8],
    ) -> Result<PlaintextReader<'_, R>, SedError> {
        let cipher = CipherFunction::from_id(cipher_id)?;
        self.decrypt(cipher, key)
    }

    /// Start decrypting with `cipher` and `key`.
    ///
    /// A wrong key is usually caught here as [`SedError::KeyIncorrect`]; the
    /// rest show up as a signature error from [`PlaintextReader::close`].
    ///
    /// # Errors
    ///
    /// - [`SedError::InvalidKeyLength`] - `key` does not fit `cipher`
    /// - [`SedError::Io`] - the prefix could not be read
    /// - [`SedError::IncompatibleBlockSize`] - an earlier attempt used a cipher
    ///   with a different block size
    /// - [`SedError::KeyIncorrect`] - the prefix quick check failed
    pub fn decrypt(
        &mut self,
        cipher: CipherFunction,
        key: &[u8],
    ) -> Result<PlaintextReader<'_, R>, SedError> {
        if key.len() != cipher.key_size() {
            return Err(cipher.key_length_error(key.len()));
        }

        let prefix_len = cipher.block_size() + PREFIX_CHECK_BYTES;
        let prefix = match self.prefix.take() {
            Some(existing) if existing.expose_secret().len() != prefix_len => {
                let found = existing.expose_secret().len();
                self.prefix = Some(existing);
                return Err(SedError::IncompatibleBlockSize {
                    cipher,
                    prefix_len: found,
                    expected: prefix_len,
                });
            }
            Some(existing) => existing,
            None => {
                let captured = read_prefix(&mut self.contents, prefix_len)?;
                debug!(len = prefix_len, "captured encrypted prefix");
                captured
            }
        };
        let prefix = self.prefix.insert(prefix);

        let block = cipher.new_block_function(key)?;
        let resync = OcfbResync::for_integrity_protected(self.integrity_protected);
        let Some((session, plain_prefix)) =
            OcfbDecrypter::new(block, prefix.expose_secret(), resync)
        else {
            debug!(%cipher, "prefix quick check rejected key");
            return Err(SedError::KeyIncorrect);
        };

        let plaintext = KeystreamReader::new(session, &mut self.contents);
        if self.integrity_protected {
            let mut hash = MdcHash::new();
            hash.update(plain_prefix.expose_secret());
            Ok(PlaintextReader::Protected(MdcReader::new(plaintext, hash)))
        } else {
            Ok(PlaintextReader::Legacy(plaintext))
        }
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> R {
        self.contents
    }
}
