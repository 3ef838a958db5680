//! src/crypto/ocfb.rs
//! OpenPGP CFB mode (RFC 4880 §13.9)
//!
//! Plain CFB with a zero IV, except that the ciphertext opens with an encrypted
//! random block plus a two-byte repeat of its last two bytes. The repeat lets a
//! decrypter reject most wrong keys before any data is produced.
//!
//! Legacy (tag 9) packets *resync* after the prefix: the feedback register is
//! reloaded from ciphertext bytes `2..bs+2`. Integrity-protected (tag 18)
//! packets do not, which makes the whole packet one continuous CFB stream.

use crate::aliases::PrefixBuffer;
use crate::consts::PREFIX_CHECK_BYTES;
use crate::crypto::block::BlockFunction;

/// Whether the keystream resynchronizes after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcfbResync {
    /// Legacy behaviour, used by tag 9 packets.
    Resync,
    /// Used by integrity-protected (tag 18) packets.
    NoResync,
}

impl OcfbResync {
    #[must_use]
    pub const fn for_integrity_protected(integrity_protected: bool) -> Self {
        if integrity_protected {
            OcfbResync::NoResync
        } else {
            OcfbResync::Resync
        }
    }
}

/// A keystream that combines data with its output in place.
pub trait KeystreamSession: Send {
    fn xor_key_stream(&mut self, data: &mut [u8]);
}

/// Feedback register shared by both directions.
struct Feedback {
    block: Box<dyn BlockFunction>,
    fre: Vec<u8>,
    out_used: usize,
}

impl Feedback {
    fn start(block: Box<dyn BlockFunction>, ciphertext_prefix: &[u8], resync: OcfbResync) -> Self {
        let bs = block.block_len();
        let mut fre = vec![0u8; bs];
        let out_used = match resync {
            OcfbResync::Resync => {
                fre.copy_from_slice(&ciphertext_prefix[PREFIX_CHECK_BYTES..]);
                block.encrypt_block_in_place(&mut fre);
                0
            }
            OcfbResync::NoResync => {
                // Register is E(c[0..bs]) with the two check bytes already fed back.
                fre.copy_from_slice(&ciphertext_prefix[..bs]);
                block.encrypt_block_in_place(&mut fre);
                fre[..PREFIX_CHECK_BYTES].copy_from_slice(&ciphertext_prefix[bs..]);
                PREFIX_CHECK_BYTES
            }
        };
        Self {
            block,
            fre,
            out_used,
        }
    }

    #[inline(always)]
    fn refill_if_spent(&mut self) {
        if self.out_used == self.fre.len() {
            self.block.encrypt_block_in_place(&mut self.fre);
            self.out_used = 0;
        }
    }
}

/// OCFB decrypter; see [`OcfbDecrypter::new`].
pub struct OcfbDecrypter {
    feedback: Feedback,
}

impl OcfbDecrypter {
    /// Check `prefix` against the key and set up the keystream.
    ///
    /// Returns the decrypter and the *decrypted* prefix (random block followed
    /// by the two check bytes), which is what the MDC hash covers.
    ///
    /// `None` means either `prefix` is not `block_len + 2` bytes or the quick
    /// check failed, i.e. the key is almost certainly wrong (a wrong key passes
    /// with probability 2^-16).
    #[must_use]
    pub fn new(
        block: Box<dyn BlockFunction>,
        prefix: &[u8],
        resync: OcfbResync,
    ) -> Option<(Self, PrefixBuffer)> {
        let bs = block.block_len();
        if prefix.len() != bs + PREFIX_CHECK_BYTES {
            return None;
        }

        let mut plain = prefix.to_vec();
        let mut register = vec![0u8; bs];

        block.encrypt_block_in_place(&mut register);
        for (p, k) in plain[..bs].iter_mut().zip(&register) {
            *p ^= k;
        }

        register.copy_from_slice(&prefix[..bs]);
        block.encrypt_block_in_place(&mut register);
        plain[bs] ^= register[0];
        plain[bs + 1] ^= register[1];

        if plain[bs - 2] != plain[bs] || plain[bs - 1] != plain[bs + 1] {
            return None;
        }

        let feedback = Feedback::start(block, prefix, resync);
        Some((Self { feedback }, PrefixBuffer::new(plain)))
    }
}

impl KeystreamSession for OcfbDecrypter {
    fn xor_key_stream(&mut self, data: &mut [u8]) {
        let fb = &mut self.feedback;
        for byte in data.iter_mut() {
            fb.refill_if_spent();
            let c = *byte;
            *byte = fb.fre[fb.out_used] ^ c;
            fb.fre[fb.out_used] = c;
            fb.out_used += 1;
        }
    }
}

/// OCFB encrypter; see [`OcfbEncrypter::new`].
pub struct OcfbEncrypter {
    feedback: Feedback,
}

impl OcfbEncrypter {
    /// Encrypt `random_block` into a prefix and set up the keystream.
    ///
    /// Returns the encrypter and the ciphertext prefix (`block_len + 2` bytes)
    /// to be written ahead of the data. `None` if `random_block` is not exactly
    /// one block long.
    #[must_use]
    pub fn new(
        block: Box<dyn BlockFunction>,
        random_block: &[u8],
        resync: OcfbResync,
    ) -> Option<(Self, Vec<u8>)> {
        let bs = block.block_len();
        if random_block.len() != bs {
            return None;
        }

        let mut prefix = vec![0u8; bs + PREFIX_CHECK_BYTES];
        let mut register = vec![0u8; bs];

        block.encrypt_block_in_place(&mut register);
        for ((c, p), k) in prefix[..bs].iter_mut().zip(random_block).zip(&register) {
            *c = p ^ k;
        }

        register.copy_from_slice(&prefix[..bs]);
        block.encrypt_block_in_place(&mut register);
        prefix[bs] = register[0] ^ random_block[bs - 2];
        prefix[bs + 1] = register[1] ^ random_block[bs - 1];

        let feedback = Feedback::start(block, &prefix, resync);
        Some((Self { feedback }, prefix))
    }
}

impl KeystreamSession for OcfbEncrypter {
    fn xor_key_stream(&mut self, data: &mut [u8]) {
        let fb = &mut self.feedback;
        for byte in data.iter_mut() {
            fb.refill_if_spent();
            fb.fre[fb.out_used] ^= *byte;
            *byte = fb.fre[fb.out_used];
            fb.out_used += 1;
        }
    }
}
