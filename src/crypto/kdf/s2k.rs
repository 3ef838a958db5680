//! src/crypto/kdf/s2k.rs
//! OpenPGP String-to-Key (RFC 4880 §3.7), passphrase to session key

use crate::consts::S2K_SALT_LEN;
use crate::error::SedError;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::io::{Read, Write};

/// Hash algorithms accepted inside an S2K specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum S2kHash {
    Sha1 = 2,
    Sha256 = 8,
    Sha384 = 9,
    Sha512 = 10,
    Sha224 = 11,
}

impl S2kHash {
    /// # Errors
    ///
    /// [`SedError::UnsupportedHash`] for any other identifier.
    pub fn from_id(id: u8) -> Result<Self, SedError> {
        Ok(match id {
            2 => S2kHash::Sha1,
            8 => S2kHash::Sha256,
            9 => S2kHash::Sha384,
            10 => S2kHash::Sha512,
            11 => S2kHash::Sha224,
            other => return Err(SedError::UnsupportedHash(other)),
        })
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// A parsed S2K specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum S2k {
    Simple {
        hash: S2kHash,
    },
    Salted {
        hash: S2kHash,
        salt: [u8; S2K_SALT_LEN],
    },
    IteratedSalted {
        hash: S2kHash,
        salt: [u8; S2K_SALT_LEN],
        coded_count: u8,
    },
}

impl S2k {
    /// Read a specifier from the wire.
    pub fn parse<R: Read>(mut reader: R) -> Result<Self, SedError> {
        let mut head = [0u8; 2];
        reader.read_exact(&mut head)?;
        let [kind, hash_id] = head;

        // Validate the type before the hash so an unknown type is reported as such.
        if !matches!(kind, 0 | 1 | 3) {
            return Err(SedError::UnsupportedS2k(kind));
        }
        let hash = S2kHash::from_id(hash_id)?;

        if kind == 0 {
            return Ok(S2k::Simple { hash });
        }

        let mut salt = [0u8; S2K_SALT_LEN];
        reader.read_exact(&mut salt)?;
        if kind == 1 {
            return Ok(S2k::Salted { hash, salt });
        }

        let mut count = [0u8; 1];
        reader.read_exact(&mut count)?;
        Ok(S2k::IteratedSalted {
            hash,
            salt,
            coded_count: count[0],
        })
    }

    /// Write the specifier in wire form.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), SedError> {
        match self {
            S2k::Simple { hash } => writer.write_all(&[0, hash.id()])?,
            S2k::Salted { hash, salt } => {
                writer.write_all(&[1, hash.id()])?;
                writer.write_all(salt)?;
            }
            S2k::IteratedSalted {
                hash,
                salt,
                coded_count,
            } => {
                writer.write_all(&[3, hash.id()])?;
                writer.write_all(salt)?;
                writer.write_all(&[*coded_count])?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn hash(&self) -> S2kHash {
        match self {
            S2k::Simple { hash } | S2k::Salted { hash, .. } | S2k::IteratedSalted { hash, .. } => {
                *hash
            }
        }
    }

    /// Fill `out_key` from `passphrase`. Any output length is accepted.
    pub fn derive_key(&self, passphrase: &[u8], out_key: &mut [u8]) -> Result<(), SedError> {
        let (salt, count): (&[u8], usize) = match self {
            S2k::Simple { .. } => (&[][..], 0),
            S2k::Salted { salt, .. } => (salt.as_slice(), 0),
            S2k::IteratedSalted {
                salt, coded_count, ..
            } => (salt.as_slice(), decode_count(*coded_count)),
        };

        match self.hash() {
            S2kHash::Sha1 => derive::<sha1::Sha1>(passphrase, salt, count, out_key),
            S2kHash::Sha224 => derive::<Sha224>(passphrase, salt, count, out_key),
            S2kHash::Sha256 => derive::<Sha256>(passphrase, salt, count, out_key),
            S2kHash::Sha384 => derive::<Sha384>(passphrase, salt, count, out_key),
            S2kHash::Sha512 => derive::<Sha512>(passphrase, salt, count, out_key),
        }
        Ok(())
    }
}

/// Expand a coded iteration count into a byte count.
#[must_use]
pub const fn decode_count(c: u8) -> usize {
    (16 + (c as usize & 15)) << ((c as usize >> 4) + 6)
}

/// Smallest coded count whose decoded value is at least `count`, saturating at 0xFF.
#[must_use]
pub fn encode_count(count: usize) -> u8 {
    (0..=u8::MAX)
        .find(|&c| decode_count(c) >= count)
        .unwrap_or(u8::MAX)
}

/// `count == 0` hashes `salt ‖ passphrase` once (simple and salted modes).
fn derive<D: Digest>(passphrase: &[u8], salt: &[u8], count: usize, out_key: &mut [u8]) {
    let combined_len = salt.len() + passphrase.len();
    let count = count.max(combined_len);
    let mut done = 0;
    let mut preload = 0usize;

    while done < out_key.len() {
        let mut hasher = D::new();
        for _ in 0..preload {
            hasher.update([0u8]);
        }

        let mut written = 0;
        while written < count {
            let take = (count - written).min(combined_len);
            let salt_take = take.min(salt.len());
            hasher.update(&salt[..salt_take]);
            hasher.update(&passphrase[..take - salt_take]);
            written += take;
        }

        let digest = hasher.finalize();
        let n = digest.len().min(out_key.len() - done);
        out_key[done..done + n].copy_from_slice(&digest[..n]);
        done += n;
        preload += 1;
    }
}
