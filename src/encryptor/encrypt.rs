//! src/encryptor/encrypt.rs
//! Symmetrically encrypted packet bodies: setup and one-shot encryption

use crate::aliases::MdcHash;
use crate::cipher::CipherFunction;
use crate::consts::PREFIX_CHECK_BYTES;
use crate::crypto::ocfb::{OcfbEncrypter, OcfbResync};
use crate::encryptor::stream::SeWriter;
use crate::encryptor::write::{write_octets, write_version};
use crate::error::SedError;
use sha1::Digest;
use std::io::Write;
#[cfg(feature = "rand")]
use std::io::{self, Read};
use tracing::debug;

/// Start a packet body whose prefix comes from the OS RNG.
///
/// Writes the version byte (tag 18 only) and the encrypted prefix, then returns
/// a writer for the contents.
///
/// # Errors
///
/// [`SedError::InvalidKeyLength`], RNG failure, or an I/O error.
#[cfg(feature = "rand")]
pub fn serialize_symmetrically_encrypted<W: Write>(
    output: W,
    cipher: CipherFunction,
    key: &[u8],
    integrity_protected: bool,
) -> Result<SeWriter<W>, SedError> {
    let mut random_block = vec![0u8; cipher.block_size()];
    crate::crypto::rng::fill_random(&mut random_block)?;
    serialize_with_prefix_block(output, cipher, key, integrity_protected, &random_block)
}

/// Deterministic variant of [`serialize_symmetrically_encrypted`].
///
/// `random_block` must be exactly one cipher block. Reusing a block with the
/// same key leaks plaintext relationships; meant for tests and fixtures.
///
/// # Errors
///
/// [`SedError::InvalidKeyLength`], [`SedError::Crypto`] for a wrongly sized
/// `random_block`, or an I/O error.
pub fn serialize_with_prefix_block<W: Write>(
    mut output: W,
    cipher: CipherFunction,
    key: &[u8],
    integrity_protected: bool,
    random_block: &[u8],
) -> Result<SeWriter<W>, SedError> {
    let block = cipher.new_block_function(key)?;
    let resync = OcfbResync::for_integrity_protected(integrity_protected);
    let (session, prefix) = OcfbEncrypter::new(block, random_block, resync).ok_or_else(|| {
        SedError::Crypto(format!(
            "prefix block must be {} bytes for {cipher}, got {}",
            cipher.block_size(),
            random_block.len()
        ))
    })?;

    write_version(&mut output, integrity_protected)?;
    write_octets(&mut output, &prefix)?;

    let hash = integrity_protected.then(|| {
        let bs = random_block.len();
        let mut hash = MdcHash::new();
        hash.update(random_block);
        hash.update(&random_block[bs - PREFIX_CHECK_BYTES..]);
        hash
    });

    debug!(%cipher, integrity_protected, "symmetrically encrypted body started");
    Ok(SeWriter::new(output, session, hash))
}

/// Encrypt all of `input` into a packet body on `output`.
///
/// # Errors
///
/// Everything [`serialize_symmetrically_encrypted`] reports, plus I/O errors.
#[cfg(feature = "rand")]
pub fn encrypt<R, W>(
    mut input: R,
    output: W,
    cipher: CipherFunction,
    key: &[u8],
    integrity_protected: bool,
) -> Result<u64, SedError>
where
    R: Read,
    W: Write,
{
    let mut writer = serialize_symmetrically_encrypted(output, cipher, key, integrity_protected)?;
    let copied = io::copy(&mut input, &mut writer)?;
    writer.finish()?;
    Ok(copied)
}
