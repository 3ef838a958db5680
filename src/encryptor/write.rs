//! src/encryptor/write.rs
//! Packet body write helpers

use crate::consts::{MDC_PACKET_TAG_BYTE, MDC_TRAILER_SIZE, SE_SUPPORTED_VERSION, SHA1_SIZE};
use crate::aliases::{MdcHash, TrailerWindow22};
use crate::error::SedError;
use secure_gate::RevealSecretMut;
use sha1::Digest;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), SedError> {
    writer.write_all(data).map_err(SedError::from)
}

/// Version byte for tag 18 bodies; legacy bodies have none.
#[inline]
pub fn write_version<W: Write>(writer: &mut W, integrity_protected: bool) -> Result<(), SedError> {
    if integrity_protected {
        write_octets(writer, &[SE_SUPPORTED_VERSION])?;
    }
    Ok(())
}

/// Build the plaintext MDC packet closing a stream whose hash is `hash`.
///
/// The two header bytes are hashed before the digest is taken, as the
/// reader expects.
#[must_use]
pub fn mdc_trailer(mut hash: MdcHash) -> TrailerWindow22 {
    let mut trailer = TrailerWindow22::new([0u8; MDC_TRAILER_SIZE]);
    let bytes = trailer.expose_secret_mut();
    bytes[0] = MDC_PACKET_TAG_BYTE;
    bytes[1] = SHA1_SIZE as u8;
    hash.update(&bytes[..2]);
    bytes[2..].copy_from_slice(&hash.finalize());
    trailer
}
