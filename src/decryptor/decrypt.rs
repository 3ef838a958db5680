//! src/decryptor/decrypt.rs
//! One-shot decryption of a symmetrically encrypted packet body

use crate::cipher::CipherFunction;
use crate::decryptor::packet::SymmetricallyEncrypted;
use crate::error::SedError;
use std::io::{self, Read, Write};
use tracing::debug;

/// Decrypt a whole packet body from `input` into `output`.
///
/// `integrity_protected` selects tag 18 (version byte + MDC) or tag 9.
///
/// # Errors
///
/// Anything [`SymmetricallyEncrypted::parse`], [`SymmetricallyEncrypted::decrypt`]
/// or [`PlaintextReader::close`](crate::PlaintextReader::close) reports. When a
/// signature error comes back, `output` already holds unauthenticated plaintext
/// that must be discarded.
pub fn decrypt<R, W>(
    input: R,
    mut output: W,
    cipher: CipherFunction,
    key: &[u8],
    integrity_protected: bool,
) -> Result<u64, SedError>
where
    R: Read,
    W: Write,
{
    let mut packet = SymmetricallyEncrypted::parse(input, integrity_protected)?;
    let mut plaintext = packet.decrypt(cipher, key)?;

    let copied = io::copy(&mut plaintext, &mut output)?;
    plaintext.close()?;
    output.flush()?;

    debug!(bytes = copied, integrity_protected, "packet decrypted");
    Ok(copied)
}
