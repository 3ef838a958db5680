//! # Header Parsing
//!
//! The body of an integrity-protected (tag 18) packet opens with a single
//! version byte; legacy (tag 9) bodies start straight with the encrypted prefix.

use crate::consts::SE_SUPPORTED_VERSION;
use crate::decryptor::read_exact_span;
use crate::error::SedError;
use std::io::Read;

/// Consume and validate the version byte of a symmetrically encrypted packet body.
///
/// Reads exactly one byte when `integrity_protected` is set and nothing
/// otherwise, leaving the rest of the stream untouched.
///
/// # Returns
///
/// `Some(1)` for integrity-protected packets, `None` for legacy ones.
///
/// # Errors
///
/// - [`SedError::Io`] - if the byte cannot be read (e.g. empty body)
/// - [`SedError::UnsupportedVersion`] - if the byte is not `1`
///
/// # Example
///
/// ```
/// use openpgp_sed::read_version;
/// use std::io::Cursor;
///
/// let mut body = Cursor::new(b"\x01rest");
/// assert_eq!(read_version(&mut body, true)?, Some(1));
/// assert_eq!(body.position(), 1);
///
/// let mut legacy = Cursor::new(b"\x01rest");
/// assert_eq!(read_version(&mut legacy, false)?, None);
/// assert_eq!(legacy.position(), 0);
/// # Ok::<(), openpgp_sed::SedError>(())
/// ```
pub fn read_version<R: Read>(
    mut reader: R,
    integrity_protected: bool,
) -> Result<Option<u8>, SedError> {
    if !integrity_protected {
        return Ok(None);
    }

    let [version] = read_exact_span::<_, 1>(&mut reader)?;
    if version != SE_SUPPORTED_VERSION {
        return Err(SedError::UnsupportedVersion(version));
    }
    Ok(Some(version))
}
