//! src/decryptor/read.rs
//! Small reading helpers shared by the packet parser and the MDC reader

use crate::aliases::PrefixBuffer;
use crate::error::SedError;
use std::io::{self, Read};

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], SedError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read the `len`-byte encrypted prefix. A short stream is `UnexpectedEof`.
pub fn read_prefix<R>(reader: &mut R, len: usize) -> Result<PrefixBuffer, SedError>
where
    R: Read,
{
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(PrefixBuffer::new(buf))
}

/// Read until `buf` is full or the stream ends; returns the byte count.
///
/// Unlike `read_exact`, hitting the end early is not an error.
pub fn read_up_to<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: Read + ?Sized,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
