// src/crypto/rng.rs
//! Secure randomness for prefix blocks and S2K salts
//!
//! Thread-local `OsRng`; every failure is reported instead of being ignored,
//! since a silent all-zero prefix block would still "work".

use crate::aliases::SpanBuffer;
use crate::error::SedError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Extension trait – gives `.random()` to fixed-size secret buffers.
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type.
    fn random() -> Result<Self, SedError>;
}

impl<const N: usize> SecureRandomExt for SpanBuffer<N> {
    #[inline(always)]
    fn random() -> Result<Self, SedError> {
        let mut bytes = [0u8; N];
        fill_random(&mut bytes)?;
        Ok(Fixed::new(bytes))
    }
}

/// Fill `dest` from the thread-local OS RNG.
pub fn fill_random(dest: &mut [u8]) -> Result<(), SedError> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(dest)
            .map_err(|e| SedError::Crypto(format!("OS RNG failed: {e}")))
    })
}
