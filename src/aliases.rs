//! # Secure-Gate Type Aliases
//!
//! Secret-bearing buffers used across the crate. Every alias wraps its bytes in
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate), so access always
//! goes through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ## Type Categories
//!
//! ### Hash primitives
//! - [`MdcHash`] - SHA-1, the Modification Detection Code hash
//!
//! ### Generic secure buffers
//! - [`SpanBuffer<N>`] - secure stack buffer of any size `N`
//! - [`TrailerWindow22`] - the withheld MDC trailer window
//!
//! ### Dynamic secrets
//! - [`PasswordString`] - passphrase fed to S2K
//! - [`KeyBytes`] - session key of cipher-dependent length
//! - [`PrefixBuffer`] - OCFB prefix (block size + 2 bytes)

use crate::consts::MDC_TRAILER_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Hash primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type MdcHash = sha1::Sha1;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type TrailerWindow22 = SpanBuffer<MDC_TRAILER_SIZE>;
pub type S2kSalt8 = SpanBuffer<8>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = secure_gate::Dynamic<String>;
pub type KeyBytes = secure_gate::Dynamic<Vec<u8>>;
pub type PrefixBuffer = secure_gate::Dynamic<Vec<u8>>;
