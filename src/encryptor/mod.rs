// src/encryptor/mod.rs

//! Encryption side.
//!
//! Core API: [`encrypt`] for a one-shot body, [`serialize_symmetrically_encrypted`]
//! for a streaming [`SeWriter`]. [`serialize_with_prefix_block`] fixes the prefix
//! for reproducible output.

pub(crate) mod encrypt;
pub(crate) mod stream;
pub(crate) mod write;

#[cfg(feature = "rand")]
pub use encrypt::{encrypt, serialize_symmetrically_encrypted};
pub use encrypt::serialize_with_prefix_block;
pub use stream::SeWriter;
pub use write::{mdc_trailer, write_octets, write_version};
