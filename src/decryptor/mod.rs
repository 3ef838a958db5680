// src/decryptor/mod.rs

//! Decryption side.
//!
//! Core API: [`SymmetricallyEncrypted`] for packet bodies, [`decrypt`] for a
//! one-shot copy. Helpers: [`read_prefix`], [`read_up_to`] and the stream
//! readers for custom flows.

pub(crate) mod decrypt;
pub(crate) mod packet;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use packet::SymmetricallyEncrypted;
pub use read::{read_exact_span, read_prefix, read_up_to};
pub use stream::{KeystreamReader, MdcReader, MdcState, PlaintextReader};
