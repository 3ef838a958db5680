//! # Key Derivation Functions (KDF)
//!
//! OpenPGP String-to-Key, used to turn a passphrase into the session key of a
//! symmetrically encrypted packet.
//!
//! For most use cases go through [`S2kBuilder`](crate::builders::S2kBuilder);
//! [`s2k::S2k`] is exposed for specifiers read off the wire.

pub mod s2k;
