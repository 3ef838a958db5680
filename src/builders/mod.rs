//! # Builders
//!
//! Fluent configuration for key derivation.
//!
//! ## Modules
//!
//! - [`s2k_builder`] - Builder for OpenPGP String-to-Key derivation

pub mod s2k_builder;

pub use s2k_builder::S2kBuilder;
