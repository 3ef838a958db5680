//! # Constants
//!
//! Wire constants for symmetrically encrypted packets and the MDC trailer,
//! plus defaults used by the builders.

/// The only version byte defined for integrity-protected (tag 18) packets.
pub const SE_SUPPORTED_VERSION: u8 = 1;

/// SHA-1 digest size, the only MDC hash.
pub const SHA1_SIZE: usize = 20;

/// New-format packet tag byte for a type 19 (MDC) packet.
pub const MDC_PACKET_TAG_BYTE: u8 = 0x80 | 0x40 | 19;

/// Tag byte + length byte + SHA-1 digest.
pub const MDC_TRAILER_SIZE: usize = 1 + 1 + SHA1_SIZE;

/// Number of prefix bytes beyond one cipher block (the quick-check repeat).
pub const PREFIX_CHECK_BYTES: usize = 2;

/// Scratch size used by `close` when it has to drain the stream itself.
pub const DRAIN_CHUNK_SIZE: usize = 1024;

/// Largest chunk the writer encrypts per `write` call.
pub const ENCRYPT_CHUNK_SIZE: usize = 4096;

/// S2K salt length.
pub const S2K_SALT_LEN: usize = 8;

/// Coded count byte used by default: the largest count OpenPGP can express
/// (65,011,712 bytes).
pub const DEFAULT_S2K_CODED_COUNT: u8 = 0xFF;
