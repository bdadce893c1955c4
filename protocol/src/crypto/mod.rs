//! # Cryptographic Primitives
//!
//! The two primitives the identifier pipeline stands on:
//!
//! 1. **hash** — SHA-256 in a self-describing multihash envelope. The
//!    envelope makes every digest carry its own algorithm identifier, so a
//!    resolver a decade from now can still tell what hashed it.
//! 2. **encoding** — base64url without padding, the character set that
//!    survives URLs, JSON, and QR codes unharmed.
//!
//! Signing and encryption are deliberately *not* here. Key material lives
//! behind the capability traits in [`crate::keys`]; this crate never touches
//! a private key.

pub mod encoding;
pub mod hash;

pub use encoding::{base64url_decode, base64url_encode};
pub use hash::{encoded_multihash, multihash_sha256, sha256};
