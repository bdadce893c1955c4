//! # Hashing
//!
//! SHA-256, optionally wrapped in a [multihash] envelope. The envelope is a
//! two-byte prefix — function code `0x12` (sha2-256) and digest length
//! `0x20` — followed by the raw 32-byte digest. Downstream code treats the
//! result as opaque bytes; the prefix is advisory metadata for external
//! consumers and is never decoded internally.
//!
//! All functions here are total: they succeed for any byte input, including
//! the empty slice.
//!
//! [multihash]: https://github.com/multiformats/multihash

use sha2::{Digest, Sha256};

use crate::config::{MULTIHASH_SHA2_256_CODE, MULTIHASH_SHA2_256_LENGTH};
use crate::crypto::encoding::base64url_encode;

/// Compute the raw SHA-256 digest of the input.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-256 digest of the input, wrapped in a multihash envelope.
///
/// Output layout: `[0x12, 0x20, digest[0], .., digest[31]]` — 34 bytes.
pub fn multihash_sha256(data: &[u8]) -> Vec<u8> {
    let digest = sha256(data);
    let mut out = Vec::with_capacity(2 + digest.len());
    out.push(MULTIHASH_SHA2_256_CODE);
    out.push(MULTIHASH_SHA2_256_LENGTH);
    out.extend_from_slice(&digest);
    out
}

/// Hash the input and base64url-encode the multihash envelope.
///
/// This is the form in which hashes appear inside DID documents: delta
/// hashes, commitments, and hash-derived suffixes are all
/// `base64url(multihash(sha256(data)))`.
pub fn encoded_multihash(data: &[u8]) -> String {
    base64url_encode(&multihash_sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_input_known_vector() {
        let digest = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(digest.as_slice(), expected.as_slice());
    }

    #[test]
    fn multihash_prefixes_code_and_length() {
        let mh = multihash_sha256(b"hello");
        assert_eq!(mh.len(), 34);
        assert_eq!(mh[0], 0x12);
        assert_eq!(mh[1], 0x20);
        assert_eq!(&mh[2..], sha256(b"hello").as_slice());
    }

    #[test]
    fn multihash_total_on_empty_input() {
        let mh = multihash_sha256(b"");
        assert_eq!(mh.len(), 34);
        assert_eq!(&mh[2..], sha256(b"").as_slice());
    }

    #[test]
    fn encoded_multihash_is_base64url() {
        let encoded = encoded_multihash(b"payload");
        // 34 bytes -> ceil(34 * 4 / 3) = 46 chars, no padding.
        assert_eq!(encoded.len(), 46);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        // Every sha2-256 multihash starts with 0x12 0x20 = "EiA".."EiD" range.
        assert!(encoded.starts_with("Ei"));
    }

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(multihash_sha256(b"abc"), multihash_sha256(b"abc"));
        assert_ne!(multihash_sha256(b"abc"), multihash_sha256(b"abd"));
    }
}
