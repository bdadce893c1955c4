//! base64url (RFC 4648 §5, no padding) — the data encoding scheme of the
//! DID method. Used for commitments, hashes, and the long-form payload.

use base64::prelude::{Engine as _, BASE64_URL_SAFE_NO_PAD};

/// Encode bytes as unpadded base64url.
pub fn base64url_encode(data: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(data)
}

/// Decode an unpadded base64url string.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64_URL_SAFE_NO_PAD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let data = b"did:ion payloads survive the trip";
        let encoded = base64url_encode(data);
        assert_eq!(base64url_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn no_padding_emitted() {
        // 1, 2 and 3 byte inputs cover all padding cases.
        for input in [&b"a"[..], &b"ab"[..], &b"abc"[..]] {
            assert!(!base64url_encode(input).contains('='));
        }
    }

    #[test]
    fn url_safe_alphabet() {
        // 0xfb 0xff encodes to '+' '/' characters in standard base64.
        let encoded = base64url_encode(&[0xfb, 0xff]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(encoded, "-_8");
    }
}
