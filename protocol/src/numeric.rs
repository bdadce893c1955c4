//! # Numeric Transport Codec
//!
//! Maps an alphabet-restricted string to a fixed-width decimal digit
//! stream and back, for channels that only carry digits — numeric-mode QR
//! codes being the motivating one, which hold roughly half again as much
//! data as byte-mode codes of the same size.
//!
//! Each character becomes exactly two digits: its codepoint offset from
//! `-` (codepoint 45, the smallest character in the base64url alphabet),
//! split into tens and ones. The accepted alphabet is therefore codepoints
//! 45–144 inclusive — a superset of base64url plus the punctuation found
//! in compact JWS strings.
//!
//! Both directions are pure, total over their accepted inputs, and fail
//! atomically: a call either returns a fully valid value or an error, never
//! a partial result.

use thiserror::Error;

use crate::config::{NUMERIC_ALPHABET_CEILING, NUMERIC_ALPHABET_FLOOR};

/// Errors from the numeric codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    /// Encode input contains a character outside codepoints 45–144.
    #[error("character '{character}' at position {position} is outside the numeric alphabet")]
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Its character index in the input.
        position: usize,
    },
    /// Decode input length is not a multiple of the chunk width.
    #[error("cannot split numeric string of length {length} into chunks of 2")]
    OddLength {
        /// Byte length of the input.
        length: usize,
    },
    /// A chunk parsed to a negative value.
    #[error("character code '{value}' encountered; codes must be >= 0")]
    NegativeValue {
        /// The parsed value.
        value: i32,
    },
    /// A chunk is not a canonical two-digit decimal rendering.
    #[error("'{chunk}' is not a two digit whole number")]
    MalformedChunk {
        /// The offending chunk text.
        chunk: String,
    },
}

/// Encode a string as a decimal digit stream, two digits per character.
///
/// Always produces exactly `2 * chars(s)` digits. Fails on the first
/// character outside codepoints 45–144; nothing is emitted for a rejected
/// input.
pub fn encode_to_numeric(s: &str) -> Result<String, NumericError> {
    let mut out = String::with_capacity(s.len() * 2);
    for (position, character) in s.chars().enumerate() {
        let codepoint = character as u32;
        if !(NUMERIC_ALPHABET_FLOOR..=NUMERIC_ALPHABET_CEILING).contains(&codepoint) {
            return Err(NumericError::UnsupportedCharacter {
                character,
                position,
            });
        }
        // offset is 0-99, so both digits are infallible.
        let offset = (codepoint - NUMERIC_ALPHABET_FLOOR) as u8;
        out.push((b'0' + offset / 10) as char);
        out.push((b'0' + offset % 10) as char);
    }
    Ok(out)
}

/// Decode a digit stream produced by [`encode_to_numeric`].
///
/// Splits the input into two-character chunks in order; each chunk must be
/// the canonical decimal rendering of a value 0–99 (a single leading zero
/// is the only padding allowed). Anything else — odd length, non-digit
/// characters, negative or non-canonical renderings — is rejected.
pub fn decode_from_numeric(numeric: &str) -> Result<String, NumericError> {
    let bytes = numeric.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(NumericError::OddLength {
            length: bytes.len(),
        });
    }

    let mut out = String::with_capacity(bytes.len() / 2);
    for raw_chunk in bytes.chunks_exact(2) {
        let chunk = std::str::from_utf8(raw_chunk).map_err(|_| NumericError::MalformedChunk {
            chunk: String::from_utf8_lossy(raw_chunk).into_owned(),
        })?;
        let value: i32 = chunk.parse().map_err(|_| NumericError::MalformedChunk {
            chunk: chunk.to_string(),
        })?;
        if value < 0 {
            return Err(NumericError::NegativeValue { value });
        }
        // Re-render and compare against the chunk with a single leading
        // zero stripped. This rejects every non-canonical rendering that
        // parse() tolerates, e.g. "+5".
        let stripped = chunk.strip_prefix('0').unwrap_or(chunk);
        if stripped != value.to_string() {
            return Err(NumericError::MalformedChunk {
                chunk: chunk.to_string(),
            });
        }
        // value is 0-99 after the canonical check; 45-144 are all valid
        // one-byte codepoints.
        out.push((value as u8 + NUMERIC_ALPHABET_FLOOR as u8) as char);
    }
    Ok(out)
}
