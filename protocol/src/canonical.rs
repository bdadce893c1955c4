//! # JSON Canonicalization
//!
//! Deterministic JSON serialization per [RFC 8785] (JSON Canonicalization
//! Scheme). Object keys are sorted lexicographically by their UTF-16 code
//! units, all insignificant whitespace is dropped, strings use a single
//! escaping scheme, and numbers render in their shortest ECMAScript form.
//!
//! This is the foundation of every hash in the crate: commitments, delta
//! hashes, and DID suffixes are all hashes of canonicalized JSON. Two
//! semantically equal documents — same keys and values, any key order, any
//! whitespace — must canonicalize to byte-identical strings, or the
//! identifiers stop being self-certifying.
//!
//! The heavy lifting is delegated to [`serde_jcs`], which implements the
//! RFC including its ES6 number formatting rules.
//!
//! [RFC 8785]: https://www.rfc-editor.org/rfc/rfc8785

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during canonicalization.
#[derive(Debug, Error)]
pub enum CanonicalizationError {
    /// The value cannot be represented in canonical JSON. Non-finite
    /// floats and maps with non-string keys land here.
    #[error("value cannot be canonicalized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Canonicalize any serializable value to its unique RFC 8785 string.
///
/// Pure and total for every value that is representable in canonical JSON.
/// Arrays keep their order; object key order in the input is irrelevant.
pub fn canonicalize<T: Serialize + ?Sized>(value: &T) -> Result<String, CanonicalizationError> {
    Ok(serde_jcs::to_string(value)?)
}
