//! # Commitment-Reveal Pairs
//!
//! The "commit now, reveal later" scheme that makes a `did:ion` identifier
//! self-certifying. At creation time the document publishes only a
//! *commitment*: the base64url-encoded double hash of the canonicalized
//! public key. The canonicalized key itself — the *reveal value* — stays
//! private until the key authorizes a later recovery or update operation.
//! At that point any verifier recomputes the commitment from the disclosed
//! reveal value and checks equality. No signature scheme required to bind
//! the key, just hashes.
//!
//! Both hashes carry the multihash envelope: the outer hash is computed
//! over the 34-byte envelope of the inner one, matching the method's
//! commitment scheme exactly. Change either envelope and every previously
//! issued commitment stops verifying.

use std::fmt;

use crate::canonical::{canonicalize, CanonicalizationError};
use crate::crypto::{base64url_encode, multihash_sha256};
use crate::identity::jwk::PublicKeyJwk;

/// The two halves of a commitment: the private reveal value and the
/// public commitment derived from it.
#[derive(Clone, PartialEq)]
pub struct RevealCommitPair {
    /// Canonicalized form of the public key. Secret until the key is used;
    /// treat accordingly.
    pub reveal_value: String,
    /// `base64url(multihash(multihash(reveal_value)))` — safe to publish.
    pub commitment: String,
}

// The reveal value must not leak through logs or debug output before the
// key is deliberately disclosed.
impl fmt::Debug for RevealCommitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealCommitPair")
            .field("reveal_value", &"<redacted>")
            .field("commitment", &self.commitment)
            .finish()
    }
}

/// Derive the reveal value and commitment for a public key.
///
/// Deterministic: equal keys produce equal pairs, regardless of field
/// order in the underlying JWK. Fails only if the key record cannot be
/// canonicalized.
pub fn reveal_commit_pair(
    public_key: &PublicKeyJwk,
) -> Result<RevealCommitPair, CanonicalizationError> {
    let reveal_value = canonicalize(public_key)?;
    let inner = multihash_sha256(reveal_value.as_bytes());
    let commitment = base64url_encode(&multihash_sha256(&inner));
    Ok(RevealCommitPair {
        reveal_value,
        commitment,
    })
}
