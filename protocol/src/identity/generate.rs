//! # DID Assembly
//!
//! The top of the generation pipeline: takes the four key roles plus any
//! linked domains and produces the short-form and long-form identifier
//! strings along with every intermediate artifact a caller needs to later
//! update or recover the document.
//!
//! Short form is durable: `did:ion:` plus the encoded multihash of the
//! canonicalized suffix data (or a caller-supplied custom suffix). Long
//! form appends the base64url of the canonicalized `{suffixData, delta}`
//! payload — the initial state a resolver needs before the document is
//! anchored anywhere. The long form is always derivable from the same
//! inputs as the short form; the reverse direction is a preimage problem.
//!
//! Observability here is deliberate: generation emits one `debug` event
//! with patch counts and the short-form DID. Reveal values never appear in
//! events or `Debug` output — they are secrets until the moment a recovery
//! or update operation discloses them.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::canonical::{canonicalize, CanonicalizationError};
use crate::config::DID_PREFIX;
use crate::crypto::{base64url_encode, encoded_multihash};
use crate::identity::commitment::reveal_commit_pair;
use crate::identity::document::{build_delta, build_suffix_data, Delta, SuffixData};
use crate::identity::jwk::PublicKeyJwk;

/// Errors that can occur while generating a DID.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Some input could not be canonicalized.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),
}

/// Inputs to DID generation.
///
/// Key roles are explicit: recovery and update keys are required (the
/// commitment scheme has nothing to commit to without them), signing and
/// encryption keys are optional and only affect the published document.
#[derive(Debug, Clone)]
pub struct DidGenerationRequest {
    /// Published as `signing-key-1` with the `authentication` purpose.
    pub signing_public_jwk: Option<PublicKeyJwk>,
    /// Published as `encryption-key-1` with the `keyAgreement` purpose.
    pub encryption_public_jwk: Option<PublicKeyJwk>,
    /// Bound into the identifier via the recovery commitment. Never published.
    pub recovery_public_jwk: PublicKeyJwk,
    /// Bound into the delta via the update commitment. Never published.
    pub update_public_jwk: PublicKeyJwk,
    /// Linked domains, one `LinkedDomains` service entry each, in order.
    pub domains: Vec<String>,
    /// Replaces the hash-derived suffix when non-empty. Used for vanity or
    /// test identifiers; such DIDs are not self-certifying.
    pub custom_suffix: Option<String>,
}

/// Everything produced by one generation run. Immutable once returned.
#[derive(Clone, Serialize)]
pub struct DidGenerationResult {
    /// The long-form DID (same as `did_long`; kept as the primary field
    /// because the long form is what offline verifiers need).
    pub did: String,
    #[serde(rename = "recoveryValue")]
    pub recovery_value: String,
    #[serde(rename = "recoveryCommitment")]
    pub recovery_commitment: String,
    #[serde(rename = "updateValue")]
    pub update_value: String,
    #[serde(rename = "updateCommitment")]
    pub update_commitment: String,
    pub delta: Delta,
    #[serde(rename = "deltaCanonical")]
    pub delta_canonical: String,
    #[serde(rename = "suffixData")]
    pub suffix_data: SuffixData,
    #[serde(rename = "suffixDataCanonical")]
    pub suffix_data_canonical: String,
    #[serde(rename = "didShort")]
    pub did_short: String,
    #[serde(rename = "didLong")]
    pub did_long: String,
}

// Reveal values are commitment secrets; keep them out of debug output.
impl fmt::Debug for DidGenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DidGenerationResult")
            .field("did_short", &self.did_short)
            .field("did_long", &self.did_long)
            .field("recovery_value", &"<redacted>")
            .field("recovery_commitment", &self.recovery_commitment)
            .field("update_value", &"<redacted>")
            .field("update_commitment", &self.update_commitment)
            .field("delta", &self.delta)
            .field("suffix_data", &self.suffix_data)
            .finish()
    }
}

/// The long-form payload: exactly `{suffixData, delta}`. This is the
/// bit-exact shape a method-compliant resolver parses out of the final
/// segment of a long-form DID.
#[derive(Serialize)]
struct LongFormPayload<'a> {
    #[serde(rename = "suffixData")]
    suffix_data: &'a SuffixData,
    delta: &'a Delta,
}

/// Generate a `did:ion` identifier from existing public keys.
///
/// Pure function of its inputs: no randomness, no I/O, no shared state.
/// Calling it twice with equal requests produces identical results.
pub fn generate_did(request: &DidGenerationRequest) -> Result<DidGenerationResult, GenerateError> {
    let recovery = reveal_commit_pair(&request.recovery_public_jwk)?;
    let update = reveal_commit_pair(&request.update_public_jwk)?;

    let delta = build_delta(
        request.signing_public_jwk.as_ref(),
        request.encryption_public_jwk.as_ref(),
        &request.domains,
        update.commitment.clone(),
    );
    let delta_canonical = canonicalize(&delta)?;

    let suffix_data = build_suffix_data(&delta, recovery.commitment.clone())?;
    let suffix_data_canonical = canonicalize(&suffix_data)?;

    let suffix = match request.custom_suffix.as_deref() {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => encoded_multihash(suffix_data_canonical.as_bytes()),
    };
    let did_short = format!("{DID_PREFIX}{suffix}");

    let long_form_payload = LongFormPayload {
        suffix_data: &suffix_data,
        delta: &delta,
    };
    let long_form_segment = base64url_encode(canonicalize(&long_form_payload)?.as_bytes());
    let did_long = format!("{did_short}:{long_form_segment}");

    debug!(
        did_short = %did_short,
        patches = delta.patches.len(),
        domains = request.domains.len(),
        "generated did:ion identifier"
    );

    Ok(DidGenerationResult {
        did: did_long.clone(),
        recovery_value: recovery.reveal_value,
        recovery_commitment: recovery.commitment,
        update_value: update.reveal_value,
        update_commitment: update.commitment,
        delta,
        delta_canonical,
        suffix_data,
        suffix_data_canonical,
        did_short,
        did_long,
    })
}
