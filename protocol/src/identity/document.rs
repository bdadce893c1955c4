//! # Method-Specific Document State
//!
//! The create-operation state of a `did:ion` document: an ordered list of
//! [`Patch`]es wrapped in a [`Delta`], and the [`SuffixData`] binding the
//! delta's hash to the recovery commitment.
//!
//! Patch order is semantically significant — a verifier replays patches in
//! order — and this module guarantees it: when both are present, the
//! `add-public-keys` patch always precedes `add-services`. Serialized field
//! names are part of the wire contract (they get canonicalized and hashed),
//! hence the explicit renames everywhere.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonicalize, CanonicalizationError};
use crate::config::{
    ENCRYPTION_KEY_ID, LINKED_DOMAINS_SERVICE_TYPE, LINKED_DOMAIN_ID_PREFIX,
    PUBLIC_KEY_ENTRY_TYPE, SIGNING_KEY_ID,
};
use crate::crypto::encoded_multihash;
use crate::identity::jwk::PublicKeyJwk;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A public key published in the DID document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    /// Entry id, e.g. `signing-key-1`. Authoritative — the key material
    /// below never carries its own `kid`.
    pub id: String,
    /// Verification relationships this key serves. Always includes
    /// `assertionMethod`.
    pub purposes: Vec<String>,
    /// Always `JsonWebKey2020`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// The key material, with any `kid` stripped.
    #[serde(rename = "publicKeyJwk")]
    pub public_key_jwk: PublicKeyJwk,
}

impl PublicKeyEntry {
    fn new(id: &str, jwk: &PublicKeyJwk, additional_purposes: &[&str]) -> Self {
        let mut purposes = vec!["assertionMethod".to_string()];
        purposes.extend(additional_purposes.iter().map(|p| p.to_string()));
        Self {
            id: id.to_string(),
            purposes,
            entry_type: PUBLIC_KEY_ENTRY_TYPE.to_string(),
            public_key_jwk: jwk.without_kid(),
        }
    }
}

/// A linked-domain service published in the DID document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// `linked-domain-{n}`, 1-indexed in input order.
    pub id: String,
    /// Always `LinkedDomains`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// The domain URL.
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: String,
}

// ---------------------------------------------------------------------------
// Patches
// ---------------------------------------------------------------------------

/// An atomic, ordered mutation of the document state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Patch {
    /// Publish one or more public keys.
    #[serde(rename = "add-public-keys")]
    AddPublicKeys {
        #[serde(rename = "publicKeys")]
        public_keys: Vec<PublicKeyEntry>,
    },
    /// Publish one or more services.
    #[serde(rename = "add-services")]
    AddServices { services: Vec<ServiceEntry> },
}

/// The create-operation delta: the update commitment plus the patches that
/// produce the initial document state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(rename = "updateCommitment")]
    pub update_commitment: String,
    pub patches: Vec<Patch>,
}

/// The suffix data: everything the short-form identifier commits to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixData {
    #[serde(rename = "deltaHash")]
    pub delta_hash: String,
    #[serde(rename = "recoveryCommitment")]
    pub recovery_commitment: String,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Assemble the create-operation delta.
///
/// - A signing key becomes entry `signing-key-1` with the `authentication`
///   purpose; an encryption key becomes `encryption-key-1` with
///   `keyAgreement`. If either is present, a single `add-public-keys`
///   patch carries all entries; if neither is, no key patch is emitted.
/// - Non-empty `domains` become one `add-services` patch with one
///   `linked-domain-{n}` entry per domain, in input order.
/// - `add-public-keys` always precedes `add-services`.
///
/// A delta with no keys and no domains is permitted and yields an empty
/// patch list — the resulting document publishes nothing but its
/// commitments. Callers that consider such a document degenerate must
/// reject the request before building it.
pub fn build_delta(
    signing_key: Option<&PublicKeyJwk>,
    encryption_key: Option<&PublicKeyJwk>,
    domains: &[String],
    update_commitment: String,
) -> Delta {
    let mut public_keys = Vec::new();
    if let Some(jwk) = signing_key {
        public_keys.push(PublicKeyEntry::new(SIGNING_KEY_ID, jwk, &["authentication"]));
    }
    if let Some(jwk) = encryption_key {
        public_keys.push(PublicKeyEntry::new(ENCRYPTION_KEY_ID, jwk, &["keyAgreement"]));
    }

    let mut patches = Vec::new();
    if !public_keys.is_empty() {
        patches.push(Patch::AddPublicKeys { public_keys });
    }
    if !domains.is_empty() {
        let services = domains
            .iter()
            .enumerate()
            .map(|(index, domain)| ServiceEntry {
                id: format!("{}{}", LINKED_DOMAIN_ID_PREFIX, index + 1),
                entry_type: LINKED_DOMAINS_SERVICE_TYPE.to_string(),
                service_endpoint: domain.clone(),
            })
            .collect();
        patches.push(Patch::AddServices { services });
    }

    Delta {
        update_commitment,
        patches,
    }
}

/// Assemble the suffix data for a delta.
///
/// `delta_hash` is the encoded multihash of the canonicalized delta, so it
/// depends only on the delta's semantic content, never on upstream key
/// order or whitespace.
pub fn build_suffix_data(
    delta: &Delta,
    recovery_commitment: String,
) -> Result<SuffixData, CanonicalizationError> {
    let delta_canonical = canonicalize(delta)?;
    Ok(SuffixData {
        delta_hash: encoded_multihash(delta_canonical.as_bytes()),
        recovery_commitment,
    })
}
