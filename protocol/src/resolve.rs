//! # DID Resolution Seam
//!
//! The core never talks to the network. Fetching a DID document is the
//! job of whatever implements [`DidResolver`] — an HTTP client against a
//! universal resolver, a cache, a test fixture. Implementations receive
//! their base URL and transport policy explicitly at construction time;
//! nothing in this crate reads ambient process state.
//!
//! On top of the seam sit the two operations the wider system needs:
//! verifying a compact JWS against the signer's published key, and
//! encrypting a payload for a recipient's key-agreement key. The core's
//! only selection logic is matching verification methods by `#fragment`
//! id — algorithm internals stay behind [`crate::keys`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::crypto::base64url_decode;
use crate::identity::jwk::PublicKeyJwk;
use crate::keys::{KeyError, KeyGenerators};

/// Errors from resolution and the operations built on it.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The JWS is not three dot-separated base64url segments with a JSON
    /// protected header, or the header lacks a usable `kid`.
    #[error("malformed JWS: {0}")]
    MalformedJws(String),
    /// The resolved DID document is missing the requested key.
    #[error("DID document for '{did}' has no {part} matching '{id}'")]
    KeyNotFound {
        /// The DID or key id that was resolved.
        did: String,
        /// Which document section was searched.
        part: &'static str,
        /// The id fragment that was looked for.
        id: String,
    },
    /// The resolver could not produce a document.
    #[error("resolution failed for '{0}'")]
    ResolutionFailed(String, #[source] anyhow::Error),
    /// A key capability failed.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Fetches DID documents. The single external collaborator of this module.
///
/// `did_or_kid` is either a bare DID or a DID URL with a key fragment; a
/// conforming resolver ignores the fragment when fetching. Retry, timeout
/// and caching policy belong to the implementation — callers of this crate
/// get exactly one attempt per call.
#[async_trait]
pub trait DidResolver: Send + Sync {
    /// Fetch the DID document as raw JSON.
    async fn resolve(&self, did_or_kid: &str) -> Result<Value, anyhow::Error>;
}

/// The protected-header fields we care about.
#[derive(Debug, Deserialize)]
struct JwsHeader {
    kid: String,
}

/// Parse the protected header of a compact JWS.
fn jws_header(jws: &str) -> Result<JwsHeader, ResolveError> {
    let first_segment = jws
        .split('.')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ResolveError::MalformedJws("empty protected header".into()))?;
    let header_bytes = base64url_decode(first_segment)
        .map_err(|e| ResolveError::MalformedJws(format!("header is not base64url: {e}")))?;
    serde_json::from_slice(&header_bytes)
        .map_err(|e| ResolveError::MalformedJws(format!("header is not a JSON object with kid: {e}")))
}

/// `"did:ion:abc#frag"` -> `"#frag"`.
fn key_fragment(id: &str) -> Option<String> {
    id.split('#').nth(1).map(|fragment| format!("#{fragment}"))
}

/// Select a verification method's JWK by id fragment.
fn find_verification_jwk(doc: &Value, fragment: &str, did: &str) -> Result<PublicKeyJwk, ResolveError> {
    let not_found = || ResolveError::KeyNotFound {
        did: did.to_string(),
        part: "verificationMethod",
        id: fragment.to_string(),
    };
    let methods = doc
        .get("verificationMethod")
        .and_then(Value::as_array)
        .ok_or_else(not_found)?;
    let jwk = methods
        .iter()
        .find(|method| method.get("id").and_then(Value::as_str) == Some(fragment))
        .and_then(|method| method.get("publicKeyJwk"))
        .cloned()
        .ok_or_else(not_found)?;
    PublicKeyJwk::from_value(jwk).map_err(|_| not_found())
}

/// Verify a compact JWS against the key its header names.
///
/// Resolves the header's `kid`, selects the matching verification method
/// from the document, builds a signing capability and asks it to verify.
pub async fn verify_jws(
    jws: &str,
    resolver: &dyn DidResolver,
    generators: &dyn KeyGenerators,
) -> Result<bool, ResolveError> {
    let kid = jws_header(jws)?.kid;
    let fragment = key_fragment(&kid)
        .ok_or_else(|| ResolveError::MalformedJws(format!("kid '{kid}' has no key fragment")))?;

    let doc = resolver
        .resolve(&kid)
        .await
        .map_err(|e| ResolveError::ResolutionFailed(kid.clone(), e))?;
    let jwk = find_verification_jwk(&doc, &fragment, &kid)?;

    debug!(kid = %kid, "verifying JWS against resolved signing key");
    let signing_key = generators.generate_signing_key(jwk).await?;
    Ok(signing_key.verify(jws).await?)
}

/// Encrypt a payload (typically a JWS) for a recipient DID.
///
/// When `key_id` is not supplied, the recipient's first `keyAgreement`
/// reference picks the key. The selected verification method's JWK — with
/// its `kid` set to the selected fragment — is handed to the encryption
/// capability along with a `{kid}` protected header.
pub async fn encrypt_for(
    jws: &str,
    did: &str,
    resolver: &dyn DidResolver,
    generators: &dyn KeyGenerators,
    key_id: Option<&str>,
) -> Result<String, ResolveError> {
    let doc = resolver
        .resolve(did)
        .await
        .map_err(|e| ResolveError::ResolutionFailed(did.to_string(), e))?;

    let key_id = match key_id {
        Some(id) => id.to_string(),
        None => doc
            .get("keyAgreement")
            .and_then(Value::as_array)
            .and_then(|refs| refs.first())
            .and_then(Value::as_str)
            .and_then(key_fragment)
            .ok_or_else(|| ResolveError::KeyNotFound {
                did: did.to_string(),
                part: "keyAgreement",
                id: "#*".to_string(),
            })?,
    };

    let jwk = find_verification_jwk(&doc, &key_id, did)?.with_kid(&key_id);

    debug!(did = %did, kid = %key_id, "encrypting for resolved key agreement key");
    let encryption_key = generators.generate_encryption_key(jwk).await?;
    Ok(encryption_key.encrypt(json!({ "kid": key_id }), jws).await?)
}
