//! End-to-end tests for the ion-protocol crate.
//!
//! These exercise the full pipeline a wallet would run: generate a
//! `did:ion` identifier from fixed key material, publish a DID
//! configuration for a linked domain, hand the resulting document to a
//! resolver, verify a JWS against it, encrypt for its key-agreement key,
//! and squeeze a compact JWS through the numeric transport codec.
//!
//! Each test stands alone; collaborators are in-memory fakes, so nothing
//! here touches the network or real key material.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use ion_protocol::canonical::canonicalize;
use ion_protocol::crypto::{base64url_decode, base64url_encode, encoded_multihash, multihash_sha256};
use ion_protocol::identity::{
    create_did_configuration, generate_did, DidGenerationRequest, Patch, PublicKeyJwk,
};
use ion_protocol::keys::{EncryptionKey, KeyError, KeyGenerators, SigningKey};
use ion_protocol::numeric::{decode_from_numeric, encode_to_numeric};
use ion_protocol::resolve::{encrypt_for, verify_jws, DidResolver};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn jwk(x: &str, y: &str) -> PublicKeyJwk {
    PublicKeyJwk::from_value(json!({
        "kty": "EC",
        "crv": "P-256",
        "x": x,
        "y": y,
    }))
    .unwrap()
}

fn request() -> DidGenerationRequest {
    DidGenerationRequest {
        signing_public_jwk: Some(jwk("sig-x", "sig-y")),
        encryption_public_jwk: Some(jwk("enc-x", "enc-y")),
        recovery_public_jwk: jwk("rec-x", "rec-y"),
        update_public_jwk: jwk("upd-x", "upd-y"),
        domains: vec![
            "https://clinic.example.com".to_string(),
            "https://lab.example.com".to_string(),
        ],
        custom_suffix: None,
    }
}

/// Turns a generation result into the DID document a resolver would serve,
/// the way a Sidetree node replays create-operation patches.
fn document_from_patches(did: &str, patches: &[Patch]) -> Value {
    let mut verification_methods = Vec::new();
    let mut key_agreement = Vec::new();
    for patch in patches {
        if let Patch::AddPublicKeys { public_keys } = patch {
            for entry in public_keys {
                verification_methods.push(json!({
                    "id": format!("#{}", entry.id),
                    "type": entry.entry_type,
                    "publicKeyJwk": serde_json::to_value(&entry.public_key_jwk).unwrap(),
                }));
                if entry.purposes.iter().any(|p| p == "keyAgreement") {
                    key_agreement.push(json!(format!("{did}#{}", entry.id)));
                }
            }
        }
    }
    json!({
        "id": did,
        "verificationMethod": verification_methods,
        "keyAgreement": key_agreement,
    })
}

struct StaticResolver {
    documents: HashMap<String, Value>,
}

#[async_trait]
impl DidResolver for StaticResolver {
    async fn resolve(&self, did_or_kid: &str) -> Result<Value, anyhow::Error> {
        let did = did_or_kid.split('#').next().unwrap_or(did_or_kid);
        self.documents
            .get(did)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown DID {did}"))
    }
}

/// Fake capabilities: "signatures" verify when the JWS has three segments,
/// "ciphertexts" are labeled with the kid they were encrypted for.
struct FakeKeys;

struct FakeSigningKey;
#[async_trait]
impl SigningKey for FakeSigningKey {
    async fn sign(&self, header: Value, claims: Value) -> Result<String, KeyError> {
        let h = base64url_encode(header.to_string().as_bytes());
        let p = base64url_encode(claims.to_string().as_bytes());
        Ok(format!("{h}.{p}.ZmFrZXNpZw"))
    }
    async fn verify(&self, jws: &str) -> Result<bool, KeyError> {
        Ok(jws.split('.').count() == 3)
    }
}

struct FakeEncryptionKey {
    kid: String,
}
#[async_trait]
impl EncryptionKey for FakeEncryptionKey {
    async fn encrypt(&self, _header: Value, payload: &str) -> Result<String, KeyError> {
        Ok(format!("jwe[{}]({payload})", self.kid))
    }
}

#[async_trait]
impl KeyGenerators for FakeKeys {
    async fn generate_signing_key(&self, _jwk: PublicKeyJwk) -> Result<Box<dyn SigningKey>, KeyError> {
        Ok(Box::new(FakeSigningKey))
    }
    async fn generate_encryption_key(
        &self,
        jwk: PublicKeyJwk,
    ) -> Result<Box<dyn EncryptionKey>, KeyError> {
        let kid = jwk
            .get("kid")
            .and_then(Value::as_str)
            .ok_or_else(|| KeyError::UnsupportedKey("kid required".into()))?
            .to_string();
        Ok(Box::new(FakeEncryptionKey { kid }))
    }
}

// ---------------------------------------------------------------------------
// 1. Generation invariants
// ---------------------------------------------------------------------------

#[test]
fn generated_identifier_is_internally_consistent() {
    let result = generate_did(&request()).unwrap();

    // Short form commits to the suffix data.
    assert_eq!(
        result.did_short,
        format!(
            "did:ion:{}",
            encoded_multihash(result.suffix_data_canonical.as_bytes())
        )
    );

    // Delta hash commits to the delta.
    assert_eq!(
        result.suffix_data.delta_hash,
        encoded_multihash(result.delta_canonical.as_bytes())
    );

    // Commitments are the double multihash of their reveal values.
    let recompute = |reveal: &str| {
        base64url_encode(&multihash_sha256(&multihash_sha256(reveal.as_bytes())))
    };
    assert_eq!(result.recovery_commitment, recompute(&result.recovery_value));
    assert_eq!(result.update_commitment, recompute(&result.update_value));

    // Patch order: keys first, then both services in input order.
    assert_eq!(result.delta.patches.len(), 2);
    assert!(matches!(result.delta.patches[0], Patch::AddPublicKeys { .. }));
    let Patch::AddServices { services } = &result.delta.patches[1] else {
        panic!("expected add-services second");
    };
    assert_eq!(services[0].id, "linked-domain-1");
    assert_eq!(services[1].id, "linked-domain-2");
}

#[test]
fn long_form_payload_is_the_resolver_contract() {
    let result = generate_did(&request()).unwrap();

    let segment = result.did_long.rsplit(':').next().unwrap();
    let payload: Value = serde_json::from_slice(&base64url_decode(segment).unwrap()).unwrap();

    // Bit-exact: re-canonicalizing the decoded payload reproduces the segment.
    let recanonical = canonicalize(&payload).unwrap();
    assert_eq!(base64url_encode(recanonical.as_bytes()), segment);

    assert_eq!(payload["suffixData"]["recoveryCommitment"], result.recovery_commitment);
    assert_eq!(payload["delta"]["updateCommitment"], result.update_commitment);
}

// ---------------------------------------------------------------------------
// 2. Resolution, verification, encryption
// ---------------------------------------------------------------------------

#[tokio::test]
async fn verify_and_encrypt_against_a_generated_document() {
    let result = generate_did(&request()).unwrap();
    let doc = document_from_patches(&result.did_short, &result.delta.patches);

    let mut documents = HashMap::new();
    documents.insert(result.did_short.clone(), doc);
    let resolver = StaticResolver { documents };

    // Sign something naming the published signing key, then verify it.
    let signer = FakeSigningKey;
    let jws = signer
        .sign(
            json!({ "kid": format!("{}#signing-key-1", result.did_short) }),
            json!({ "sub": result.did_short }),
        )
        .await
        .unwrap();
    assert!(verify_jws(&jws, &resolver, &FakeKeys).await.unwrap());

    // Encrypt for the DID; the key-agreement default must pick
    // encryption-key-1 out of the generated patches.
    let ciphertext = encrypt_for(&jws, &result.did_short, &resolver, &FakeKeys, None)
        .await
        .unwrap();
    assert!(ciphertext.starts_with("jwe[#encryption-key-1]("));
}

// ---------------------------------------------------------------------------
// 3. DID configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn did_configuration_entry_verifies() {
    let result = generate_did(&request()).unwrap();
    let config = create_did_configuration(
        &FakeSigningKey,
        &result.did_short,
        json!({ "id": "https://clinic.example.com" }),
        &["HealthCard".to_string()],
    )
    .await
    .unwrap();

    assert_eq!(config.entries.len(), 1);

    // The entry is a compact JWS whose claims bind the DID and window.
    let entry = &config.entries[0];
    let claims_segment = entry.split('.').nth(1).unwrap();
    let claims: Value = serde_json::from_slice(&base64url_decode(claims_segment).unwrap()).unwrap();
    assert_eq!(claims["iss"], result.did_short);
    assert_eq!(claims["vc"]["type"][0], "VerifiableCredential");
    assert_eq!(claims["vc"]["type"][1], "HealthCard");
}

// ---------------------------------------------------------------------------
// 4. Numeric transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn a_signed_credential_survives_the_numeric_channel() {
    let signer = FakeSigningKey;
    let jws = signer
        .sign(json!({ "alg": "ES256" }), json!({ "vc": { "type": ["VerifiableCredential"] } }))
        .await
        .unwrap();

    let digits = encode_to_numeric(&jws).unwrap();
    assert_eq!(digits.len(), jws.len() * 2);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(decode_from_numeric(&digits).unwrap(), jws);
}

#[test]
fn a_long_form_did_survives_the_numeric_channel() {
    let result = generate_did(&request()).unwrap();
    let digits = encode_to_numeric(&result.did_long).unwrap();
    assert_eq!(decode_from_numeric(&digits).unwrap(), result.did_long);
}
