//! # Public Key Records
//!
//! A [`PublicKeyJwk`] is the key-material object the pipeline consumes: a
//! JSON Web Key as a plain JSON object. The pipeline never interprets the
//! algorithm-specific fields (`crv`, `x`, `y`, ...) — it only canonicalizes
//! the record, hashes it, and publishes it. Whether the key is any good is
//! the key capability's problem, not ours.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors constructing a public key record.
#[derive(Debug, Error)]
pub enum JwkError {
    /// Key material must be a JSON object.
    #[error("public key material must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A public key in JWK form.
///
/// Wraps the raw JSON object so that it serializes transparently — the
/// canonicalized form of a `PublicKeyJwk` is the canonicalized form of the
/// underlying JWK, which is what commitments are computed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKeyJwk(Map<String, Value>);

impl PublicKeyJwk {
    /// Wrap an existing JSON object as a key record.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a key record from a JSON value, rejecting anything that is
    /// not an object.
    pub fn from_value(value: Value) -> Result<Self, JwkError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(JwkError::NotAnObject("null")),
            Value::Bool(_) => Err(JwkError::NotAnObject("a boolean")),
            Value::Number(_) => Err(JwkError::NotAnObject("a number")),
            Value::String(_) => Err(JwkError::NotAnObject("a string")),
            Value::Array(_) => Err(JwkError::NotAnObject("an array")),
        }
    }

    /// A copy of this key with any `kid` field stripped.
    ///
    /// Published key entries never carry their own `kid`: the entry's `id`
    /// field is authoritative, and a stray `kid` would leak into the
    /// canonicalized document and change every derived hash.
    pub fn without_kid(&self) -> Self {
        let mut fields = self.0.clone();
        fields.remove("kid");
        Self(fields)
    }

    /// A copy of this key with `kid` set to the given value.
    ///
    /// Used when handing key material to an encryption capability, which
    /// needs to know which verification method the key came from.
    pub fn with_kid(&self, kid: &str) -> Self {
        let mut fields = self.0.clone();
        fields.insert("kid".to_string(), Value::String(kid.to_string()));
        Self(fields)
    }

    /// Look up a field of the underlying JWK.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<PublicKeyJwk> for Value {
    fn from(jwk: PublicKeyJwk) -> Self {
        Value::Object(jwk.0)
    }
}
