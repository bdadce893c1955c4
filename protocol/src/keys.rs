//! # Key Capabilities
//!
//! The core never implements cryptographic signing or encryption; it
//! consumes them through the traits below. A [`KeyGenerators`] factory
//! turns public key material into an opaque capability that can verify a
//! JWS or encrypt a payload. What algorithm lives behind the capability is
//! none of this crate's business.
//!
//! Implementations own their latency and failure policy. The core calls
//! and awaits; it never retries, times out, or cancels.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::identity::jwk::PublicKeyJwk;

/// Errors surfaced by key capability implementations.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key material is not usable by this implementation.
    #[error("unsupported key material: {0}")]
    UnsupportedKey(String),
    /// Signing, verification, or encryption failed.
    #[error("key operation failed: {0}")]
    OperationFailed(String),
    /// Anything else an implementation needs to report.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A capability wrapping a signing key.
#[async_trait]
pub trait SigningKey: Send + Sync {
    /// Produce a compact JWS over the given claims with the given
    /// protected header fields.
    async fn sign(&self, header: Value, claims: Value) -> Result<String, KeyError>;

    /// Verify a compact JWS against this key. Returns `false` for a
    /// well-formed signature that does not verify; errors are reserved
    /// for malformed input or key failures.
    async fn verify(&self, jws: &str) -> Result<bool, KeyError>;
}

/// A capability wrapping a key-agreement (encryption) key.
#[async_trait]
pub trait EncryptionKey: Send + Sync {
    /// Encrypt the payload for this key's holder, with the given protected
    /// header fields. Returns the compact ciphertext string.
    async fn encrypt(&self, header: Value, payload: &str) -> Result<String, KeyError>;
}

/// Factory turning public key material into capabilities.
#[async_trait]
pub trait KeyGenerators: Send + Sync {
    /// Build a signing key capability from JWK material.
    async fn generate_signing_key(&self, jwk: PublicKeyJwk)
        -> Result<Box<dyn SigningKey>, KeyError>;

    /// Build an encryption key capability from JWK material.
    async fn generate_encryption_key(
        &self,
        jwk: PublicKeyJwk,
    ) -> Result<Box<dyn EncryptionKey>, KeyError>;
}
