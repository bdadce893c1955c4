//! # DID Configuration Credential
//!
//! Builds the `.well-known/did-configuration.json` document that ties a
//! domain to a DID: a single verifiable credential, signed by the DID's
//! `signing-key-1`, whose subject is supplied by the caller. The validity
//! window straddles "now" by ten minutes on each side so issuer and
//! verifier clocks do not have to agree to the second.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::{
    CREDENTIALS_CONTEXT, DID_CONFIGURATION_CONTEXT, DID_CONFIGURATION_VALIDITY_WINDOW_SECS,
    SIGNING_KEY_ID,
};
use crate::keys::{KeyError, SigningKey};

/// Errors building a DID configuration.
#[derive(Debug, Error)]
pub enum DidConfigurationError {
    /// The signing capability failed.
    #[error(transparent)]
    Key(#[from] KeyError),
    /// The validity window landed outside representable time.
    #[error("credential validity window is out of range")]
    TimeOutOfRange,
}

/// The `.well-known` DID configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DidConfiguration {
    /// The did-configuration JSON-LD context.
    #[serde(rename = "@context")]
    pub context: String,
    /// Signed domain-linkage credentials, as compact JWS strings.
    pub entries: Vec<String>,
}

/// Build and sign a DID configuration for `did`.
///
/// The credential is issued `nbf = now - 10min`, `exp = now + 10min`, with
/// type `VerifiableCredential` plus any `additional_types`, and is signed
/// with `kid = {did}#signing-key-1`.
pub async fn create_did_configuration(
    signing_key: &dyn SigningKey,
    did: &str,
    credential_subject: serde_json::Value,
    additional_types: &[String],
) -> Result<DidConfiguration, DidConfigurationError> {
    let now = Utc::now().timestamp();
    let issued = now - DID_CONFIGURATION_VALIDITY_WINDOW_SECS;
    let expires = now + DID_CONFIGURATION_VALIDITY_WINDOW_SECS;

    let mut credential_types = vec!["VerifiableCredential".to_string()];
    credential_types.extend(additional_types.iter().cloned());

    let header = json!({ "kid": format!("{did}#{SIGNING_KEY_ID}") });
    let claims = json!({
        "sub": did,
        "iss": did,
        "nbf": issued,
        "exp": expires,
        "vc": {
            "@context": [CREDENTIALS_CONTEXT, DID_CONFIGURATION_CONTEXT],
            "issuer": did,
            "issuanceDate": iso_timestamp(issued)?,
            "expirationDate": iso_timestamp(expires)?,
            "type": credential_types,
            "credentialSubject": credential_subject,
        },
    });

    let entry = signing_key.sign(header, claims).await?;
    Ok(DidConfiguration {
        context: DID_CONFIGURATION_CONTEXT.to_string(),
        entries: vec![entry],
    })
}

fn iso_timestamp(unix_seconds: i64) -> Result<String, DidConfigurationError> {
    let timestamp = DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .ok_or(DidConfigurationError::TimeOutOfRange)?;
    Ok(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
