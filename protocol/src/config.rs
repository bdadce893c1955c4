//! # Protocol Constants
//!
//! Every magic number and magic string in the crate lives here. The values
//! in this file are wire-visible: they end up inside canonicalized JSON that
//! gets hashed into identifiers, so changing any of them changes every DID
//! this crate would ever produce.

// ---------------------------------------------------------------------------
// DID Method
// ---------------------------------------------------------------------------

/// The DID method implemented by the generation pipeline.
pub const DID_METHOD: &str = "ion";

/// Prefix of every identifier this crate produces.
pub const DID_PREFIX: &str = "did:ion:";

/// `id` of the published signing key entry. Also referenced by the
/// DID-configuration credential as the signing `kid` fragment.
pub const SIGNING_KEY_ID: &str = "signing-key-1";

/// `id` of the published encryption (key agreement) key entry.
pub const ENCRYPTION_KEY_ID: &str = "encryption-key-1";

/// `type` of every published public key entry.
pub const PUBLIC_KEY_ENTRY_TYPE: &str = "JsonWebKey2020";

/// `type` of a linked-domain service entry.
pub const LINKED_DOMAINS_SERVICE_TYPE: &str = "LinkedDomains";

/// Prefix of linked-domain service ids. Ids are 1-indexed: the first
/// domain becomes `linked-domain-1`.
pub const LINKED_DOMAIN_ID_PREFIX: &str = "linked-domain-";

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Multihash function code for sha2-256.
pub const MULTIHASH_SHA2_256_CODE: u8 = 0x12;

/// Multihash digest length for sha2-256 (32 bytes).
pub const MULTIHASH_SHA2_256_LENGTH: u8 = 0x20;

// ---------------------------------------------------------------------------
// Numeric Codec
// ---------------------------------------------------------------------------

/// Lowest codepoint the numeric codec accepts: `-` (45), the smallest
/// character in the base64url alphabet.
pub const NUMERIC_ALPHABET_FLOOR: u32 = 45;

/// Highest codepoint the numeric codec accepts. Each character is encoded
/// as two decimal digits, so the offset from the floor must fit in 0–99.
pub const NUMERIC_ALPHABET_CEILING: u32 = NUMERIC_ALPHABET_FLOOR + 99;

// ---------------------------------------------------------------------------
// DID Configuration Credential
// ---------------------------------------------------------------------------

/// JSON-LD context of the `.well-known` DID-configuration document.
pub const DID_CONFIGURATION_CONTEXT: &str =
    "https://identity.foundation/.well-known/contexts/did-configuration-v0.0.jsonld";

/// JSON-LD context of the W3C Verifiable Credentials data model.
pub const CREDENTIALS_CONTEXT: &str = "https://www.w3.org/2018/credentials/v1";

/// Half-width of the DID-configuration validity window, in seconds.
/// The credential is issued `nbf = now - window` and `exp = now + window`
/// so modest clock skew between issuer and verifier does not matter.
pub const DID_CONFIGURATION_VALIDITY_WINDOW_SECS: i64 = 10 * 60;
