//! # Identity Module
//!
//! The `did:ion` generation pipeline, layered the way the data flows:
//!
//! 1. **jwk** — The public key record. Algorithm-specific fields, no
//!    execution semantics; the only requirement is that it canonicalizes
//!    deterministically.
//! 2. **commitment** — The commit-now-reveal-later scheme. A published
//!    identifier binds its recovery and update keys through a double hash
//!    of the canonicalized key; the key itself stays private until the
//!    moment it authorizes a recovery or update.
//! 3. **document** — The method-specific state: ordered patches (add keys,
//!    add services), the delta carrying them, and the suffix data binding
//!    the delta hash to the recovery commitment.
//! 4. **generate** — Assembly of the short-form (hash-only) and long-form
//!    (hash plus embedded initial state) identifier strings.
//! 5. **configuration** — The `.well-known` DID-configuration credential
//!    that proves a domain and a DID belong to each other.
//!
//! Everything below `configuration` is pure and synchronous: same inputs,
//! same identifier, no I/O, no shared state.

pub mod commitment;
pub mod configuration;
pub mod document;
pub mod generate;
pub mod jwk;

pub use commitment::{reveal_commit_pair, RevealCommitPair};
pub use configuration::{create_did_configuration, DidConfiguration};
pub use document::{
    build_delta, build_suffix_data, Delta, Patch, PublicKeyEntry, ServiceEntry, SuffixData,
};
pub use generate::{generate_did, DidGenerationRequest, DidGenerationResult, GenerateError};
pub use jwk::PublicKeyJwk;
