// Copyright (c) 2026 Ion Protocol contributors. MIT License.
// See LICENSE for details.

//! # ion-protocol — Core Library
//!
//! Everything you need to mint a self-certifying `did:ion` identifier and
//! push compact credential strings through channels that only speak digits
//! (numeric-mode QR codes, mostly).
//!
//! The crate is split along the actual seams of the problem:
//!
//! - **canonical** — RFC 8785 JSON canonicalization. If two semantically
//!   equal documents hash differently, nothing else in this crate works.
//! - **crypto** — SHA-256 wrapped in a multihash envelope, plus base64url.
//!   Deliberately boring.
//! - **identity** — The DID generation pipeline: commitment-reveal pairs,
//!   delta/suffix-data construction, short- and long-form assembly, and the
//!   `.well-known` DID-configuration credential.
//! - **keys** — Opaque signing/encryption key capabilities. The core never
//!   looks inside a key; it only asks it to sign, verify, or encrypt.
//! - **resolve** — The DID-document fetch seam and the two operations built
//!   on it (JWS verification, encrypt-for-recipient).
//! - **numeric** — The standalone two-digits-per-character transport codec.
//!
//! ## Design Philosophy
//!
//! 1. The generation pipeline is pure: same inputs, same identifier, on any
//!    machine, forever.
//! 2. Network and key material live behind traits. The core compiles and
//!    tests without either.
//! 3. Commitment reveal values are secrets until the moment they are used.
//!    Nothing here logs or `Debug`-prints them.

pub mod canonical;
pub mod config;
pub mod crypto;
pub mod identity;
pub mod keys;
pub mod numeric;
pub mod resolve;
