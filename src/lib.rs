//! CipherDrop - server-side file encryption service.
//!
//! A client uploads a file and names one of three cipher profiles; the
//! server derives a key with scrypt from a static master secret and a
//! per-profile salt, runs the CBC cipher, and returns the result with the
//! IV as out-of-band metadata. The IV is the only state a client needs to
//! reverse the operation; no key ever leaves the process.
//!
//! - `crypto`: key derivation, algorithm dispatch, the CBC adapters, and
//!   the encrypt/decrypt engine
//! - `wire`: base64 IV codec and filename suffix rules
//! - `server`: axum transport (multipart in, bytes + metadata out)

pub mod app;
pub mod config;
pub mod crypto;
pub mod secret;
pub mod server;
pub mod wire;

mod allocator;
