//! Key derivation and randomness.
//!
//! Keys are derived with scrypt from the process-wide master secret and a
//! fixed per-profile salt. Derivation is deterministic and recomputed on
//! every cipher operation; nothing is cached and no key is ever persisted.

use rand::RngExt;
use scrypt::Params;

use crate::config::{SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use crate::crypto::error::{CryptoError, CryptoResult};

/// Derives `length` key bytes from `secret` and `salt`.
///
/// Identical inputs always yield identical output. The cost parameters are
/// fixed in `config` and shared by every profile.
pub fn derive_key(secret: &[u8], salt: &[u8], length: usize) -> CryptoResult<Vec<u8>> {
    if length == 0 {
        return Err(CryptoError::KeyDerivation("requested key length is zero".into()));
    }

    if salt.is_empty() {
        return Err(CryptoError::KeyDerivation("salt cannot be empty".into()));
    }

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, length)
        .map_err(|e| CryptoError::KeyDerivation(format!("invalid scrypt parameters: {e}")))?;

    let mut key = vec![0u8; length];
    scrypt::scrypt(secret, salt, &params, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(format!("scrypt failed: {e}")))?;

    Ok(key)
}

/// Fills a fresh buffer of `len` bytes from the OS CSPRNG.
///
/// Used for IV generation; `len` varies with the cipher block size.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill(&mut bytes[..]);
    bytes
}
