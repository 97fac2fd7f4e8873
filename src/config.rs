//! Global Configuration Constants
//!
//! Cryptographic parameters, wire-contract constants, and server defaults
//! used throughout CipherDrop. The cipher profiles are deliberately frozen:
//! an artifact produced by one deployment must decrypt on any other
//! deployment configured with the same master secret, so every constant
//! here is part of the compatibility surface.

use std::net::SocketAddr;

use crate::secret::{Secret, SecretBytes};

/// Application name used in logs and served metadata.
pub const APP_NAME: &str = "CipherDrop";

/// File extension appended to encrypted payloads.
///
/// The decrypt path strips this suffix (when present) to suggest the
/// original filename back to the client.
pub const ENCRYPTED_EXTENSION: &str = ".enc";

// === scrypt Key Derivation Parameters ===
// These match the reference deployment. Changing any of them changes every
// derived key and orphans existing artifacts.

/// scrypt CPU/memory cost parameter, expressed as log2(N). N = 16384.
pub const SCRYPT_LOG_N: u8 = 14;

/// scrypt block size parameter.
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelization parameter.
pub const SCRYPT_P: u32 = 1;

// === Per-Algorithm Derivation Salts ===
// One fixed salt per cipher profile. The salts are not secret; their only
// job is to make the three profiles derive distinct keys from the shared
// master secret.

/// Salt for the AES-256-CBC profile.
pub const AES_SALT: &[u8] = b"aes-salt-1234567890123456";

/// Salt for the Triple-DES-CBC profile.
pub const DES_SALT: &[u8] = b"des-salt-1234567890123456";

/// Salt for the RSA-hybrid profile (an AES-256-CBC variant, see
/// `crypto::algorithm`).
pub const RSA_SALT: &[u8] = b"rsa-salt-1234567890123456";

// === Cipher Geometry ===

/// AES-256 key size in bytes.
pub const AES_KEY_SIZE: usize = 32;

/// AES block (and CBC IV) size in bytes.
pub const AES_IV_SIZE: usize = 16;

/// Triple-DES (EDE3) key size in bytes.
pub const DES3_KEY_SIZE: usize = 24;

/// DES block (and CBC IV) size in bytes.
pub const DES3_IV_SIZE: usize = 8;

// === Server Defaults ===

/// Default listen address, matching the reference deployment's port.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Fallback master secret used when `STATIC_ENCRYPTION_KEY` is unset.
///
/// Kept for drop-in compatibility with the reference deployment; any real
/// installation overrides this through the environment.
pub const DEFAULT_MASTER_SECRET: &str =
    "MyStaticEncryptionKey123456789012345678901234567890";

/// Upper bound on uploaded file size in bytes. Payloads are held fully in
/// memory for the duration of a request.
pub const DEFAULT_MAX_UPLOAD: usize = 100 * 1024 * 1024;

// === Metadata Header Names ===
// Custom response headers carrying encryption metadata out-of-band. They
// are exposed through CORS so browser clients can read them.

/// Header echoing the algorithm token used for the operation.
pub const HEADER_ALGORITHM: &str = "x-algorithm";

/// Header carrying the base64-encoded IV required to decrypt.
pub const HEADER_IV_BASE64: &str = "x-iv-base64";

/// Header carrying the uploaded file's original name.
pub const HEADER_ORIGINAL_FILENAME: &str = "x-original-filename";

/// Resolved runtime configuration, assembled by `App` from CLI arguments
/// and the environment, then handed to the server whole.
///
/// Carrying the master secret here (instead of reading ambient process
/// state inside the engine) lets tests construct a service around a
/// throwaway secret.
pub struct ServiceConfig {
    /// Listen address.
    pub bind: SocketAddr,

    /// Master secret every key is derived from.
    pub master_secret: SecretBytes,

    /// HS256 secret for the verify-token endpoint, when configured.
    pub jwt_secret: Option<Secret>,

    /// Maximum accepted request body size in bytes.
    pub max_upload: usize,
}
