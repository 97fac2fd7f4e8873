//! Cryptography error types.

use thiserror::Error;

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the encryption core.
///
/// `DecryptionFailed` deliberately carries no cause: the boundary reports
/// every decrypt failure identically, whether it came from a wrong key,
/// a wrong IV, or corrupted ciphertext.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The algorithm token is not one of the recognized profiles.
    #[error("invalid algorithm {0:?}: use 'aes', 'des', or 'rsa'")]
    UnsupportedAlgorithm(String),

    /// Decrypt was requested without an IV, or with an IV of the wrong
    /// length for the selected cipher.
    #[error("missing or invalid IV")]
    MissingOrInvalidIv,

    /// Key derivation was invoked with unusable parameters.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The cipher rejected the encrypt operation.
    #[error("encryption failed")]
    EncryptionFailed,

    /// The cipher rejected the decrypt operation.
    #[error("decryption failed")]
    DecryptionFailed,
}
