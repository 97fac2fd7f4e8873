//! Cipher profile selection.
//!
//! The service exposes three named profiles. Dispatch is a closed enum so
//! adding a profile is an explicit code change with exhaustive matches,
//! not a new string branch.
//!
//! The `rsa` token is historical: the reference deployment labeled its
//! third profile "RSA hybrid" but never performed asymmetric crypto. It is
//! AES-256-CBC under a dedicated salt, and CipherDrop preserves that
//! behavior for artifact compatibility.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::config::{
    AES_IV_SIZE, AES_KEY_SIZE, AES_SALT, DES3_IV_SIZE, DES3_KEY_SIZE, DES_SALT, RSA_SALT,
};
use crate::crypto::error::{CryptoError, CryptoResult};

/// A supported cipher profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES-256 in CBC mode with PKCS#7 padding.
    Aes256Cbc,

    /// Triple-DES (EDE3) in CBC mode with PKCS#7 padding. Legacy.
    TripleDesCbc,

    /// AES-256-CBC under the `rsa` salt. A third labeled symmetric
    /// profile, despite the token.
    RsaHybrid,
}

impl Algorithm {
    /// All profiles, for iteration in tests and documentation output.
    pub const ALL: &'static [Self] = &[Self::Aes256Cbc, Self::TripleDesCbc, Self::RsaHybrid];

    /// Parses a client-supplied token, case-insensitively.
    ///
    /// Rejects unknown tokens before any key derivation or cipher work.
    pub fn from_token(token: &str) -> CryptoResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "aes" => Ok(Self::Aes256Cbc),
            "des" => Ok(Self::TripleDesCbc),
            "rsa" => Ok(Self::RsaHybrid),
            _ => Err(CryptoError::UnsupportedAlgorithm(token.to_owned())),
        }
    }

    /// The wire token for this profile, as echoed back to clients.
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Self::Aes256Cbc => "aes",
            Self::TripleDesCbc => "des",
            Self::RsaHybrid => "rsa",
        }
    }

    /// The fixed derivation salt for this profile.
    ///
    /// Distinct per profile so the shared master secret yields three
    /// unrelated keys.
    #[inline]
    pub fn salt(self) -> &'static [u8] {
        match self {
            Self::Aes256Cbc => AES_SALT,
            Self::TripleDesCbc => DES_SALT,
            Self::RsaHybrid => RSA_SALT,
        }
    }

    /// Required key length in bytes.
    #[inline]
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes256Cbc | Self::RsaHybrid => AES_KEY_SIZE,
            Self::TripleDesCbc => DES3_KEY_SIZE,
        }
    }

    /// Required IV length in bytes (equal to the cipher block size).
    #[inline]
    pub fn iv_len(self) -> usize {
        match self {
            Self::Aes256Cbc | Self::RsaHybrid => AES_IV_SIZE,
            Self::TripleDesCbc => DES3_IV_SIZE,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}
