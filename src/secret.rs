//! Secret wrappers.
//!
//! Key material and token secrets ride in `secrecy` boxes so they are
//! zeroized on drop and never appear in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretBox, SecretString};

/// An owned byte secret (the master encryption secret).
pub struct SecretBytes {
    inner: SecretBox<Vec<u8>>,
}

impl SecretBytes {
    pub fn new(data: &[u8]) -> Self {
        Self { inner: SecretBox::new(Box::new(data.to_vec())) }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { inner: SecretBox::new(Box::new(data)) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([... {} bytes ...])", self.inner.expose_secret().len())
    }
}

/// An owned string secret (the JWT signing secret).
pub struct Secret {
    inner: SecretString,
}

impl Secret {
    pub fn new(value: &str) -> Self {
        Self { inner: SecretString::from(value.to_owned()) }
    }

    pub fn from_string(value: String) -> Self {
        Self { inner: SecretString::from(value) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([redacted])")
    }
}
