//! Encryption and decryption engine.
//!
//! The engine owns the master secret and drives a cipher operation end to
//! end: resolve the profile, derive the key fresh, generate or validate
//! the IV, run the CBC adapter. It holds no other state and every method
//! takes `&self`, so one engine serves all requests concurrently.

use crate::crypto::algorithm::Algorithm;
use crate::crypto::cipher;
use crate::crypto::derive::{derive_key, random_bytes};
use crate::crypto::error::{CryptoError, CryptoResult};
use crate::secret::SecretBytes;

/// Engine construction parameters.
///
/// The master secret is injected here rather than read from ambient
/// process state, so tests can run the engine with a throwaway secret.
pub struct EngineConfig {
    master_secret: SecretBytes,
}

impl EngineConfig {
    pub fn new(master_secret: SecretBytes) -> Self {
        Self { master_secret }
    }

    pub fn from_secret_str(master_secret: &str) -> Self {
        Self::new(SecretBytes::new(master_secret.as_bytes()))
    }
}

/// The output of one encrypt operation.
///
/// The IV is the only piece of metadata a client must retain to reverse
/// the operation; the key never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedArtifact {
    /// The profile used, echoed back so the client can name it on decrypt.
    pub algorithm: Algorithm,

    /// CBC ciphertext, padded to the cipher's block size.
    pub ciphertext: Vec<u8>,

    /// The fresh IV generated for this operation.
    pub iv: Vec<u8>,
}

/// Stateless multi-algorithm encrypt/decrypt engine.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Derives the profile's key from the master secret and fixed salt.
    ///
    /// Recomputed on every call. The derivation constants are fixed, so a
    /// failure here indicates an integration bug rather than bad input.
    fn key_for(&self, algorithm: Algorithm) -> CryptoResult<Vec<u8>> {
        derive_key(
            self.config.master_secret.expose_secret(),
            algorithm.salt(),
            algorithm.key_len(),
        )
    }

    /// Encrypts `plaintext` under the named profile.
    ///
    /// Generates a fresh random IV for each call; two encrypts of the same
    /// payload never share an IV or a ciphertext.
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        algorithm: Algorithm,
    ) -> CryptoResult<EncryptedArtifact> {
        let key = self.key_for(algorithm)?;
        let iv = random_bytes(algorithm.iv_len());
        let ciphertext = cipher::encrypt(algorithm, &key, &iv, plaintext)?;

        Ok(EncryptedArtifact { algorithm, ciphertext, iv })
    }

    /// Decrypts `ciphertext` with the caller-supplied IV.
    ///
    /// The IV must match the profile's block size exactly. There is no
    /// key fingerprint in the artifact: naming the wrong profile yields
    /// `DecryptionFailed` or silent garbage, never the original bytes.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        algorithm: Algorithm,
        iv: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        if iv.len() != algorithm.iv_len() {
            return Err(CryptoError::MissingOrInvalidIv);
        }

        let key = self.key_for(algorithm)?;
        cipher::decrypt(algorithm, &key, iv, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine() -> Engine {
        Engine::new(EngineConfig::from_secret_str("unit-test-master-secret"))
    }

    #[test]
    fn test_round_trip_all_algorithms() {
        let engine = test_engine();
        let payloads: &[&[u8]] = &[
            b"",
            b"a",
            b"hello world",
            &[0xABu8; 1024],
        ];

        for algorithm in Algorithm::ALL.iter().copied() {
            for payload in payloads {
                let artifact = engine.encrypt(payload, algorithm).unwrap();
                let plaintext = engine
                    .decrypt(&artifact.ciphertext, algorithm, &artifact.iv)
                    .unwrap();
                assert_eq!(&plaintext, payload, "round trip failed for {algorithm}");
            }
        }
    }

    #[test]
    fn test_iv_is_fresh_per_operation() {
        let engine = test_engine();

        let first = engine.encrypt(b"same payload", Algorithm::Aes256Cbc).unwrap();
        let second = engine.encrypt(b"same payload", Algorithm::Aes256Cbc).unwrap();

        assert_ne!(first.iv, second.iv);
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_hello_world_aes_geometry() {
        let engine = test_engine();
        let artifact = engine.encrypt(b"hello world", Algorithm::Aes256Cbc).unwrap();

        // 11 bytes pad up to one 16-byte block.
        assert_eq!(artifact.ciphertext.len(), 16);
        assert_eq!(artifact.iv.len(), 16);
        assert_eq!(artifact.algorithm, Algorithm::Aes256Cbc);
    }

    #[test]
    fn test_hello_world_des_geometry() {
        let engine = test_engine();
        let artifact = engine.encrypt(b"hello world", Algorithm::TripleDesCbc).unwrap();

        // 11 bytes pad up to two 8-byte blocks.
        assert_eq!(artifact.ciphertext.len(), 16);
        assert_eq!(artifact.iv.len(), 8);
    }

    #[test]
    fn test_cross_algorithm_mismatch_never_recovers_plaintext() {
        let engine = test_engine();
        let payload = b"cross algorithm payload";

        let artifact = engine.encrypt(payload, Algorithm::Aes256Cbc).unwrap();

        // AES IV is 16 bytes, DES expects 8; truncate so length validation
        // passes and the mismatch reaches the cipher itself.
        let result = engine.decrypt(&artifact.ciphertext, Algorithm::TripleDesCbc, &artifact.iv[..8]);
        match result {
            Ok(garbage) => assert_ne!(garbage, payload),
            Err(err) => assert!(matches!(err, CryptoError::DecryptionFailed)),
        }
    }

    #[test]
    fn test_rsa_profile_differs_from_aes_profile() {
        // The `rsa` profile is AES-256-CBC under its own salt: same cipher,
        // different key. An artifact from one profile must not decrypt to
        // the original under the other.
        let engine = test_engine();
        let payload = b"profile separation";

        let artifact = engine.encrypt(payload, Algorithm::RsaHybrid).unwrap();
        match engine.decrypt(&artifact.ciphertext, Algorithm::Aes256Cbc, &artifact.iv) {
            Ok(garbage) => assert_ne!(garbage, payload),
            Err(err) => assert!(matches!(err, CryptoError::DecryptionFailed)),
        }
    }

    #[test]
    fn test_wrong_iv_length_is_client_error() {
        let engine = test_engine();
        let artifact = engine.encrypt(b"payload", Algorithm::Aes256Cbc).unwrap();

        let err = engine
            .decrypt(&artifact.ciphertext, Algorithm::Aes256Cbc, &[])
            .unwrap_err();
        assert!(matches!(err, CryptoError::MissingOrInvalidIv));

        let err = engine
            .decrypt(&artifact.ciphertext, Algorithm::Aes256Cbc, &artifact.iv[..8])
            .unwrap_err();
        assert!(matches!(err, CryptoError::MissingOrInvalidIv));
    }

    #[test]
    fn test_wrong_iv_never_recovers_plaintext() {
        let engine = test_engine();
        let payload = b"two full blocks of data, for sure!!";

        let artifact = engine.encrypt(payload, Algorithm::Aes256Cbc).unwrap();
        let wrong_iv = vec![0u8; 16];

        match engine.decrypt(&artifact.ciphertext, Algorithm::Aes256Cbc, &wrong_iv) {
            // CBC with a wrong IV garbles only the first block; padding may
            // still verify, but the plaintext must differ.
            Ok(garbage) => assert_ne!(garbage, payload),
            Err(err) => assert!(matches!(err, CryptoError::DecryptionFailed)),
        }
    }

    #[test]
    fn test_corrupted_ciphertext_fails_or_garbles() {
        let engine = test_engine();
        let payload = b"corruption target with several blocks of content";

        let artifact = engine.encrypt(payload, Algorithm::Aes256Cbc).unwrap();
        let mut corrupted = artifact.ciphertext.clone();
        corrupted[0] ^= 0xFF;

        // No authentication tag: corruption is either a padding failure or
        // silent garbage, never the original payload.
        match engine.decrypt(&corrupted, Algorithm::Aes256Cbc, &artifact.iv) {
            Ok(garbage) => assert_ne!(garbage, payload),
            Err(err) => assert!(matches!(err, CryptoError::DecryptionFailed)),
        }
    }

    #[test]
    fn test_engines_with_same_secret_interoperate() {
        let first = Engine::new(EngineConfig::from_secret_str("shared"));
        let second = Engine::new(EngineConfig::from_secret_str("shared"));

        let artifact = first.encrypt(b"portable", Algorithm::TripleDesCbc).unwrap();
        let plaintext = second
            .decrypt(&artifact.ciphertext, Algorithm::TripleDesCbc, &artifact.iv)
            .unwrap();
        assert_eq!(plaintext, b"portable");
    }

    #[test]
    fn test_engines_with_different_secrets_do_not() {
        let first = Engine::new(EngineConfig::from_secret_str("secret-one"));
        let second = Engine::new(EngineConfig::from_secret_str("secret-two"));

        let payload = b"not portable";
        let artifact = first.encrypt(payload, Algorithm::Aes256Cbc).unwrap();

        match second.decrypt(&artifact.ciphertext, Algorithm::Aes256Cbc, &artifact.iv) {
            Ok(garbage) => assert_ne!(garbage, payload),
            Err(err) => assert!(matches!(err, CryptoError::DecryptionFailed)),
        }
    }
}
