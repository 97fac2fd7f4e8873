//! Cryptographic core for CipherDrop.

pub mod algorithm;
pub mod cipher;
pub mod derive;
pub mod engine;
pub mod error;

pub use algorithm::Algorithm;
pub use engine::{EncryptedArtifact, Engine, EngineConfig};
pub use error::{CryptoError, CryptoResult};
