//! Wire contract helpers.
//!
//! The IV crosses the boundary as standard base64 and must round-trip
//! byte for byte; suggested filenames carry the `.enc` suffix on encrypt
//! and lose it again on decrypt.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::config::ENCRYPTED_EXTENSION;
use crate::crypto::error::{CryptoError, CryptoResult};

/// Encodes an IV for the metadata channel.
pub fn encode_iv(iv: &[u8]) -> String {
    BASE64.encode(iv)
}

/// Decodes a client-supplied IV.
///
/// Malformed base64 is a client error, reported the same way as a missing
/// IV. Length validation against the cipher happens in the engine.
pub fn decode_iv(encoded: &str) -> CryptoResult<Vec<u8>> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return Err(CryptoError::MissingOrInvalidIv);
    }

    BASE64.decode(trimmed).map_err(|_| CryptoError::MissingOrInvalidIv)
}

/// Suggested name for an encrypted payload: `<original>.enc`.
pub fn encrypted_filename(original: &str) -> String {
    format!("{original}{ENCRYPTED_EXTENSION}")
}

/// Suggested name for a decrypted payload: the `.enc` suffix stripped
/// when present, the name unchanged otherwise.
pub fn restored_filename(name: &str) -> &str {
    name.strip_suffix(ENCRYPTED_EXTENSION).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iv_round_trip_is_byte_faithful() {
        let iv: Vec<u8> = (0u8..16).collect();
        let encoded = encode_iv(&iv);
        assert_eq!(decode_iv(&encoded).unwrap(), iv);
    }

    #[test]
    fn test_empty_iv_rejected() {
        assert!(matches!(decode_iv(""), Err(CryptoError::MissingOrInvalidIv)));
        assert!(matches!(decode_iv("   "), Err(CryptoError::MissingOrInvalidIv)));
    }

    #[test]
    fn test_malformed_base64_rejected() {
        assert!(matches!(
            decode_iv("not base64 at all!!!"),
            Err(CryptoError::MissingOrInvalidIv)
        ));
    }

    #[test]
    fn test_filename_suffix() {
        assert_eq!(encrypted_filename("report.pdf"), "report.pdf.enc");
        assert_eq!(restored_filename("report.pdf.enc"), "report.pdf");
        assert_eq!(restored_filename("report.pdf"), "report.pdf");
        assert_eq!(restored_filename(".enc"), "");
    }
}
