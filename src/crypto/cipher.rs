//! CBC cipher adapters.
//!
//! Thin wrappers over the RustCrypto block ciphers. Both profiles run CBC
//! with PKCS#7 padding; the caller supplies key and IV of the exact length
//! the profile requires. There is no authentication tag: a decrypt with
//! wrong key material either trips the padding check or yields garbage.

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::TdesEde3;

use crate::crypto::algorithm::Algorithm;
use crate::crypto::error::{CryptoError, CryptoResult};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type TdesEde3CbcEnc = cbc::Encryptor<TdesEde3>;
type TdesEde3CbcDec = cbc::Decryptor<TdesEde3>;

/// Encrypts `plaintext` under the profile's CBC cipher.
///
/// Output length is padded up to the next block boundary; an empty
/// plaintext still produces one full padding block.
pub fn encrypt(
    algorithm: Algorithm,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> CryptoResult<Vec<u8>> {
    match algorithm {
        Algorithm::Aes256Cbc | Algorithm::RsaHybrid => {
            let cipher = Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::EncryptionFailed)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        Algorithm::TripleDesCbc => {
            let cipher = TdesEde3CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::EncryptionFailed)?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
    }
}

/// Decrypts `ciphertext` under the profile's CBC cipher.
///
/// Fails with `DecryptionFailed` when the input is not block-aligned or
/// the final padding block does not verify. The error is the same in both
/// cases.
pub fn decrypt(
    algorithm: Algorithm,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> CryptoResult<Vec<u8>> {
    match algorithm {
        Algorithm::Aes256Cbc | Algorithm::RsaHybrid => {
            let cipher = Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::DecryptionFailed)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CryptoError::DecryptionFailed)
        }
        Algorithm::TripleDesCbc => {
            let cipher = TdesEde3CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::DecryptionFailed)?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CryptoError::DecryptionFailed)
        }
    }
}
