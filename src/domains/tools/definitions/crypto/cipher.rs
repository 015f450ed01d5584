//! Password-based AES-256-CBC token format.
//!
//! A token is `Base64(salt ∥ IV ∥ ciphertext)` with a 16-byte salt, a
//! 16-byte IV and a PKCS#7-padded ciphertext. The key is derived with
//! PBKDF2-HMAC-SHA256; both sides must use the identical iteration count,
//! so it is a protocol constant rather than a tunable.

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;
/// IV length in bytes (the AES block size).
pub const IV_LEN: usize = 16;
/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;
/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// PBKDF2 iteration count. Changing this orphans every previously issued
/// token, so treat it as part of the token format version.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Errors produced while decoding or decrypting a token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The token is structurally invalid: not Base64, too short to hold
    /// salt + IV + one block, or not block aligned.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Padding or decoding failed after decryption. Deliberately does not
    /// distinguish a wrong password from corrupted ciphertext.
    #[error("decryption failed: wrong password or corrupted data")]
    DecryptionFailed,
}

fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Encrypt `plaintext` under a password-derived key.
///
/// Salt and IV come from the OS RNG, so encrypting the same input twice
/// yields different tokens. Encryption itself cannot fail.
pub fn encrypt(plaintext: &str, password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(password, &salt);
    let ciphertext = Aes256CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut token = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    token.extend_from_slice(&salt);
    token.extend_from_slice(&iv);
    token.extend_from_slice(&ciphertext);
    BASE64.encode(token)
}

/// Decrypt a token produced by [`encrypt`], returning the exact original
/// plaintext.
pub fn decrypt(token: &str, password: &str) -> Result<String, CipherError> {
    let data = BASE64
        .decode(token.trim())
        .map_err(|e| CipherError::MalformedPayload(format!("invalid Base64: {e}")))?;

    if data.len() < SALT_LEN + IV_LEN + BLOCK_LEN {
        return Err(CipherError::MalformedPayload(
            "token too short to hold salt, IV and one cipher block".to_string(),
        ));
    }

    let (salt, rest) = data.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CipherError::MalformedPayload(
            "ciphertext is not block aligned".to_string(),
        ));
    }

    let key = derive_key(password, salt);
    let plaintext = Aes256CbcDec::new_from_slices(&key, iv)
        .map_err(|_| CipherError::DecryptionFailed)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::DecryptionFailed)
}
