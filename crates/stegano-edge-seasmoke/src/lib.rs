//! # Seasmoke
//! Password based encryption and key to seed derivation for stegano-edge-core.
//!
//! The steganographic core treats the output of [`encrypt_data`] as an opaque payload,
//! it never depends on the layout of the cipher data.

use argon2::{Argon2, ParamsBuilder};
use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

pub mod error;

pub use crate::error::SeasmokeError;

const NONCE_LEN: usize = 24;
const SALT_LEN: usize = 32;
const KEY_LEN: usize = 32;
const PASSPHRASE_LEN: usize = 32;

pub type Result<T> = std::result::Result<T, SeasmokeError>;
pub type Key = [u8; KEY_LEN];

/// decrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for encryption
///
/// expects the layout produced by [`encrypt_data`]: `cipher data | nonce | salt`
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < SALT_LEN + NONCE_LEN {
        return Err(SeasmokeError::CiphertextTooShort(
            data.len(),
            SALT_LEN + NONCE_LEN,
        ));
    }
    let salt = &data[data.len() - SALT_LEN..];
    let nonce = &data[data.len() - SALT_LEN - NONCE_LEN..data.len() - SALT_LEN];
    let mut key = derive_key(password.as_bytes(), salt)?;

    let decryptor = XChaCha20Poly1305::new(&key.into());
    key.zeroize();

    decryptor
        .decrypt(nonce.into(), &data[0..data.len() - SALT_LEN - NONCE_LEN])
        .map_err(SeasmokeError::DecryptionError)
}

/// encrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for encryption
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut key = derive_key(password.as_bytes(), &salt)?;

    let mut nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

    let encryptor = XChaCha20Poly1305::new(&key.into());
    key.zeroize();
    let mut cipher_data = encryptor
        .encrypt(&nonce, data)
        .map_err(SeasmokeError::EncryptionError)?;
    cipher_data.extend_from_slice(&nonce);
    cipher_data.extend_from_slice(&salt);

    nonce.zeroize();
    salt.zeroize();

    Ok(cipher_data)
}

/// derives a generator seed from a secret key, the first 8 bytes of `SHA-256(key)` read big endian
///
/// The same key always yields the same seed, on every platform.
pub fn derive_seed(key: &[u8]) -> u64 {
    let digest = Sha256::digest(key);
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);

    u64::from_be_bytes(seed)
}

/// generates a random passphrase of 32 bytes, hex encoded
pub fn generate_passphrase() -> String {
    let mut raw = [0u8; PASSPHRASE_LEN];
    OsRng.fill_bytes(&mut raw);
    let passphrase = raw.iter().map(|b| format!("{b:02x}")).collect();
    raw.zeroize();

    passphrase
}

fn default_secure_argon<'key>() -> Result<Argon2<'key>> {
    // increased time costs to make it more secure
    let params = ParamsBuilder::default()
        .t_cost(10)
        .output_len(KEY_LEN)
        .build()
        .map_err(SeasmokeError::KeyDerivationParamError)?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

fn derive_key(password: &[u8], salt: &[u8]) -> Result<Key> {
    let mut output_key_material = [0u8; KEY_LEN];
    default_secure_argon()?
        .hash_password_into(password, salt, &mut output_key_material)
        .map_err(SeasmokeError::KeyDerivationError)?;

    Ok(output_key_material)
}
