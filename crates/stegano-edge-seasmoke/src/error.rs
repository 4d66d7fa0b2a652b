pub use argon2::Error as Argon2Error;
pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeasmokeError {
    #[error("Key derivation error")]
    KeyDerivationError(Argon2Error),

    #[error("Key derivation parameter error")]
    KeyDerivationParamError(Argon2Error),

    /// The authentication tag did not match, wrong password or tampered data
    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),

    /// The data is shorter than the appended nonce and salt
    #[error("Cipher data too short: {0} bytes, at least {1} expected")]
    CiphertextTooShort(usize, usize),
}
