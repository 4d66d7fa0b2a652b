use std::io::{Cursor, Read};

use log::error;
use stegano_edge_seasmoke::{decrypt_data, encrypt_data};

use super::{PayloadCodec, PayloadDecoder, PayloadEncoder};
use crate::error::SteganoError;
use crate::result::Result;
use crate::secret::Secret;

/// Encryption overhead: 16 bytes (Poly1305 auth tag) + 24 bytes (nonce) + 32 bytes (salt)
pub const ENCRYPTION_OVERHEAD: usize = 16 + 24 + 32;

/// Encrypts the payload with a password before handing it to the inner codec
pub struct CryptedPayloadCodec {
    inner_codec: Box<dyn PayloadCodec>,
    password: Secret,
}

impl CryptedPayloadCodec {
    pub fn new(inner_codec: Box<dyn PayloadCodec>, password: Secret) -> Self {
        Self {
            inner_codec,
            password,
        }
    }
}

impl PayloadEncoder for CryptedPayloadCodec {
    fn encode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        content.read_to_end(&mut data)?;

        let data = encrypt_data(self.password.expose(), &data).map_err(|e| {
            error!("Error encrypting the payload: {e}");
            SteganoError::EncryptionError(e)
        })?;

        self.inner_codec.encode(&mut Cursor::new(data))
    }

    fn encoded_size(&self, content_len: usize) -> usize {
        self.inner_codec
            .encoded_size(content_len + ENCRYPTION_OVERHEAD)
    }
}

impl PayloadDecoder for CryptedPayloadCodec {
    fn decode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let data = self.inner_codec.decode(content)?;

        decrypt_data(self.password.expose(), &data).map_err(|e| {
            error!("Error decrypting the payload: {e}");
            SteganoError::AuthenticationError(e)
        })
    }
}

impl PayloadCodec for CryptedPayloadCodec {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PlainPayloadCodec;

    fn codec(password: &str) -> CryptedPayloadCodec {
        CryptedPayloadCodec::new(Box::new(PlainPayloadCodec), password.into())
    }

    #[test]
    fn test_encryption_codec() {
        let data = b"Hello World".to_vec();

        let encrypted = codec("password42").encode(&mut data.as_slice()).unwrap();
        assert_ne!(encrypted, data);
        assert_eq!(encrypted.len(), codec("password42").encoded_size(data.len()));

        let decrypted = codec("password42")
            .decode(&mut encrypted.as_slice())
            .unwrap();
        assert_eq!(decrypted, data);
    }

    #[test]
    fn should_fail_authentication_with_a_wrong_password() {
        let encrypted = codec("password42")
            .encode(&mut b"Hello World".as_slice())
            .unwrap();

        let result = codec("password43").decode(&mut encrypted.as_slice());

        assert!(matches!(result, Err(SteganoError::AuthenticationError(_))));
    }

    #[test]
    fn should_fail_authentication_on_truncated_data() {
        let result = codec("password42").decode(&mut [0u8; 12].as_slice());

        assert!(matches!(result, Err(SteganoError::AuthenticationError(_))));
    }
}
