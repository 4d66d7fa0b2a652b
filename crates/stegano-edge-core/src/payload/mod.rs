//! Caller-level conventions layered above the LSB codec: optional encryption,
//! optional length framing and text decoding.

mod codec;
mod crypted;
mod length_header;
pub mod text;

pub use codec::*;
pub use crypted::*;
pub use length_header::*;

use crate::secret::Secret;

/// the payload codec for an optional password, encryption is only used with a password
pub fn codec_for(password: Option<&Secret>) -> Box<dyn PayloadCodec> {
    match password {
        Some(password) => Box::new(CryptedPayloadCodec::new(
            Box::new(PlainPayloadCodec),
            password.clone(),
        )),
        None => Box::new(PlainPayloadCodec),
    }
}
