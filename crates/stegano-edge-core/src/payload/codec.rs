use std::io::Read;

use crate::result::Result;

pub trait PayloadEncoder {
    fn encode(&self, content: &mut dyn Read) -> Result<Vec<u8>>;

    /// number of bytes [`PayloadEncoder::encode`] produces for `content_len` input bytes
    fn encoded_size(&self, content_len: usize) -> usize {
        content_len
    }
}

pub trait PayloadDecoder {
    fn decode(&self, content: &mut dyn Read) -> Result<Vec<u8>>;
}

pub trait PayloadCodec: PayloadEncoder + PayloadDecoder {}

/// Passes the payload through unchanged
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainPayloadCodec;

impl PayloadEncoder for PlainPayloadCodec {
    fn encode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        content.read_to_end(&mut buffer)?;

        Ok(buffer)
    }
}

impl PayloadDecoder for PlainPayloadCodec {
    fn decode(&self, content: &mut dyn Read) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        content.read_to_end(&mut buffer)?;

        Ok(buffer)
    }
}

impl PayloadCodec for PlainPayloadCodec {}
