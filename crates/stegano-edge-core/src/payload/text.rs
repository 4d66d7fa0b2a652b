//! Text mode, unveiled bits are read as UTF-8.

use crate::bit_packer::{self, Bitstream};
use crate::result::Result;

/// drops trailing bits that do not form a whole byte and decodes the rest as UTF-8
pub fn decode(bitstream: &Bitstream) -> Result<String> {
    let whole_bits = bitstream.len() - bitstream.len() % 8;
    let bytes = bit_packer::unpack(Bitstream::from_bits(
        bitstream.as_bytes().to_vec(),
        whole_bits,
    )?)?;

    decode_bytes(bytes)
}

/// decodes the bytes as UTF-8
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SteganoError;

    #[test]
    fn should_truncate_to_whole_bytes() {
        let bits = Bitstream::from_bits(b"Hi!".to_vec(), 20).unwrap();

        assert_eq!(decode(&bits).unwrap(), "Hi");
    }

    #[test]
    fn should_reject_invalid_utf8() {
        let bits = bit_packer::pack(&[0xc3, 0x28]);

        assert!(matches!(decode(&bits), Err(SteganoError::InvalidTextData(_))));
    }
}
