//! Optional framing that stores the payload length inside the image.
//!
//! The frame is a big-endian `u32` byte count followed by the payload. Unveiling
//! reads the 32 header bits first and then exactly the framed payload, so no
//! `total_bits` has to travel next to the selector configuration.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use image::RgbImage;
use log::{debug, error};

use crate::codec::LsbCodec;
use crate::error::SteganoError;
use crate::result::Result;
use crate::sites::SiteSelector;

/// Big-endian `u32` byte count in front of the payload
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthHeader;

impl LengthHeader {
    pub const BYTES: usize = 4;
    pub const BITS: usize = Self::BYTES * 8;

    /// prepends the length of `payload`
    pub fn frame(payload: &[u8]) -> Result<Vec<u8>> {
        let declared =
            u32::try_from(payload.len()).map_err(|_| SteganoError::InvalidLengthHeader {
                declared: payload.len(),
                available: u32::MAX as usize,
            })?;

        let mut buffer = Vec::with_capacity(Self::BYTES + payload.len());
        buffer.write_u32::<BigEndian>(declared)?;
        buffer.extend_from_slice(payload);

        Ok(buffer)
    }

    /// the payload length stored in the first 4 bytes of `header`
    pub fn declared_len(header: &[u8]) -> Result<usize> {
        Ok(Cursor::new(header).read_u32::<BigEndian>()? as usize)
    }

    /// fails with [`SteganoError::InvalidLengthHeader`] if `declared` bytes plus the header exceed `capacity_bits`
    pub fn validate(declared: usize, capacity_bits: usize) -> Result<()> {
        let available = capacity_bits.saturating_sub(Self::BITS) / 8;
        if declared > available {
            error!("Length header declares {declared} bytes, the carrier holds at most {available}");
            return Err(SteganoError::InvalidLengthHeader {
                declared,
                available,
            });
        }

        Ok(())
    }

    /// removes the header from a framed payload and truncates to the declared length
    pub fn unframe(mut framed: Vec<u8>) -> Result<Vec<u8>> {
        let declared = Self::declared_len(&framed)?;
        let available = framed.len() - Self::BYTES;
        if declared > available {
            return Err(SteganoError::InvalidLengthHeader {
                declared,
                available,
            });
        }
        framed.truncate(Self::BYTES + declared);
        framed.drain(..Self::BYTES);

        Ok(framed)
    }
}

/// unveils a length framed payload, the header first and then exactly the declared bytes
pub fn extract_framed<S: SiteSelector>(codec: &LsbCodec<S>, image: &RgbImage) -> Result<Vec<u8>> {
    let header = codec.extract(image, LengthHeader::BITS)?;
    let declared = LengthHeader::declared_len(&header)?;
    LengthHeader::validate(declared, codec.capacity(image).bits())?;
    debug!("Length header declares {declared} bytes");

    let framed = codec.extract(image, LengthHeader::BITS + declared * 8)?;
    LengthHeader::unframe(framed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::SequentialSelector;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_prepend_a_big_endian_length() {
        let framed = LengthHeader::frame(b"Hello").unwrap();

        assert_eq!(framed, b"\0\0\0\x05Hello".to_vec());
        assert_eq!(LengthHeader::declared_len(&framed).unwrap(), 5);
        assert_eq!(LengthHeader::unframe(framed).unwrap(), b"Hello".to_vec());
    }

    #[test]
    fn should_reject_headers_beyond_the_data() {
        let result = LengthHeader::unframe(b"\0\0\0\x09Hello".to_vec());

        assert!(matches!(
            result,
            Err(SteganoError::InvalidLengthHeader {
                declared: 9,
                available: 5
            })
        ));
        assert!(LengthHeader::unframe(b"\0\0".to_vec()).is_err());
    }

    #[test]
    fn should_unveil_a_framed_payload_without_total_bits() {
        let mut image = prepare_gradient_image(8, 8);
        let codec = LsbCodec::new(SequentialSelector);
        codec
            .embed(&mut image, &LengthHeader::frame(b"framed").unwrap())
            .unwrap();

        assert_eq!(extract_framed(&codec, &image).unwrap(), b"framed".to_vec());
    }

    #[test]
    fn should_reject_a_garbage_header_beyond_the_capacity() {
        // 8x8x3 = 192 bits, so at most 20 bytes behind the header
        let mut image = prepare_gradient_image(8, 8);
        let codec = LsbCodec::new(SequentialSelector);
        codec.embed(&mut image, &[0, 0, 0, 21]).unwrap();

        assert!(matches!(
            extract_framed(&codec, &image),
            Err(SteganoError::InvalidLengthHeader {
                declared: 21,
                available: 20
            })
        ));
    }
}
