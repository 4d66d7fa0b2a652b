//! Converts byte payloads to and from fixed width bit groups (symbols).
//!
//! Bits are ordered most significant first, so the byte `0b1011_0010` becomes the
//! bitstream `1,0,1,1,0,0,1,0`. A final group shorter than the bit width is padded
//! with zero bits on the right, those padding bits are dropped again by
//! [`unchunk`] because it is told the exact `total_bits`.

use std::fmt::{self, Display, Formatter};
use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::SteganoError;
use crate::result::Result;

/// Number of low order bits of one sample that carry one symbol, always within `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitWidth(u8);

impl BitWidth {
    /// the classic one bit LSB width
    pub const ONE: BitWidth = BitWidth(1);
    pub const MAX_BITS: u8 = 8;

    pub fn new(bits: u8) -> Result<Self> {
        if (1..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(SteganoError::InvalidBitWidth(bits))
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// mask selecting the low `n` bits, `(1 << n) - 1` computed without overflow for `n = 8`
    #[inline]
    pub fn low_mask(self) -> u8 {
        ((1u16 << self.0) - 1) as u8
    }

    /// number of symbols needed to carry `total_bits`, i.e. `ceil(total_bits / n)`
    #[inline]
    pub fn symbols_for(self, total_bits: usize) -> usize {
        total_bits.div_ceil(self.0 as usize)
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = SteganoError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

impl Display for BitWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of bits, backed by bytes.
/// Only the first `bit_len` bits are meaningful, the rest of the last byte is zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitstream {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl Bitstream {
    /// takes the first `bit_len` bits of `bytes`, extra bits are cleared
    ///
    /// Fails with [`SteganoError::MalformedBitstream`] if `bytes` holds less than `bit_len` bits.
    pub fn from_bits(mut bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        if bit_len > bytes.len() * 8 {
            return Err(SteganoError::MalformedBitstream(bit_len));
        }
        bytes.truncate(bit_len.div_ceil(8));
        let spare = bytes.len() * 8 - bit_len;
        if let Some(last) = bytes.last_mut() {
            *last &= u8::MAX << spare;
        }

        Ok(Self { bytes, bit_len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bit_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// the backing bytes, the last one may be partially used
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// iterates over the meaningful bits as `0` or `1`
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.bit_len).map(|i| (self.bytes[i / 8] >> (7 - i % 8)) & 1)
    }
}

/// expands each byte into its 8 bits, most significant bit first
pub fn pack(payload: &[u8]) -> Bitstream {
    Bitstream {
        bytes: payload.to_vec(),
        bit_len: payload.len() * 8,
    }
}

/// partitions the bitstream into symbols of `width` bits, the last one right padded with zeros
pub fn chunk(bitstream: &Bitstream, width: BitWidth) -> Result<Vec<u8>> {
    let n = width.bits() as usize;
    let mut reader = BitReader::endian(Cursor::new(bitstream.as_bytes()), BigEndian);
    let mut symbols = Vec::with_capacity(width.symbols_for(bitstream.len()));
    let mut remaining = bitstream.len();

    while remaining > 0 {
        let take = remaining.min(n);
        let value: u8 = reader.read(take as u32)?;
        symbols.push(value << (n - take));
        remaining -= take;
    }

    Ok(symbols)
}

/// concatenates `width` bit symbols and truncates the result to exactly `total_bits`
///
/// Fails with [`SteganoError::MalformedBitstream`] if the symbols carry less than `total_bits`.
pub fn unchunk(symbols: &[u8], width: BitWidth, total_bits: usize) -> Result<Bitstream> {
    let n = width.bits() as usize;
    if symbols.len() * n < total_bits {
        return Err(SteganoError::MalformedBitstream(symbols.len() * n));
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(total_bits.div_ceil(8)), BigEndian);
    let mut remaining = total_bits;
    for symbol in symbols.iter().map(|s| s & width.low_mask()) {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(n);
        writer.write(take as u32, symbol >> (n - take))?;
        remaining -= take;
    }
    writer.byte_align()?;

    Ok(Bitstream {
        bytes: writer.into_writer(),
        bit_len: total_bits,
    })
}

/// groups the bitstream into bytes
///
/// Fails with [`SteganoError::MalformedBitstream`] if the bit count is not a multiple of 8.
pub fn unpack(bitstream: Bitstream) -> Result<Vec<u8>> {
    if bitstream.len() % 8 != 0 {
        return Err(SteganoError::MalformedBitstream(bitstream.len()));
    }

    Ok(bitstream.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: u8) -> BitWidth {
        BitWidth::new(n).unwrap()
    }

    #[test]
    fn should_reject_bit_widths_outside_of_1_to_8() {
        assert!(matches!(
            BitWidth::new(0),
            Err(SteganoError::InvalidBitWidth(0))
        ));
        assert!(matches!(
            BitWidth::try_from(9),
            Err(SteganoError::InvalidBitWidth(9))
        ));
        assert_eq!(width(8).bits(), 8);
    }

    #[test]
    fn should_compute_low_masks() {
        assert_eq!(width(1).low_mask(), 0b0000_0001);
        assert_eq!(width(3).low_mask(), 0b0000_0111);
        assert_eq!(width(8).low_mask(), 0b1111_1111);
    }

    #[test]
    fn should_pack_most_significant_bit_first() {
        let bits: Vec<u8> = pack(&[0b1011_0010]).bits().collect();

        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn should_chunk_into_symbols_and_pad_the_last_one() {
        // 1011_0010 0110_0001 split into 3 bit groups: 101 100 100 110 000 1(00)
        let bitstream = pack(&[0b1011_0010, 0b0110_0001]);
        let symbols = chunk(&bitstream, width(3)).unwrap();

        assert_eq!(
            symbols,
            vec![0b101, 0b100, 0b100, 0b110, 0b000, 0b100],
            "last symbol must be right padded with zeros"
        );
    }

    #[test]
    fn should_chunk_whole_bytes_at_width_8() {
        let symbols = chunk(&pack(b"Hi"), width(8)).unwrap();

        assert_eq!(symbols, b"Hi".to_vec());
    }

    #[test]
    fn should_drop_padding_when_unchunking() {
        let payload = [0xca, 0xfe, 0x42];
        for n in 1..=8 {
            let bitstream = pack(&payload);
            let symbols = chunk(&bitstream, width(n)).unwrap();
            assert_eq!(symbols.len(), width(n).symbols_for(24));

            let restored = unchunk(&symbols, width(n), bitstream.len()).unwrap();
            assert_eq!(
                unpack(restored).unwrap(),
                payload.to_vec(),
                "payload was not restored at width {n}"
            );
        }
    }

    #[test]
    fn should_fail_unchunking_with_too_few_symbols() {
        assert!(matches!(
            unchunk(&[0b11, 0b01], width(2), 5),
            Err(SteganoError::MalformedBitstream(4))
        ));
    }

    #[test]
    fn should_refuse_to_unpack_non_byte_aligned_bitstreams() {
        let bitstream = unchunk(&[1, 0, 1], width(1), 3).unwrap();

        assert!(matches!(
            unpack(bitstream),
            Err(SteganoError::MalformedBitstream(3))
        ));
    }

    #[test]
    fn should_clear_unused_bits_of_a_partial_bitstream() {
        let bitstream = Bitstream::from_bits(vec![0xff, 0xff], 10).unwrap();

        assert_eq!(bitstream.as_bytes(), &[0xff, 0b1100_0000]);
        assert_eq!(bitstream.len(), 10);
        assert!(Bitstream::from_bits(vec![0xff], 9).is_err());
    }
}
