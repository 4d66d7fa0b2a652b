use crate::bit_packer::BitWidth;

/// generic hiding algorithm
pub trait HideAlgorithm<T> {
    /// encodes one symbol onto a carrier T
    fn encode(&self, carrier: T, symbol: u8) -> T;
}

/// generic unveil algorithm
pub trait UnveilAlgorithm<T> {
    fn decode(&self, carrier: T) -> u8;
}

/// Replaces the low `n` bits of a sample, all higher bits stay untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsbAlgorithm {
    width: BitWidth,
}

impl LsbAlgorithm {
    pub fn new(width: BitWidth) -> Self {
        Self { width }
    }
}

impl Default for LsbAlgorithm {
    fn default() -> Self {
        Self::new(BitWidth::ONE)
    }
}

impl HideAlgorithm<u8> for LsbAlgorithm {
    #[inline(always)]
    fn encode(&self, carrier: u8, symbol: u8) -> u8 {
        let mask = self.width.low_mask();
        (carrier & !mask) | (symbol & mask)
    }
}

impl UnveilAlgorithm<u8> for LsbAlgorithm {
    #[inline(always)]
    fn decode(&self, carrier: u8) -> u8 {
        carrier & self.width.low_mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_only_the_lowest_bit() {
        let lsb = LsbAlgorithm::default();

        assert_eq!(lsb.encode(0b1010_1010, 1), 0b1010_1011);
        assert_eq!(lsb.encode(0b1010_1011, 0), 0b1010_1010);
        assert_eq!(lsb.decode(0b1111_1110), 0);
    }

    #[test]
    fn should_replace_the_low_n_bits() {
        let lsb = LsbAlgorithm::new(BitWidth::new(3).unwrap());

        assert_eq!(lsb.encode(0b1111_1111, 0b010), 0b1111_1010);
        assert_eq!(lsb.decode(0b1111_1010), 0b010);
    }

    #[test]
    fn should_replace_the_whole_sample_at_width_8() {
        let lsb = LsbAlgorithm::new(BitWidth::new(8).unwrap());

        assert_eq!(lsb.encode(0x5a, 0xc3), 0xc3);
        assert_eq!(lsb.decode(0xc3), 0xc3);
    }
}
