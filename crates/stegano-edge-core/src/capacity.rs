//! Capacity of a carrier image and the check that runs before any sample is touched.

use log::debug;

use crate::bit_packer::BitWidth;
use crate::error::SteganoError;
use crate::result::Result;

/// Number of carrier sites and the bits each one holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub sites: usize,
    pub bit_width: BitWidth,
}

impl Capacity {
    pub fn new(sites: usize, bit_width: BitWidth) -> Self {
        Self { sites, bit_width }
    }

    /// maximum payload length in bits
    #[inline]
    pub fn bits(&self) -> usize {
        self.sites * self.bit_width.bits() as usize
    }

    /// fails with [`SteganoError::InsufficientCapacity`] if `required_bits` do not fit
    pub fn validate(&self, required_bits: usize) -> Result<()> {
        validate(self.bits(), required_bits)
    }
}

/// fails with [`SteganoError::InsufficientCapacity`] if `required` exceeds `capacity_bits`
pub fn validate(capacity_bits: usize, required: usize) -> Result<()> {
    debug!("Validating {required} required bits against a capacity of {capacity_bits} bits");
    if required > capacity_bits {
        return Err(SteganoError::InsufficientCapacity {
            required,
            available: capacity_bits,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_multiply_sites_by_bit_width() {
        assert_eq!(Capacity::new(30, BitWidth::ONE).bits(), 30);
        assert_eq!(Capacity::new(30, BitWidth::new(3).unwrap()).bits(), 90);
    }

    #[test]
    fn should_accept_payloads_up_to_the_capacity() {
        let capacity = Capacity::new(30, BitWidth::ONE);

        assert!(capacity.validate(0).is_ok());
        assert!(capacity.validate(30).is_ok());
    }

    #[test]
    fn should_reject_payloads_beyond_the_capacity() {
        match Capacity::new(30, BitWidth::ONE).validate(31) {
            Err(SteganoError::InsufficientCapacity {
                required: 31,
                available: 30,
            }) => (),
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }
}
