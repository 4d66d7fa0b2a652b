//! Keyed pseudo-random carrier order.
//!
//! The sites are spread over the whole image by a Fisher-Yates shuffle of all
//! sample indices. The generator is seeded from the secret key, so unveiling
//! with the same key walks the very same order.

use fastrand::Rng;
use image::RgbImage;
use log::debug;

use super::{element_count, CarrierAddress, SiteSelector, SiteSequence};
use crate::bit_packer::BitWidth;

/// Pseudo-random permutation of `0..length`
///
/// The permutation is deterministic given the same seed. Every call to
/// [`Permutation::from_seed`] owns its own generator, concurrent callers never
/// share generator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// Shuffled indices: indices[i] = the element visited at step i.
    indices: Vec<usize>,
}

impl Permutation {
    pub fn from_seed(seed: u64, length: usize) -> Self {
        let mut rng = Rng::with_seed(seed);
        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates, drawing u64 so 32 and 64 bit targets shuffle identically
        for i in (1..length).rev() {
            let j = rng.u64(0..=i as u64) as usize;
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    #[inline]
    pub fn shuffled(&self, step: usize) -> usize {
        self.indices[step]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Visits all samples in a keyed pseudo-random order and carries `bit_width` bits per sample
#[derive(Clone, PartialEq, Eq)]
pub struct PermutedSelector {
    seed: u64,
    bit_width: BitWidth,
}

impl PermutedSelector {
    /// uses an explicit generator seed
    pub fn new(seed: u64, bit_width: BitWidth) -> Self {
        Self { seed, bit_width }
    }

    /// derives the generator seed from a secret key
    pub fn from_key(key: &[u8], bit_width: BitWidth) -> Self {
        Self::new(stegano_edge_seasmoke::derive_seed(key), bit_width)
    }
}

impl std::fmt::Debug for PermutedSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutedSelector")
            .field("seed", &"***")
            .field("bit_width", &self.bit_width)
            .finish()
    }
}

impl SiteSelector for PermutedSelector {
    fn order(&self, image: &RgbImage) -> SiteSequence {
        let width = image.width();
        let length = element_count(image);
        debug!("Permuting {length} carrier samples at bit width {}", self.bit_width);

        Permutation::from_seed(self.seed, length)
            .iter()
            .map(|i| CarrierAddress::from_index(i, width))
            .collect()
    }

    fn bit_width(&self) -> BitWidth {
        self.bit_width
    }
}
