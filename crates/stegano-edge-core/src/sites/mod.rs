//! Carrier site selection.
//!
//! A [`SiteSelector`] turns an image into an ordered [`SiteSequence`] of
//! `(row, col, channel)` addresses. Hiding and unveiling walk the very same
//! sequence, so every selector must be deterministic for identical input.

mod edge;
mod permuted;
mod sequential;

use std::fmt::{self, Debug, Formatter};

use enum_dispatch::enum_dispatch;
use image::RgbImage;

pub use edge::{EdgeSelector, EdgeThresholds};
pub use permuted::{Permutation, PermutedSelector};
pub use sequential::SequentialSelector;

use crate::bit_packer::BitWidth;
use crate::secret::Secret;

/// number of color channels of every carrier pixel, alpha is never used
pub const CHANNELS: u8 = 3;

/// Address of one carrier sample inside an RGB image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarrierAddress {
    pub row: u32,
    pub col: u32,
    pub channel: u8,
}

impl CarrierAddress {
    pub fn new(row: u32, col: u32, channel: u8) -> Self {
        Self { row, col, channel }
    }

    /// maps a flat element index of a `height x width x 3` buffer back to its address
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        let pixel = index / CHANNELS as usize;
        Self {
            row: (pixel / width as usize) as u32,
            col: (pixel % width as usize) as u32,
            channel: (index % CHANNELS as usize) as u8,
        }
    }

    /// flat element index within a `height x width x 3` buffer
    #[inline]
    pub fn index(&self, width: u32) -> usize {
        (self.row as usize * width as usize + self.col as usize) * CHANNELS as usize
            + self.channel as usize
    }
}

/// Ordered carrier addresses, used identically by hide and unveil
pub type SiteSequence = Vec<CarrierAddress>;

/// number of samples in an image, `height x width x 3`
#[inline]
pub fn element_count(image: &RgbImage) -> usize {
    image.width() as usize * image.height() as usize * CHANNELS as usize
}

/// Produces the carrier sites of an image
#[enum_dispatch]
pub trait SiteSelector {
    /// all usable carrier sites of `image` in embedding order
    fn order(&self, image: &RgbImage) -> SiteSequence;

    /// low bits per site this selector writes into
    fn bit_width(&self) -> BitWidth {
        BitWidth::ONE
    }
}

/// The closed set of selectors, statically dispatched
#[enum_dispatch(SiteSelector)]
#[derive(Debug, Clone)]
pub enum Selector {
    Sequential(SequentialSelector),
    Edge(EdgeSelector),
    Permuted(PermutedSelector),
}

/// Everything that determines a site sequence.
/// Must be transported out-of-band from hide to unveil, together with `total_bits`.
#[derive(Clone, PartialEq, Eq)]
pub enum SelectorConfig {
    Sequential,
    Edge(EdgeThresholds),
    Permuted { key: Secret, bit_width: BitWidth },
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::Edge(EdgeThresholds::default())
    }
}

impl SelectorConfig {
    pub fn build(&self) -> Selector {
        match self {
            SelectorConfig::Sequential => SequentialSelector.into(),
            SelectorConfig::Edge(thresholds) => EdgeSelector::new(*thresholds).into(),
            SelectorConfig::Permuted { key, bit_width } => {
                PermutedSelector::from_key(key.expose().as_bytes(), *bit_width).into()
            }
        }
    }

    pub fn bit_width(&self) -> BitWidth {
        match self {
            SelectorConfig::Permuted { bit_width, .. } => *bit_width,
            _ => BitWidth::ONE,
        }
    }
}

impl Debug for SelectorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectorConfig::Sequential => write!(f, "Sequential"),
            SelectorConfig::Edge(t) => write!(f, "Edge(low={}, high={})", t.low(), t.high()),
            SelectorConfig::Permuted { key, bit_width } => {
                write!(f, "Permuted(key={key:?}, bit_width={bit_width})")
            }
        }
    }
}
