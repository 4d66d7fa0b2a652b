use image::RgbImage;
use log::debug;

use super::{CarrierAddress, SiteSelector, SiteSequence, CHANNELS};
use crate::bit_packer::BitWidth;
use crate::media::edges::{luma_without_low_bits, Canny, EdgeDetector, EdgeMask};

/// Hysteresis thresholds of the edge detection, on the L1 gradient magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeThresholds {
    low: u32,
    high: u32,
}

impl EdgeThresholds {
    /// swaps the values if `low` is bigger than `high`
    pub fn new(low: u32, high: u32) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
        }
    }

    #[inline]
    pub fn low(&self) -> u32 {
        self.low
    }

    #[inline]
    pub fn high(&self) -> u32 {
        self.high
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self::new(50, 150)
    }
}

/// Uses only pixels on detected edges, in row major order, each with all 3 channels.
/// Carries one bit per channel.
///
/// The edge mask is never stored, unveiling detects it again on the stego image.
/// Detection runs on a luma projection that ignores the carrier bit, so hiding data
/// can not move the edges, re-encoding the image with a lossy codec can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSelector<D = Canny> {
    thresholds: EdgeThresholds,
    detector: D,
}

impl EdgeSelector {
    pub fn new(thresholds: EdgeThresholds) -> Self {
        Self::with_detector(thresholds, Canny)
    }
}

impl Default for EdgeSelector {
    fn default() -> Self {
        Self::new(EdgeThresholds::default())
    }
}

impl<D: EdgeDetector> EdgeSelector<D> {
    pub fn with_detector(thresholds: EdgeThresholds, detector: D) -> Self {
        Self {
            thresholds,
            detector,
        }
    }

    pub fn thresholds(&self) -> EdgeThresholds {
        self.thresholds
    }

    /// the binary edge mask of `image`, non zero means edge
    pub fn edge_mask(&self, image: &RgbImage) -> EdgeMask {
        let gray = luma_without_low_bits(image, BitWidth::ONE);
        self.detector.detect(&gray, self.thresholds)
    }
}

impl<D: EdgeDetector> SiteSelector for EdgeSelector<D> {
    fn order(&self, image: &RgbImage) -> SiteSequence {
        let mask = self.edge_mask(image);
        let sites: SiteSequence = mask
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] != 0)
            .flat_map(|(col, row, _)| {
                (0..CHANNELS).map(move |channel| CarrierAddress::new(row, col, channel))
            })
            .collect();
        debug!(
            "Found {} edge pixels with thresholds {:?}",
            sites.len() / CHANNELS as usize,
            self.thresholds
        );

        sites
    }
}
