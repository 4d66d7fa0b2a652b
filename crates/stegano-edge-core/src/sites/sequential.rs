use image::RgbImage;

use super::{element_count, CarrierAddress, SiteSelector, SiteSequence};

/// Raster scan over all pixels, row by row, and for each pixel the channels `0, 1, 2`.
/// Carries one bit per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSelector;

impl SiteSelector for SequentialSelector {
    fn order(&self, image: &RgbImage) -> SiteSequence {
        let width = image.width();
        (0..element_count(image))
            .map(|i| CarrierAddress::from_index(i, width))
            .collect()
    }
}
