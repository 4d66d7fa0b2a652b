//! Hides a bitstream in the low bits of the selected carrier sites and unveils it again.
//!
//! Hiding validates the capacity before the first sample is written, a failing
//! hide leaves the image untouched. Unveiling has no integrity check of its own,
//! a wrong selector configuration yields wrong bytes, not an error.

use image::RgbImage;
use log::debug;

use crate::bit_packer::{self, Bitstream};
use crate::capacity::Capacity;
use crate::error::SteganoError;
use crate::lsb::{HideAlgorithm, LsbAlgorithm, UnveilAlgorithm};
use crate::result::Result;
use crate::sites::{Selector, SelectorConfig, SiteSelector};

/// LSB codec over the sites of a [`SiteSelector`]
#[derive(Debug, Clone)]
pub struct LsbCodec<S = Selector> {
    selector: S,
}

impl LsbCodec {
    pub fn from_config(config: &SelectorConfig) -> Self {
        Self::new(config.build())
    }
}

impl<S: SiteSelector> LsbCodec<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// carrier sites of `image` and the bits each of them holds
    pub fn capacity(&self, image: &RgbImage) -> Capacity {
        Capacity::new(self.selector.order(image).len(), self.selector.bit_width())
    }

    /// hides `payload` in `image`, returns `total_bits` that unveiling needs
    pub fn embed(&self, image: &mut RgbImage, payload: &[u8]) -> Result<usize> {
        self.embed_bits(image, &bit_packer::pack(payload))
    }

    /// hides an arbitrary long bitstream in `image`, returns its length in bits
    pub fn embed_bits(&self, image: &mut RgbImage, bitstream: &Bitstream) -> Result<usize> {
        let width = self.selector.bit_width();
        let sites = self.selector.order(image);
        Capacity::new(sites.len(), width).validate(bitstream.len())?;

        let symbols = bit_packer::chunk(bitstream, width)?;
        let lsb = LsbAlgorithm::new(width);
        debug!(
            "Hiding {} bits as {} symbols of width {width} in {} sites",
            bitstream.len(),
            symbols.len(),
            sites.len()
        );
        for (site, symbol) in sites.iter().zip(symbols) {
            let sample = &mut image.get_pixel_mut(site.col, site.row).0[site.channel as usize];
            *sample = lsb.encode(*sample, symbol);
        }

        Ok(bitstream.len())
    }

    /// unveils `total_bits` from `image` and groups them into bytes
    pub fn extract(&self, image: &RgbImage, total_bits: usize) -> Result<Vec<u8>> {
        bit_packer::unpack(self.extract_bits(image, total_bits)?)
    }

    /// unveils exactly `total_bits` from `image`
    pub fn extract_bits(&self, image: &RgbImage, total_bits: usize) -> Result<Bitstream> {
        let width = self.selector.bit_width();
        let sites = self.selector.order(image);
        let symbol_count = width.symbols_for(total_bits);
        if sites.len() < symbol_count {
            return Err(SteganoError::InsufficientSites {
                required: symbol_count,
                available: sites.len(),
            });
        }

        let lsb = LsbAlgorithm::new(width);
        let symbols: Vec<u8> = sites
            .iter()
            .take(symbol_count)
            .map(|site| lsb.decode(image.get_pixel(site.col, site.row).0[site.channel as usize]))
            .collect();
        debug!("Unveiled {symbol_count} symbols of width {width}");

        bit_packer::unchunk(&symbols, width, total_bits)
    }
}

/// hides `payload` in `image` along the sites described by `config`, returns `total_bits`
pub fn embed(image: &mut RgbImage, payload: &[u8], config: &SelectorConfig) -> Result<usize> {
    LsbCodec::from_config(config).embed(image, payload)
}

/// unveils `total_bits` from `image` along the sites described by `config`
pub fn extract(image: &RgbImage, config: &SelectorConfig, total_bits: usize) -> Result<Vec<u8>> {
    LsbCodec::from_config(config).extract(image, total_bits)
}
