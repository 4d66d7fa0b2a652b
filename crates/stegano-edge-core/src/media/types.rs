use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

pub use image::RgbImage;
use log::error;

use crate::error::SteganoError;
use crate::result::Result;

use super::Persist;

/// extension of the file, lower cased
fn extension_of(f: &Path) -> Option<String> {
    f.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// loads a carrier image, PNG and JPEG covers are accepted, alpha is dropped
pub fn load_image(f: &Path) -> Result<RgbImage> {
    match extension_of(f).as_deref() {
        Some("png" | "jpg" | "jpeg") => Ok(image::open(f)
            .map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                SteganoError::InvalidImageMedia
            })?
            .to_rgb8()),
        _ => Err(SteganoError::UnsupportedMedia),
    }
}

/// writes the image as PNG, the only lossless format a stego image may take
pub fn save_to_writer<W: Write + Seek>(image: &RgbImage, mut writer: W) -> Result<()> {
    image
        .write_to(&mut writer, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
}

impl Persist for RgbImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        if extension_of(file).as_deref() != Some("png") {
            error!("Refusing to save a stego image as {file:?}, only PNG is lossless");
            return Err(SteganoError::LossyTargetFormat);
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        save_to_writer(self, f)
    }
}
