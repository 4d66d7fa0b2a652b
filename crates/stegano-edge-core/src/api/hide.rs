use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::bit_packer::BitWidth;
use crate::codec::LsbCodec;
use crate::media::{load_image, Persist};
use crate::payload::{codec_for, LengthHeader};
use crate::secret::Secret;
use crate::sites::SelectorConfig;
use crate::{Result, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum PayloadSource {
    Text(String),
    Data(Vec<u8>),
    File(PathBuf),
}

impl PayloadSource {
    fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            PayloadSource::Text(text) => Ok(text.into_bytes()),
            PayloadSource::Data(data) => Ok(data),
            PayloadSource::File(file) => fs::read(&file).map_err(|source| {
                error!("Error reading payload file {file:?}: {source}");
                SteganoError::ReadError { source }
            }),
        }
    }
}

/// What a caller needs to keep, next to the selector configuration, to unveil the payload again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideReport {
    /// number of hidden bits, including encryption overhead and length header
    pub total_bits: usize,
    pub bit_width: BitWidth,
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<PayloadSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Option<Secret>,
    selector: SelectorConfig,
    length_header: bool,
}

impl HideApi {
    /// Hides the given text, replaces any payload set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(PayloadSource::Text(message.to_string()));
        self
    }

    /// Hides the given bytes, replaces any payload set before
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(PayloadSource::Data(data.into()));
        self
    }

    /// Hides the content of the given file, replaces any payload set before
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.payload = Some(PayloadSource::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The stego image target, must be a PNG file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no de-/encryption used
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().into());
        self
    }

    pub fn using_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    /// Stores the payload length inside the image, unveiling then needs no `total_bits`
    pub fn with_length_header(mut self, length_header: bool) -> Self {
        self.length_header = length_header;
        self
    }

    pub fn execute(self) -> Result<HideReport> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(SteganoError::MissingMessage);
        };

        let payload = payload.into_bytes()?;
        let mut data = codec_for(self.password.as_ref()).encode(&mut payload.as_slice())?;
        if self.length_header {
            data = LengthHeader::frame(&data)?;
        }

        let mut carrier = load_image(&image)?;
        let codec = LsbCodec::from_config(&self.selector);
        let total_bits = codec.embed(&mut carrier, &data)?;
        carrier.save_as(&output)?;
        debug!(
            "Hid {total_bits} bits with {:?} into {output:?}",
            self.selector
        );

        Ok(HideReport {
            total_bits,
            bit_width: self.selector.bit_width(),
        })
    }
}
