use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::bit_packer::{self, Bitstream};
use crate::codec::LsbCodec;
use crate::media::load_image;
use crate::payload::{codec_for, extract_framed, text};
use crate::secret::Secret;
use crate::sites::SelectorConfig;
use crate::{Result, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Option<Secret>,
    selector: SelectorConfig,
    total_bits: Option<usize>,
    length_header: bool,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Must be the very same selector configuration used for hiding
    pub fn using_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    /// Number of bits to unveil, as reported by hiding
    pub fn with_total_bits(mut self, total_bits: usize) -> Self {
        self.total_bits = Some(total_bits);
        self
    }

    /// Reads the payload length from the image instead of `total_bits`
    pub fn with_length_header(mut self, length_header: bool) -> Self {
        self.length_header = length_header;
        self
    }

    /// Set the password used for decrypting the data
    /// If `None` is passed, no password will be used, leads to no de-/encryption used
    pub fn using_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().into());
        self
    }

    /// The unveiled data is written to this file too
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the unveiled data
    pub fn execute(self) -> Result<Vec<u8>> {
        let bits = self.unveil_bits()?;
        let data = self.open(bit_packer::unpack(bits)?)?;
        self.write_output(&data)?;

        Ok(data)
    }

    /// Execute the unveil process and read the unveiled data as UTF-8 text
    ///
    /// Without password trailing bits that do not form a whole byte are dropped.
    pub fn execute_text(self) -> Result<String> {
        let bits = self.unveil_bits()?;
        let text = if self.password.is_some() {
            text::decode_bytes(self.open(bit_packer::unpack(bits)?)?)?
        } else {
            text::decode(&bits)?
        };
        self.write_output(text.as_bytes())?;

        Ok(text)
    }

    fn unveil_bits(&self) -> Result<Bitstream> {
        let Some(secret_image) = &self.secret_image else {
            return Err(SteganoError::CarrierNotSet);
        };
        if !self.length_header && self.total_bits.is_none() {
            return Err(SteganoError::MissingTotalBits);
        }

        let image = load_image(secret_image)?;
        let codec = LsbCodec::from_config(&self.selector);
        debug!("Unveiling from {secret_image:?} with {:?}", self.selector);

        match self.total_bits {
            _ if self.length_header => Ok(bit_packer::pack(&extract_framed(&codec, &image)?)),
            Some(total_bits) => codec.extract_bits(&image, total_bits),
            None => Err(SteganoError::MissingTotalBits),
        }
    }

    fn open(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        codec_for(self.password.as_ref()).decode(&mut data.as_slice())
    }

    fn write_output(&self, data: &[u8]) -> Result<()> {
        let Some(output_file) = &self.output_file else {
            return Ok(());
        };

        let mut target_file = File::create(output_file).map_err(|source| {
            error!("Error creating file {output_file:?}: {source}");
            SteganoError::WriteError { source }
        })?;
        target_file
            .write_all(data)
            .map_err(|source| SteganoError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_packer::BitWidth;
    use crate::media::Persist;
    use crate::test_utils::prepare_gradient_image;
    use tempfile::{tempdir, TempDir};

    fn hide(temp_dir: &TempDir, message: &str, password: Option<&str>) -> (PathBuf, usize) {
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        prepare_gradient_image(32, 32).save_as(&carrier).unwrap();
        let report = crate::api::hide::prepare()
            .with_message(message)
            .use_password(password)
            .using_selector(permuted())
            .with_image(&carrier)
            .with_output(&secret)
            .execute()
            .unwrap();

        (secret, report.total_bits)
    }

    fn permuted() -> SelectorConfig {
        SelectorConfig::Permuted {
            key: "K1".into(),
            bit_width: BitWidth::new(2).unwrap(),
        }
    }

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let (secret, total_bits) = hide(&temp_dir, "Hello World", Some("Secret42"));
        let output = temp_dir.path().join("secret-message.txt");

        let message = prepare()
            .from_secret_image(&secret)
            .using_selector(permuted())
            .with_total_bits(total_bits)
            .using_password(Some("Secret42"))
            .into_output_file(&output)
            .execute_text()
            .expect("Failed to unveil message from image");

        assert_eq!(message, "Hello World");
        assert_eq!(std::fs::read_to_string(output).unwrap(), "Hello World");
    }

    #[test]
    fn should_fail_authentication_with_a_wrong_password() {
        let temp_dir = tempdir().unwrap();
        let (secret, total_bits) = hide(&temp_dir, "Hello World", Some("Secret42"));

        let result = prepare()
            .from_secret_image(&secret)
            .using_selector(permuted())
            .with_total_bits(total_bits)
            .using_password(Some("Secret43"))
            .execute();

        assert!(matches!(result, Err(SteganoError::AuthenticationError(_))));
    }

    #[test]
    fn should_drop_trailing_bits_in_text_mode() {
        let temp_dir = tempdir().unwrap();
        let (secret, total_bits) = hide(&temp_dir, "Hello World", None);

        let message = prepare()
            .from_secret_image(&secret)
            .using_selector(permuted())
            .with_total_bits(total_bits + 5)
            .using_password(None::<&str>)
            .execute_text()
            .unwrap();

        assert!(message.starts_with("Hello World"), "{message}");
        assert_eq!(message.len(), 11);
    }

    #[test]
    fn should_require_total_bits_or_a_length_header() {
        let result = prepare()
            .from_secret_image("secret.png")
            .using_selector(permuted())
            .execute();

        assert!(matches!(result, Err(SteganoError::MissingTotalBits)));
        assert!(matches!(
            prepare().with_total_bits(8).execute(),
            Err(SteganoError::CarrierNotSet)
        ));
    }
}
