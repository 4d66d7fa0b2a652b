//! # Stegano Edge Core API
//!
//! Hides data in the low bits of an RGB image along a sequence of carrier sites.
//! The site sequence is picked by a [`SiteSelector`]:
//! - [`SequentialSelector`] walks all samples in raster order
//! - [`EdgeSelector`] walks only pixels on Canny edges, recomputed on unveil
//! - [`PermutedSelector`] walks all samples in a keyed pseudo-random order and may use up to 8 low bits
//!
//! Neither the selector configuration nor the payload length are stored in the image,
//! a caller keeps them out-of-band or opts into a [`LengthHeader`][header].
//!
//! # Usage Examples
//!
//! ## Hide bytes in an in-memory image
//!
//! ```rust
//! use stegano_edge_core::{codec, SelectorConfig};
//!
//! let mut image = image::RgbImage::new(16, 16);
//! let config = SelectorConfig::Sequential;
//!
//! let total_bits = codec::embed(&mut image, b"Hello", &config).expect("Failed to hide");
//! let unveiled = codec::extract(&image, &config, total_bits).expect("Failed to unveil");
//!
//! assert_eq!(unveiled, b"Hello");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use stegano_edge_core::{BitWidth, Persist, SelectorConfig};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier-image.png");
//! image::RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, (x ^ y) as u8]))
//!     .save_as(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! let selector = SelectorConfig::Permuted {
//!     key: "K1".into(),
//!     bit_width: BitWidth::new(2).expect("Invalid bit width"),
//! };
//!
//! let report = stegano_edge_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_password("SuperSecret42") // will encrypt the message with this password
//!     .using_selector(selector.clone())
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegano_edge_core::api::unveil::prepare()
//!     .from_secret_image(temp_dir.path().join("image-with-secret.png"))
//!     .using_selector(selector)
//!     .with_total_bits(report.total_bits)
//!     .using_password(Some("SuperSecret42"))
//!     .execute_text()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [header]: ./payload/struct.LengthHeader.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bit_packer;
pub mod capacity;
pub mod codec;
pub mod error;
pub mod lsb;
pub mod media;
pub mod payload;
pub mod result;
pub mod secret;
pub mod sites;

pub use crate::bit_packer::{BitWidth, Bitstream};
pub use crate::capacity::Capacity;
pub use crate::codec::LsbCodec;
pub use crate::error::SteganoError;
pub use crate::media::{load_image, Persist};
pub use crate::result::Result;
pub use crate::secret::Secret;
pub use crate::sites::{
    CarrierAddress, EdgeSelector, EdgeThresholds, PermutedSelector, Selector, SelectorConfig,
    SequentialSelector, SiteSelector, SiteSequence,
};
