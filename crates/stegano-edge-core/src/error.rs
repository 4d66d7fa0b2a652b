use std::string::FromUtf8Error;
use thiserror::Error;

pub use stegano_edge_seasmoke::SeasmokeError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a bit width outside of `1..=8`
    #[error("Invalid bit width {0}, only 1 to 8 low bits per carrier are supported")]
    InvalidBitWidth(u8),

    /// Represents a payload that does not fit into the selected carriers.
    /// The carrier image stays untouched when this is raised.
    #[error("Capacity Error: {required} bits are required, but the carrier image offers only {available} bits")]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents an image that has fewer usable sites than needed to read `total_bits`.
    /// Usually a parameter mismatch between hide and unveil, or a truncated image.
    #[error("Insufficient sites: {required} carrier sites are required, but only {available} were found")]
    InsufficientSites { required: usize, available: usize },

    /// Represents a recovered bitstream that is not byte aligned
    #[error("Malformed bitstream: {0} bits cannot be grouped into bytes")]
    MalformedBitstream(usize),

    /// Represents a length header that points beyond the carrier capacity
    #[error("Invalid length header: {declared} bytes declared, but the carrier holds at most {available} bytes")]
    InvalidLengthHeader { declared: usize, available: usize },

    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a target file format that would destroy the hidden low bits, like JPEG
    #[error("Target format is lossy, a stego image can only be saved as PNG")]
    LossyTargetFormat,

    /// Represents the error of invalid UTF-8 text data found inside of a text only message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(SeasmokeError),

    /// Represents a failed decryption, wrong password or tampered cipher data
    #[error("Authentication error")]
    AuthenticationError(SeasmokeError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Neither total bits nor a length header were given")]
    MissingTotalBits,
}
