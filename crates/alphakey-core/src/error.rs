use std::fmt;

use thiserror::Error;

#[derive(Error)]
pub enum AlphaKeyError {
    /// Represents an unsupported carrier media. For example, a GIF or a WAV file
    #[error("Media format is not supported, only PNG and JPEG images are")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an image without a single pixel, nothing can be hidden in there
    #[error("Image media has no pixels")]
    EmptyCarrier,

    /// Represents a failure when encoding the output image.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error: {source}")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(
        "Capacity Error: The message of {message_len} bytes does not fit into the image with the dimensions {width}x{height}, at most {capacity} bytes fit"
    )]
    ImageCapacityError {
        message_len: usize,
        capacity: usize,
        width: u32,
        height: u32,
    },

    /// Represents a key that points outside of the image
    #[error("Seed pixel ({x}, {y}) lies outside of the image with the dimensions {width}x{height}")]
    SeedPixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Represents a malformed key string
    #[error("Invalid key '{0}', expected three numbers like \"x y length\"")]
    InvalidKey(String),

    /// Every pixel index has been handed out already
    #[error("Pixel order exhausted, every pixel carries data already")]
    OrderExhausted,

    /// The bounded pixel order gave up on finding an unvisited pixel
    #[error("Capacity exhausted: no unvisited pixel found within {limit} draws, {visited} of {max} pixels are in use")]
    CapacityExhausted {
        limit: usize,
        visited: usize,
        max: usize,
    },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing key")]
    MissingKey,
}

impl fmt::Debug for AlphaKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a `main` returning this error prints it with Debug
        write!(f, "{self}")
    }
}
