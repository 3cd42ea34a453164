//! # Alphakey Core API
//!
//! Hides a message in the alpha channel of an image. The pixels carrying the
//! message are visited in a pseudo-random order that is seeded from one
//! randomly chosen seed pixel, its color and the message length. Those three
//! numbers form the [`Key`], the only thing needed to unveil the message again.
//!
//! - [`api::hide`] reads an image, hides a message and writes a PNG
//! - [`api::unveil`] reads a PNG and reveals the message for a given key
//! - [`pipeline`] does the same on in-memory images
//!
//! Only the alpha channel is touched, so colors stay as they are. The output
//! has to be stored lossless (PNG), any lossy re-encoding destroys the message.
//! There is no integrity check: a wrong key unveils garbage without an error.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//! # let temp_dir = tempdir().expect("Failed to create temporary directory");
//! # let carrier = temp_dir.path().join("carrier.png");
//! # image::RgbaImage::new(16, 16).save(&carrier).unwrap();
//!
//! let key = alphakey_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! println!("keep this key: {key}");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust
//! # use tempfile::tempdir;
//! # let temp_dir = tempdir().expect("Failed to create temporary directory");
//! # let carrier = temp_dir.path().join("carrier.png");
//! # let secret = temp_dir.path().join("secret.png");
//! # image::RgbaImage::new(16, 16).save(&carrier).unwrap();
//! # let key = alphakey_core::api::hide::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_image(&carrier)
//! #     .with_output(&secret)
//! #     .execute()
//! #     .unwrap();
//! let message = alphakey_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .using_key(key)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, b"Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod error;
pub mod key;
pub mod media;
pub mod pipeline;
pub mod result;
pub mod seed;

pub use crate::error::AlphaKeyError;
pub use crate::key::Key;
pub use crate::media::{CodecOptions, Media, Persist};
pub use crate::result::Result;
pub use crate::seed::Seed;

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, Rgba, RgbaImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    /// all black, nothing hidden yet
    pub fn prepare_4x4_black_image() -> RgbaImage {
        ImageBuffer::from_pixel(4, 4, Rgba([0, 0, 0, 0]))
    }
}
