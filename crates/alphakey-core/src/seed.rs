//! Derivation of the XOR mask and the pixel order seed from a [`Key`].

use image::{Rgba, RgbaImage};

use crate::{AlphaKeyError, Key, Result};

/// Everything the codec needs that follows from a key and its seed pixel.
///
/// Never stored alongside the data, it is recomputed on both the hide and the
/// unveil side from the same inputs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Seed {
    /// base of the per byte XOR mask
    pub uniqueness: u8,
    /// seed of the pixel order generator
    pub generator_seed: u64,
}

impl Seed {
    /// Pure function of the key and the color of the seed pixel, the alpha channel is ignored.
    pub fn derive(key: &Key, seed_pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = seed_pixel.0;
        let len = key.message_len as u64;

        let uniqueness = (key.x ^ key.y ^ r as u32 ^ g as u32 ^ b as u32) as u8 ^ len as u8;
        let generator_seed = [key.x as u64, key.y as u64, r as u64, g as u64, b as u64, len]
            .into_iter()
            .fold(0u64, u64::wrapping_add);

        Self {
            uniqueness,
            generator_seed,
        }
    }

    /// looks up the seed pixel in `image`, keys outside of the image are rejected
    pub fn from_image(image: &RgbaImage, key: &Key) -> Result<Self> {
        let (width, height) = image.dimensions();
        if key.x >= width || key.y >= height {
            return Err(AlphaKeyError::SeedPixelOutOfBounds {
                x: key.x,
                y: key.y,
                width,
                height,
            });
        }

        Ok(Self::derive(key, *image.get_pixel(key.x, key.y)))
    }

    /// XOR mask for the byte at `position` of the message
    #[inline]
    pub fn mask(&self, position: usize) -> u8 {
        self.uniqueness.wrapping_add(position as u8)
    }
}
