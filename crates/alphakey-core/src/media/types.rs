use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::{error, warn};

use crate::error::AlphaKeyError;
use crate::result::Result;

use super::Persist;

/// an RGBA image that carries or is going to carry a message
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// reads a PNG or JPEG image, the format is chosen by the file extension
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|ext| ext.to_str()) else {
            return Err(AlphaKeyError::UnsupportedMedia);
        };

        let format = match ext.to_lowercase().as_str() {
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            _ => return Err(AlphaKeyError::UnsupportedMedia),
        };

        let file = File::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            AlphaKeyError::IoError(e)
        })?;
        let image = image::load(std::io::BufReader::new(file), format)
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                AlphaKeyError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Always PNG, the hidden channel only survives a lossless format with full alpha depth.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                match e {
                    image::ImageError::IoError(source) => AlphaKeyError::WriteError { source },
                    _ => AlphaKeyError::ImageEncodingError,
                }
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let is_png = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            warn!("{file:?} does not end in .png, the image is written as PNG anyway");
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            AlphaKeyError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
