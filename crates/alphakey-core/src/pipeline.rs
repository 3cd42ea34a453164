//! In-memory hide and unveil, no file system involved.

use std::io::{self, Read, Write};

use fastrand::Rng;
use image::RgbaImage;
use log::{debug, info};

use crate::media::image::AlphaCodec;
use crate::media::CodecOptions;
use crate::{AlphaKeyError, Key, Result, Seed};

/// Hides `message` in a copy of `image` and returns the key together with that copy.
///
/// The seed pixel is picked with `rng`. The input image is never modified.
pub fn hide(
    image: &RgbaImage,
    message: &[u8],
    rng: &mut Rng,
    opts: &CodecOptions,
) -> Result<(Key, RgbaImage)> {
    let (width, height) = image.dimensions();
    let key = Key::random(width, height, message.len(), rng)?;
    let carrier = hide_with_key(image, message, &key, opts)?;

    Ok((key, carrier))
}

/// Same as [`hide`] but with a seed pixel chosen by the caller.
///
/// The key has to announce the length of `message`.
pub fn hide_with_key(
    image: &RgbaImage,
    message: &[u8],
    key: &Key,
    opts: &CodecOptions,
) -> Result<RgbaImage> {
    if key.message_len != message.len() {
        return Err(AlphaKeyError::InvalidKey(key.to_string()));
    }
    let seed = Seed::from_image(image, key)?;
    ensure_capacity(image, message.len())?;
    debug!(
        "hiding {} bytes with uniqueness {:#04x}",
        message.len(),
        seed.uniqueness
    );

    let mut carrier = image.clone();
    {
        let mut encoder = AlphaCodec::encoder(&mut carrier, &seed, opts);
        encoder.write_all(message).map_err(codec_error)?;
    }
    info!("{} bytes hidden", message.len());

    Ok(carrier)
}

/// Reads `key.message_len` bytes back from `image`.
///
/// There is no integrity check, a wrong key or a different image yields wrong bytes without an error.
pub fn unveil(image: &RgbaImage, key: &Key, opts: &CodecOptions) -> Result<Vec<u8>> {
    let seed = Seed::from_image(image, key)?;
    ensure_capacity(image, key.message_len)?;

    let mut message = Vec::with_capacity(key.message_len);
    AlphaCodec::decoder(image, &seed, key.message_len, opts)
        .read_to_end(&mut message)
        .map_err(codec_error)?;
    info!("{} bytes unveiled", message.len());

    Ok(message)
}

fn ensure_capacity(image: &RgbaImage, message_len: usize) -> Result<()> {
    let (width, height) = image.dimensions();
    let capacity = width as usize * height as usize;
    if message_len > capacity {
        return Err(AlphaKeyError::ImageCapacityError {
            message_len,
            capacity,
            width,
            height,
        });
    }

    Ok(())
}

/// unwraps the codec error that travelled inside of an `io::Error`
fn codec_error(e: io::Error) -> AlphaKeyError {
    if !e.get_ref().is_some_and(|inner| inner.is::<AlphaKeyError>()) {
        return AlphaKeyError::IoError(e);
    }

    match e.into_inner().map(|inner| inner.downcast::<AlphaKeyError>()) {
        Some(Ok(inner)) => *inner,
        _ => AlphaKeyError::ImageEncodingError,
    }
}
