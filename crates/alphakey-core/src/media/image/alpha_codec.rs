use std::io::{self, Read, Write};

use image::{Rgba, RgbaImage};

use super::coords::index_to_coordinates;
use super::order::VisitationOrder;
use crate::media::CodecOptions;
use crate::Seed;

const ALPHA: usize = 3;

/// stores `byte XOR mask` in the alpha channel, the color channels stay untouched
#[inline]
pub fn embed_byte(pixel: &mut Rgba<u8>, byte: u8, mask: u8) {
    pixel.0[ALPHA] = byte ^ mask;
}

/// reverses [`embed_byte`] given the same mask
#[inline]
pub fn extract_byte(pixel: &Rgba<u8>, mask: u8) -> u8 {
    pixel.0[ALPHA] ^ mask
}

/// Factory for decoder and encoder
pub struct AlphaCodec;

impl AlphaCodec {
    /// builds an alpha channel decoder that implements Read, it ends after `message_len` bytes
    pub fn decoder<'i>(
        input: &'i RgbaImage,
        seed: &Seed,
        message_len: usize,
        opts: &CodecOptions,
    ) -> Box<dyn Read + 'i> {
        Box::new(AlphaDecoder {
            image: input,
            order: order_for(input, seed, opts),
            seed: *seed,
            position: 0,
            message_len,
        })
    }

    /// builds an alpha channel encoder that implements Write
    pub fn encoder<'i>(
        carrier: &'i mut RgbaImage,
        seed: &Seed,
        opts: &CodecOptions,
    ) -> Box<dyn Write + 'i> {
        Box::new(AlphaEncoder {
            order: order_for(carrier, seed, opts),
            image: carrier,
            seed: *seed,
            position: 0,
        })
    }
}

fn order_for(image: &RgbaImage, seed: &Seed, opts: &CodecOptions) -> VisitationOrder {
    let (width, height) = image.dimensions();
    VisitationOrder::new(seed.generator_seed, width as usize * height as usize)
        .with_draw_limit(opts.draw_limit)
}

struct AlphaEncoder<'i> {
    image: &'i mut RgbaImage,
    order: VisitationOrder,
    seed: Seed,
    position: usize,
}

impl Write for AlphaEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let (width, height) = self.image.dimensions();
        let mut written = 0;
        for &byte in buf {
            let index = match self.order.next_index() {
                Ok(index) => index,
                // a partial write is reported first, the error comes with the next call
                Err(_) if written > 0 => break,
                Err(e) => return Err(io::Error::new(io::ErrorKind::WriteZero, e)),
            };
            let (x, y) = index_to_coordinates(index, width, height);
            embed_byte(
                self.image.get_pixel_mut(x, y),
                byte,
                self.seed.mask(self.position),
            );
            self.position += 1;
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct AlphaDecoder<'i> {
    image: &'i RgbaImage,
    order: VisitationOrder,
    seed: Seed,
    position: usize,
    message_len: usize,
}

impl Read for AlphaDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let (width, height) = self.image.dimensions();
        let remaining = self.message_len - self.position;
        let mut read = 0;
        for slot in buf.iter_mut().take(remaining) {
            let index = match self.order.next_index() {
                Ok(index) => index,
                Err(_) if read > 0 => break,
                Err(e) => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, e)),
            };
            let (x, y) = index_to_coordinates(index, width, height);
            *slot = extract_byte(self.image.get_pixel(x, y), self.seed.mask(self.position));
            self.position += 1;
            read += 1;
        }

        Ok(read)
    }
}
