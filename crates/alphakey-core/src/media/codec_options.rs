#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CodecOptions {
    /// Upper bound of draws the pixel order may spend on finding one unvisited pixel.
    ///
    /// `None` keeps drawing until a free pixel turns up, which gets slow when a message
    /// fills nearly every pixel of the image. With a limit the codec fails with
    /// [`crate::AlphaKeyError::CapacityExhausted`] instead.
    ///
    /// The limit never changes which pixels are used, hiding and unveiling may use
    /// different limits.
    pub draw_limit: Option<usize>,
}

impl CodecOptions {
    pub fn with_draw_limit(limit: usize) -> Self {
        Self {
            draw_limit: Some(limit),
        }
    }
}
