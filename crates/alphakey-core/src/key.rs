use std::fmt;
use std::str::FromStr;

use fastrand::Rng;

use crate::{AlphaKeyError, Result};

/// The secret needed to unveil a message: the seed pixel and the message length.
///
/// A key is produced while hiding and has to be handed over out-of-band.
/// Its textual form is `"x y message_len"`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Key {
    pub x: u32,
    pub y: u32,
    pub message_len: usize,
}

impl Key {
    pub fn new(x: u32, y: u32, message_len: usize) -> Self {
        Self { x, y, message_len }
    }

    /// picks a seed pixel uniformly at random from a `width`x`height` image
    pub fn random(width: u32, height: u32, message_len: usize, rng: &mut Rng) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AlphaKeyError::EmptyCarrier);
        }

        Ok(Self {
            x: rng.u32(0..width),
            y: rng.u32(0..height),
            message_len,
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.message_len)
    }
}

impl FromStr for Key {
    type Err = AlphaKeyError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AlphaKeyError::InvalidKey(s.to_string());
        let parts: Vec<&str> = s.split_ascii_whitespace().collect();
        let [x, y, message_len] = parts.as_slice() else {
            return Err(invalid());
        };

        Ok(Self {
            x: x.parse().map_err(|_| invalid())?,
            y: y.parse().map_err(|_| invalid())?,
            message_len: message_len.parse().map_err(|_| invalid())?,
        })
    }
}
