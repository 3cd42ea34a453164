//! Pseudo-random pixel visitation order.
//!
//! Rejection sampling over a seeded generator: an index is drawn uniformly from
//! `0..max` and drawn again as long as it was handed out before. The sequence
//! only depends on the seed, so hiding and unveiling walk the very same pixels.
//!
//! # Limitation
//!
//! The expected number of draws for the next index is `max / (max - visited)`,
//! it grows without bound when the message fills the image up to the last
//! pixel. Near-full carriers are slow, not wrong. [`VisitationOrder::with_draw_limit`]
//! turns that into an error instead.

use std::collections::HashSet;

use fastrand::Rng;
use log::trace;

use crate::{AlphaKeyError, Result};

#[derive(Debug, Clone)]
pub struct VisitationOrder {
    rng: Rng,
    max: usize,
    visited: HashSet<usize>,
    draw_limit: Option<usize>,
    gave_up: bool,
}

impl VisitationOrder {
    /// order over the indices `0..max`, unbounded number of draws per index
    pub fn new(generator_seed: u64, max: usize) -> Self {
        Self {
            rng: Rng::with_seed(generator_seed),
            max,
            visited: HashSet::new(),
            draw_limit: None,
            gave_up: false,
        }
    }

    /// Gives up after `limit` rejected draws for one index. Once given up, the order stays failed.
    pub fn with_draw_limit(mut self, limit: Option<usize>) -> Self {
        self.draw_limit = limit;
        self
    }

    /// number of indices handed out so far
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    /// the next index that was never returned before
    pub fn next_index(&mut self) -> Result<usize> {
        if self.visited.len() >= self.max {
            return Err(AlphaKeyError::OrderExhausted);
        }
        if self.gave_up {
            return Err(self.capacity_exhausted());
        }

        let mut draws = 0usize;
        loop {
            // 64 bit draws keep the sequence independent of the platform's usize
            let candidate = self.rng.u64(0..self.max as u64) as usize;
            draws += 1;
            if self.visited.insert(candidate) {
                if draws > 1 {
                    trace!("index {candidate} found after {draws} draws");
                }
                return Ok(candidate);
            }

            if let Some(limit) = self.draw_limit {
                if draws >= limit {
                    self.gave_up = true;
                    return Err(self.capacity_exhausted());
                }
            }
        }
    }
}

impl VisitationOrder {
    fn capacity_exhausted(&self) -> AlphaKeyError {
        AlphaKeyError::CapacityExhausted {
            limit: self.draw_limit.unwrap_or_default(),
            visited: self.visited.len(),
            max: self.max,
        }
    }
}

impl Iterator for VisitationOrder {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_index().ok()
    }
}
