//! Bounded integer sampling
//!
//! Masked rejection: take the smallest all-ones mask covering the span,
//! draw, mask, and retry until the value fits. Exactly uniform, no modulo
//! bias. Spans that fit in 32 bits only ever draw single words.
//!
//! A rejection re-draws a whole word even when only a few bits were
//! wasted; changing that would desynchronize the sequence from numpy.

use crate::{RandomError, RandomKit};

/// Smallest all-ones bit mask `>= value`
///
/// # Example
/// ```
/// use randomkit::sampling::bit_mask;
///
/// assert_eq!(bit_mask(100), 127);
/// assert_eq!(bit_mask(128), 255);
/// ```
pub fn bit_mask(value: u64) -> u64 {
    let mut mask = value;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    mask |= mask >> 32;
    mask
}

impl RandomKit {
    /// Uniform value in `[0, max]` (inclusive)
    ///
    /// `max == 0` returns 0 without drawing.
    pub fn next_interval(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.masked_draw(max, bit_mask(max))
    }

    /// Fill `out` with independent values in `[low, low + span]`
    ///
    /// `span` is the inclusive width, not a count. Values wrap around
    /// `u64::MAX` when `low + span` overflows, like the reference.
    pub fn fill_in_range(&mut self, low: u64, span: u64, out: &mut [u64]) {
        if span == 0 {
            out.fill(low);
            return;
        }

        let mask = bit_mask(span);
        for slot in out.iter_mut() {
            *slot = low.wrapping_add(self.masked_draw(span, mask));
        }
    }

    /// `count` independent values in `[low, low + span]`
    ///
    /// # Example
    /// ```
    /// use randomkit::RandomKit;
    ///
    /// let mut rng = RandomKit::new(7);
    /// assert_eq!(rng.next_in_range(0, 100, 5), vec![47, 68, 25, 67, 83]);
    /// ```
    pub fn next_in_range(&mut self, low: u64, span: u64, count: usize) -> Vec<u64> {
        let mut out = vec![0; count];
        self.fill_in_range(low, span, &mut out);
        out
    }

    /// Uniform value in `[0, bound)`
    ///
    /// Powers of two take a single masked 64-bit draw.
    ///
    /// # Errors
    /// `InvalidArgument` if `bound == 0`; nothing is drawn.
    pub fn next_index(&mut self, bound: u64) -> Result<u64, RandomError> {
        if bound == 0 {
            return Err(RandomError::invalid_argument(
                "next_index",
                "bound must be positive",
            ));
        }
        if bound.is_power_of_two() {
            return Ok(self.next_u64() & (bound - 1));
        }
        Ok(self.next_interval(bound - 1))
    }

    /// Signed form of [`RandomKit::next_index`]
    ///
    /// # Errors
    /// `InvalidArgument` if `bound <= 0`.
    pub fn next_int(&mut self, bound: i64) -> Result<i64, RandomError> {
        if bound <= 0 {
            return Err(RandomError::invalid_argument(
                "next_int",
                format!("bound must be positive, got {}", bound),
            ));
        }
        // bound - 1 < i64::MAX, so the result always fits
        Ok(self.next_index(bound as u64)? as i64)
    }

    fn masked_draw(&mut self, max: u64, mask: u64) -> u64 {
        if max <= u32::MAX as u64 {
            let mask = mask as u32;
            loop {
                let value = (self.next_u32() & mask) as u64;
                if value <= max {
                    return value;
                }
            }
        }

        loop {
            let value = self.next_u64() & mask;
            if value <= max {
                return value;
            }
        }
    }
}
