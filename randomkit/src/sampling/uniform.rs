//! Uniform variates built from twister words

use crate::RandomKit;

/// 2^26, the weight of the high 27-bit half of a double
const HIGH_WEIGHT: f64 = 67_108_864.0;

/// 2^53
const MANTISSA_SCALE: f64 = 9_007_199_254_740_992.0;

impl RandomKit {
    /// Two consecutive words as `(first << 32) | second`
    pub fn next_u64(&mut self) -> u64 {
        let upper = (self.next_u32() as u64) << 32;
        let lower = self.next_u32() as u64;
        upper | lower
    }

    /// Uniform double in `[0.0, 1.0)` with 53 random bits
    ///
    /// Drops 5 bits of the first word and 6 of the second, the exact
    /// construction numpy uses for `random_sample`.
    ///
    /// # Example
    /// ```
    /// use randomkit::RandomKit;
    ///
    /// let mut rng = RandomKit::new(7);
    /// let x = rng.next_f64();
    /// assert!(x >= 0.0 && x < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * HIGH_WEIGHT + b) / MANTISSA_SCALE
    }

    /// `next_u64` with the sign bit cleared
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() & !(1u64 << 63)) as i64
    }
}
