//! Standard normal variates
//!
//! Polar form of Box-Muller: draw points in the square until one falls
//! strictly inside the unit circle (and off the origin), then turn it into
//! two independent normals. One is returned, the other cached for the next
//! call. Acceptance probability per pass is π/4.

use crate::{RandomError, RandomKit};

impl RandomKit {
    /// Standard normal variate, bit-exact with numpy's `standard_normal`
    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.cached_gaussian.take() {
            return cached;
        }

        let (x1, x2, r2) = loop {
            let x1 = 2.0 * self.next_f64() - 1.0;
            let x2 = 2.0 * self.next_f64() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                break (x1, x2, r2);
            }
        };

        let f = (-2.0 * r2.ln() / r2).sqrt();
        self.cached_gaussian = Some(f * x1);
        f * x2
    }

    /// Normal variate with the given mean and standard deviation
    ///
    /// # Errors
    /// `InvalidArgument` if `std_dev` is negative or not finite. Nothing is
    /// drawn in that case.
    pub fn next_normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, RandomError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(RandomError::invalid_argument(
                "next_normal",
                format!("std_dev must be finite and non-negative, got {}", std_dev),
            ));
        }
        Ok(mean + std_dev * self.next_gaussian())
    }
}
