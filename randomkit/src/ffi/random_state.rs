//! PyO3 wrapper for RandomKit

use pyo3::prelude::*;

use super::to_py_err;
use crate::checkpoint::StateSnapshot;
use crate::RandomKit;

/// numpy's `get_state()` tuple: (algorithm, key, pos, has_gauss, cached_gaussian)
type StateTuple = (String, Vec<u32>, usize, bool, f64);

/// Python wrapper for the engine
///
/// # Example (from Python)
///
/// ```python
/// from randomkit import RandomState
///
/// rs = RandomState(7)
/// rs.random_sample()        # 0.0763082893...
/// rs.seed(7)
/// rs.permutation(10)        # [8, 5, 0, 2, 1, 9, 7, 3, 6, 4]
/// ```
#[pyclass(name = "RandomState")]
pub struct PyRandomState {
    inner: RandomKit,
}

#[pymethods]
impl PyRandomState {
    #[new]
    #[pyo3(signature = (seed = 0))]
    fn new(seed: u64) -> Self {
        PyRandomState {
            inner: RandomKit::new(seed),
        }
    }

    /// Re-seed with the low 32 bits of `seed`
    fn seed(&mut self, seed: u64) {
        self.inner.seed(seed);
    }

    fn random_sample(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn random_sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.inner.next_f64()).collect()
    }

    fn standard_normal(&mut self) -> f64 {
        self.inner.next_gaussian()
    }

    /// Raises ValueError for a negative or non-finite scale
    #[pyo3(signature = (loc = 0.0, scale = 1.0))]
    fn normal(&mut self, loc: f64, scale: f64) -> PyResult<f64> {
        self.inner.next_normal(loc, scale).map_err(to_py_err)
    }

    /// Uniform integer in `[0, bound)`; raises ValueError if `bound <= 0`
    fn randint(&mut self, bound: i64) -> PyResult<i64> {
        self.inner.next_int(bound).map_err(to_py_err)
    }

    /// `count` integers in `[low, low + span]`
    fn bounded(&mut self, low: u64, span: u64, count: usize) -> Vec<u64> {
        self.inner.next_in_range(low, span, count)
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        self.inner.permutation(n)
    }

    fn get_state(&self) -> StateTuple {
        let snapshot = self.inner.snapshot();
        (
            snapshot.algorithm,
            snapshot.key,
            snapshot.pos,
            snapshot.has_gauss,
            snapshot.cached_gaussian,
        )
    }

    /// Raises ValueError if the tuple is not a valid MT19937 state
    fn set_state(&mut self, state: StateTuple) -> PyResult<()> {
        let (algorithm, key, pos, has_gauss, cached_gaussian) = state;
        let snapshot = StateSnapshot {
            algorithm,
            key,
            pos,
            has_gauss,
            cached_gaussian,
        };
        self.inner.set_state(&snapshot).map_err(to_py_err)
    }

    /// Independent copy with the same future sequence
    fn copy(&self) -> Self {
        PyRandomState {
            inner: self.inner.duplicate(),
        }
    }
}
