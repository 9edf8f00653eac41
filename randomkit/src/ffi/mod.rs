//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the engine to Python with a numpy-like surface.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Primitives, lists and tuples at the boundary
//! 3. **Safe errors**: Every `RandomError` becomes a `ValueError`
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod random_state;

use crate::RandomError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub(crate) fn to_py_err(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
