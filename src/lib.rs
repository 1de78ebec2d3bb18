//! `gennorm` provides the generalized normal distribution over
//! [ndarray](https://crates.io/crates/ndarray) arrays: log density, density
//! and cumulative distribution function with numpy-style broadcasting and
//! promotion of integer inputs to floats.
//!
//! ```
//! use ndarray::{arr0, array};
//!
//! let c = gennorm::gennorm::cdf(&array![-1., 0., 1.], &arr0(2.0)).unwrap();
//! assert_eq!(c[[1]], 0.5);
//! ```
//!
//! [`distributions::GeneralizedNormal`] adds location, scale, moments and
//! sampling on top of the standard form.
extern crate ndarray;
extern crate ndarray_rand;
extern crate statrs;

pub mod distributions;
pub mod gennorm;
pub mod promote;
pub mod special;
mod util;

/// Broadcasting of two arrays to their common shape
pub mod broadcast {
    pub use crate::util::{broadcast_pair, broadcast_shape};
}
