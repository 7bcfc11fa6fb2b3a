//! The sequential half of the width computation: explicit conjugate
//! power tables, built one row at a time with no shared state.
//!
//! The table exists to keep the concurrent engine honest (both paths
//! must agree bit-for-bit on width and density) and to answer the
//! logarithm queries that have no concurrent counterpart.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate num_bigint;
extern crate num_rational;
extern crate num_traits;
extern crate pgw_bigmath;
extern crate pgw_partition;
#[cfg(test)] extern crate rand;

pub use self::cpt::{Cpt, Logarithm, UnknownTypeError};
mod cpt;

pub use self::validate::{find_pre_extension_violations, Violation};
mod validate;
