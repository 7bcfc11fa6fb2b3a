//! The concurrent half of the width computation: a marking engine
//! that classifies every cycle type of a degree as maximal or not,
//! and sums the exact width over the survivors.

#[macro_use] extern crate log;
extern crate num_bigint;
extern crate num_cpus;
extern crate num_rational;
extern crate num_traits;
extern crate pgw_bigmath;
extern crate pgw_partition;

pub use self::table::{MarkFlags, MarkTable};
mod table;

pub use self::expander::Expander;
mod expander;

mod worker;
