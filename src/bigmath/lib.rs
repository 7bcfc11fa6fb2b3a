/* ************************************************************************ **
** This file is part of pgw, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Exact arithmetic shared by every other crate in the workspace.
//!
//! Everything here is deliberately free of concurrency and of any
//! floating point; cardinalities of conjugacy classes outgrow `u64`
//! around degree 21, so the interesting quantities are `BigUint` from
//! the start.

extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;

use ::num_bigint::BigUint;
use ::num_traits::One;

pub use ::num_integer::{gcd, lcm};

/// `n!`, exactly.  `factorial(0)` is 1.
pub fn factorial(n: usize) -> BigUint {
    let mut f = BigUint::one();
    for k in 2..=n {
        f *= BigUint::from(k);
    }
    f
}

/// `base` to the `exp`-th, exactly.  `pow(0, 0)` is 1, which is the
/// convention the centralizer-order product wants for absent parts.
pub fn pow(base: usize, exp: usize) -> BigUint {
    ::num_traits::pow(BigUint::from(base), exp)
}

/// LCM of a set of integers.  The LCM of the empty set is taken to be
/// 0; the order of the unique degree-0 cycle type is defined through
/// this case.
pub fn lcm_all<I>(values: I) -> u64
where I: IntoIterator<Item=u64>,
{
    values.into_iter().fold(0, |acc, x| {
        if acc == 0 { x } else { lcm(acc, x) }
    })
}

/// Euler's totient of `n`, counted directly as the number of integers
/// in `1..=n` coprime to `n`.  O(n) gcds; only ever called on group
/// orders that are small enough to enumerate powers of anyway.
pub fn totient(n: u64) -> u64 {
    let mut count = 1;
    for i in 2..n {
        if gcd(i, n) == 1 {
            count += 1;
        }
    }
    count
}
