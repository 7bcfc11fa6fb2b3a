/* ************************************************************************ **
** This file is part of pgw, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate failure;
extern crate itertools;
extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;
extern crate rand;
extern crate pgw_bigmath;

pub use self::partition::{Partition, InvalidPartitionError};
pub use self::partition::{Partitions, SortedPartitions};
pub use self::partition::{all_partitions, count_partitions};
mod partition;

pub use self::cycle_type::CycleType;
mod cycle_type;
