//! Width and density invariants of the power graphs of
//! symmetric-group conjugacy classes.
//!
//! For a degree n, the conjugacy classes of S_n are the integer
//! partitions of n.  Raising a class to a power lands on another
//! class, which makes the classes the vertices of a directed "power
//! graph"; the classes with no incoming nontrivial edge are the
//! *maximal types*.  The *width* of a degree is the exact number of
//! permutations represented by its maximal types, counted with
//! multiplicity 1/height, and the *density* is width over n!.
//!
//! Two independent computations of these invariants live here: a
//! concurrent marking engine ([`Expander`]) and a sequential table
//! ([`Cpt`]) that double-checks it.  They share the partition and
//! cycle-type algebra and nothing else.
//!
//! [`Expander`]: struct.Expander.html
//! [`Cpt`]: struct.Cpt.html

pub extern crate pgw_bigmath;
extern crate pgw_cpt;
extern crate pgw_expand;
extern crate pgw_partition;

pub use ::pgw_partition::{
    all_partitions,
    count_partitions,
    CycleType,
    InvalidPartitionError,
    Partition,
    Partitions,
    SortedPartitions,
};

pub use ::pgw_expand::{Expander, MarkTable};

pub use ::pgw_cpt::{
    find_pre_extension_violations,
    Cpt,
    Logarithm,
    UnknownTypeError,
    Violation,
};

pub use ::pgw_bigmath as bigmath;
