/* ************************************************************************ **
** This file is part of pgw, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::cmp::Ordering;
use ::std::fmt;
use ::std::ops::Index;

use ::itertools::Itertools;

/// A partition of a nonnegative integer: its parts, in nondecreasing
/// order.
///
/// Partitions double as the conjugacy classes of the symmetric group
/// S_n; a partition of n lists the cycle lengths of any permutation
/// in its class.  See [`CycleType`] for the multiplicity form of the
/// same data.
///
/// [`CycleType`]: struct.CycleType.html
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    parts: Vec<usize>,
}

#[derive(Debug, Fail)]
#[fail(display = "Tried to construct an invalid partition.")]
pub struct InvalidPartitionError(::failure::Backtrace);

impl Partition {
    /// Construct a partition from its parts, which must be positive
    /// and nondecreasing.
    pub fn from_parts(parts: Vec<usize>) -> Result<Partition, InvalidPartitionError> {
        let ascending_positive = {
            parts.iter().all(|&p| p > 0)
                && parts.windows(2).all(|w| w[0] <= w[1])
        };
        match ascending_positive {
            true => Ok(Partition { parts }),
            false => Err(InvalidPartitionError(::failure::Backtrace::new())),
        }
    }

    /// No-validation constructor for buffers the enumerator already
    /// knows to be well-formed.  Still checks in debug builds.
    pub(crate) fn from_raw_parts(parts: Vec<usize>) -> Partition {
        debug_assert!(parts.iter().all(|&p| p > 0));
        debug_assert!(parts.windows(2).all(|w| w[0] <= w[1]));
        Partition { parts }
    }

    pub fn parts(&self) -> &[usize]
    { &self.parts }

    pub fn len(&self) -> usize
    { self.parts.len() }

    pub fn is_empty(&self) -> bool
    { self.parts.is_empty() }

    /// The integer being partitioned; the degree of the symmetric
    /// group this partition names a class of.
    pub fn sum(&self) -> usize
    { self.parts.iter().sum() }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parts.iter().format(", "))
    }
}

/// The total order on partitions, compatible with generation order:
/// if the enumerator produces A before B then `A < B`.  It also
/// applies across differing degrees.
///
/// Partitions are compared coordinate-wise, imagining a suffix of
/// infinite zeroes on the shorter one; the first differing coordinate
/// decides, smaller part first.  When every compared coordinate ties,
/// the shorter partition comes first.
impl Ord for Partition {
    fn cmp(&self, other: &Partition) -> Ordering {
        cmp_parts(&self.parts, &other.parts)
    }
}

impl PartialOrd for Partition {
    fn partial_cmp(&self, other: &Partition) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The ordering behind `Ord for Partition`, usable on a bare parts
/// slice so that hot loops can compare out of a reused buffer.
pub(crate) fn cmp_parts(p: &[usize], q: &[usize]) -> Ordering {
    for (i, &x) in p.iter().enumerate() {
        let y = if i < q.len() { q[i] } else { 0 };
        match x.cmp(&y) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    p.len().cmp(&q.len())
}

/// Lazily yields every partition of one degree, exactly once, in
/// generation order.
///
/// This is the accelerated ascending-composition scheme (ruleAsc of
/// Jerome Kelleher): a working buffer from which the minimal addable
/// part is repeatedly split off, growing adjacent slots, with the
/// current prefix emitted at every step.  Amortized cost is O(1)
/// extra work per emitted part.
///
/// Degree 0 yields a single empty partition.
pub struct Partitions {
    a: Vec<usize>,
    k: usize,
    done: bool,
}

impl Partitions {
    pub fn new(degree: usize) -> Partitions {
        if degree == 0 {
            // the buffer form below wants a positive degree; the sole
            // (empty) partition of 0 is emitted as a special case
            return Partitions { a: vec![], k: 0, done: false };
        }
        let mut a = vec![0; degree + 1];
        a[1] = degree;
        Partitions { a, k: 1, done: false }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.done {
            return None;
        }
        if self.a.is_empty() {
            self.done = true;
            return Some(Partition::from_raw_parts(vec![]));
        }

        let mut k = self.k;
        let mut x = self.a[k - 1] + 1;
        let mut y = self.a[k] - 1;
        k -= 1;
        while x <= y {
            self.a[k] = x;
            y -= x;
            k += 1;
        }
        self.a[k] = x + y;
        self.k = k;
        if k == 0 {
            // the single-part partition [degree] is the last one
            self.done = true;
        }
        Some(Partition::from_raw_parts(self.a[..=k].to_vec()))
    }
}

/// The number of partitions of `degree` (the classical p(n)), found
/// by running the same generator that backs iteration.
pub fn count_partitions(degree: usize) -> usize {
    Partitions::new(degree).count()
}

/// Materialize the catalogue of all partitions of `degree`.
pub fn all_partitions(degree: usize) -> SortedPartitions {
    SortedPartitions::generate(degree)
}

/// The full catalogue of partitions of one degree, in generation
/// order.
///
/// Generation order coincides with `Ord` on `Partition`, so the
/// catalogue is born sorted and supports binary search directly.
#[derive(Debug, Clone)]
pub struct SortedPartitions {
    degree: usize,
    partitions: Vec<Partition>,
}

impl SortedPartitions {
    pub fn generate(degree: usize) -> SortedPartitions {
        SortedPartitions {
            degree,
            partitions: Partitions::new(degree).collect(),
        }
    }

    pub fn degree(&self) -> usize
    { self.degree }

    pub fn len(&self) -> usize
    { self.partitions.len() }

    pub fn is_empty(&self) -> bool
    { self.partitions.is_empty() }

    pub fn as_slice(&self) -> &[Partition]
    { &self.partitions }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Partition>
    { self.partitions.iter() }

    /// Binary search for `p`.  `Ok(index)` when present; otherwise
    /// `Err` of the index at which it would insert.
    pub fn search(&self, p: &Partition) -> Result<usize, usize> {
        self.search_parts(p.parts())
    }

    /// Like `search`, but on a bare parts slice, so that hot loops
    /// can query from a reused buffer without building a `Partition`.
    pub fn search_parts(&self, parts: &[usize]) -> Result<usize, usize> {
        self.partitions.binary_search_by(|q| cmp_parts(q.parts(), parts))
    }
}

impl Index<usize> for SortedPartitions {
    type Output = Partition;

    fn index(&self, index: usize) -> &Partition
    { &self.partitions[index] }
}

impl<'a> IntoIterator for &'a SortedPartitions {
    type Item = &'a Partition;
    type IntoIter = ::std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter
    { self.partitions.iter() }
}
