/* ************************************************************************ **
** This file is part of pgw, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::fmt;

use ::num_bigint::BigUint;
use ::num_traits::{One, Zero};

use ::pgw_bigmath::{factorial, lcm_all, pow};

use super::partition::Partition;

/// A cycle type in multiplicity form: slot `i` counts the cycles of
/// length `i + 1`.
///
/// The slot vector always has length n, so a cycle type knows the
/// degree of the group it lives in; two types of differing degree are
/// never equal, even when one is the other plus trailing zero slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CycleType {
    counts: Vec<usize>,
}

impl CycleType {
    /// Construct from multiplicities-by-part-size.  The degree is the
    /// length of `counts`.
    pub fn new(counts: Vec<usize>) -> CycleType {
        CycleType { counts }
    }

    /// The all-zero multiplicity vector of one degree; a scratch
    /// target for [`power_into`].
    ///
    /// [`power_into`]: #method.power_into
    pub fn zeroed(degree: usize) -> CycleType {
        CycleType { counts: vec![0; degree] }
    }

    /// The type of the identity: every point a fixed point.
    pub fn identity(degree: usize) -> CycleType {
        let mut counts = vec![0; degree];
        if degree > 0 {
            counts[0] = degree;
        }
        CycleType { counts }
    }

    /// A haphazard (not uniformly distributed) cycle type of the
    /// given degree.  Randomized tests want variety, not uniformity.
    pub fn random(degree: usize) -> CycleType {
        use ::rand::Rng;

        let mut rng = ::rand::thread_rng();
        let mut counts = vec![0; degree];
        let mut remaining = degree;
        while remaining > 0 {
            let size = rng.gen_range(0, remaining) + 1;
            let quantity = rng.gen_range(0, remaining / size) + 1;
            counts[size - 1] += quantity;
            remaining -= size * quantity;
        }
        CycleType { counts }
    }

    pub fn degree(&self) -> usize
    { self.counts.len() }

    pub fn counts(&self) -> &[usize]
    { &self.counts }

    /// The number of points covered by the parts: Σ size·multiplicity.
    /// Equals `degree()` for every well-formed type; the power-table
    /// generator checks this on each row it emits.
    pub fn weight(&self) -> usize {
        self.counts.iter().enumerate()
            .map(|(i, &m)| (i + 1) * m)
            .sum()
    }

    /// True iff every point is a fixed point.  (Vacuously true at
    /// degree 0.)
    pub fn is_identity(&self) -> bool {
        self.counts.iter().enumerate().all(|(i, &m)| {
            match i {
                0 => m > 0,
                _ => m == 0,
            }
        })
    }

    /// The order of any permutation with this cycle type: the LCM of
    /// the part sizes present.  The empty type has order 0.
    pub fn order(&self) -> u64 {
        lcm_all({
            self.counts.iter().enumerate()
                .filter(|&(_, &m)| m > 0)
                .map(|(i, _)| (i + 1) as u64)
        })
    }

    /// Write `self` raised to the `k`-th power into `out`, which must
    /// have the same degree.  No allocation happens here; this is the
    /// hot path of the whole workspace.
    ///
    /// A cycle of length i, raised to the k-th, splits into gcd(i, k)
    /// cycles of length i/gcd(i, k).
    pub fn power_into(&self, k: usize, out: &mut CycleType) {
        assert_eq!(self.degree(), out.degree());
        for m in &mut out.counts {
            *m = 0;
        }
        for (i, &m) in self.counts.iter().enumerate() {
            if m > 0 {
                let size = i + 1;
                let f = ::num_integer::gcd(size, k);
                out.counts[size / f - 1] += f * m;
            }
        }
    }

    /// Allocating form of [`power_into`].
    ///
    /// [`power_into`]: #method.power_into
    pub fn power(&self, k: usize) -> CycleType {
        let mut out = CycleType::zeroed(self.degree());
        self.power_into(k, &mut out);
        out
    }

    /// The order of the centralizer of this class: Π iᵐ·m! over part
    /// sizes i with multiplicity m.
    pub fn centralizer_order(&self) -> BigUint {
        let mut z = BigUint::one();
        for (i, &m) in self.counts.iter().enumerate() {
            z *= pow(i + 1, m);
            z *= factorial(m);
        }
        z
    }

    /// The number of permutations with this cycle type: n! divided by
    /// the centralizer order (orbit-stabilizer; the division is always
    /// exact).
    pub fn class_size(&self) -> BigUint {
        let n_factorial = factorial(self.degree());
        let centralizer = self.centralizer_order();
        assert!(
            (&n_factorial % &centralizer).is_zero(),
            "centralizer order {} does not divide {}!", centralizer, self.degree(),
        );
        n_factorial / centralizer
    }

    /// The types of one degree down obtained by shrinking a single
    /// part by one point; a unit part disappears outright.  One
    /// result per distinct part size present.
    pub fn pre_extensions(&self) -> Vec<CycleType> {
        assert!(self.degree() > 0, "the empty type has no pre-extensions");
        let mut result = Vec::new();
        for (i, &m) in self.counts.iter().enumerate() {
            if m > 0 {
                let mut counts = self.counts.clone();
                counts[i] -= 1;
                if i > 0 {
                    counts[i - 1] += 1;
                }
                // the slot for parts of full-degree size is vacated by
                // any shrink, so the result lives one degree down
                let top = counts.pop();
                debug_assert_eq!(top, Some(0));
                result.push(CycleType { counts });
            }
        }
        result
    }

    /// The partition listing this type's parts in nondecreasing
    /// order.
    pub fn partition(&self) -> Partition {
        let mut parts = Vec::new();
        self.write_parts(&mut parts);
        Partition::from_raw_parts(parts)
    }

    /// Buffer-reusing form of [`partition`]: clears `buf` and fills
    /// it with the parts in nondecreasing order.
    ///
    /// [`partition`]: #method.partition
    pub fn write_parts(&self, buf: &mut Vec<usize>) {
        buf.clear();
        for (i, &m) in self.counts.iter().enumerate() {
            for _ in 0..m {
                buf.push(i + 1);
            }
        }
    }
}

impl Partition {
    /// The cycle type of this partition's class.  Its degree is the
    /// partition's sum.
    pub fn cycle_type(&self) -> CycleType {
        let mut t = CycleType::zeroed(self.sum());
        self.write_cycle_type(&mut t);
        t
    }

    /// Buffer-reusing form of [`cycle_type`]; `t` must already have
    /// the right degree.
    ///
    /// [`cycle_type`]: #method.cycle_type
    pub fn write_cycle_type(&self, t: &mut CycleType) {
        assert_eq!(self.sum(), t.degree());
        for m in &mut t.counts {
            *m = 0;
        }
        for &part in self.parts() {
            t.counts[part - 1] += 1;
        }
    }
}

/// Renders in descending caret form: `(5,3^2,1^4)`.
impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for (i, &m) in self.counts.iter().enumerate().rev() {
            if m > 0 {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, "{}", i + 1)?;
                if m > 1 {
                    write!(f, "^{}", m)?;
                }
                first = false;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all_partitions;
    use ::num_bigint::BigUint;
    use ::pgw_bigmath::factorial;

    fn partition(parts: Vec<usize>) -> Partition {
        Partition::from_parts(parts).unwrap()
    }

    #[test]
    fn conversion_fixtures() {
        assert_eq!(partition(vec![1, 1, 1]).cycle_type().counts(), &[3, 0, 0]);
        assert_eq!(partition(vec![1, 1, 1, 2]).cycle_type().counts(), &[3, 1, 0, 0, 0]);
    }

    #[test]
    fn conversion_round_trips() {
        for degree in 0..=12 {
            for p in all_partitions(degree).iter() {
                let t = p.cycle_type();
                assert_eq!(t.degree(), degree);
                assert_eq!(t.weight(), degree);
                assert_eq!(&t.partition(), p);
            }
        }
    }

    #[test]
    fn orders() {
        assert_eq!(CycleType::new(vec![]).order(), 0);
        assert_eq!(CycleType::identity(5).order(), 1);
        assert_eq!(partition(vec![1, 2, 3]).cycle_type().order(), 6);
        assert_eq!(partition(vec![2, 3, 5]).cycle_type().order(), 30);
        assert_eq!(partition(vec![4, 6]).cycle_type().order(), 12);
    }

    #[test]
    fn identity_recognition() {
        assert!(CycleType::identity(1).is_identity());
        assert!(CycleType::identity(7).is_identity());
        assert!(CycleType::new(vec![]).is_identity());
        assert!(!partition(vec![1, 2]).cycle_type().is_identity());
        assert!(!CycleType::zeroed(3).is_identity());
    }

    #[test]
    fn powers_split_cycles() {
        // a 6-cycle squared is two 3-cycles
        let t = partition(vec![6]).cycle_type();
        assert_eq!(t.power(2).counts(), &[0, 0, 2, 0, 0, 0]);
        // ...cubed is three 2-cycles
        assert_eq!(t.power(3).counts(), &[0, 3, 0, 0, 0, 0]);
        // ...and to the fifth stays a 6-cycle
        assert_eq!(t.power(5), t);
        assert!(t.power(6).is_identity());
        // the zeroth power of anything is the identity (gcd(i, 0) = i)
        assert!(t.power(0).is_identity());
    }

    #[test]
    fn power_into_reuses_the_buffer() {
        let t = partition(vec![1, 2, 4]).cycle_type();
        let mut buf = CycleType::zeroed(7);
        t.power_into(2, &mut buf);
        assert_eq!(buf.counts(), &[3, 0, 0, 1, 0, 0, 0]);
        t.power_into(4, &mut buf);
        assert_eq!(buf.counts(), &[7, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn cardinalities() {
        // the class of transpositions in S_4
        let t = partition(vec![1, 1, 2]).cycle_type();
        assert_eq!(t.centralizer_order(), BigUint::from(4u32));
        assert_eq!(t.class_size(), BigUint::from(6u32));

        // a full cycle in S_5
        let t = partition(vec![5]).cycle_type();
        assert_eq!(t.class_size(), BigUint::from(24u32));
    }

    #[test]
    fn class_times_centralizer_is_the_group_order() {
        for degree in 0..=10 {
            let n_factorial = factorial(degree);
            for p in all_partitions(degree).iter() {
                let t = p.cycle_type();
                assert_eq!(
                    t.class_size() * t.centralizer_order(),
                    n_factorial,
                    "bad cardinalities for {}", t,
                );
            }
        }
    }

    #[test]
    fn pre_extensions_shrink_one_part() {
        // (2,1): drop the fixed point, or break the transposition
        let t = partition(vec![1, 2]).cycle_type();
        let pre: Vec<_> = t.pre_extensions();
        assert_eq!(pre.len(), 2);
        assert_eq!(pre[0].counts(), &[0, 1]); // 1-part gone: (2)
        assert_eq!(pre[1].counts(), &[2, 0]); // 2 -> 1: identity of S_2

        // a full cycle shrinks to the next full cycle down
        let t = partition(vec![4]).cycle_type();
        let pre = t.pre_extensions();
        assert_eq!(pre.len(), 1);
        assert_eq!(pre[0].counts(), &[0, 0, 1]);

        // degree 1 pre-extends to the empty type
        let t = CycleType::identity(1);
        assert_eq!(t.pre_extensions(), vec![CycleType::new(vec![])]);
    }

    #[test]
    fn random_types_are_well_formed() {
        for degree in 1..=20 {
            for _ in 0..10 {
                let t = CycleType::random(degree);
                assert_eq!(t.degree(), degree);
                assert_eq!(t.weight(), degree);
            }
        }
    }

    #[test]
    fn caret_rendering() {
        assert_eq!(CycleType::identity(4).to_string(), "(1^4)");
        assert_eq!(partition(vec![1, 1, 3, 3, 5]).cycle_type().to_string(), "(5,3^2,1^2)");
        assert_eq!(CycleType::new(vec![]).to_string(), "()");
    }
}
