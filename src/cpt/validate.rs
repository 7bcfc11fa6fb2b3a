use ::failure::Error;

use ::pgw_partition::CycleType;

use crate::cpt::{Cpt, Logarithm};

/// A pre-extension of a maximal type that some type of the previous
/// degree reaches as a power higher than the first.
#[derive(Debug, Clone)]
pub struct Violation {
    /// The maximal type, in the current degree.
    pub maximal: CycleType,
    /// Its pre-extension, one degree down.
    pub pre_extension: CycleType,
    /// The offending logarithm (power > 1).
    pub logarithm: Logarithm,
}

/// Probe a consecutive pair of tables: collect every pre-extension of
/// a maximal type of `current`'s degree that is reachable in
/// `previous` as anything but a first power.
///
/// This is a counterexample search, not an invariant check: small
/// degrees already produce violations (the identity of S_2 is both a
/// pre-extension of the maximal (2,1) and the square of (2)), so the
/// findings are returned rather than asserted away.
pub fn find_pre_extension_violations(
    previous: &mut Cpt,
    current: &mut Cpt,
) -> Result<Vec<Violation>, Error> {
    ensure!(
        previous.degree() + 1 == current.degree(),
        "tables must be of consecutive degrees; got {} and {}",
        previous.degree(), current.degree(),
    );
    let mut violations = vec![];
    for maximal in current.maximal_types() {
        for pre_extension in maximal.pre_extensions() {
            debug!("checking maximal type t={} pre-extension p={}", maximal, pre_extension);
            for logarithm in previous.logarithms(&pre_extension)? {
                if logarithm.power != 1 {
                    violations.push(Violation {
                        maximal: maximal.clone(),
                        pre_extension: pre_extension.clone(),
                        logarithm,
                    });
                }
            }
        }
    }
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pgw_partition::Partition;

    #[test]
    fn degrees_one_and_two_are_clean() {
        let mut previous = Cpt::new(1);
        let mut current = Cpt::new(2);
        previous.generate();
        current.generate();
        let violations = find_pre_extension_violations(&mut previous, &mut current).unwrap();
        assert!(violations.is_empty(), "unexpected violations: {:?}", violations);
    }

    #[test]
    fn degrees_two_and_three_produce_the_known_violation() {
        let mut previous = Cpt::new(2);
        let mut current = Cpt::new(3);
        previous.generate();
        current.generate();
        let violations = find_pre_extension_violations(&mut previous, &mut current).unwrap();

        // shrinking the 2-part of the maximal (2,1) gives the identity
        // of S_2, which is also the square of (2)
        let maximal = Partition::from_parts(vec![1, 2]).unwrap().cycle_type();
        let transposition = Partition::from_parts(vec![2]).unwrap().cycle_type();
        assert!(
            violations.iter().any(|v| {
                v.maximal == maximal
                    && v.pre_extension == CycleType::identity(2)
                    && v.logarithm.base == transposition
                    && v.logarithm.power == 2
            }),
            "missing the known violation; got {:?}", violations,
        );
        assert!(violations.iter().all(|v| v.logarithm.power > 1));
    }

    #[test]
    fn non_consecutive_degrees_are_rejected() {
        let mut previous = Cpt::new(2);
        let mut current = Cpt::new(5);
        assert!(find_pre_extension_violations(&mut previous, &mut current).is_err());
    }
}
