use ::std::sync::mpsc::Receiver;

use ::num_bigint::BigUint;

use ::pgw_partition::{CycleType, SortedPartitions};

use crate::table::MarkFlags;

/// Per-worker scratch: two cycle-type buffers for the power walk and
/// a parts buffer for catalogue lookups.  Nothing here is shared, and
/// nothing is reallocated per operation.
pub(crate) struct Scratch {
    current: CycleType,
    power: CycleType,
    parts: Vec<usize>,
}

impl Scratch {
    pub(crate) fn new(degree: usize) -> Scratch {
        Scratch {
            current: CycleType::zeroed(degree),
            power: CycleType::zeroed(degree),
            parts: Vec::with_capacity(degree),
        }
    }
}

/// Drains one worker's queue, returning the heights it computed.
/// Heights ride back to the owning thread on the join rather than
/// being written into shared memory; the mark flags are the only
/// state workers touch concurrently.
pub(crate) fn worker_main(
    queue: Receiver<usize>,
    partitions: &SortedPartitions,
    flags: &MarkFlags,
) -> Vec<(usize, BigUint)> {
    let mut scratch = Scratch::new(partitions.degree());
    let mut heights = Vec::new();
    let mut visited = 0usize;
    for index in queue {
        if let Some(height) = process_index(partitions, flags, index, &mut scratch) {
            heights.push((index, height));
        }
        visited += 1;
    }
    trace!("worker drained; visited={}", visited);
    heights
}

/// Expand one catalogue entry: walk t², t³, … until the power reaches
/// the identity, marking every power that lands on a different type
/// as non-maximal and counting the powers that land back on t itself
/// (the height, which works out to the Euler totient of t's order).
///
/// Returns `None` when the entry was already marked on arrival; its
/// height can never matter then, because marks are never cleared
/// during an expansion.
pub(crate) fn process_index(
    partitions: &SortedPartitions,
    flags: &MarkFlags,
    index: usize,
    scratch: &mut Scratch,
) -> Option<BigUint> {
    if flags.is_marked(index) {
        return None;
    }
    partitions[index].write_cycle_type(&mut scratch.current);
    let mut height = 1u64;
    if !scratch.current.is_identity() {
        let mut k = 2;
        loop {
            scratch.current.power_into(k, &mut scratch.power);
            if scratch.power == scratch.current {
                height += 1;
            } else {
                scratch.power.write_parts(&mut scratch.parts);
                match partitions.search_parts(&scratch.parts) {
                    Ok(target) => flags.mark(target),
                    Err(_) => panic!(
                        "power of a catalogued type is missing from the catalogue; \
                         degree={} parts={:?}",
                        partitions.degree(), scratch.parts,
                    ),
                }
            }
            if scratch.power.is_identity() {
                break;
            }
            k += 1;
        }
    }
    Some(BigUint::from(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MarkTable;
    use ::pgw_bigmath::totient;
    use ::pgw_partition::Partition;

    #[test]
    fn marks_per_entry_at_degree_ten() {
        // every partition of 10 in catalogue order, with the number of
        // other entries its expansion marks when starting from a clean
        // table
        let cases: Vec<(Vec<usize>, usize)> = vec![
            (vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1], 0),
            (vec![1, 1, 1, 1, 1, 1, 1, 1, 2], 1),
            (vec![1, 1, 1, 1, 1, 1, 1, 3], 1),
            (vec![1, 1, 1, 1, 1, 1, 2, 2], 1),
            (vec![1, 1, 1, 1, 1, 1, 4], 2),
            (vec![1, 1, 1, 1, 1, 2, 3], 3),
            (vec![1, 1, 1, 1, 1, 5], 1),
            (vec![1, 1, 1, 1, 2, 2, 2], 1),
            (vec![1, 1, 1, 1, 2, 4], 2),
            (vec![1, 1, 1, 1, 3, 3], 1),
            (vec![1, 1, 1, 1, 6], 3),
            (vec![1, 1, 1, 2, 2, 3], 3),
            (vec![1, 1, 1, 2, 5], 3),
            (vec![1, 1, 1, 3, 4], 5),
            (vec![1, 1, 1, 7], 1),
            (vec![1, 1, 2, 2, 2, 2], 1),
            (vec![1, 1, 2, 2, 4], 2),
            (vec![1, 1, 2, 3, 3], 3),
            (vec![1, 1, 2, 6], 3),
            (vec![1, 1, 3, 5], 3),
            (vec![1, 1, 4, 4], 2),
            (vec![1, 1, 8], 3),
            (vec![1, 2, 2, 2, 3], 3),
            (vec![1, 2, 2, 5], 3),
            (vec![1, 2, 3, 4], 5),
            (vec![1, 2, 7], 3),
            (vec![1, 3, 3, 3], 1),
            (vec![1, 3, 6], 3),
            (vec![1, 4, 5], 5),
            (vec![1, 9], 2),
            (vec![2, 2, 2, 2, 2], 1),
            (vec![2, 2, 2, 4], 2),
            (vec![2, 2, 3, 3], 3),
            (vec![2, 2, 6], 3),
            (vec![2, 3, 5], 7),
            (vec![2, 4, 4], 2),
            (vec![2, 8], 3),
            (vec![3, 3, 4], 5),
            (vec![3, 7], 3),
            (vec![4, 6], 5),
            (vec![5, 5], 1),
            (vec![10], 3),
        ];

        let partitions = SortedPartitions::generate(10);
        assert_eq!(partitions.len(), cases.len());
        let mut table = MarkTable::new(partitions.len());
        let mut scratch = Scratch::new(10);

        for (i, (parts, expected_marks)) in cases.into_iter().enumerate() {
            table.reset();
            let p = Partition::from_parts(parts).unwrap();
            let index = partitions.search(&p).unwrap();
            assert_eq!(index, i, "fixture out of catalogue order at {}", p);
            let height = process_index(&partitions, table.flags(), index, &mut scratch);
            assert!(height.is_some());
            assert_eq!(
                table.num_marked(), expected_marks,
                "mark count mismatch for {}", p,
            );
        }
    }

    #[test]
    fn heights_are_totients_of_orders() {
        for degree in 0..=10 {
            let partitions = SortedPartitions::generate(degree);
            let table = MarkTable::new(partitions.len());
            let mut scratch = Scratch::new(degree);
            for index in 0..partitions.len() {
                table.flags().reset();
                let t = partitions[index].cycle_type();
                let height = process_index(&partitions, table.flags(), index, &mut scratch)
                    .expect("unmarked entry must get a height");
                let order = t.order().max(1); // the degree-0 type has order 0, height 1
                assert_eq!(height, BigUint::from(totient(order)), "bad height for {}", t);
            }
        }
    }

    #[test]
    fn order_six_means_height_two() {
        let partitions = SortedPartitions::generate(6);
        let table = MarkTable::new(partitions.len());
        let mut scratch = Scratch::new(6);
        let p = Partition::from_parts(vec![1, 2, 3]).unwrap();
        assert_eq!(p.cycle_type().order(), 6);
        let index = partitions.search(&p).unwrap();
        let height = process_index(&partitions, table.flags(), index, &mut scratch);
        assert_eq!(height, Some(BigUint::from(2u32)));
    }

    #[test]
    fn marked_entries_are_skipped() {
        let partitions = SortedPartitions::generate(5);
        let table = MarkTable::new(partitions.len());
        let mut scratch = Scratch::new(5);
        table.flags().mark(3);
        assert_eq!(process_index(&partitions, table.flags(), 3, &mut scratch), None);
    }
}
