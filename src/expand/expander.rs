use ::std::sync::Arc;
use ::std::sync::mpsc;
use ::std::thread::JoinHandle;

use ::num_bigint::{BigInt, BigUint};
use ::num_rational::BigRational;
use ::num_traits::Zero;

use ::pgw_bigmath::factorial;
use ::pgw_partition::{CycleType, SortedPartitions};

use crate::table::MarkTable;
use crate::worker;

/// How many catalogue indices may wait in one worker's queue at a
/// time; the distributor blocks when the target queue is full.
const WORKER_QUEUE_DEPTH: usize = 100;

/// Classifies every cycle type of one degree as maximal or not by
/// expanding the power graph across a fixed pool of worker threads,
/// then aggregates the exact width over the maximal types.
///
/// Expansion runs at most once per value; every query triggers it on
/// demand, and re-entry is a no-op.  Degrees are independent; the
/// pool lives only for the duration of one `expand` call.
pub struct Expander {
    degree: usize,
    expanded: bool,
    partitions: Option<Arc<SortedPartitions>>,
    table: Option<MarkTable>,
    width: Option<BigUint>,
}

impl Expander {
    pub fn new(degree: usize) -> Expander {
        Expander {
            degree,
            expanded: false,
            partitions: None,
            table: None,
            width: None,
        }
    }

    pub fn degree(&self) -> usize
    { self.degree }

    /// n!, the order of the group whose classes are being expanded.
    pub fn order(&self) -> BigUint
    { factorial(self.degree) }

    /// Run the marking engine to completion.  Idempotent; nothing of
    /// the outcome is observable until this returns.
    pub fn expand(&mut self) {
        if self.expanded {
            return;
        }
        let partitions = self.ensure_catalogue();
        let mut table = MarkTable::new(partitions.len());
        info!("begin expansion; n={}", self.degree);

        let num_workers = ::num_cpus::get().max(1);
        let mut senders = Vec::with_capacity(num_workers);
        let mut workers: Vec<JoinHandle<_>> = Vec::with_capacity(num_workers);
        for _ in 0..num_workers {
            let (sender, queue) = mpsc::sync_channel::<usize>(WORKER_QUEUE_DEPTH);
            let partitions = Arc::clone(&partitions);
            let flags = Arc::clone(table.flags());
            workers.push(::std::thread::spawn(move || {
                worker::worker_main(queue, &partitions, &flags)
            }));
            senders.push(sender);
        }
        debug!("spawned {} workers", num_workers);

        for index in 0..partitions.len() {
            if senders[index % num_workers].send(index).is_err() {
                // a queue only hangs up when its worker panicked;
                // stop distributing and let the join below re-raise
                break;
            }
        }
        drop(senders);

        debug!("waiting on workers");
        for handle in workers {
            match handle.join() {
                Ok(heights) => {
                    for (index, height) in heights {
                        table.set_height(index, height);
                    }
                }
                Err(payload) => ::std::panic::resume_unwind(payload),
            }
        }
        info!("expansion complete; n={}", self.degree);

        self.table = Some(table);
        self.expanded = true;
    }

    /// The finished mark table.  Expands on first use.
    pub fn mark_table(&mut self) -> &MarkTable {
        self.expand();
        self.table.as_ref().expect("expanded with no table")
    }

    /// The number of maximal types of this degree.
    pub fn num_maximal_types(&mut self) -> usize {
        self.mark_table().num_unmarked()
    }

    /// The width of this degree: Σ class-size/height over the maximal
    /// types.  Exact, and memoized after the first call.
    pub fn width(&mut self) -> BigUint {
        if let Some(ref width) = self.width {
            return width.clone();
        }
        self.expand();
        info!("calculating width; n={}", self.degree);
        let partitions = self.ensure_catalogue();
        let table = self.table.as_ref().expect("expanded with no table");

        let mut width = BigUint::zero();
        let mut t = CycleType::zeroed(self.degree);
        for (index, p) in partitions.iter().enumerate() {
            if table.is_marked(index) {
                continue;
            }
            p.write_cycle_type(&mut t);
            let class = t.class_size();
            let height = table.height(index)
                .unwrap_or_else(|| panic!("unmarked type {} never got a height", t));
            assert!(
                (&class % height).is_zero(),
                "width share for {} is not integral; class={} height={}", t, class, height,
            );
            width += class / height;
        }
        debug!("done calculating width; n={} width={}", self.degree, width);
        self.width = Some(width.clone());
        width
    }

    /// Width over n!, as an exact rational.
    pub fn density(&mut self) -> BigRational {
        let width = self.width();
        BigRational::new(BigInt::from(width), BigInt::from(self.order()))
    }

    fn ensure_catalogue(&mut self) -> Arc<SortedPartitions> {
        match self.partitions {
            Some(ref partitions) => Arc::clone(partitions),
            None => {
                info!("generating partitions; n={}", self.degree);
                let partitions = Arc::new(SortedPartitions::generate(self.degree));
                debug!(
                    "done generating partitions; n={} count={}",
                    self.degree, partitions.len(),
                );
                self.partitions = Some(Arc::clone(&partitions));
                partitions
            }
        }
    }
}
