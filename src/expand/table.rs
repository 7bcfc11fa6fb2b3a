use ::std::sync::Arc;
use ::std::sync::atomic::{AtomicBool, Ordering};

use ::num_bigint::BigUint;

/// One non-maximality flag per catalogue index, shared by every
/// worker during an expansion.
///
/// Marking is monotonic: flags only ever go from unset to set, and
/// several workers may redundantly mark the same index.  Stores and
/// loads are relaxed; the worker join is what publishes the final
/// flag values to whoever reads the table afterwards.
#[derive(Debug)]
pub struct MarkFlags {
    flags: Vec<AtomicBool>,
}

impl MarkFlags {
    fn new(len: usize) -> MarkFlags {
        MarkFlags {
            flags: (0..len).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    pub fn len(&self) -> usize
    { self.flags.len() }

    pub fn is_empty(&self) -> bool
    { self.flags.is_empty() }

    pub fn mark(&self, index: usize) {
        self.flags[index].store(true, Ordering::Relaxed);
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.flags[index].load(Ordering::Relaxed)
    }

    pub fn num_marked(&self) -> usize {
        self.flags.iter()
            .filter(|f| f.load(Ordering::Relaxed))
            .count()
    }

    pub fn num_unmarked(&self) -> usize {
        self.len() - self.num_marked()
    }

    pub(crate) fn reset(&self) {
        for f in &self.flags {
            f.store(false, Ordering::Relaxed);
        }
    }
}

/// The per-degree mark table: a non-maximality flag and a height for
/// every catalogue index.
///
/// The flags live behind an `Arc` so workers can share them.  Each
/// height slot has a single writer, the thread that owns the table,
/// and is only filled in after every worker has been joined.  A
/// height stays `None` when its index was already marked by the time
/// a worker visited it.
#[derive(Debug)]
pub struct MarkTable {
    flags: Arc<MarkFlags>,
    heights: Vec<Option<BigUint>>,
}

impl MarkTable {
    pub fn new(len: usize) -> MarkTable {
        MarkTable {
            flags: Arc::new(MarkFlags::new(len)),
            heights: vec![None; len],
        }
    }

    pub fn len(&self) -> usize
    { self.flags.len() }

    pub fn is_empty(&self) -> bool
    { self.flags.is_empty() }

    pub fn flags(&self) -> &Arc<MarkFlags>
    { &self.flags }

    pub fn is_marked(&self, index: usize) -> bool
    { self.flags.is_marked(index) }

    pub fn num_marked(&self) -> usize
    { self.flags.num_marked() }

    pub fn num_unmarked(&self) -> usize
    { self.flags.num_unmarked() }

    pub fn height(&self, index: usize) -> Option<&BigUint>
    { self.heights[index].as_ref() }

    pub(crate) fn set_height(&mut self, index: usize, height: BigUint) {
        debug_assert!(self.heights[index].is_none());
        self.heights[index] = Some(height);
    }

    /// Return the table to its zeroed state, so that isolated tests
    /// can replay marking decisions one entry at a time.
    pub fn reset(&mut self) {
        self.flags.reset();
        for h in &mut self.heights {
            *h = None;
        }
    }
}
