//! Binary min-heap of sealed runs.
//!
//! Runs are keyed by their current head element, under the same comparator
//! that sorts elements inside each run. Uses 0-indexed storage with
//! parent = (i - 1) / 2, children = 2i + 1, 2i + 2.

use super::arena::Arena;
use super::comparator::Comparator;
use super::run::Run;

/// Array-backed binary heap over sealed, non-empty runs.
///
/// # Invariants
///
/// - Every stored run is non-empty.
/// - No run's head precedes its parent's head; the root therefore holds the
///   globally minimal head.
#[derive(Debug, Default)]
pub struct RunHeap {
    runs: Vec<Run>,
}

impl RunHeap {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Number of runs in the heap.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if the heap holds no runs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The run with the minimal head, if any.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Iterates over the stored runs in heap (array) order.
    pub fn iter(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter()
    }

    /// Total number of elements across all runs.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Inserts a sealed run and sifts it up.
    ///
    /// An empty run has no head to be keyed by; it is dropped instead of
    /// being stored.
    pub fn push<T, C>(&mut self, run: Run, arena: &Arena<T>, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        if run.is_empty() {
            return;
        }
        self.runs.push(run);
        let settled = self.sift_up(self.runs.len() - 1, arena, comparator);
        debug_assert!(self.is_ordered_at(settled, arena, comparator));
    }

    /// Removes the run with the minimal head and restores heap order.
    pub fn pop<T, C>(&mut self, arena: &Arena<T>, comparator: &C) -> Option<Run>
    where
        C: Comparator<T> + ?Sized,
    {
        if self.runs.is_empty() {
            return None;
        }
        let root = self.runs.swap_remove(0);
        if !self.runs.is_empty() {
            let settled = self.sift_down(0, arena, comparator);
            debug_assert!(self.is_ordered_at(settled, arena, comparator));
        }
        Some(root)
    }

    /// Checks the heap invariant over every parent/child pair.
    #[must_use]
    pub fn is_heap<T, C>(&self, arena: &Arena<T>, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.runs.iter().all(|run| !run.is_empty())
            && (1..self.runs.len())
                .all(|index| !self.precedes(index, (index - 1) / 2, arena, comparator))
    }

    /// Checks heap order between the run at `index`, its parent and its
    /// children. O(1); used after every sift in debug builds.
    fn is_ordered_at<T, C>(&self, index: usize, arena: &Arena<T>, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        let len = self.runs.len();
        let parent_ok = index == 0 || !self.precedes(index, (index - 1) / 2, arena, comparator);
        let children_ok = [2 * index + 1, 2 * index + 2]
            .into_iter()
            .filter(|&child| child < len)
            .all(|child| !self.precedes(child, index, arena, comparator));
        parent_ok && children_ok
    }

    /// Returns the index where the run came to rest.
    fn sift_up<T, C>(&mut self, mut index: usize, arena: &Arena<T>, comparator: &C) -> usize
    where
        C: Comparator<T> + ?Sized,
    {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes(index, parent, arena, comparator) {
                self.runs.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Returns the index where the run came to rest.
    fn sift_down<T, C>(&mut self, mut index: usize, arena: &Arena<T>, comparator: &C) -> usize
    where
        C: Comparator<T> + ?Sized,
    {
        let len = self.runs.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.precedes(left, smallest, arena, comparator) {
                smallest = left;
            }
            if right < len && self.precedes(right, smallest, arena, comparator) {
                smallest = right;
            }
            if smallest == index {
                return index;
            }

            self.runs.swap(index, smallest);
            index = smallest;
        }
    }

    #[inline]
    fn precedes<T, C>(&self, left: usize, right: usize, arena: &Arena<T>, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.runs[left]
            .compare_heads(&self.runs[right], arena, comparator)
            .is_some_and(std::cmp::Ordering::is_lt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::comparator::{Natural, Reversed};
    use crate::cascade::config::ArenaCapacity;
    use rstest::rstest;

    /// Builds one single-element run per value, laid out back to back.
    fn singleton_runs<C: Comparator<i32>>(values: &[i32], comparator: &C) -> (Arena<i32>, Vec<Run>) {
        let mut arena = Arena::new(ArenaCapacity::Growable);
        let runs = values
            .iter()
            .enumerate()
            .map(|(offset, &value)| {
                let mut run = Run::new(offset, 1);
                run.push(&mut arena, value, comparator).unwrap();
                run
            })
            .collect();
        (arena, runs)
    }

    #[rstest]
    fn test_pop_on_empty_heap() {
        let arena: Arena<i32> = Arena::new(ArenaCapacity::Growable);
        let mut heap = RunHeap::new();
        assert!(heap.is_empty());
        assert!(heap.pop(&arena, &Natural).is_none());
    }

    #[rstest]
    #[case(&[5, 3, 8, 1, 9, 2], &[1, 2, 3, 5, 8, 9])]
    #[case(&[4, 4, 1, 4], &[1, 4, 4, 4])]
    fn test_pop_order_follows_heads(#[case] values: &[i32], #[case] expected: &[i32]) {
        let (arena, runs) = singleton_runs(values, &Natural);
        let mut heap = RunHeap::new();
        for run in runs {
            heap.push(run, &arena, &Natural);
            assert!(heap.is_heap(&arena, &Natural));
        }

        let mut heads = Vec::new();
        while let Some(run) = heap.pop(&arena, &Natural) {
            assert!(heap.is_heap(&arena, &Natural));
            heads.push(*run.peek(&arena).unwrap());
        }
        assert_eq!(heads, expected);
    }

    #[rstest]
    fn test_reversed_comparator_puts_largest_head_at_root() {
        let (arena, runs) = singleton_runs(&[5, 3, 8, 1], &Reversed);
        let mut heap = RunHeap::new();
        for run in runs {
            heap.push(run, &arena, &Reversed);
        }
        assert_eq!(heap.peek().and_then(|run| run.peek(&arena)), Some(&8));
    }

    #[rstest]
    fn test_sifted_run_is_ordered_against_neighbours() {
        let (arena, runs) = singleton_runs(&[9, 7, 5, 3, 1, 8, 6], &Natural);
        let mut heap = RunHeap::new();
        for run in runs {
            heap.push(run, &arena, &Natural);
            assert!((0..heap.len()).all(|index| heap.is_ordered_at(index, &arena, &Natural)));
        }
        heap.pop(&arena, &Natural);
        assert!((0..heap.len()).all(|index| heap.is_ordered_at(index, &arena, &Natural)));
        assert!(heap.is_heap(&arena, &Natural));
    }

    #[rstest]
    fn test_empty_run_is_not_admitted() {
        let arena: Arena<i32> = Arena::new(ArenaCapacity::Growable);
        let mut heap = RunHeap::new();
        heap.push(Run::new(0, 4), &arena, &Natural);
        assert!(heap.is_empty());
    }

    #[rstest]
    fn test_element_count_sums_runs() {
        let mut arena = Arena::new(ArenaCapacity::Growable);
        let mut first = Run::new(0, 2);
        first.push(&mut arena, 1, &Natural).unwrap();
        first.push(&mut arena, 2, &Natural).unwrap();
        let mut second = Run::new(2, 2);
        second.push(&mut arena, 0, &Natural).unwrap();

        let mut heap = RunHeap::new();
        heap.push(first, &arena, &Natural);
        heap.push(second, &arena, &Natural);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.element_count(), 3);
        assert_eq!(heap.peek().map(Run::start), Some(2));
    }
}
