//! The cascade priority queue.
//!
//! Pushes go into a small run kept sorted by insertion sort. When that run
//! is full it is sealed and handed to a binary heap keyed by each run's
//! head. Pops take the head of the minimal run and put the run back if it
//! still holds elements.
//!
//! # Time Complexity
//!
//! With run capacity `k` and `n` queued elements:
//!
//! | Operation | Complexity                        |
//! |-----------|-----------------------------------|
//! | `push`    | O(k) + O(log(n / k)) when sealing |
//! | `pop`     | O(log(n / k))                     |
//! | `peek`    | O(1)                              |
//! | `len`     | O(1)                              |
//!
//! A plain binary heap spends O(log n) comparisons per operation on the
//! whole element set. Here the heap only ever sees run heads, so it is `k`
//! times smaller; the price is up to `k` cheap, cache-resident comparisons
//! per push.

use std::fmt;

use super::comparator::{Comparator, Natural};
use super::config::{CascadeConfig, DEFAULT_RUN_CAPACITY};
use super::error::CascadeError;
use super::factory::RunFactory;
use super::run::Run;
use super::run_heap::RunHeap;

/// A priority queue that batches insertions into sorted runs and merges
/// runs through a heap of run heads.
///
/// Elements pop in ascending order under the comparator `C`. The arena
/// behind the runs is forward-only: every push consumes one slot for the
/// lifetime of the queue, so an [`ArenaCapacity::Fixed`](super::ArenaCapacity::Fixed) queue accepts a
/// bounded number of pushes in total.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The order. Defaults to [`Natural`] (ascending via `Ord`).
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::CascadeQueue;
///
/// let mut queue = CascadeQueue::with_run_capacity(2);
/// for value in [5, 3, 8, 1] {
///     queue.push(value).unwrap();
/// }
/// assert_eq!(queue.len(), 4);
///
/// let popped: Vec<i32> = std::iter::from_fn(|| queue.pop().ok()).collect();
/// assert_eq!(popped, vec![1, 3, 5, 8]);
/// ```
pub struct CascadeQueue<T, C = Natural> {
    factory: RunFactory<T>,
    runs: RunHeap,
    comparator: C,
    len: usize,
}

impl<T: Ord> CascadeQueue<T, Natural> {
    /// Creates an empty ascending queue with the default run capacity and a
    /// growable arena.
    #[must_use]
    pub fn new() -> Self {
        Self::with_run_capacity(DEFAULT_RUN_CAPACITY)
    }

    /// Creates an empty ascending queue with run capacity `run_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `run_capacity` is 0. Use
    /// [`try_with_config`](Self::try_with_config) for a non-panicking version.
    #[must_use]
    pub fn with_run_capacity(run_capacity: usize) -> Self {
        Self::with_comparator(run_capacity, Natural)
    }
}

impl<T, C: Comparator<T>> CascadeQueue<T, C> {
    /// Creates an empty queue ordered by `comparator`.
    ///
    /// # Panics
    ///
    /// Panics if `run_capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cascade_heap::cascade::{CascadeQueue, Reversed};
    ///
    /// let mut queue = CascadeQueue::with_comparator(2, Reversed);
    /// for value in [5, 3, 8, 1] {
    ///     queue.push(value).unwrap();
    /// }
    /// assert_eq!(queue.pop(), Ok(8));
    /// ```
    #[must_use]
    pub fn with_comparator(run_capacity: usize, comparator: C) -> Self {
        Self::with_config(
            CascadeConfig::default().with_run_capacity(run_capacity),
            comparator,
        )
    }

    /// Creates an empty queue from `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config` does not validate.
    #[must_use]
    pub fn with_config(config: CascadeConfig, comparator: C) -> Self {
        Self::try_with_config(config, comparator)
            .expect("CascadeQueue: run capacity > 0 and fixed arena capacity > 0 required")
    }

    /// Tries to create an empty queue from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::InvalidConfig`] if the run capacity is 0 or
    /// the arena is fixed at 0 slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cascade_heap::cascade::{ArenaCapacity, CascadeConfig, CascadeQueue, Natural};
    ///
    /// let config = CascadeConfig::default().with_arena_capacity(ArenaCapacity::Fixed(100));
    /// let queue = CascadeQueue::<u32, _>::try_with_config(config, Natural).unwrap();
    /// assert_eq!(queue.arena_capacity(), Some(100));
    ///
    /// let invalid = CascadeConfig::default().with_run_capacity(0);
    /// assert!(CascadeQueue::<u32, _>::try_with_config(invalid, Natural).is_err());
    /// ```
    pub fn try_with_config(config: CascadeConfig, comparator: C) -> Result<Self, CascadeError> {
        let factory = RunFactory::new(config)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            run_capacity = config.run_capacity,
            arena = ?config.arena,
            "created cascade queue"
        );

        Ok(Self {
            factory,
            runs: RunHeap::new(),
            comparator,
            len: 0,
        })
    }

    /// Adds an element.
    ///
    /// If the building run is full it is sealed into the run heap first.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::CapacityExceeded`] if a fixed arena has no
    /// slot left. The element is dropped and the queue is unchanged.
    pub fn push(&mut self, element: T) -> Result<(), CascadeError> {
        if !self.factory.can_accept() {
            self.seal_building_run();
        }
        self.factory.accept(element, &self.comparator)?;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the minimal element.
    ///
    /// A partially filled building run is sealed first so that its elements
    /// take part in the selection.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::EmptyQueue`] if no element is queued.
    pub fn pop(&mut self) -> Result<T, CascadeError> {
        if !self.factory.is_empty() {
            self.seal_building_run();
        }
        let mut run = self
            .runs
            .pop(self.factory.arena(), &self.comparator)
            .ok_or(CascadeError::EmptyQueue)?;
        let element = run.pop(self.factory.arena_mut())?;
        self.len -= 1;
        if !run.is_empty() {
            self.runs.push(run, self.factory.arena(), &self.comparator);
        }
        Ok(element)
    }

    /// Returns the element the next [`pop`](Self::pop) would return.
    ///
    /// Compares the building run's head with the run heap's root; nothing
    /// is sealed.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        let arena = self.factory.arena();
        let building = self.factory.building().peek(arena);
        let sealed = self.runs.peek().and_then(|run| run.peek(arena));
        match (building, sealed) {
            (Some(building), Some(sealed)) => {
                if self.comparator.less(building, sealed) {
                    Some(building)
                } else {
                    Some(sealed)
                }
            }
            (building, sealed) => building.or(sealed),
        }
    }

    /// Checks every structural invariant: the building run and each sealed
    /// run are sorted, the run heap is heap-ordered, and the element count
    /// matches. Runs in O(n).
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let arena = self.factory.arena();
        self.factory.building().is_sorted(arena, &self.comparator)
            && self.runs.iter().all(|run| run.is_sorted(arena, &self.comparator))
            && self.runs.is_heap(arena, &self.comparator)
            && self.runs.element_count() + self.factory.building().len() == self.len
    }

    fn seal_building_run(&mut self) {
        let run: Run = self.factory.seal();
        self.runs.push(run, self.factory.arena(), &self.comparator);
    }
}

impl<T, C> CascadeQueue<T, C> {
    /// Number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of each run.
    #[inline]
    #[must_use]
    pub const fn run_capacity(&self) -> usize {
        self.factory.run_capacity()
    }

    /// Number of sealed runs currently in the run heap.
    #[inline]
    #[must_use]
    pub fn sealed_runs(&self) -> usize {
        self.runs.len()
    }

    /// Number of seal events since construction.
    #[inline]
    #[must_use]
    pub const fn seal_count(&self) -> u64 {
        self.factory.seal_count()
    }

    /// Arena slots consumed so far, including slots of popped elements.
    #[inline]
    #[must_use]
    pub fn arena_high_water_mark(&self) -> usize {
        self.factory.arena().high_water_mark()
    }

    /// The arena bound, or `None` for a growable arena.
    #[inline]
    #[must_use]
    pub const fn arena_capacity(&self) -> Option<usize> {
        self.factory.arena().capacity()
    }

    /// The comparator ordering this queue.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T: Ord> Default for CascadeQueue<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for CascadeQueue<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CascadeQueue")
            .field("len", &self.len)
            .field("run_capacity", &self.run_capacity())
            .field("building", &self.factory.building().len())
            .field("sealed_runs", &self.runs.len())
            .field("arena_high_water_mark", &self.arena_high_water_mark())
            .field("arena_capacity", &self.arena_capacity())
            .finish()
    }
}
