//! Bounded sorted runs.
//!
//! A [`Run`] is a window of consecutive arena slots whose live elements are
//! kept in non-decreasing order. The run only records where its window is;
//! the elements themselves live in the [`Arena`], which every operation
//! borrows explicitly.
//!
//! # Time Complexity
//!
//! | Operation | Complexity        |
//! |-----------|-------------------|
//! | `push`    | O(len) (insertion sort, bounded by capacity) |
//! | `pop`     | O(1)              |
//! | `peek`    | O(1)              |

use std::cmp::Ordering;

use super::arena::Arena;
use super::comparator::Comparator;
use super::error::CascadeError;

/// An ascending, bounded batch of elements occupying a window of the arena.
///
/// While building, a run grows at the arena's high-water mark. Once sealed
/// it only shrinks from the head. A `Run` is deliberately not `Clone`:
/// whoever holds it is the only party allowed to touch its window.
///
/// # Invariants
///
/// - Live elements occupy exactly the slots `head..head + len`.
/// - Those elements are non-decreasing under the queue's comparator.
/// - `head + len - start <= capacity`.
/// - A sealed run never grows again.
#[derive(Debug, PartialEq, Eq)]
pub struct Run {
    start: usize,
    head: usize,
    len: usize,
    capacity: usize,
    sealed: bool,
}

impl Run {
    /// Creates an empty run whose window begins at arena slot `start`.
    #[must_use]
    pub const fn new(start: usize, capacity: usize) -> Self {
        Self {
            start,
            head: start,
            len: 0,
            capacity,
            sealed: false,
        }
    }

    /// Freezes the run for insertion. Only pops are accepted afterwards.
    pub(crate) const fn seal(&mut self) {
        self.sealed = true;
    }

    /// Inserts `element` and restores ascending order with one
    /// insertion-sort pass from the tail.
    ///
    /// The run must still be building: not sealed, never popped, and ending
    /// at the arena's high-water mark. That holds for the run a
    /// [`RunFactory`](super::RunFactory) is currently building.
    ///
    /// # Errors
    ///
    /// - [`CascadeError::SealedRun`] if the run is not the building run.
    /// - [`CascadeError::RunFull`] if the run already holds `capacity` elements.
    /// - [`CascadeError::CapacityExceeded`] if the arena is out of slots.
    pub fn push<T, C>(
        &mut self,
        arena: &mut Arena<T>,
        element: T,
        comparator: &C,
    ) -> Result<(), CascadeError>
    where
        C: Comparator<T> + ?Sized,
    {
        if self.sealed || self.head != self.start || self.end() != arena.high_water_mark() {
            return Err(CascadeError::SealedRun);
        }
        if self.is_full() {
            return Err(CascadeError::RunFull {
                capacity: self.capacity,
            });
        }

        let slot = arena.bump(element)?;
        self.len += 1;

        let mut index = slot;
        while index > self.head && less_at(arena, comparator, index, index - 1) {
            arena.swap(index, index - 1);
            index -= 1;
        }
        debug_assert!(self.is_sorted(arena, comparator));
        Ok(())
    }

    /// Removes and returns the head (minimal) element.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::EmptyRun`] if the run holds no elements.
    pub fn pop<T>(&mut self, arena: &mut Arena<T>) -> Result<T, CascadeError> {
        if self.is_empty() {
            return Err(CascadeError::EmptyRun);
        }
        let element = arena.take(self.head).ok_or(CascadeError::EmptyRun)?;
        self.head += 1;
        self.len -= 1;
        Ok(element)
    }

    /// Returns the head element without removing it.
    #[inline]
    #[must_use]
    pub fn peek<'a, T>(&self, arena: &'a Arena<T>) -> Option<&'a T> {
        if self.is_empty() {
            None
        } else {
            arena.get(self.head)
        }
    }

    /// Orders two runs by their head elements.
    ///
    /// Returns `None` when either run is empty: empty runs have no head and
    /// take no part in the ordering.
    #[must_use]
    pub fn compare_heads<T, C>(
        &self,
        other: &Self,
        arena: &Arena<T>,
        comparator: &C,
    ) -> Option<Ordering>
    where
        C: Comparator<T> + ?Sized,
    {
        let left = self.peek(arena)?;
        let right = other.peek(arena)?;
        Some(comparator.compare(left, right))
    }

    /// Iterates over the live elements in ascending order.
    pub fn iter<'a, T>(&self, arena: &'a Arena<T>) -> impl Iterator<Item = &'a T> + use<'a, T> {
        (self.head..self.end()).filter_map(move |index| arena.get(index))
    }

    /// Checks the ascending invariant.
    #[must_use]
    pub fn is_sorted<T, C>(&self, arena: &Arena<T>, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.iter(arena)
            .zip(self.iter(arena).skip(1))
            .all(|(previous, next)| !comparator.less(next, previous))
    }

    /// Returns `true` once the run has been handed out by
    /// [`RunFactory::seal`](super::RunFactory::seal).
    #[inline]
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns `true` if the window holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element fits.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.end() - self.start >= self.capacity
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of elements the run can hold.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Arena slot where the window begins.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last slot of the window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.head + self.len
    }
}

#[inline]
fn less_at<T, C>(arena: &Arena<T>, comparator: &C, left: usize, right: usize) -> bool
where
    C: Comparator<T> + ?Sized,
{
    match (arena.get(left), arena.get(right)) {
        (Some(left), Some(right)) => comparator.less(left, right),
        _ => false,
    }
}
