//! Forward-only slot arena shared by every run of one queue.
//!
//! The arena is a single region of element slots with a high-water mark.
//! New elements are only ever appended at the mark; a run is a window of
//! consecutive slots below it. Popping an element vacates its slot, and a
//! vacated slot is never handed out again.
//!
//! ```text
//!   0                                       high_water_mark      limit
//!   | drained | sealed run A | sealed run B | building run |      |
//!   |  ....   |   a0 a1 a2   |    b0 b1     |   c0 c1      | free |
//! ```

use super::config::ArenaCapacity;
use super::error::CascadeError;

/// Forward-only region of element slots.
///
/// `Fixed` arenas reserve their whole bound at construction and never
/// reallocate. `Growable` arenas extend on demand and keep one slot per
/// push ever made, so their memory tracks total pushes, not live elements.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    limit: Option<usize>,
}

impl<T> Arena<T> {
    /// Creates an empty arena with the given bound.
    #[must_use]
    pub fn new(capacity: ArenaCapacity) -> Self {
        let limit = capacity.limit();
        let slots = limit.map_or_else(Vec::new, Vec::with_capacity);
        Self { slots, limit }
    }

    /// Appends `value` at the high-water mark and returns its slot index.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::CapacityExceeded`] if a fixed arena has
    /// already handed out every slot. `value` is dropped in that case.
    pub fn bump(&mut self, value: T) -> Result<usize, CascadeError> {
        if let Some(capacity) = self.limit
            && self.slots.len() >= capacity
        {
            return Err(CascadeError::CapacityExceeded { capacity });
        }
        let index = self.slots.len();
        self.slots.push(Some(value));
        Ok(index)
    }

    /// Returns the live element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Moves the element at `index` out, vacating the slot.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Swaps the contents of two slots.
    ///
    /// # Panics
    ///
    /// Panics if either index is at or above the high-water mark.
    #[inline]
    pub fn swap(&mut self, first: usize, second: usize) {
        self.slots.swap(first, second);
    }

    /// Number of slots handed out so far, live or vacated.
    #[inline]
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.slots.len()
    }

    /// The slot bound, or `None` for a growable arena.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.limit
    }

    /// Slots still available, or `None` for a growable arena.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.limit
            .map(|capacity| capacity.saturating_sub(self.slots.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_bump_appends_at_high_water_mark() {
        let mut arena = Arena::new(ArenaCapacity::Growable);
        assert_eq!(arena.bump('a'), Ok(0));
        assert_eq!(arena.bump('b'), Ok(1));
        assert_eq!(arena.high_water_mark(), 2);
        assert_eq!(arena.get(1), Some(&'b'));
        assert_eq!(arena.remaining(), None);
    }

    #[rstest]
    fn test_fixed_arena_rejects_past_bound() {
        let mut arena = Arena::new(ArenaCapacity::Fixed(2));
        arena.bump(1).unwrap();
        arena.bump(2).unwrap();
        assert_eq!(arena.remaining(), Some(0));
        assert_eq!(
            arena.bump(3),
            Err(CascadeError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(arena.high_water_mark(), 2);
    }

    #[rstest]
    fn test_taken_slot_is_not_reused() {
        let mut arena = Arena::new(ArenaCapacity::Fixed(2));
        arena.bump(10).unwrap();
        assert_eq!(arena.take(0), Some(10));
        assert_eq!(arena.take(0), None);
        assert_eq!(arena.get(0), None);
        assert_eq!(arena.bump(20), Ok(1));
        assert!(arena.bump(30).is_err());
    }

    #[rstest]
    fn test_swap_exchanges_slots() {
        let mut arena = Arena::new(ArenaCapacity::Growable);
        arena.bump("left").unwrap();
        arena.bump("right").unwrap();
        arena.swap(0, 1);
        assert_eq!(arena.get(0), Some(&"right"));
        assert_eq!(arena.get(1), Some(&"left"));
    }

    #[rstest]
    fn test_drop_releases_live_elements_only() {
        let tracker = Rc::new(());
        let mut arena = Arena::new(ArenaCapacity::Growable);
        arena.bump(Rc::clone(&tracker)).unwrap();
        arena.bump(Rc::clone(&tracker)).unwrap();
        let taken = arena.take(0);
        assert_eq!(Rc::strong_count(&tracker), 3);
        drop(arena);
        assert_eq!(Rc::strong_count(&tracker), 2);
        drop(taken);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
