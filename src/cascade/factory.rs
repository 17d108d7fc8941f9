//! Run production over a single arena.
//!
//! The [`RunFactory`] owns the arena and the one run that is still accepting
//! elements. Sealing hands that run to the caller and opens the next one at
//! the arena's high-water mark, directly after the sealed window.

use super::arena::Arena;
use super::comparator::Comparator;
use super::config::CascadeConfig;
use super::error::CascadeError;
use super::run::Run;

/// Owner of the arena and of the run currently being built.
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::{CascadeConfig, Natural, RunFactory};
///
/// let mut factory = RunFactory::new(CascadeConfig::default().with_run_capacity(2)).unwrap();
/// factory.accept(5, &Natural).unwrap();
/// factory.accept(3, &Natural).unwrap();
/// assert!(!factory.can_accept());
///
/// let mut sealed = factory.seal();
/// assert_eq!(sealed.len(), 2);
/// assert!(factory.can_accept());
/// assert_eq!(sealed.pop(factory.arena_mut()), Ok(3));
/// ```
#[derive(Debug)]
pub struct RunFactory<T> {
    arena: Arena<T>,
    building: Run,
    run_capacity: usize,
    seal_count: u64,
}

impl<T> RunFactory<T> {
    /// Creates a factory with an empty arena and an empty building run.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: CascadeConfig) -> Result<Self, CascadeError> {
        config.validate()?;
        Ok(Self {
            arena: Arena::new(config.arena),
            building: Run::new(0, config.run_capacity),
            run_capacity: config.run_capacity,
            seal_count: 0,
        })
    }

    /// Returns `true` if the building run has room for another element.
    #[inline]
    #[must_use]
    pub const fn can_accept(&self) -> bool {
        !self.building.is_full()
    }

    /// Inserts `element` into the building run.
    ///
    /// # Errors
    ///
    /// - [`CascadeError::RunFull`] if [`can_accept`](Self::can_accept) is `false`.
    /// - [`CascadeError::CapacityExceeded`] if the arena is out of slots.
    pub fn accept<C>(&mut self, element: T, comparator: &C) -> Result<(), CascadeError>
    where
        C: Comparator<T> + ?Sized,
    {
        self.building.push(&mut self.arena, element, comparator)
    }

    /// Hands the building run to the caller and starts a new one right
    /// after it.
    ///
    /// The factory keeps no reference to the returned run. Sealing an empty
    /// run is allowed and yields a run the caller can simply drop.
    pub fn seal(&mut self) -> Run {
        let next = Run::new(self.arena.high_water_mark(), self.run_capacity);
        let mut sealed = std::mem::replace(&mut self.building, next);
        sealed.seal();
        self.seal_count += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = sealed.start(),
            len = sealed.len(),
            seal_count = self.seal_count,
            "sealed run"
        );

        sealed
    }

    /// Returns `true` if the building run holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.building.is_empty()
    }

    /// The run currently accepting elements.
    #[inline]
    #[must_use]
    pub const fn building(&self) -> &Run {
        &self.building
    }

    /// Iterates over the building run's elements in ascending order.
    pub fn building_elements(&self) -> impl Iterator<Item = &T> {
        self.building.iter(&self.arena)
    }

    /// Shared access to the arena, for reading sealed runs.
    #[inline]
    #[must_use]
    pub const fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    /// Exclusive access to the arena, for popping from sealed runs.
    ///
    /// Sealed runs never overlap the building run's window, so popping from
    /// them cannot disturb it.
    #[inline]
    pub const fn arena_mut(&mut self) -> &mut Arena<T> {
        &mut self.arena
    }

    /// Capacity of every run this factory produces.
    #[inline]
    #[must_use]
    pub const fn run_capacity(&self) -> usize {
        self.run_capacity
    }

    /// Number of runs sealed so far, including empty ones.
    #[inline]
    #[must_use]
    pub const fn seal_count(&self) -> u64 {
        self.seal_count
    }
}
