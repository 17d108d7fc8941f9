//! Construction parameters for [`CascadeQueue`](super::CascadeQueue).

use super::error::CascadeError;

/// Run capacity used by [`CascadeQueue::new`](super::CascadeQueue::new).
pub const DEFAULT_RUN_CAPACITY: usize = 16;

/// The fixed arena ceiling of the reference cascade heap (ten million slots).
///
/// Pass it as [`ArenaCapacity::Fixed`] to reproduce those bounds exactly.
pub const REFERENCE_ARENA_CAPACITY: usize = 10_000_000;

/// How many element slots the arena may hand out over the queue's lifetime.
///
/// Slots are never recycled, so the bound counts every push ever made, not
/// the number of elements currently queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArenaCapacity {
    /// At most this many slots, reserved up front. Pushing past the bound
    /// fails with [`CascadeError::CapacityExceeded`].
    Fixed(usize),
    /// The region grows on demand; pushes never fail for lack of space.
    ///
    /// Vacated slots are not reclaimed either: memory grows with the total
    /// number of pushes over the queue's lifetime, not with the number of
    /// queued elements. Long-running queues with heavy churn should prefer a
    /// fresh queue per batch of work, or a `Fixed` bound.
    #[default]
    Growable,
}

impl ArenaCapacity {
    /// Returns the slot bound, or `None` for a growable arena.
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Fixed(limit) => Some(limit),
            Self::Growable => None,
        }
    }
}

/// Configuration of a cascade queue.
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::{ArenaCapacity, CascadeConfig};
///
/// let config = CascadeConfig::default()
///     .with_run_capacity(64)
///     .with_arena_capacity(ArenaCapacity::Fixed(1_000));
/// assert!(config.validate().is_ok());
/// assert!(CascadeConfig::default().with_run_capacity(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeConfig {
    /// Maximum number of elements in one run. Larger runs make pushes more
    /// expensive (insertion sort) and keep the run heap smaller.
    pub run_capacity: usize,
    /// Bound on the shared arena.
    pub arena: ArenaCapacity,
}

impl CascadeConfig {
    /// Returns a copy with the given run capacity.
    #[must_use]
    pub const fn with_run_capacity(mut self, run_capacity: usize) -> Self {
        self.run_capacity = run_capacity;
        self
    }

    /// Returns a copy with the given arena bound.
    #[must_use]
    pub const fn with_arena_capacity(mut self, arena: ArenaCapacity) -> Self {
        self.arena = arena;
        self
    }

    /// Checks that the configuration can build a working queue.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::InvalidConfig`] if the run capacity is zero or
    /// the arena is fixed at zero slots.
    pub const fn validate(&self) -> Result<(), CascadeError> {
        if self.run_capacity == 0 {
            return Err(CascadeError::InvalidConfig(
                "run capacity must be greater than 0",
            ));
        }
        if let ArenaCapacity::Fixed(0) = self.arena {
            return Err(CascadeError::InvalidConfig(
                "fixed arena capacity must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            run_capacity: DEFAULT_RUN_CAPACITY,
            arena: ArenaCapacity::Growable,
        }
    }
}
