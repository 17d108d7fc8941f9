//! Error type for the cascade queue.
//!
//! Every variant reports a misuse of the structure: the queue itself never
//! fails on well-formed input. They are returned as values so callers decide
//! whether to propagate or to fail loudly.

use std::fmt;

/// Errors reported by the cascade queue and its building blocks.
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::{CascadeError, CascadeQueue};
///
/// let mut queue: CascadeQueue<i32> = CascadeQueue::new();
/// assert_eq!(queue.pop(), Err(CascadeError::EmptyQueue));
/// assert_eq!(
///     CascadeError::EmptyQueue.to_string(),
///     "pop called on an empty cascade queue"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeError {
    /// `pop` was called while no element is queued anywhere.
    EmptyQueue,

    /// The fixed arena has handed out every slot it owns.
    ///
    /// Slots vacated by popped elements are not reused.
    CapacityExceeded {
        /// The arena bound, in elements.
        capacity: usize,
    },

    /// `pop` was called on a run holding no elements.
    EmptyRun,

    /// `push` was called on a run that is no longer building: it was sealed,
    /// has been popped from, or no longer ends at the arena's high-water mark.
    SealedRun,

    /// `push` was called on a run that already holds `capacity` elements.
    RunFull {
        /// The run capacity, in elements.
        capacity: usize,
    },

    /// The configuration cannot build a working queue.
    InvalidConfig(&'static str),
}

impl fmt::Display for CascadeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQueue => write!(formatter, "pop called on an empty cascade queue"),
            Self::CapacityExceeded { capacity } => {
                write!(
                    formatter,
                    "arena capacity exceeded: all {capacity} slots have been used"
                )
            }
            Self::EmptyRun => write!(formatter, "pop called on an empty run"),
            Self::SealedRun => write!(formatter, "push called on a sealed run"),
            Self::RunFull { capacity } => {
                write!(formatter, "run is full: capacity is {capacity} elements")
            }
            Self::InvalidConfig(reason) => write!(formatter, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for CascadeError {}
