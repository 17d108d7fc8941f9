//! # cascade-heap
//!
//! A priority queue optimized for workloads that interleave many insertions
//! with extractions.
//!
//! ## Overview
//!
//! A [`CascadeQueue`](cascade::CascadeQueue) collects pushed elements into
//! small runs kept sorted by insertion sort. Full runs are sealed into a
//! binary heap ordered by each run's smallest element, so the expensive
//! heap machinery works on `n / k` run heads rather than `n` elements.
//!
//! All runs live in one forward-only arena. The arena is either bounded
//! ([`ArenaCapacity::Fixed`](cascade::ArenaCapacity::Fixed)) or grows on
//! demand.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events on construction and on every seal
//!   (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the configuration types
//!
//! ## Example
//!
//! ```rust
//! use cascade_heap::prelude::*;
//!
//! let mut queue = CascadeQueue::with_comparator(2, Reversed);
//! for value in [5, 3, 8, 1] {
//!     queue.push(value).unwrap();
//! }
//! assert_eq!(queue.pop(), Ok(8));
//! assert_eq!(queue.pop(), Ok(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the queue, its configuration and the comparators.
///
/// # Usage
///
/// ```rust
/// use cascade_heap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cascade::{
        ArenaCapacity, ByKey, CascadeConfig, CascadeError, CascadeQueue, Comparator, Natural,
        Reversed,
    };
}

pub mod cascade;
