//! Cascade heap: a priority queue that batches insertions into sorted runs.
//!
//! This module provides [`CascadeQueue`] and the pieces it is built from:
//!
//! - [`Arena`]: forward-only slot region shared by every run of one queue
//! - [`Run`]: a bounded window of the arena kept in ascending order
//! - [`RunFactory`]: owns the arena and the run currently being built
//! - [`RunHeap`]: binary heap of sealed runs keyed by their head element
//! - [`Comparator`]: the total order shared by runs and the run heap
//!
//! # Overview
//!
//! ```text
//!   push ──► RunFactory ──(full: seal)──► RunHeap ──► pop
//!            [building run]               [run heads]
//! ```
//!
//! A push costs one insertion-sort pass over at most `run_capacity`
//! elements. Only whole runs enter the heap, so the heap orders `n / k`
//! run heads instead of `n` elements.
//!
//! # Examples
//!
//! ```rust
//! use cascade_heap::cascade::{ArenaCapacity, CascadeConfig, CascadeError, CascadeQueue, Natural};
//!
//! let config = CascadeConfig::default()
//!     .with_run_capacity(2)
//!     .with_arena_capacity(ArenaCapacity::Fixed(3));
//! let mut queue = CascadeQueue::with_config(config, Natural);
//!
//! queue.push(5).unwrap();
//! queue.push(3).unwrap();
//! queue.push(8).unwrap();
//! assert_eq!(
//!     queue.push(1),
//!     Err(CascadeError::CapacityExceeded { capacity: 3 })
//! );
//!
//! assert_eq!(queue.pop(), Ok(3));
//! assert_eq!(queue.pop(), Ok(5));
//! assert_eq!(queue.pop(), Ok(8));
//! assert_eq!(queue.pop(), Err(CascadeError::EmptyQueue));
//! ```

mod arena;
mod comparator;
mod config;
mod error;
mod factory;
mod queue;
mod run;
mod run_heap;

pub use arena::Arena;
pub use comparator::{ByKey, Comparator, Natural, Reversed};
pub use config::{ArenaCapacity, CascadeConfig, DEFAULT_RUN_CAPACITY, REFERENCE_ARENA_CAPACITY};
pub use error::CascadeError;
pub use factory::RunFactory;
pub use queue::CascadeQueue;
pub use run::Run;
pub use run_heap::RunHeap;
