//! Total orders used by the cascade queue.
//!
//! A single [`Comparator`] instance orders elements inside each run
//! (insertion sort) and orders sealed runs inside the run heap (by head
//! element). Keeping both on the same instance guarantees that the two
//! levels agree on what "minimal" means.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// The queue pops elements in ascending order under `compare`: the element
/// for which `compare` reports [`Ordering::Less`] against every other queued
/// element comes out first.
///
/// Closures of the form `Fn(&T, &T) -> Ordering` implement this trait, so an
/// ad hoc order can be supplied without declaring a type.
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::{CascadeQueue, Comparator, Reversed};
///
/// assert!(Reversed.less(&8, &5));
///
/// let mut queue = CascadeQueue::with_comparator(4, |left: &i32, right: &i32| {
///     left.abs().cmp(&right.abs())
/// });
/// queue.push(-3).unwrap();
/// queue.push(2).unwrap();
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(-3));
/// ```
pub trait Comparator<T> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` strictly precedes `right`.
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }
}

/// Ascending order via [`Ord`]. The default comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Descending order via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord> Comparator<T> for Reversed {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

/// Ascending order on a key projected out of each element.
///
/// # Examples
///
/// ```rust
/// use cascade_heap::cascade::{ByKey, CascadeQueue};
///
/// let mut queue = CascadeQueue::with_comparator(2, ByKey::new(|task: &(u8, char)| task.0));
/// queue.push((3, 'l')).unwrap();
/// queue.push((1, 'u')).unwrap();
/// assert_eq!(queue.pop(), Ok((1, 'u')));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F, K> {
    key: F,
    key_marker: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Creates a comparator ordering elements by `key(element)`.
    pub const fn new(key: F) -> Self {
        Self {
            key,
            key_marker: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.key)(left).cmp(&(self.key)(right))
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_matches_ord(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(Natural.compare(&left, &right), expected);
    }

    #[rstest]
    fn test_reversed_inverts_natural() {
        assert!(Reversed.less(&8, &5));
        assert!(!Reversed.less(&5, &8));
        assert!(!Reversed.less(&5, &5));
    }

    #[rstest]
    fn test_by_key_orders_on_projection() {
        let by_length = ByKey::new(|word: &&str| word.len());
        assert!(by_length.less(&"ab", &"abc"));
        assert_eq!(by_length.compare(&"xy", &"ab"), Ordering::Equal);
    }

    #[rstest]
    fn test_closure_is_comparator() {
        let descending = |left: &u32, right: &u32| right.cmp(left);
        assert!(descending.less(&9, &1));
    }
}
