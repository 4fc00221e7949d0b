//! Binary searches over a slice sorted by some key, driven by a comparator.
//!
//! `cmp(item)` must report how `item` orders relative to the target, and the
//! slice must be sorted so that `cmp` is non-decreasing along it.

use std::cmp::Ordering;

/// Finds the leftmost element that compares `Equal` to the target.
///
/// Returns `Ok(index)` of that element, or `Err(index)` with the position where
/// the target would be inserted to keep the slice sorted.
pub fn search_first_by<T, F>(items: &[T], mut cmp: F) -> Result<usize, usize>
where
    F: FnMut(&T) -> Ordering,
{
    let index = items.partition_point(|item| cmp(item) == Ordering::Less);
    match items.get(index) {
        Some(item) if cmp(item) == Ordering::Equal => Ok(index),
        _ => Err(index),
    }
}

/// Position just past every element that compares `Less` or `Equal` to the target.
///
/// Inserting there keeps equal elements in insertion order.
pub fn insertion_point_by<T, F>(items: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    items.partition_point(|item| cmp(item) != Ordering::Greater)
}
