//! Predicate-driven in-place sorting.
//!
//! Both sorts take an ordering predicate `later(a, b)` that returns `true`
//! when `a` belongs after `b`. The predicate alone fixes the direction:
//!
//! ```text
//! later = ascending  (a > b)   [5, 3, 4, 1, 2] -> [1, 2, 3, 4, 5]
//! later = descending (a < b)   [5, 3, 4, 1, 2] -> [5, 4, 3, 2, 1]
//! ```
//!
//! Neither sort allocates, and both only ever index inside the slice, so a
//! predicate that is not a strict weak ordering scrambles the order but can
//! never read or write out of bounds.
//!
//! ```
//! use bounded_seq::sort::{ascending, insertion_sort};
//!
//! let mut values = [5, 3, 4, 1, 2];
//! insertion_sort(&mut values, ascending);
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! ```

use core::ops::RangeInclusive;

use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};

/// Predicate for ascending order: `a` goes after `b` when it is greater.
#[inline]
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// Predicate for descending order: `a` goes after `b` when it is smaller.
#[inline]
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Selection sort.
///
/// Each pass `start` scans the unsorted tail for the element every other
/// candidate should follow, then swaps it into `start`. Always `len - 1`
/// passes and `len - 1` swaps; O(n²) comparisons.
pub fn selection_sort<T, F>(items: &mut [T], mut later: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for start in 0..len - 1 {
        let mut best = start;

        for current in start + 1..len {
            if later(&items[best], &items[current]) {
                best = current;
            }
        }

        assert!(best >= start);
        assert!(best < len);

        items.swap(start, best);
    }
}

/// Insertion sort.
///
/// Each element from index 1 on is held while the elements before it that
/// should follow it move one slot right; it then drops into the gap.
/// O(n²) worst case, O(n) when `items` is already ordered under `later`.
pub fn insertion_sort<T, F>(items: &mut [T], mut later: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();

    for next in 1..len {
        // items[next] stays put until the rotate, so it is the held value.
        let mut gap = next;
        while gap > 0 && later(&items[gap - 1], &items[next]) {
            gap -= 1;
        }

        assert!(gap <= next);

        if gap != next {
            items[gap..=next].rotate_right(1);
        }
    }
}

/// Overwrites every element of `items` with a uniform sample from `range`.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn fill_ranged<T, R>(items: &mut [T], range: RangeInclusive<T>, rng: &mut R)
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    assert!(range.start() <= range.end(), "empty sampling range");

    let dist = Uniform::<T>::new_inclusive(range.start(), range.end());
    for item in items.iter_mut() {
        *item = dist.sample(rng);
    }
}
