use std::cmp::Ordering;

use crate::orst::{OrderPolicy, Result, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use strasort_core::orst::{Orst, QuickSorter};
///
/// let slice = [1, 5, 4, 2, 3];
/// assert_eq!(slice.orst(&QuickSorter, false).unwrap(), [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is a divide-and-conquer algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// The element in the middle of the list is picked as the pivot and every element is dealt into
/// one of three buckets: keys equal to the pivot's, keys that must come after it, and the rest.
/// The outer buckets are sorted recursively and the three are concatenated.
///
/// Dealing preserves input order inside each bucket, so the sort is stable. Keeping equal keys
/// out of the recursion means lists with many duplicates do not degrade to quadratic time. The
/// price is that nothing happens in place: every level allocates its buckets.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

/// Quick sort as a plain function, see [`QuickSorter`].
pub fn quick_sort<T, K>(data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
{
    partition_and_sort(data.to_vec(), policy)
}

fn partition_and_sort<T, K>(items: Vec<T>, policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    K: PartialOrd,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let pivot = policy.key(&items[items.len() / 2])?;

    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();

    for item in items {
        match policy.place(&policy.key(&item)?, &pivot)? {
            Ordering::Less => left.push(item),
            Ordering::Equal => middle.push(item),
            Ordering::Greater => right.push(item),
        }
    }

    let mut sorted = partition_and_sort(left, policy)?;
    sorted.append(&mut middle);
    sorted.append(&mut partition_and_sort(right, policy)?);
    Ok(sorted)
}

impl<T, K> Sorter<T, K> for QuickSorter
where
    T: Clone,
    K: PartialOrd,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        quick_sort(data, policy)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Error, Orst};

    #[test]
    fn arbitrary_array() {
        let slice = [1, 5, 4, 2, 3];
        assert_eq!(slice.orst(&QuickSorter, false).unwrap(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&QuickSorter, false).unwrap(),
            (1..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn very_unsorted() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&QuickSorter, false).unwrap(),
            (1..1000).collect::<Vec<_>>()
        );
    }

    #[test]
    fn many_duplicates() {
        let slice = (0..10_000).map(|i| i % 3).collect::<Vec<_>>();
        let out = slice.orst(&QuickSorter, true).unwrap();
        assert!(out.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(out.iter().filter(|&&x| x == 2).count(), 3333);
    }

    #[test]
    fn simple_edge_cases() {
        let one = vec![1];
        assert_eq!(one.orst(&QuickSorter, false).unwrap(), vec![1]);

        let two = vec![1, 2];
        assert_eq!(two.orst(&QuickSorter, false).unwrap(), vec![1, 2]);

        let two = vec![2, 1];
        assert_eq!(two.orst(&QuickSorter, false).unwrap(), vec![1, 2]);

        let three = vec![3, 1, 2];
        assert_eq!(three.orst(&QuickSorter, false).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn buckets_keep_input_order() {
        let slice = [(2, 'a'), (3, 'b'), (1, 'c'), (2, 'd'), (1, 'e'), (3, 'f')];
        let out = slice.orst_by_key(&QuickSorter, |p| p.0, true).unwrap();
        assert_eq!(
            out,
            [(3, 'b'), (3, 'f'), (2, 'a'), (2, 'd'), (1, 'c'), (1, 'e')]
        );
    }

    #[test]
    fn incomparable_pivot_aborts() {
        let slice = [2.0, f64::NAN, 1.0];
        assert!(matches!(
            slice.orst(&QuickSorter, false),
            Err(Error::Incomparable)
        ));
    }
}
