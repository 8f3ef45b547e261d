use crate::orst::{OrderPolicy, Result, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use strasort_core::orst::{MergeSorter, Orst};
///
/// let slice = [1, 5, 4, 2, 3];
/// assert_eq!(slice.orst(&MergeSorter, false).unwrap(), [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The list
/// is split in half until every piece holds at most one element, then pieces are merged back
/// pairwise. Merging two sorted lists only ever looks at their fronts, taking whichever element
/// should come first. On equal keys the element from the left half is taken, which keeps the
/// sort stable.
///
/// It always performs O(n log n) comparisons, whatever the input looks like, and needs O(n)
/// extra memory for the halves.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

/// Merge sort as a plain function, see [`MergeSorter`].
pub fn merge_sort<T, K>(data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
{
    split_and_merge(data.to_vec(), policy)
}

fn split_and_merge<T, K>(mut items: Vec<T>, policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    K: PartialOrd,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = split_and_merge(items, policy)?;
    let right = split_and_merge(right, policy)?;

    merge(left, right, policy)
}

fn merge<T, K>(left: Vec<T>, right: Vec<T>, policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    K: PartialOrd,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let right_first = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => policy.out_of_order(l, r)?,
            _ => break,
        };

        if right_first {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

impl<T, K> Sorter<T, K> for MergeSorter
where
    T: Clone,
    K: PartialOrd,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        merge_sort(data, policy)
    }
}
