use crate::orst::{OrderPolicy, Result, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use strasort_core::orst::{BubbleSorter, Orst};
///
/// let slice = [1, 5, 4, 2, 3];
/// assert_eq!(slice.orst(&BubbleSorter, false).unwrap(), [1, 2, 3, 4, 5]);
/// assert_eq!(slice, [1, 5, 4, 2, 3]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// Every pass settles one more element at the end of the list, so the scanned range shrinks by
/// one each time. A pass that swaps nothing proves the list sorted and ends the sort early.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

/// Bubble sort as a plain function, see [`BubbleSorter`].
pub fn bubble_sort<T, K>(data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
{
    let mut items = data.to_vec();

    for end in (1..items.len()).rev() {
        let mut swapped = false;
        for i in 0..end {
            if policy.out_of_order(&items[i], &items[i + 1])? {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    Ok(items)
}

impl<T, K> Sorter<T, K> for BubbleSorter
where
    T: Clone,
    K: PartialOrd,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        bubble_sort(data, policy)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Error, Orst};
    use std::cell::Cell;

    #[test]
    fn arbitrary_array() {
        let slice = [1, 5, 4, 2, 3];
        assert_eq!(slice.orst(&BubbleSorter, false).unwrap(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&BubbleSorter, false).unwrap(),
            (1..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn very_unsorted() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&BubbleSorter, false).unwrap(),
            (1..1000).collect::<Vec<_>>()
        );
    }

    #[test]
    fn reversed() {
        let slice = [5, 1, 4, 2, 8, 0, 2];
        assert_eq!(
            slice.orst(&BubbleSorter, true).unwrap(),
            [8, 5, 4, 2, 2, 1, 0]
        );
    }

    #[test]
    fn simple_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.orst(&BubbleSorter, false).unwrap(), Vec::<i32>::new());

        let one = vec![1];
        assert_eq!(one.orst(&BubbleSorter, false).unwrap(), vec![1]);

        let two = vec![1, 2];
        assert_eq!(two.orst(&BubbleSorter, false).unwrap(), vec![1, 2]);

        let two = vec![2, 1];
        assert_eq!(two.orst(&BubbleSorter, false).unwrap(), vec![1, 2]);

        let three = vec![3, 1, 2];
        assert_eq!(three.orst(&BubbleSorter, false).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let slice = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let out = slice.orst_by_key(&BubbleSorter, |p| p.0, false).unwrap();
        assert_eq!(out, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn incomparable_keys_abort() {
        let slice = [1.0, f64::NAN, 0.5];
        assert!(matches!(
            slice.orst(&BubbleSorter, false),
            Err(Error::Incomparable)
        ));
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let slice = (0..100).collect::<Vec<i32>>();
        let calls = Cell::new(0);
        let policy = OrderPolicy::by_key(
            |n: &i32| {
                calls.set(calls.get() + 1);
                *n
            },
            false,
        );

        assert_eq!(bubble_sort(&slice, &policy).unwrap(), slice);
        // One comparison per adjacent pair, two keys each.
        assert_eq!(calls.get(), 2 * 99);
    }
}
