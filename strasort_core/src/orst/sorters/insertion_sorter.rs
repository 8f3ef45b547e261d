use crate::orst::{OrderPolicy, Result, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// With `smart` unset the insertion point is found by walking left past every placed element
/// that must follow the new one. With `smart` set it is found by binary search over the sorted
/// prefix, which lands after any run of equal keys so the sort stays stable. Either way the
/// elements in between are shifted right by one.
///
/// # Usage
///```
/// use strasort_core::orst::{InsertionSorter, Orst};
///
/// let slice = [1, 5, 4, 2, 3];
/// assert_eq!(slice.orst(&InsertionSorter { smart: true }, false).unwrap(), [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

/// Insertion sort as a plain function, see [`InsertionSorter`].
pub fn insertion_sort<T, K>(data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
{
    InsertionSorter { smart: false }.try_sort(data, policy)
}

impl<T, K> Sorter<T, K> for InsertionSorter
where
    T: Clone,
    K: PartialOrd,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        let mut items = data.to_vec();

        for unsorted in 1..items.len() {
            let current = policy.key(&items[unsorted])?;

            let i = if !self.smart {
                let mut i = unsorted;
                while i > 0 && policy.should_swap(&policy.key(&items[i - 1])?, &current)? {
                    i -= 1;
                }
                i
            } else {
                let (mut low, mut high) = (0, unsorted);
                while low < high {
                    let mid = low + (high - low) / 2;
                    if policy.should_swap(&policy.key(&items[mid])?, &current)? {
                        high = mid;
                    } else {
                        low = mid + 1;
                    }
                }
                low
            };

            items[i..=unsorted].rotate_right(1);
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::Orst;
    use std::cell::Cell;

    #[test]
    fn arbitrary_array_smart() {
        let slice = [1, 5, 4, 2, 3];
        let out = slice.orst(&InsertionSorter { smart: true }, false).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn arbitrary_array_lame() {
        let slice = [1, 5, 4, 2, 3];
        let out = slice.orst(&InsertionSorter { smart: false }, false).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array_smart() {
        let slice = (1..10).collect::<Vec<_>>();
        let out = slice.orst(&InsertionSorter { smart: true }, false).unwrap();
        assert_eq!(out, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_smart() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        let out = slice.orst(&InsertionSorter { smart: true }, false).unwrap();
        assert_eq!(out, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_lame() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        let out = slice.orst(&InsertionSorter { smart: false }, false).unwrap();
        assert_eq!(out, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        for smart in [true, false] {
            let sorter = InsertionSorter { smart };

            let one = vec![1];
            assert_eq!(one.orst(&sorter, false).unwrap(), vec![1]);

            let two = vec![2, 1];
            assert_eq!(two.orst(&sorter, false).unwrap(), vec![1, 2]);

            let three = vec![3, 1, 2];
            assert_eq!(three.orst(&sorter, false).unwrap(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn words_by_length() {
        let words = ["pear", "banana", "fig", "apple"];
        for smart in [true, false] {
            let out = words
                .orst_by_key(&InsertionSorter { smart }, |w| w.len(), false)
                .unwrap();
            assert_eq!(out, ["fig", "pear", "apple", "banana"]);
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let slice = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        for smart in [true, false] {
            let sorter = InsertionSorter { smart };
            let asc = slice.orst_by_key(&sorter, |p| p.0, false).unwrap();
            assert_eq!(asc, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);

            let desc = slice.orst_by_key(&sorter, |p| p.0, true).unwrap();
            assert_eq!(desc, [(1, 'a'), (1, 'c'), (1, 'e'), (0, 'b'), (0, 'd')]);
        }
    }

    #[test]
    fn sorted_input_is_linear() {
        let slice = (0..100).collect::<Vec<i32>>();
        let calls = Cell::new(0);
        let policy = OrderPolicy::by_key(
            |n: &i32| {
                calls.set(calls.get() + 1);
                *n
            },
            false,
        );

        assert_eq!(insertion_sort(&slice, &policy).unwrap(), slice);
        // The new element's key plus its left neighbour's, once per element after the first.
        assert_eq!(calls.get(), 2 * 99);
    }
}
