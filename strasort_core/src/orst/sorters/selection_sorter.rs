use crate::orst::{OrderPolicy, Result, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use strasort_core::orst::{Orst, SelectionSorter};
///
/// let slice = [1, 5, 4, 2, 3];
/// assert_eq!(slice.orst(&SelectionSorter, false).unwrap(), [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is a comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. Initially, the sorted sublist is
/// empty and the unsorted sublist is the entire input
/// list. The algorithm proceeds by finding the smallest
/// (or largest, depending on sorting order)
/// element in the unsorted sublist and moving it to the
/// leftmost unsorted position.
///
/// The classic version swaps the selected element with the leftmost unsorted one, which can
/// carry that element past others with an equal key. Here the run in between is rotated right
/// by one instead, so equal keys keep their input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

/// Selection sort as a plain function, see [`SelectionSorter`].
pub fn selection_sort<T, K>(data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
{
    let mut items = data.to_vec();

    for unsorted in 0..items.len() {
        let mut best_in_rest = unsorted;
        for i in (unsorted + 1)..items.len() {
            if policy.out_of_order(&items[best_in_rest], &items[i])? {
                best_in_rest = i;
            }
        }
        if unsorted != best_in_rest {
            items[unsorted..=best_in_rest].rotate_right(1);
        }
    }

    Ok(items)
}

impl<T, K> Sorter<T, K> for SelectionSorter
where
    T: Clone,
    K: PartialOrd,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        selection_sort(data, policy)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Error, Orst};

    #[test]
    fn works() {
        let things = vec![4, 2, 3, 5, 1];
        assert_eq!(things.orst(&SelectionSorter, false).unwrap(), &[1, 2, 3, 4, 5]);
        assert_eq!(things, &[4, 2, 3, 5, 1]);
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&SelectionSorter, false).unwrap(),
            (1..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn very_unsorted() {
        let slice = (1..1000).rev().collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&SelectionSorter, false).unwrap(),
            (1..1000).collect::<Vec<_>>()
        );
    }

    #[test]
    fn descending() {
        let slice = (1..100).collect::<Vec<_>>();
        assert_eq!(
            slice.orst(&SelectionSorter, true).unwrap(),
            (1..100).rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn simple_edge_cases() {
        let one = vec![1];
        assert_eq!(one.orst(&SelectionSorter, false).unwrap(), vec![1]);

        let two = vec![2, 1];
        assert_eq!(two.orst(&SelectionSorter, false).unwrap(), vec![1, 2]);

        let three = vec![3, 1, 2];
        assert_eq!(three.orst(&SelectionSorter, false).unwrap(), vec![1, 2, 3]);
    }

    // A swapping selection sort would produce [1, 2b, 2a] here.
    #[test]
    fn equal_keys_are_not_carried_past_each_other() {
        let slice = [(2, 'a'), (2, 'b'), (1, 'c')];
        let out = slice.orst_by_key(&SelectionSorter, |p| p.0, false).unwrap();
        assert_eq!(out, [(1, 'c'), (2, 'a'), (2, 'b')]);

        let out = slice.orst_by_key(&SelectionSorter, |p| p.0, true).unwrap();
        assert_eq!(out, [(2, 'a'), (2, 'b'), (1, 'c')]);
    }

    #[test]
    fn failing_key_aborts() {
        let slice = ["3", "x", "1"];
        let out = slice.try_orst_by_key(&SelectionSorter, |s| s.parse::<u8>(), false);
        assert!(matches!(out, Err(Error::Key(_))));
    }
}
