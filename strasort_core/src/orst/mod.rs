//! Five classic comparison sorts behind one strategy interface.
//!
//! Every sorter takes a borrowed slice and an [`OrderPolicy`] (a key function plus a direction)
//! and returns a new sorted `Vec`. The input is never touched. All five are stable: elements
//! whose keys compare equal come out in the order they went in.
//!
//! # Example
//!
//! ```
//! use strasort_core::orst::{BubbleSorter, MergeSorter, Orst, Selector};
//!
//! let slice = vec![1, 3, 2, 5, 4];
//! assert_eq!(vec![1, 2, 3, 4, 5], slice.orst(&BubbleSorter, false).unwrap());
//! assert_eq!(vec![1, 3, 2, 5, 4], slice);
//!
//! let selector = Selector::new(MergeSorter);
//! assert_eq!(vec![5, 4, 3, 2, 1], selector.sort(&slice, true).unwrap());
//! ```

mod algorithm;
mod error;
mod policy;
mod selector;
mod sorters;

pub use algorithm::Algorithm;
pub use error::{Error, KeyError, Result};
pub use policy::{should_swap, OrderPolicy};
pub use selector::Selector;
pub use sorters::bubble_sorter::{bubble_sort, BubbleSorter};
pub use sorters::insertion_sorter::{insertion_sort, InsertionSorter};
pub use sorters::merge_sorter::{merge_sort, MergeSorter};
pub use sorters::quick_sorter::{quick_sort, QuickSorter};
pub use sorters::selection_sorter::{selection_sort, SelectionSorter};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `T` is the item type and `K` the key the [`OrderPolicy`] extracts from each item, the item
/// itself by default.
pub trait Sorter<T, K = T> {
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>>;
}

impl<T, K, S> Sorter<T, K> for &S
where
    S: Sorter<T, K> + ?Sized,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        (**self).try_sort(data, policy)
    }
}

impl<T, K, S> Sorter<T, K> for Box<S>
where
    S: Sorter<T, K> + ?Sized,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        (**self).try_sort(data, policy)
    }
}

/// Adapts a plain function or closure with the [`Sorter::try_sort`] signature into a strategy.
///
/// ```
/// use strasort_core::orst::{quick_sort, FnSorter, Orst};
///
/// let sorted = [2, 3, 1].orst(&FnSorter(quick_sort::<i32, i32>), false).unwrap();
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSorter<F>(pub F);

impl<T, K, F> Sorter<T, K> for FnSorter<F>
where
    F: for<'d, 'p, 'k> Fn(&'d [T], &'p OrderPolicy<'k, T, K>) -> Result<Vec<T>>,
{
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        (self.0)(data, policy)
    }
}

/// Sorting straight off a slice, with any [`Sorter`].
pub trait Orst<T> {
    /// Sorts by the items themselves, descending when `reverse` is set.
    fn orst<S>(&self, sorter: &S, reverse: bool) -> Result<Vec<T>>
    where
        T: Clone,
        S: Sorter<T> + ?Sized;

    /// Sorts by the key `key` extracts from each item.
    fn orst_by_key<K, S, F>(&self, sorter: &S, key: F, reverse: bool) -> Result<Vec<T>>
    where
        S: Sorter<T, K> + ?Sized,
        F: Fn(&T) -> K;

    /// Sorts by a key that may fail to be extracted. The first failure is returned as
    /// [`Error::Key`].
    fn try_orst_by_key<K, E, S, F>(&self, sorter: &S, key: F, reverse: bool) -> Result<Vec<T>>
    where
        S: Sorter<T, K> + ?Sized,
        F: Fn(&T) -> std::result::Result<K, E>,
        E: Into<KeyError>;
}

impl<T> Orst<T> for [T] {
    fn orst<S>(&self, sorter: &S, reverse: bool) -> Result<Vec<T>>
    where
        T: Clone,
        S: Sorter<T> + ?Sized,
    {
        sorter.try_sort(self, &OrderPolicy::identity(reverse))
    }

    fn orst_by_key<K, S, F>(&self, sorter: &S, key: F, reverse: bool) -> Result<Vec<T>>
    where
        S: Sorter<T, K> + ?Sized,
        F: Fn(&T) -> K,
    {
        sorter.try_sort(self, &OrderPolicy::by_key(key, reverse))
    }

    fn try_orst_by_key<K, E, S, F>(&self, sorter: &S, key: F, reverse: bool) -> Result<Vec<T>>
    where
        S: Sorter<T, K> + ?Sized,
        F: Fn(&T) -> std::result::Result<K, E>,
        E: Into<KeyError>,
    {
        sorter.try_sort(self, &OrderPolicy::try_by_key(key, reverse))
    }
}
