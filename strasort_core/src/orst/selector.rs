use super::error::{KeyError, Result};
use super::policy::OrderPolicy;
use super::Sorter;

/// The context half of the strategy pattern. Holds exactly one [`Sorter`] and forwards every
/// sort request to it untouched.
///
/// The held strategy can be replaced at any time with [`Selector::set_strategy`]. The next call
/// uses the new one. A `Selector` raises no errors of its own, anything it returns comes from the
/// strategy or the ordering policy.
///
/// # Usage
///```
/// use strasort_core::orst::{BubbleSorter, FnSorter, QuickSorter, Selector, merge_sort};
///
/// let mut selector = Selector::new(BubbleSorter);
/// assert_eq!(selector.sort(&[3, 1, 2], false).unwrap(), [1, 2, 3]);
///
/// selector.set_strategy(QuickSorter);
/// assert_eq!(selector.sort(&[3, 1, 2], true).unwrap(), [3, 2, 1]);
///
/// let words = Selector::new(FnSorter(merge_sort::<&str, usize>));
/// let sorted = words
///     .sort_by_key(&["pear", "banana", "fig", "apple"], |w| w.len(), false)
///     .unwrap();
/// assert_eq!(sorted, ["fig", "pear", "apple", "banana"]);
///```
pub struct Selector<'s, T, K = T> {
    strategy: Box<dyn Sorter<T, K> + 's>,
}

impl<'s, T, K> Selector<'s, T, K> {
    pub fn new(strategy: impl Sorter<T, K> + 's) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replaces the held strategy. Takes effect on the next sort.
    pub fn set_strategy(&mut self, strategy: impl Sorter<T, K> + 's) {
        self.strategy = Box::new(strategy);
    }

    pub fn strategy(&self) -> &(dyn Sorter<T, K> + 's) {
        self.strategy.as_ref()
    }

    #[inline]
    pub fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        self.strategy.try_sort(data, policy)
    }

    pub fn sort_by_key<F>(&self, data: &[T], key: F, reverse: bool) -> Result<Vec<T>>
    where
        F: Fn(&T) -> K,
    {
        self.try_sort(data, &OrderPolicy::by_key(key, reverse))
    }

    pub fn try_sort_by_key<F, E>(&self, data: &[T], key: F, reverse: bool) -> Result<Vec<T>>
    where
        F: Fn(&T) -> std::result::Result<K, E>,
        E: Into<KeyError>,
    {
        self.try_sort(data, &OrderPolicy::try_by_key(key, reverse))
    }
}

impl<T> Selector<'_, T, T>
where
    T: Clone,
{
    /// Sorts by the items themselves.
    pub fn sort(&self, data: &[T], reverse: bool) -> Result<Vec<T>> {
        self.try_sort(data, &OrderPolicy::identity(reverse))
    }
}

impl<T, K> Sorter<T, K> for Selector<'_, T, K> {
    #[inline]
    fn try_sort(&self, data: &[T], policy: &OrderPolicy<'_, T, K>) -> Result<Vec<T>> {
        Selector::try_sort(self, data, policy)
    }
}
