use std::cmp::Ordering;

use super::error::{Error, KeyError, Result};

/// Returns `true` when the keys, taken in `(a, b)` order, violate the desired ordering and must
/// be reordered.
///
/// Ascending order wants `a <= b`, so the pair must be swapped when `a > b`. Descending order is
/// the mirror image. Equal keys never swap.
///
/// ```
/// use strasort_core::orst::should_swap;
///
/// assert!(should_swap(&3, &1, false).unwrap());
/// assert!(!should_swap(&3, &1, true).unwrap());
/// assert!(!should_swap(&2, &2, true).unwrap());
/// ```
pub fn should_swap<K: PartialOrd>(a: &K, b: &K, reverse: bool) -> Result<bool> {
    compare(a, b).map(|ord| violates(ord, reverse))
}

#[inline]
fn compare<K: PartialOrd>(a: &K, b: &K) -> Result<Ordering> {
    a.partial_cmp(b).ok_or(Error::Incomparable)
}

#[inline]
fn violates(ord: Ordering, reverse: bool) -> bool {
    match ord {
        Ordering::Greater => !reverse,
        Ordering::Less => reverse,
        Ordering::Equal => false,
    }
}

/// The rule every sorter consults to decide the relative order of two items: a key extraction
/// function and a direction.
///
/// # Usage
///```
/// use strasort_core::orst::OrderPolicy;
///
/// let by_len = OrderPolicy::by_key(|s: &&str| s.len(), false);
/// assert!(by_len.out_of_order(&"banana", &"fig").unwrap());
///
/// let descending = OrderPolicy::identity(true);
/// assert!(descending.out_of_order(&1, &2).unwrap());
///```
pub struct OrderPolicy<'a, T, K> {
    key: Box<dyn Fn(&T) -> Result<K> + 'a>,
    reverse: bool,
}

impl<'a, T> OrderPolicy<'a, T, T>
where
    T: Clone + 'a,
{
    /// Compare items directly. The key of an item is a clone of itself.
    pub fn identity(reverse: bool) -> Self {
        Self {
            key: Box::new(|item: &T| -> Result<T> { Ok(item.clone()) }),
            reverse,
        }
    }
}

impl<'a, T> Default for OrderPolicy<'a, T, T>
where
    T: Clone + 'a,
{
    fn default() -> Self {
        Self::identity(false)
    }
}

impl<'a, T, K> OrderPolicy<'a, T, K>
where
    T: 'a,
    K: 'a,
{
    /// Compare items by the key `key` extracts from them.
    pub fn by_key<F>(key: F, reverse: bool) -> Self
    where
        F: Fn(&T) -> K + 'a,
    {
        Self {
            key: Box::new(move |item: &T| -> Result<K> { Ok(key(item)) }),
            reverse,
        }
    }

    /// Compare items by a key which may fail to be extracted. The first failure aborts whatever
    /// sort is using this policy.
    pub fn try_by_key<F, E>(key: F, reverse: bool) -> Self
    where
        F: Fn(&T) -> std::result::Result<K, E> + 'a,
        E: Into<KeyError> + 'a,
    {
        Self {
            key: Box::new(move |item: &T| key(item).map_err(Error::key)),
            reverse,
        }
    }
}

impl<T, K> OrderPolicy<'_, T, K>
where
    K: PartialOrd,
{
    /// Whether this policy sorts in descending order.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Extracts the key of `item`, or the error the key function failed with.
    #[inline]
    pub fn key(&self, item: &T) -> Result<K> {
        (self.key)(item)
    }

    /// [`should_swap`] with this policy's direction.
    #[inline]
    pub fn should_swap(&self, a: &K, b: &K) -> Result<bool> {
        should_swap(a, b, self.reverse)
    }

    /// Extracts both keys and reports whether `a` placed before `b` breaks the ordering.
    #[inline]
    pub fn out_of_order(&self, a: &T, b: &T) -> Result<bool> {
        self.should_swap(&self.key(a)?, &self.key(b)?)
    }

    /// Three way placement of `key` relative to `pivot`: `Equal` for keys equal to the pivot,
    /// `Greater` when `key` must come after it and `Less` otherwise.
    #[inline]
    pub(crate) fn place(&self, key: &K, pivot: &K) -> Result<Ordering> {
        Ok(match compare(key, pivot)? {
            Ordering::Equal => Ordering::Equal,
            ord if violates(ord, self.reverse) => Ordering::Greater,
            _ => Ordering::Less,
        })
    }
}
