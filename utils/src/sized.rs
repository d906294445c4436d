//! A vector that enforces a type-level upper bound on its length.
//!
//! [SizeLimitedVec] wraps a [`Vec<T>`] and checks every operation that could grow it against
//! the const parameter `MAX`. An operation that would leave more than `MAX` elements in the
//! vector returns [Error::CapacityExceeded] and leaves the vector untouched. Operations that can
//! only shrink the vector (e.g. [SizeLimitedVec::pop], [SizeLimitedVec::truncate]) never fail.
//!
//! Requested capacity is bounded the same way: [SizeLimitedVec::reserve] rejects requests above
//! `MAX`, and growth triggered by appends never asks the allocator for more than `MAX` slots.
//!
//! A limit of [UNBOUNDED] (`usize::MAX`) disables all checks.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, RangeBounds},
};
use thiserror::Error;
use tracing::debug;

/// Limit that disables all length checks.
pub const UNBOUNDED: usize = usize::MAX;

/// Errors returned by [SizeLimitedVec] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation would leave more than `limit` elements in the vector.
    ///
    /// When the source is an iterator whose length is not known up front, `requested` is a
    /// lower bound.
    #[error("capacity exceeded: limited to {limit}, requested {requested}")]
    CapacityExceeded { limit: usize, requested: usize },
}

/// A [`Vec<T>`] that never holds more than `MAX` elements.
pub struct SizeLimitedVec<T, const MAX: usize> {
    inner: Vec<T>,
}

impl<T, const MAX: usize> SizeLimitedVec<T, MAX> {
    /// The maximum number of elements.
    pub const MAX_SIZE: usize = MAX;

    /// Creates an empty vector without allocating.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Wraps a vector the caller already knows to fit under the limit.
    pub(crate) fn from_vec_unchecked(inner: Vec<T>) -> Self {
        debug_assert!(MAX == UNBOUNDED || inner.len() <= MAX);
        Self {
            inner: Self::adopt(inner),
        }
    }

    /// Releases any spare capacity of an incoming vector beyond `MAX`.
    fn adopt(mut inner: Vec<T>) -> Vec<T> {
        if inner.capacity() > MAX {
            inner.shrink_to(MAX);
        }
        inner
    }

    /// Checks that a vector of `requested` elements fits under the limit.
    #[inline]
    fn check(requested: usize) -> Result<(), Error> {
        if MAX == UNBOUNDED || requested <= MAX {
            return Ok(());
        }
        debug!(limit = MAX, requested, "rejected size-limited operation");
        Err(Error::CapacityExceeded {
            limit: MAX,
            requested,
        })
    }

    /// Checks that `additional` more elements fit under the limit.
    #[inline]
    fn check_additional(&self, additional: usize) -> Result<(), Error> {
        Self::check(self.inner.len().saturating_add(additional))
    }

    /// Ensures room for `required` elements in total, without ever requesting more than `MAX`.
    fn grow_to(&mut self, required: usize) {
        let capacity = self.inner.capacity();
        if required <= capacity {
            return;
        }
        let target = capacity.saturating_mul(2).max(required).min(MAX);
        self.inner.reserve_exact(target - self.inner.len());
    }

    /// Drains up to `MAX - len + 1` items from `iter`, failing if the result would not fit.
    ///
    /// Iterators reporting an exact length are checked before any item is pulled.
    fn collect_bounded<I: IntoIterator<Item = T>>(len: usize, iter: I) -> Result<Vec<T>, Error> {
        let iter = iter.into_iter();
        if let (lower, Some(upper)) = iter.size_hint() {
            if lower == upper {
                Self::check(len.saturating_add(lower))?;
            }
        }
        let room = MAX.saturating_sub(len);
        let items: Vec<T> = iter.take(room.saturating_add(1)).collect();
        Self::check(len.saturating_add(items.len()))?;
        Ok(items)
    }

    /// Creates a vector holding `len` default values.
    pub fn with_len(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::check(len)?;
        let mut inner = Vec::with_capacity(len);
        inner.resize_with(len, T::default);
        Ok(Self { inner })
    }

    /// Creates a vector holding `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::check(len)?;
        Ok(Self {
            inner: vec![value; len],
        })
    }

    /// Collects an iterator into a new vector.
    ///
    /// At most `MAX + 1` items are pulled from the iterator, so unbounded iterators are rejected
    /// rather than exhausting memory.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut result = Self::new();
        result.assign_iter(iter)?;
        Ok(result)
    }

    /// Moves the contents of a vector with a different limit into one with this limit.
    pub fn try_from_limited<const OTHER: usize>(
        other: SizeLimitedVec<T, OTHER>,
    ) -> Result<Self, Error> {
        Self::try_from(other.inner)
    }

    /// Returns the maximum number of elements (always `MAX`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        MAX
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if no element can be added.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.len() == MAX
    }

    /// Returns how many elements can still be added.
    #[inline]
    pub fn remaining(&self) -> usize {
        MAX - self.inner.len()
    }

    /// Returns the allocated capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns a reference to the backing vector.
    #[inline]
    pub fn as_vec(&self) -> &Vec<T> {
        &self.inner
    }

    /// Unwraps the backing vector.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.inner
    }

    /// Replaces the contents with `values`.
    pub fn assign(&mut self, values: Vec<T>) -> Result<(), Error> {
        Self::check(values.len())?;
        self.inner = Self::adopt(values);
        Ok(())
    }

    /// Replaces the contents with clones of `values`.
    pub fn assign_slice(&mut self, values: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        Self::check(values.len())?;
        self.inner.clear();
        self.grow_to(values.len());
        self.inner.extend_from_slice(values);
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let items = Self::collect_bounded(0, iter)?;
        self.inner.clear();
        self.grow_to(items.len());
        self.inner.extend(items);
        Ok(())
    }

    /// Replaces the contents with `len` clones of `value`.
    pub fn assign_elem(&mut self, value: T, len: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        Self::check(len)?;
        self.inner.clear();
        self.grow_to(len);
        self.inner.resize(len, value);
        Ok(())
    }

    /// Appends an element.
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.check_additional(1)?;
        self.grow_to(self.inner.len() + 1);
        self.inner.push(value);
        Ok(())
    }

    /// Appends the element produced by `f` and returns a reference to it.
    ///
    /// `f` is only called if the element fits.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, Error> {
        self.check_additional(1)?;
        let index = self.inner.len();
        self.grow_to(index + 1);
        self.inner.push(f());
        Ok(&mut self.inner[index])
    }

    /// Appends clones of all elements in `values`.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_additional(values.len())?;
        self.grow_to(self.inner.len() + values.len());
        self.inner.extend_from_slice(values);
        Ok(())
    }

    /// Appends the items of `iter`.
    ///
    /// Items are buffered before being committed, so a failure leaves the vector unchanged.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let items = Self::collect_bounded(self.inner.len(), iter)?;
        self.grow_to(self.inner.len() + items.len());
        self.inner.extend(items);
        Ok(())
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (and the element fits).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_additional(1)?;
        self.grow_to(self.inner.len() + 1);
        self.inner.insert(index, value);
        Ok(())
    }

    /// Inserts the element produced by `f` at `index` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (and the element fits).
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> Result<&mut T, Error> {
        self.check_additional(1)?;
        self.grow_to(self.inner.len() + 1);
        self.inner.insert(index, f());
        Ok(&mut self.inner[index])
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (and the elements fit).
    pub fn insert_elem(&mut self, index: usize, value: T, count: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_additional(count)?;
        self.grow_to(self.inner.len() + count);
        self.inner
            .splice(index..index, core::iter::repeat(value).take(count));
        Ok(())
    }

    /// Inserts clones of `values` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (and the elements fit).
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_additional(values.len())?;
        self.grow_to(self.inner.len() + values.len());
        self.inner.splice(index..index, values.iter().cloned());
        Ok(())
    }

    /// Inserts the items of `iter` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (and the items fit).
    pub fn insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<(), Error> {
        let items = Self::collect_bounded(self.inner.len(), iter)?;
        self.grow_to(self.inner.len() + items.len());
        self.inner.splice(index..index, items);
        Ok(())
    }

    /// Reserves capacity for at least `capacity` elements in total.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity (not the additional one), and
    /// it must not exceed `MAX` even though no element is added.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), Error> {
        Self::check(capacity)?;
        self.inner
            .reserve_exact(capacity.saturating_sub(self.inner.len()));
        Ok(())
    }

    /// Resizes to `len` elements, filling new slots with clones of `value`.
    pub fn resize(&mut self, len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        Self::check(len)?;
        self.grow_to(len);
        self.inner.resize(len, value);
        Ok(())
    }

    /// Resizes to `len` elements, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    /// Resizes to `len` elements, filling new slots with values produced by `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, f: F) -> Result<(), Error> {
        Self::check(len)?;
        self.grow_to(len);
        self.inner.resize_with(len, f);
        Ok(())
    }

    /// Removes and returns the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Shortens the vector to `len` elements (no-op if already shorter).
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.inner.remove(index)
    }

    /// Removes the element at `index`, replacing it with the last element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.inner.swap_remove(index)
    }

    /// Keeps only the elements for which `f` returns `true`.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }

    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or inverted.
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> std::vec::Drain<'_, T> {
        self.inner.drain(range)
    }
}

impl<T, const MAX: usize> Default for SizeLimitedVec<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const MAX: usize> Clone for SizeLimitedVec<T, MAX> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, const MAX: usize> fmt::Debug for SizeLimitedVec<T, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T, const MAX: usize> Deref for SizeLimitedVec<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.inner
    }
}

impl<T, const MAX: usize> DerefMut for SizeLimitedVec<T, MAX> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

impl<T, const MAX: usize> AsRef<[T]> for SizeLimitedVec<T, MAX> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

impl<T, const MAX: usize> AsMut<[T]> for SizeLimitedVec<T, MAX> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

impl<T, const MAX: usize> TryFrom<Vec<T>> for SizeLimitedVec<T, MAX> {
    type Error = Error;

    fn try_from(inner: Vec<T>) -> Result<Self, Self::Error> {
        Self::check(inner.len())?;
        Ok(Self {
            inner: Self::adopt(inner),
        })
    }
}

impl<T: Clone, const MAX: usize> TryFrom<&[T]> for SizeLimitedVec<T, MAX> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::check(values.len())?;
        Ok(Self {
            inner: values.to_vec(),
        })
    }
}

impl<T, const N: usize, const MAX: usize> TryFrom<[T; N]> for SizeLimitedVec<T, MAX> {
    type Error = Error;

    fn try_from(values: [T; N]) -> Result<Self, Self::Error> {
        Self::check(N)?;
        Ok(Self {
            inner: Vec::from(values),
        })
    }
}

impl<T, const MAX: usize> From<SizeLimitedVec<T, MAX>> for Vec<T> {
    fn from(value: SizeLimitedVec<T, MAX>) -> Self {
        value.inner
    }
}

impl<T, const MAX: usize> IntoIterator for SizeLimitedVec<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a SizeLimitedVec<T, MAX> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a mut SizeLimitedVec<T, MAX> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<T, U, const MAX: usize, const OTHER: usize> PartialEq<SizeLimitedVec<U, OTHER>>
    for SizeLimitedVec<T, MAX>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SizeLimitedVec<U, OTHER>) -> bool {
        self.inner[..] == other.inner[..]
    }
}

impl<T: Eq, const MAX: usize> Eq for SizeLimitedVec<T, MAX> {}

impl<T: PartialEq<U>, U, const MAX: usize> PartialEq<Vec<U>> for SizeLimitedVec<T, MAX> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.inner[..] == other[..]
    }
}

impl<T: PartialEq<U>, U, const MAX: usize> PartialEq<[U]> for SizeLimitedVec<T, MAX> {
    fn eq(&self, other: &[U]) -> bool {
        self.inner[..] == other[..]
    }
}

impl<T: PartialEq<U>, U, const MAX: usize> PartialEq<&[U]> for SizeLimitedVec<T, MAX> {
    fn eq(&self, other: &&[U]) -> bool {
        self.inner[..] == other[..]
    }
}

impl<T: PartialEq<U>, U, const N: usize, const MAX: usize> PartialEq<[U; N]>
    for SizeLimitedVec<T, MAX>
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.inner[..] == other[..]
    }
}

impl<T: PartialOrd, const MAX: usize> PartialOrd for SizeLimitedVec<T, MAX> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<T: Ord, const MAX: usize> Ord for SizeLimitedVec<T, MAX> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<T: Hash, const MAX: usize> Hash for SizeLimitedVec<T, MAX> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}
