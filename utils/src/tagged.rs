//! Values distinguished at the type level by a marker tag.
//!
//! ```
//! use qtils::Tagged;
//!
//! enum BlockTag {}
//! enum SlotTag {}
//!
//! type BlockNumber = Tagged<u64, BlockTag>;
//! type SlotNumber = Tagged<u64, SlotTag>;
//!
//! let block = BlockNumber::new(10);
//! let slot = SlotNumber::new(10);
//! assert_eq!(*block.value(), *slot.value());
//! // `block == slot` does not compile.
//! ```

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, Sub},
};

/// A `T` that only interoperates with values carrying the same `Tag`.
///
/// `Tag` is never instantiated; any type (including an uninhabited enum) works. Trait
/// implementations depend only on `T`.
pub struct Tagged<T, Tag> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Tagged<T, Tag> {
    /// Tags `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns a reference to the value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Removes the tag.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U, Tag> {
        Tagged::new(f(self.value))
    }

    /// Adds two values with the same tag.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self
    where
        T: Add<Output = T>,
    {
        self.map(|value| value + rhs.value)
    }

    /// Subtracts two values with the same tag.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: Self) -> Self
    where
        T: Sub<Output = T>,
    {
        self.map(|value| value - rhs.value)
    }

    /// Compares the value against an untagged one.
    pub fn compare_to(&self, other: &T) -> Ordering
    where
        T: Ord,
    {
        self.value.cmp(other)
    }
}

impl<T: Clone, Tag> Clone for Tagged<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for Tagged<T, Tag> {}

impl<T: Default, Tag> Default for Tagged<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for Tagged<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for Tagged<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: PartialEq, Tag> PartialEq for Tagged<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for Tagged<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for Tagged<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, Tag> Ord for Tagged<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, Tag> Hash for Tagged<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, Tag> From<T> for Tagged<T, Tag> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
