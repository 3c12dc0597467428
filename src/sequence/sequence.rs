use std::borrow::Borrow;
use std::ops::{Deref, DerefMut};

use derive_more::IsVariant;

use crate::util::error::AbsentSequence;

/// An ordered, finite list of elements which may also be entirely absent.
///
/// A Sequence distinguishes between two "empty" states:
/// - [`Absent`](Sequence::Absent): no sequence was provided at all.
/// - [`Present`](Sequence::Present) with no elements: a sequence exists but holds nothing.
///
/// The two compare as unequal, which is what allows the helpers in this module to make
/// guarantees about the shape of their results. For reading, both forms behave as an empty slice
/// through [`Deref<Target = [T]>`](Deref).
///
/// The [`Default`] value is [`Absent`](Sequence::Absent).
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::Sequence;
/// let absent: Sequence<u8> = Sequence::absent();
/// let empty: Sequence<u8> = Sequence::new();
/// assert!(absent.is_empty() && empty.is_empty());
/// assert_ne!(absent, empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Sequence<T> {
    Absent,
    Present(Vec<T>),
}

impl<T> Sequence<T> {
    /// Creates a new, present Sequence with no elements.
    pub const fn new() -> Sequence<T> {
        Sequence::Present(Vec::new())
    }

    /// Creates an absent Sequence.
    pub const fn absent() -> Sequence<T> {
        Sequence::Absent
    }

    /// Creates a new, present Sequence with no elements and space for at least `cap` elements.
    ///
    /// # Panics
    /// Panics if the capacity exceeds [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence::Present(Vec::with_capacity(cap))
    }

    /// Returns the number of elements in the Sequence, which is 0 for an absent one.
    ///
    /// # Examples
    /// ```
    /// # use sequence_utils::sequence::Sequence;
    /// assert_eq!(Sequence::from([1, 2, 3]).len(), 3);
    /// assert_eq!(Sequence::<u8>::absent().len(), 0);
    /// ```
    pub const fn len(&self) -> usize {
        match self {
            Sequence::Absent => 0,
            Sequence::Present(vec) => vec.len(),
        }
    }

    /// Returns true if the Sequence holds no elements, whether it is absent or present.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements as a slice, which is empty for an absent Sequence.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the contents of a present Sequence as a slice, or [`None`] if it is absent.
    pub const fn as_option(&self) -> Option<&[T]> {
        match self {
            Sequence::Absent => None,
            Sequence::Present(vec) => Some(vec.as_slice()),
        }
    }

    /// Converts the Sequence into an [`Option`], mapping [`Absent`](Sequence::Absent) to [`None`].
    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            Sequence::Absent => None,
            Sequence::Present(vec) => Some(vec),
        }
    }

    /// Converts the Sequence into a [`Vec`], treating an absent Sequence as empty. The
    /// distinction between the two forms is lost.
    pub fn into_vec(self) -> Vec<T> {
        self.into_option().unwrap_or_default()
    }

    /// Converts the Sequence into a [`Vec`], failing if it is absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_utils::sequence::Sequence;
    /// assert_eq!(Sequence::from([1, 2]).try_into_vec(), Ok(vec![1, 2]));
    /// assert!(Sequence::<u8>::absent().try_into_vec().is_err());
    /// ```
    pub fn try_into_vec(self) -> Result<Vec<T>, AbsentSequence> {
        self.into_option().ok_or(AbsentSequence)
    }

    /// Returns a mutable reference to the underlying [`Vec`], making the Sequence present first if
    /// it was absent.
    pub fn make_present(&mut self) -> &mut Vec<T> {
        match self {
            Sequence::Present(vec) => vec,
            Sequence::Absent => {
                *self = Sequence::new();
                self.make_present()
            }
        }
    }

    /// Collapses a present Sequence with no elements into an absent one.
    pub(crate) fn absent_if_empty(self) -> Sequence<T> {
        match self {
            Sequence::Present(vec) if vec.is_empty() => Sequence::Absent,
            other => other,
        }
    }
}

// `#[derive(Default)]` would add a `T: Default` bound.
impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::Absent
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match self {
            Sequence::Absent => &[],
            Sequence::Present(vec) => vec,
        }
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Sequence::Absent => &mut [],
            Sequence::Present(vec) => vec,
        }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    /// Collects into a present Sequence, even when the iterator yields nothing.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::Present(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.make_present().extend(iter);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence::Present(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence::Present(Vec::from(value))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence::Present(value.to_vec())
    }
}

impl<T> From<Option<Vec<T>>> for Sequence<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        match value {
            Some(vec) => Sequence::Present(vec),
            None => Sequence::Absent,
        }
    }
}

impl<T> From<Sequence<T>> for Option<Vec<T>> {
    fn from(value: Sequence<T>) -> Self {
        value.into_option()
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.into_vec()
    }
}
