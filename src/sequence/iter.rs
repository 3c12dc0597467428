use std::slice;

use super::Sequence;
#[doc(inline)]
pub use std::vec::IntoIter;

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Creates an owned iterator over the Sequence. An absent Sequence yields no elements.
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
