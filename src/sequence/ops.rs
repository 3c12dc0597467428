use super::Sequence;

/// Concatenates two Sequences, returning all elements of `first` followed by all elements of
/// `second`, each in their original order.
///
/// An absent argument contributes no elements. The result is always present, even when both
/// arguments are absent. If `first` already has enough spare capacity, its buffer is reused.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let merged = sequence::merge(Sequence::from([7, 8, 9]), Sequence::from([10, 11, 12]));
/// assert_eq!(*merged, [7, 8, 9, 10, 11, 12]);
///
/// let merged = sequence::merge(Sequence::<u8>::absent(), Sequence::absent());
/// assert_eq!(merged, Sequence::new());
/// ```
pub fn merge<T>(first: Sequence<T>, second: Sequence<T>) -> Sequence<T> {
    let mut list = first.into_vec();
    list.reserve_exact(second.len());
    list.extend(second);
    Sequence::Present(list)
}

/// Removes every element equal to `target`, keeping the remaining elements (including any
/// duplicates) in their original relative order.
///
/// The result has the same shape as the input: an absent Sequence stays absent, a present one
/// stays present even if every element was removed. The input's buffer is reused for the result.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let rest = sequence::exclude(Sequence::from([1, 2, 3, 3, 4, 3, 5]), &3);
/// assert_eq!(*rest, [1, 2, 4, 5]);
/// assert!(sequence::exclude(Sequence::absent(), &3).is_absent());
/// ```
pub fn exclude<T: PartialEq>(elements: Sequence<T>, target: &T) -> Sequence<T> {
    match elements {
        Sequence::Absent => Sequence::Absent,
        Sequence::Present(mut vec) => {
            vec.retain(|item| item != target);
            Sequence::Present(vec)
        }
    }
}

/// Returns true if `target` appears anywhere in `elements`. An absent Sequence contains nothing.
///
/// Membership is decided on a sorted copy of references to the elements, by binary searching for
/// the first position not less than `target` and checking that position for equality. This
/// restricts the helper to [`Ord`] element types. The caller's Sequence is left untouched.
///
/// # Time Complexity
/// `O(n log n)` for the sort, followed by an `O(log n)` search.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let greek = Sequence::from(["gamma", "alpha", "beta"]);
/// assert!(sequence::contains(&greek, &"beta"));
/// assert!(!sequence::contains(&greek, &"delta"));
/// ```
pub fn contains<T: Ord>(elements: &Sequence<T>, target: &T) -> bool {
    let Sequence::Present(vec) = elements else {
        return false;
    };

    let mut sorted: Vec<&T> = vec.iter().collect();
    sorted.sort_unstable();

    let index = sorted.partition_point(|item| *item < target);
    sorted.get(index).is_some_and(|item| *item == target)
}

/// Applies `f` to every element, producing a Sequence of the results at corresponding positions.
///
/// `f` is called exactly once per element, from first to last. The result is always present, so
/// an absent input maps to a present Sequence with no elements.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let scaled = sequence::map(Sequence::from([1, 2, 3]), |x| x * 10);
/// assert_eq!(*scaled, [10, 20, 30]);
/// ```
pub fn map<A, B, F: FnMut(A) -> B>(elements: Sequence<A>, f: F) -> Sequence<B> {
    elements.into_iter().map(f).collect()
}

/// Keeps, in their original order, the elements for which `predicate` returns true.
///
/// `predicate` is called exactly once per element, from first to last. If no element is kept
/// (including when the input is empty or absent), the result is absent rather than empty.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let even = sequence::filter(Sequence::from([1, 2, 3, 4, 5]), |x| x % 2 == 0);
/// assert_eq!(*even, [2, 4]);
///
/// let even = sequence::filter(Sequence::from([1, 3, 5]), |x| x % 2 == 0);
/// assert!(even.is_absent());
/// ```
pub fn filter<T, F: FnMut(&T) -> bool>(elements: Sequence<T>, predicate: F) -> Sequence<T> {
    let mut vec = elements.into_vec();
    vec.retain(predicate);
    Sequence::Present(vec).absent_if_empty()
}

/// Removes all but the first occurrence of each distinct element, preserving the relative order
/// of first occurrences.
///
/// Only [`PartialEq`] is required, so types such as floats are supported, at the cost of
/// comparing each element against every element kept before it. An empty or absent input gives
/// an absent result.
///
/// # Time Complexity
/// `O(n * u)`, where `u` is the number of distinct elements.
///
/// # Examples
/// ```
/// # use sequence_utils::sequence::{self, Sequence};
/// let distinct = sequence::unique(Sequence::from([1, 2, 2, 3, 4, 4, 5]));
/// assert_eq!(*distinct, [1, 2, 3, 4, 5]);
/// ```
pub fn unique<T: PartialEq>(elements: Sequence<T>) -> Sequence<T> {
    let mut vec = elements.into_vec();
    let mut len = 0;

    // vec[..len] holds the first occurrences found so far, everything in vec[len..i] is a
    // duplicate waiting to be dropped.
    for i in 0..vec.len() {
        if !vec[..len].contains(&vec[i]) {
            vec.swap(len, i);
            len += 1;
        }
    }

    vec.truncate(len);
    Sequence::Present(vec).absent_if_empty()
}

impl<T> Sequence<T> {
    /// Method form of [`merge`], appending `other` to `self`.
    pub fn merged(self, other: Sequence<T>) -> Sequence<T> {
        merge(self, other)
    }

    /// Method form of [`exclude`].
    pub fn excluding(self, target: &T) -> Sequence<T>
    where
        T: PartialEq,
    {
        exclude(self, target)
    }

    /// Method form of [`contains`]. Named to avoid shadowing [`slice::contains`], which is still
    /// available through [`Deref`](std::ops::Deref) for types that are only [`PartialEq`].
    pub fn contains_sorted(&self, target: &T) -> bool
    where
        T: Ord,
    {
        contains(self, target)
    }

    /// Method form of [`map`].
    pub fn mapped<B, F: FnMut(T) -> B>(self, f: F) -> Sequence<B> {
        map(self, f)
    }

    /// Method form of [`filter`].
    pub fn filtered<F: FnMut(&T) -> bool>(self, predicate: F) -> Sequence<T> {
        filter(self, predicate)
    }

    /// Method form of [`unique`].
    pub fn deduped(self) -> Sequence<T>
    where
        T: PartialEq,
    {
        unique(self)
    }
}
