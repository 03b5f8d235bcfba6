//! Read-only access to 1-indexed collections.

/// A read-only view of an indexable collection with 1-based positions.
///
/// `SequenceLike` is the capability set behind duck-typed sequence
/// acceptance: anything that reports a length and serves elements at
/// 1-based positions can act as a construction source
/// ([`Source::like`](crate::Source::like)) and can be classified by
/// [`Sequence::is_sequence`](crate::Sequence::is_sequence). A well-formed
/// implementation is dense: it returns `Some` for every position in
/// `1..=length()` and `None` everywhere else.
///
/// The trait is object-safe, so construction sources can carry it as
/// `&dyn SequenceLike<T>`.
pub trait SequenceLike<T> {
    /// Returns the number of elements the collection claims to hold.
    fn length(&self) -> usize;

    /// Returns the element at the 1-based `position`, or `None` if the
    /// collection holds nothing there.
    fn item(&self, position: usize) -> Option<&T>;
}

impl<T> SequenceLike<T> for [T] {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|index| self.get(index))
    }
}

impl<T> SequenceLike<T> for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, position: usize) -> Option<&T> {
        self.as_slice().item(position)
    }
}

impl<T, const N: usize> SequenceLike<T> for [T; N] {
    fn length(&self) -> usize {
        N
    }

    fn item(&self, position: usize) -> Option<&T> {
        self.as_slice().item(position)
    }
}

/// Returns the first position in `1..=length()` with no element, or `None`
/// when the claimed range is fully occupied.
pub(crate) fn first_gap<T>(collection: &(impl SequenceLike<T> + ?Sized)) -> Option<usize> {
    (1..=collection.length()).find(|&position| collection.item(position).is_none())
}
