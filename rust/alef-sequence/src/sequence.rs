//! The [`Sequence`] container: a dense, growable, 1-based ordered sequence.

use std::borrow::Borrow;
use std::fmt;

use alef_common::{Result, error::Error};

use crate::index;
use crate::key::Key;
use crate::like::{self, SequenceLike};
use crate::source::Source;

/// A dense, growable ordered sequence with 1-based positions.
///
/// `Sequence<T>` keeps its elements contiguous: positions run from `1` to
/// [`len`](Sequence::len) with no holes, and every write path preserves that
/// shape. Operations taking a signed position treat negative values as
/// counted from the back: `-1` is the last element, `-2` the one before it,
/// and position `0` never resolves.
///
/// Derivations (`map`, `filter`, `slice`, `merge`, ...) always allocate a
/// new, independent sequence and leave `self` untouched. In-place operations
/// mutate `self` and return either `&mut Self` or the removed element, so
/// calls can be chained. Out-of-range reads and fruitless searches return
/// `None`; errors are reserved for contract violations (see
/// [`set`](Sequence::set), [`join`](Sequence::join),
/// [`reduce`](Sequence::reduce) and [`from`](Sequence::from)).
///
/// # Examples
///
/// ```
/// use alef_sequence::seq;
///
/// let mut menu = seq!["copy", "cut", "paste"];
/// assert_eq!(menu.at(-1), Some(&"paste"));
/// assert_eq!(menu.index_of(&"cut"), Some(2));
///
/// menu.push("rename");
/// assert_eq!(menu.len(), 4);
/// assert_eq!(menu.slice(2, 3), seq!["cut", "paste"]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty `Sequence`.
    pub fn new() -> Sequence<T> {
        Sequence { items: Vec::new() }
    }

    /// Creates a new empty `Sequence` with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `Sequence` holding the elements of `elements`, with the
    /// element at index 0 becoming position 1.
    pub fn from_vec(elements: Vec<T>) -> Sequence<T> {
        Sequence { items: elements }
    }

    /// Builds a sequence from any supported construction source.
    ///
    /// Accepted shapes are the conversions into [`Source`]: ready-made
    /// collections (`Vec<T>`, slices, arrays, other sequences), text
    /// (`&str`/`String`, one element per Unicode codepoint, requires
    /// `T: From<char>`), pull-style [`Generator`](crate::Generator)s, and
    /// borrowed [`SequenceLike`] collections via [`Source::like`].
    ///
    /// # Errors
    ///
    /// A borrowed collection that is not densely 1-indexed (some position
    /// in `1..=length()` holds no element) fails with `InvalidArgument`
    /// naming the first missing position.
    ///
    /// # Examples
    ///
    /// ```
    /// use alef_sequence::{Sequence, seq};
    ///
    /// let digits: Sequence<char> = Sequence::from("451").unwrap();
    /// assert_eq!(digits, seq!['4', '5', '1']);
    ///
    /// let copied = Sequence::from(vec![1, 2, 3]).unwrap();
    /// assert_eq!(copied, seq![1, 2, 3]);
    /// ```
    pub fn from<'a>(source: impl Into<Source<'a, T>>) -> Result<Sequence<T>>
    where
        T: Clone + 'a,
    {
        match source.into() {
            Source::Collection(items) => Ok(Sequence { items }),
            Source::Like(collection) => {
                let len = collection.length();
                let mut items = Vec::with_capacity(len);
                for position in 1..=len {
                    match collection.item(position) {
                        Some(element) => items.push(element.clone()),
                        None => {
                            return Err(Error::invalid_arg(
                                "an indexable collection",
                                format!("no element at position {position} of the claimed {len}"),
                            ));
                        }
                    }
                }
                Ok(Sequence { items })
            }
            Source::Generator(generator) => Ok(Sequence {
                items: generator.collect(),
            }),
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the element at the 1-based `position`, or
    /// `None` if the position is 0 or past the end. No negative-position
    /// translation; see [`at`](Sequence::at) for that.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|index| self.items.get(index))
    }

    /// Returns a mutable reference to the element at the 1-based
    /// `position`, or `None` if the position is 0 or past the end.
    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get_mut(index))
    }

    /// Returns the element at a signed position: `1..=len` from the front,
    /// `-1..=-len` from the back. Positions outside the occupied range
    /// (including 0) yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alef_sequence::seq;
    ///
    /// let numbers = seq![10, 20, 30];
    /// assert_eq!(numbers.at(2), Some(&20));
    /// assert_eq!(numbers.at(-1), Some(&30));
    /// assert_eq!(numbers.at(0), None);
    /// assert_eq!(numbers.at(4), None);
    /// ```
    #[inline]
    pub fn at(&self, position: i64) -> Option<&T> {
        index::resolve(position, self.items.len()).map(|index| &self.items[index])
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the elements as a slice, first element at index 0.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copies the elements into a `Vec<T>`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Consumes the sequence and returns the underlying `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the 1-based position of the first element equal to `value`,
    /// scanning left to right, or `None` if no element matches.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items
            .iter()
            .position(|element| element == value)
            .map(|index| index + 1)
    }

    /// Returns the 1-based position of the last element equal to `value`,
    /// scanning right to left, or `None` if no element matches.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items
            .iter()
            .rposition(|element| element == value)
            .map(|index| index + 1)
    }

    /// Returns `true` if some element equals `value`.
    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns `true` if some element at or after the signed position
    /// `from` equals `value`. `from` is translated like
    /// [`at`](Sequence::at) and clamped up to position 1; a start past the
    /// end yields `false`.
    pub fn includes_from(&self, value: &T, from: i64) -> bool
    where
        T: PartialEq,
    {
        let len = self.items.len();
        let start = index::translate(from, len).max(1);
        if start > len as i64 {
            return false;
        }
        self.items[start as usize - 1..].contains(value)
    }

    /// Returns a reference to the first element satisfying the predicate,
    /// scanning left to right.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|element| predicate(element))
    }

    /// Returns a reference to the last element satisfying the predicate,
    /// scanning right to left.
    pub fn find_last(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().rev().find(|element| predicate(element))
    }

    /// Returns the 1-based position of the first element satisfying the
    /// predicate, scanning left to right.
    pub fn find_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate).map(|index| index + 1)
    }

    /// Returns the 1-based position of the last element satisfying the
    /// predicate, scanning right to left.
    pub fn find_last_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().rposition(predicate).map(|index| index + 1)
    }

    /// Returns `true` if the predicate holds for every element. Vacuously
    /// true for an empty sequence; stops at the first failure.
    pub fn every(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(predicate)
    }

    /// Applies `transform` to every element in order, collecting the
    /// results positionally into a new sequence of the same length. The
    /// transform receives each element with its 1-based position.
    pub fn map<U>(&self, mut transform: impl FnMut(&T, usize) -> U) -> Sequence<U> {
        Sequence {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, element)| transform(element, index + 1))
                .collect(),
        }
    }

    /// Returns a new sequence holding, in original relative order, exactly
    /// the elements for which the predicate is true.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence {
            items: self
                .items
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Copies the inclusive range `start..=finish` into a new sequence.
    ///
    /// Each bound is normalized independently: negative bounds translate
    /// from the back, then each bound is clamped into `[1, len]`. A
    /// normalized `start` greater than `finish` yields an empty sequence,
    /// as does slicing an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use alef_sequence::seq;
    ///
    /// let numbers = seq![10, 20, 30];
    /// assert_eq!(numbers.slice(1, 2), seq![10, 20]);
    /// assert_eq!(numbers.slice(-2, -1), seq![20, 30]);
    /// assert_eq!(numbers.slice(3, 1), seq![]);
    /// ```
    pub fn slice(&self, start: i64, finish: i64) -> Sequence<T>
    where
        T: Clone,
    {
        let len = self.items.len();
        if len == 0 {
            return Sequence::new();
        }
        let start = index::clamp_bound(index::translate(start, len), len);
        let finish = index::clamp_bound(index::translate(finish, len), len);
        if start > finish {
            return Sequence::new();
        }
        Sequence {
            items: self.items[start - 1..finish].to_vec(),
        }
    }

    /// Copies the inclusive range from the signed position `start` to the
    /// end of the sequence, normalizing `start` like
    /// [`slice`](Sequence::slice).
    pub fn slice_from(&self, start: i64) -> Sequence<T>
    where
        T: Clone,
    {
        self.slice(start, self.items.len() as i64)
    }

    /// Returns a new sequence holding `self`'s elements followed by each
    /// other sequence's elements, in argument order. No input is mutated.
    pub fn merge<'a, I>(&self, others: I) -> Sequence<T>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a Sequence<T>>,
    {
        let mut items = self.items.clone();
        for other in others {
            items.extend_from_slice(&other.items);
        }
        Sequence { items }
    }

    /// Returns a new sequence with the elements in reverse order.
    pub fn to_reversed(&self) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence {
            items: self.items.iter().rev().cloned().collect(),
        }
    }

    /// Concatenates the textual form of every element into one string,
    /// with `separator` between adjacent elements. An empty sequence joins
    /// to the empty string.
    ///
    /// # Errors
    ///
    /// `NotStringConvertible` (carrying the element's 1-based position) if
    /// an element's `Display` implementation reports failure.
    pub fn join(&self, separator: &str) -> Result<String>
    where
        T: fmt::Display,
    {
        use std::fmt::Write as _;

        let mut text = String::new();
        for (index, element) in self.items.iter().enumerate() {
            if index > 0 {
                text.push_str(separator);
            }
            if write!(text, "{element}").is_err() {
                return Err(Error::not_string_convertible(index + 1));
            }
        }
        Ok(text)
    }

    /// Folds the sequence front to back, seeding the accumulator with the
    /// first element. The reducer receives the accumulator, each remaining
    /// element in traversal order, and that element's 1-based position.
    ///
    /// # Errors
    ///
    /// `EmptyReduce` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use alef_sequence::seq;
    ///
    /// let total = seq![10, 20, 30].reduce(|sum, n, _| sum + n).unwrap();
    /// assert_eq!(total, 60);
    /// ```
    pub fn reduce(&self, mut reducer: impl FnMut(T, &T, usize) -> T) -> Result<T>
    where
        T: Clone,
    {
        let (first, rest) = self.items.split_first().ok_or_else(Error::empty_reduce)?;
        let mut accumulator = first.clone();
        for (index, element) in rest.iter().enumerate() {
            accumulator = reducer(accumulator, element, index + 2);
        }
        Ok(accumulator)
    }

    /// Folds the sequence back to front, seeding the accumulator with the
    /// last element. The reducer always receives each element's original
    /// 1-based position, not its position in traversal order.
    ///
    /// # Errors
    ///
    /// `EmptyReduce` if the sequence is empty.
    pub fn reduce_right(&self, mut reducer: impl FnMut(T, &T, usize) -> T) -> Result<T>
    where
        T: Clone,
    {
        let (last, rest) = self.items.split_last().ok_or_else(Error::empty_reduce)?;
        let mut accumulator = last.clone();
        for (index, element) in rest.iter().enumerate().rev() {
            accumulator = reducer(accumulator, element, index + 1);
        }
        Ok(accumulator)
    }

    /// Folds every element front to back into `seed`. The reducer receives
    /// the accumulator, each element, and its 1-based position; an empty
    /// sequence returns the seed unchanged.
    pub fn fold<A>(&self, seed: A, mut reducer: impl FnMut(A, &T, usize) -> A) -> A {
        let mut accumulator = seed;
        for (index, element) in self.items.iter().enumerate() {
            accumulator = reducer(accumulator, element, index + 1);
        }
        accumulator
    }

    /// Folds every element back to front into `seed`, reporting original
    /// 1-based positions.
    pub fn fold_right<A>(&self, seed: A, mut reducer: impl FnMut(A, &T, usize) -> A) -> A {
        let mut accumulator = seed;
        for (index, element) in self.items.iter().enumerate().rev() {
            accumulator = reducer(accumulator, element, index + 1);
        }
        accumulator
    }

    /// Visits every element front to back with its 1-based position.
    pub fn for_each(&self, mut action: impl FnMut(&T, usize)) {
        for (index, element) in self.items.iter().enumerate() {
            action(element, index + 1);
        }
    }

    /// Appends an element at the end. Returns the new length.
    pub fn push(&mut self, element: T) -> usize {
        self.items.push(element);
        self.items.len()
    }

    /// Appends every element in order. Returns the new length.
    pub fn push_all(&mut self, elements: impl IntoIterator<Item = T>) -> usize {
        self.items.extend(elements);
        self.items.len()
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element, shifting the rest down one
    /// position, or `None` if empty.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Inserts an element at the front, shifting existing elements up.
    /// Returns the new length.
    pub fn unshift(&mut self, element: T) -> usize {
        self.items.insert(0, element);
        self.items.len()
    }

    /// Inserts every element at the front, preserving their order, so the
    /// first given element ends up at position 1. Returns the new length.
    pub fn unshift_all(&mut self, elements: impl IntoIterator<Item = T>) -> usize {
        self.items.splice(0..0, elements);
        self.items.len()
    }

    /// Writes `element` at `key`, the guarded assignment path.
    ///
    /// The key must be integer-convertible: integers, or floats with no
    /// fractional part; negative values translate from the back. It must
    /// resolve into `1..=len + 1`, where positions within the sequence
    /// overwrite and `len + 1` appends. Returns `&mut self` for chaining.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if the key is textual, fractional, or non-finite, or
    /// if it resolves outside the writable range (such a write would leave
    /// a hole).
    ///
    /// # Examples
    ///
    /// ```
    /// use alef_sequence::seq;
    ///
    /// let mut letters = seq!["a", "b", "c"];
    /// letters.set(2, "B").unwrap();
    /// letters.set(-1, "C").unwrap();
    /// letters.set(4, "d").unwrap();
    /// assert_eq!(letters, seq!["a", "B", "C", "d"]);
    ///
    /// assert!(letters.set("x", "?").is_err());
    /// assert!(letters.set(2.5, "?").is_err());
    /// assert!(letters.set(9, "?").is_err());
    /// ```
    pub fn set(&mut self, key: impl Into<Key>, element: T) -> Result<&mut Sequence<T>> {
        let offset = key.into().resolve(self.items.len())?;
        if offset == self.items.len() {
            self.items.push(element);
        } else {
            self.items[offset] = element;
        }
        Ok(self)
    }

    /// Overwrites every position with clones of `element`. Returns
    /// `&mut self` for chaining.
    pub fn fill(&mut self, element: T) -> &mut Sequence<T>
    where
        T: Clone,
    {
        self.items.fill(element);
        self
    }

    /// Overwrites the inclusive range `start..=finish` with clones of
    /// `element`, normalizing both bounds like [`slice`](Sequence::slice).
    /// A normalized `start` greater than `finish` leaves the sequence
    /// unchanged. Returns `&mut self` for chaining.
    pub fn fill_range(&mut self, element: T, start: i64, finish: i64) -> &mut Sequence<T>
    where
        T: Clone,
    {
        let len = self.items.len();
        if len == 0 {
            return self;
        }
        let start = index::clamp_bound(index::translate(start, len), len);
        let finish = index::clamp_bound(index::translate(finish, len), len);
        if start <= finish {
            self.items[start - 1..finish].fill(element);
        }
        self
    }

    /// Reverses the element order in place. Returns `&mut self` for
    /// chaining.
    pub fn reverse(&mut self) -> &mut Sequence<T> {
        self.items.reverse();
        self
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Tells whether `collection` is shaped like a sequence: empty or
    /// densely 1-indexed, with every position in `1..=length()` occupied
    /// and nothing at `length() + 1`.
    ///
    /// A real `Sequence` always qualifies. Native indexables (`Vec`,
    /// slices, arrays) qualify through their [`SequenceLike`] impls; a
    /// sparse or length-misreporting implementation does not.
    pub fn is_sequence(collection: &(impl SequenceLike<T> + ?Sized)) -> bool {
        like::first_gap(collection).is_none() && collection.item(collection.length() + 1).is_none()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Sequence<T> {
        Sequence::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sequence").field(&self.items).finish()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        let len = self.items.len();
        match self.get(position) {
            Some(element) => element,
            None => panic!("position {position} out of range 1..={len}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, position: usize) -> &mut T {
        let len = self.items.len();
        match self.get_mut(position) {
            Some(element) => element,
            None => panic!("position {position} out of range 1..={len}"),
        }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> SequenceLike<T> for Sequence<T> {
    fn length(&self) -> usize {
        self.items.len()
    }

    fn item(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Sequence<T> {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
