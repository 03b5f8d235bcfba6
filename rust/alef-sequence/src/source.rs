//! Construction sources for [`Sequence::from`](crate::Sequence::from).

use std::fmt;

use crate::like::SequenceLike;
use crate::sequence::Sequence;

/// A pull-style element producer: invoked repeatedly, it yields one element
/// per call until it reports exhaustion with `None`.
///
/// A generator drives [`Sequence::from`](crate::Sequence::from) only as far
/// as the producer itself decides; the sequence performs no independent
/// termination guess, so a producer that never returns `None` never
/// finishes.
///
/// # Examples
///
/// ```
/// use alef_sequence::{Generator, Sequence, seq};
///
/// let mut next = 1u32;
/// let powers = Generator::new(move || {
///     if next > 8 {
///         None
///     } else {
///         let value = next;
///         next *= 2;
///         Some(value)
///     }
/// });
/// assert_eq!(Sequence::from(powers).unwrap(), seq![1, 2, 4, 8]);
/// ```
pub struct Generator<'a, T>(Box<dyn FnMut() -> Option<T> + 'a>);

impl<'a, T> Generator<'a, T> {
    /// Wraps a producer closure.
    pub fn new(produce: impl FnMut() -> Option<T> + 'a) -> Generator<'a, T> {
        Generator(Box::new(produce))
    }

    /// Wraps any iterator as a generator.
    pub fn from_iterator<I>(elements: I) -> Generator<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let mut elements = elements.into_iter();
        Generator::new(move || elements.next())
    }
}

impl<T> Iterator for Generator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.0)()
    }
}

impl<T> fmt::Debug for Generator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

/// A normalized construction source for
/// [`Sequence::from`](crate::Sequence::from).
///
/// The conversions below fold the supported producer shapes into three
/// arms: ready-made element collections (native indexables and text, which
/// convert eagerly), borrowed 1-indexed collections (density-checked while
/// copying), and pull generators. A shape with no conversion cannot be
/// used as a source at all.
pub enum Source<'a, T> {
    /// Elements already extracted, in final order.
    Collection(Vec<T>),
    /// A borrowed 1-indexed collection; copied and density-checked by
    /// `Sequence::from`.
    Like(&'a dyn SequenceLike<T>),
    /// A pull producer, drained until exhaustion.
    Generator(Generator<'a, T>),
}

impl<'a, T> Source<'a, T> {
    /// Wraps ready-made elements.
    pub fn collection(elements: Vec<T>) -> Source<'a, T> {
        Source::Collection(elements)
    }

    /// Borrows an arbitrary 1-indexed collection.
    pub fn like(collection: &'a dyn SequenceLike<T>) -> Source<'a, T> {
        Source::Like(collection)
    }

    /// Splits text into one element per Unicode codepoint, left to right.
    pub fn text(text: &str) -> Source<'a, T>
    where
        T: From<char>,
    {
        Source::Collection(text.chars().map(T::from).collect())
    }

    /// Wraps a producer closure as a generator source.
    pub fn generator(produce: impl FnMut() -> Option<T> + 'a) -> Source<'a, T> {
        Source::Generator(Generator::new(produce))
    }
}

impl<'a, T> From<Vec<T>> for Source<'a, T> {
    fn from(elements: Vec<T>) -> Source<'a, T> {
        Source::Collection(elements)
    }
}

impl<'a, T: Clone> From<&[T]> for Source<'a, T> {
    fn from(elements: &[T]) -> Source<'a, T> {
        Source::Collection(elements.to_vec())
    }
}

impl<'a, T: Clone> From<&Vec<T>> for Source<'a, T> {
    fn from(elements: &Vec<T>) -> Source<'a, T> {
        Source::Collection(elements.clone())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for Source<'a, T> {
    fn from(elements: [T; N]) -> Source<'a, T> {
        Source::Collection(Vec::from(elements))
    }
}

impl<'a, T: Clone> From<&Sequence<T>> for Source<'a, T> {
    fn from(sequence: &Sequence<T>) -> Source<'a, T> {
        Source::Collection(sequence.to_vec())
    }
}

impl<'a, T> From<Sequence<T>> for Source<'a, T> {
    fn from(sequence: Sequence<T>) -> Source<'a, T> {
        Source::Collection(sequence.into_vec())
    }
}

impl<'a, T: From<char>> From<&str> for Source<'a, T> {
    fn from(text: &str) -> Source<'a, T> {
        Source::text(text)
    }
}

impl<'a, T: From<char>> From<String> for Source<'a, T> {
    fn from(text: String) -> Source<'a, T> {
        Source::text(&text)
    }
}

impl<'a, T> From<Generator<'a, T>> for Source<'a, T> {
    fn from(generator: Generator<'a, T>) -> Source<'a, T> {
        Source::Generator(generator)
    }
}

#[cfg(test)]
mod tests {
    use crate::seq;

    use super::*;

    #[test]
    fn test_collection_conversions() {
        for source in [
            Source::from(vec![1, 2, 3]),
            Source::from(&[1, 2, 3][..]),
            Source::from([1, 2, 3]),
            Source::from(&vec![1, 2, 3]),
        ] {
            let Source::Collection(elements) = source else {
                panic!("expected a collection source");
            };
            assert_eq!(elements, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_sequence_conversions() {
        let sequence = seq![4, 5];
        let Source::Collection(borrowed) = Source::from(&sequence) else {
            panic!("expected a collection source");
        };
        assert_eq!(borrowed, vec![4, 5]);

        let Source::Collection(owned) = Source::from(sequence) else {
            panic!("expected a collection source");
        };
        assert_eq!(owned, vec![4, 5]);
    }

    #[test]
    fn test_text_splits_into_codepoints() {
        let Source::Collection(letters) = Source::<char>::text("héllo") else {
            panic!("expected a collection source");
        };
        assert_eq!(letters, vec!['h', 'é', 'l', 'l', 'o']);

        let Source::Collection(from_string) = Source::<String>::from("ab".to_string()) else {
            panic!("expected a collection source");
        };
        assert_eq!(from_string, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_generator_is_an_iterator() {
        let collected: Vec<u32> = Generator::from_iterator(1..=3).collect();
        assert_eq!(collected, vec![1, 2, 3]);

        let mut calls = 0;
        let mut generator = Generator::new(move || {
            calls += 1;
            (calls <= 2).then_some(calls)
        });
        assert_eq!(generator.next(), Some(1));
        assert_eq!(generator.next(), Some(2));
        assert_eq!(generator.next(), None);
    }

    #[test]
    fn test_generator_debug_is_opaque() {
        let generator = Generator::<i32>::new(|| None);
        assert_eq!(format!("{generator:?}"), "Generator { .. }");
    }
}
