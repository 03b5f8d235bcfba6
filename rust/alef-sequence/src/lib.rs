//! Dense, growable, 1-based ordered sequences.
//!
//! The central type is [`Sequence<T>`]: a contiguous run of elements at
//! positions `1..=len`, with no holes, modeled after the ordered-sequence
//! containers of dynamic languages but with the usual Rust ownership and
//! borrowing rules.
//!
//! # Positions
//!
//! Every operation speaks 1-based positions. Signed-position operations
//! ([`Sequence::at`], [`Sequence::slice`], ...) also accept negative
//! positions counted from the back: `-1` is the last element. Position 0
//! is never occupied.
//!
//! # Construction
//!
//! Sequences are built with the [`seq!`] macro, collected from iterators,
//! or converted from other shapes through [`Sequence::from`] and the
//! [`Source`] enum: ready-made collections, text (one element per Unicode
//! codepoint), pull [`Generator`]s, and borrowed [`SequenceLike`]
//! collections.
//!
//! # Errors and absence
//!
//! Reads that miss ([`Sequence::at`], [`Sequence::pop`], searches) return
//! `None`. Contract violations, such as writing where a hole would form,
//! joining an unprintable element, or reducing an empty sequence with no
//! seed, return `alef_common::error::Error` values describing the offense.
//!
//! # Example
//!
//! ```
//! use alef_sequence::seq;
//!
//! let pages = seq![10, 20, 30, 40, 50];
//! assert_eq!(pages.slice(2, -2), seq![20, 30, 40]);
//!
//! let total = pages.reduce(|sum, n, _| sum + n).unwrap();
//! assert_eq!(total, 150);
//!
//! let labels = pages.map(|n, position| format!("{position}={n}"));
//! assert_eq!(labels.at(-1), Some(&"5=50".to_string()));
//! ```

mod index;

pub mod key;
pub mod like;
pub mod sequence;
pub mod source;

pub use key::Key;
pub use like::SequenceLike;
pub use sequence::Sequence;
pub use source::{Generator, Source};

/// Builds a [`Sequence`] from the listed elements, first to last.
///
/// `seq![]` is the empty sequence.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::from_vec(::std::vec![$($element),+])
    };
}
