use alef_common::error::ErrorKind;
use alef_sequence::{Generator, Sequence, SequenceLike, Source, seq};

/// A hand-rolled indexable collection whose claimed length and occupied
/// slots can disagree, for exercising the construction and classification
/// paths.
struct Cells {
    claimed: usize,
    slots: Vec<Option<u32>>,
}

impl SequenceLike<u32> for Cells {
    fn length(&self) -> usize {
        self.claimed
    }

    fn item(&self, position: usize) -> Option<&u32> {
        self.slots.get(position.checked_sub(1)?)?.as_ref()
    }
}

fn norm_bound(bound: i64, len: usize) -> usize {
    let translated = if bound < 0 { len as i64 + bound + 1 } else { bound };
    translated.clamp(1, len as i64) as usize
}

fn slice_model(elements: &[i64], start: i64, finish: i64) -> Vec<i64> {
    if elements.is_empty() {
        return Vec::new();
    }
    let start = norm_bound(start, elements.len());
    let finish = norm_bound(finish, elements.len());
    (start..=finish)
        .map(|position| elements[position - 1])
        .collect()
}

fn fill_model(model: &mut [u32], value: u32, start: i64, finish: i64) {
    if model.is_empty() {
        return;
    }
    let start = norm_bound(start, model.len());
    let finish = norm_bound(finish, model.len());
    if start <= finish {
        model[start - 1..finish].fill(value);
    }
}

#[test]
fn test_density_preserved_under_random_mutation() {
    fastrand::seed(987362911);
    let mut sequence = Sequence::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..2000 {
        match fastrand::u8(0..8) {
            0..=1 => {
                let value = fastrand::u32(0..1000);
                let len = sequence.push(value);
                model.push(value);
                assert_eq!(len, model.len());
            }
            2 => {
                assert_eq!(sequence.pop(), model.pop());
            }
            3 => {
                let value = fastrand::u32(0..1000);
                let len = sequence.unshift(value);
                model.insert(0, value);
                assert_eq!(len, model.len());
            }
            4 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(sequence.shift(), expected);
            }
            5 => {
                let position = fastrand::i64(1..=model.len() as i64 + 1);
                let value = fastrand::u32(0..1000);
                sequence.set(position, value).unwrap();
                if position as usize == model.len() + 1 {
                    model.push(value);
                } else {
                    model[position as usize - 1] = value;
                }
            }
            6 => {
                sequence.reverse();
                model.reverse();
            }
            7 => {
                let value = fastrand::u32(0..1000);
                let start = fastrand::i64(-8..=12);
                let finish = fastrand::i64(-8..=12);
                sequence.fill_range(value, start, finish);
                fill_model(&mut model, value, start, finish);
            }
            _ => unreachable!(),
        }

        assert_eq!(sequence.len(), model.len());
        assert_eq!(sequence.as_slice(), model.as_slice());
        for position in 1..=model.len() {
            assert!(sequence.get(position).is_some());
        }
        assert_eq!(sequence.get(model.len() + 1), None);
        assert!(Sequence::is_sequence(&sequence));
    }
}

#[test]
fn test_negative_positions_mirror_positive_ones() {
    fastrand::seed(77103);
    let numbers: Sequence<u32> = (0..50).map(|_| fastrand::u32(..)).collect();
    let len = numbers.len() as i64;

    for position in 1..=numbers.len() {
        let from_back = position as i64 - len - 1;
        assert_eq!(numbers.at(position as i64), numbers.at(from_back));
    }
    assert_eq!(numbers.at(0), None);
    assert_eq!(numbers.at(len + 1), None);
    assert_eq!(numbers.at(-len - 1), None);
}

#[test]
fn test_construction_round_trip_preserves_order() {
    let source = seq![3, 1, 4, 1, 5];
    let rebuilt = Sequence::from(&source).unwrap();
    assert_eq!(rebuilt, source);
    assert_eq!(rebuilt.join(",").unwrap(), "3,1,4,1,5");
}

#[test]
fn test_text_sources_split_into_codepoints() {
    let letters: Sequence<char> = Sequence::from("héllo").unwrap();
    assert_eq!(letters.len(), 5);
    assert_eq!(letters.at(2), Some(&'é'));
    assert_eq!(letters.join("").unwrap(), "héllo");

    let owned: Sequence<char> = Sequence::from(String::from("ab")).unwrap();
    assert_eq!(owned, seq!['a', 'b']);
}

#[test]
fn test_generator_sources_pull_until_exhausted() {
    let mut next = 1u32;
    let doubling = Generator::new(move || {
        if next > 8 {
            return None;
        }
        let value = next;
        next *= 2;
        Some(value)
    });
    let powers = Sequence::from(doubling).unwrap();
    assert_eq!(powers, seq![1, 2, 4, 8]);

    let counted = Sequence::from(Generator::from_iterator((1..).take(3))).unwrap();
    assert_eq!(counted, seq![1, 2, 3]);
}

#[test]
fn test_borrowed_collections_must_be_dense() {
    let dense = Cells {
        claimed: 3,
        slots: vec![Some(7), Some(8), Some(9)],
    };
    let copied = Sequence::from(Source::like(&dense)).unwrap();
    assert_eq!(copied, seq![7, 8, 9]);

    let sparse = Cells {
        claimed: 3,
        slots: vec![Some(7), None, Some(9)],
    };
    let err = Sequence::from(Source::like(&sparse)).unwrap_err();
    let ErrorKind::InvalidArgument { shape, message } = err.kind() else {
        panic!("expected InvalidArgument, got {err:?}");
    };
    assert_eq!(shape, "an indexable collection");
    assert!(message.contains("position 2"), "message: {message}");
}

#[test]
fn test_is_sequence_accepts_dense_shapes_only() {
    assert!(Sequence::is_sequence(&seq![1, 2, 3]));
    assert!(Sequence::<i32>::is_sequence(&Vec::new()));
    assert!(Sequence::is_sequence(&Cells {
        claimed: 2,
        slots: vec![Some(1), Some(2)],
    }));

    // Claims three positions but holds nothing at the second.
    assert!(!Sequence::is_sequence(&Cells {
        claimed: 3,
        slots: vec![Some(1), None, Some(3)],
    }));
    // Understates its length: position 3 is occupied beyond the claimed 2.
    assert!(!Sequence::is_sequence(&Cells {
        claimed: 2,
        slots: vec![Some(1), Some(2), Some(3)],
    }));
}

#[test]
fn test_map_and_filter_length_laws() {
    fastrand::seed(31251);
    let numbers: Sequence<i32> = (0..40).map(|_| fastrand::i32(-50..50)).collect();

    assert_eq!(numbers.map(|n, _| n * 2).len(), numbers.len());

    let kept = numbers.filter(|n| *n >= 0);
    assert!(kept.len() <= numbers.len());
    assert!(kept.every(|n| *n >= 0));

    // Kept elements form a subsequence of the original.
    let mut cursor = numbers.iter();
    for value in &kept {
        assert!(cursor.any(|n| n == value));
    }
}

#[test]
fn test_reverse_involution() {
    fastrand::seed(6407);
    let numbers: Sequence<u16> = (0..25).map(|_| fastrand::u16(..)).collect();
    assert_eq!(numbers.to_reversed().to_reversed(), numbers);

    let mut twice = numbers.clone();
    twice.reverse();
    twice.reverse();
    assert_eq!(twice, numbers);
}

#[test]
fn test_push_pop_duality() {
    let mut numbers = seq![1, 2, 3];
    assert_eq!(numbers.push(99), 4);
    assert_eq!(numbers.pop(), Some(99));
    assert_eq!(numbers, seq![1, 2, 3]);

    let mut fronted = seq![1, 2, 3];
    fronted.unshift(0);
    assert_eq!(fronted.shift(), Some(0));
    assert_eq!(fronted, seq![1, 2, 3]);
}

#[test]
fn test_reduce_matches_seeded_fold_over_the_tail() {
    fastrand::seed(90210);
    let numbers: Sequence<i64> = (0..12).map(|_| fastrand::i64(-100..100)).collect();

    let reduced = numbers.reduce(|acc, n, _| acc + n).unwrap();
    let folded = numbers.slice_from(2).fold(numbers[1], |acc, n, _| acc + n);
    assert_eq!(reduced, folded);
}

#[test]
fn test_slice_agrees_with_positionwise_model() {
    fastrand::seed(448819203);
    let numbers: Sequence<i64> = (0..10).map(|n| n * 11).collect();

    for _ in 0..500 {
        let start = fastrand::i64(-15..=15);
        let finish = fastrand::i64(-15..=15);
        assert_eq!(
            numbers.slice(start, finish).into_vec(),
            slice_model(numbers.as_slice(), start, finish),
            "slice({start}, {finish})"
        );
    }
}

#[test]
fn test_everyday_scenarios() {
    let numbers = seq![10, 20, 30];
    assert_eq!(numbers.slice_from(-2), seq![20, 30]);
    assert_eq!(numbers.reduce(|sum, n, _| sum + n).unwrap(), 60);

    let merged = seq![1, 2, 3].merge([&seq![4, 5]]);
    assert_eq!(merged.join("-").unwrap(), "1-2-3-4-5");

    let mut letters = seq!['a'];
    assert!(letters.set("x", 'b').is_err());

    assert_eq!(Sequence::<i32>::new().pop(), None);
}
