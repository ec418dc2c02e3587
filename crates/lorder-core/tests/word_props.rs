use lorder_core::{product_of, Word};
use proptest::prelude::*;

fn letters() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'A', 'B', 'C']), 0..24)
}

proptest! {
    #[test]
    fn invert_is_an_involution(raw in letters()) {
        let word = Word::from_letters(raw);
        prop_assert_eq!(word.invert().invert(), word.clone());
        prop_assert_eq!(word.invert().len(), word.len());
        if !word.is_empty() {
            prop_assert!(!word.invert().is_empty());
        }
    }

    #[test]
    fn reduction_leaves_no_cancelling_pairs(raw in letters()) {
        let word = Word::from_letters(raw);
        let reparsed = Word::parse(word.as_str());
        prop_assert_eq!(reparsed.ok(), Some(word));
    }

    #[test]
    fn word_times_inverse_is_empty(raw in letters()) {
        let word = Word::from_letters(raw);
        prop_assert!(word.concat(&word.invert()).is_empty());
        prop_assert!(product_of(&[word.invert(), word]).is_empty());
    }

    #[test]
    fn exponent_sums_are_additive(left in letters(), right in letters()) {
        let a = Word::from_letters(left);
        let b = Word::from_letters(right);
        for generator in ['a', 'b', 'c'] {
            prop_assert_eq!(
                a.concat(&b).exponent_sum(generator),
                a.exponent_sum(generator) + b.exponent_sum(generator)
            );
        }
    }
}
