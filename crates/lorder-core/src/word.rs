//! Words in a free group over single-letter generators.
//!
//! A generator is a lowercase ASCII letter and its inverse is the matching
//! uppercase letter, so `aB` denotes `a * b^-1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LoError};

fn word_error(code: &str, message: impl Into<String>, word: &str) -> LoError {
    LoError::Word(ErrorInfo::new(code, message).with_context("word", word))
}

/// Returns the inverse letter of `letter` (`a` <-> `A`).
pub fn invert_letter(letter: char) -> char {
    if letter.is_ascii_lowercase() {
        letter.to_ascii_uppercase()
    } else {
        letter.to_ascii_lowercase()
    }
}

/// Returns whether `a` and `b` cancel when adjacent.
pub fn cancels(a: char, b: char) -> bool {
    a != b && a.eq_ignore_ascii_case(&b)
}

/// Freely reduced word over ASCII letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Returns the empty word representing the identity.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Parses an already reduced word, rejecting non-letters and cancelling pairs.
    pub fn parse(text: &str) -> Result<Self, LoError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(word_error(
                "word-letter",
                format!("'{bad}' is not a generator letter"),
                text,
            ));
        }
        if !Self::is_reduced(text) {
            let word = Self::from_letters(text.chars());
            return Err(LoError::Word(
                ErrorInfo::new(
                    "word-not-reduced",
                    "word contains adjacent cancelling letters",
                )
                .with_context("word", text)
                .with_hint(format!("reduces to '{word}'")),
            ));
        }
        Ok(Self(text.to_string()))
    }

    /// Builds a word from letters, freely reducing as it goes.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut reduced = String::new();
        for letter in letters {
            match reduced.chars().last() {
                Some(last) if cancels(last, letter) => {
                    reduced.pop();
                }
                _ => reduced.push(letter),
            }
        }
        Self(reduced)
    }

    /// Freely reduces arbitrary text, rejecting only non-letters.
    pub fn free_reduce(text: &str) -> Result<Self, LoError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(word_error(
                "word-letter",
                format!("'{bad}' is not a generator letter"),
                text,
            ));
        }
        Ok(Self::from_letters(text.chars()))
    }

    /// Returns whether `text` has no adjacent cancelling letters.
    pub fn is_reduced(text: &str) -> bool {
        let letters: Vec<char> = text.chars().collect();
        letters.windows(2).all(|pair| !cancels(pair[0], pair[1]))
    }

    /// Returns the single-letter word for a generator or inverse generator.
    pub fn letter(letter: char) -> Self {
        Self(letter.to_string())
    }

    /// Returns the inverse word: reversed with every letter inverted.
    pub fn invert(&self) -> Self {
        Self(self.0.chars().rev().map(invert_letter).collect())
    }

    /// Concatenates two words and freely reduces the result.
    pub fn concat(&self, other: &Word) -> Self {
        Self::from_letters(self.0.chars().chain(other.0.chars()))
    }

    /// Appends `letter` when it does not cancel the last letter.
    pub fn extended(&self, letter: char) -> Option<Self> {
        match self.last() {
            Some(last) if cancels(last, letter) => None,
            _ => {
                let mut text = self.0.clone();
                text.push(letter);
                Some(Self(text))
            }
        }
    }

    /// Returns the conjugate `h * self * h^-1`, freely reduced.
    pub fn conjugate_by(&self, h: &Word) -> Self {
        h.concat(self).concat(&h.invert())
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the empty word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last letter of the word, if any.
    pub fn last(&self) -> Option<char> {
        self.0.chars().last()
    }

    /// Iterates over the letters in order.
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Signed number of occurrences of `generator` (lowercase counts +1, uppercase -1).
    pub fn exponent_sum(&self, generator: char) -> i64 {
        let lower = generator.to_ascii_lowercase();
        self.0.chars().fold(0, |acc, letter| {
            if letter == lower {
                acc + 1
            } else if letter == lower.to_ascii_uppercase() {
                acc - 1
            } else {
                acc
            }
        })
    }

    /// Borrows the underlying text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = LoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = LoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// Splits a dot separated token list such as `"a.b.aB"` into words.
///
/// The empty string yields an empty list.
pub fn parse_dotted(text: &str) -> Result<Vec<Word>, LoError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split('.').map(Word::parse).collect()
}

/// Joins words with `.` separators, the inverse of [`parse_dotted`].
pub fn join_dotted(words: &[Word]) -> String {
    let parts: Vec<&str> = words.iter().map(Word::as_str).collect();
    parts.join(".")
}

/// Multiplies a list of tokens into one freely reduced word.
pub fn product_of(words: &[Word]) -> Word {
    Word::from_letters(words.iter().flat_map(|word| word.0.chars()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_case_and_reverses() {
        let word = Word::parse("abAc").unwrap();
        assert_eq!(word.invert().as_str(), "CaBA");
        assert_eq!(word.invert().invert(), word);
    }

    #[test]
    fn parse_rejects_cancelling_pairs() {
        let err = Word::parse("abBa").unwrap_err();
        assert_eq!(err.info().code, "word-not-reduced");
        assert_eq!(err.info().hint.as_deref(), Some("reduces to 'aa'"));
    }

    #[test]
    fn free_reduce_accepts_cancelling_text() {
        assert!(!Word::is_reduced("abBa"));
        assert_eq!(Word::free_reduce("abBa").unwrap().as_str(), "aa");
        assert!(Word::free_reduce("aBBA").unwrap().len() == 4);
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(Word::parse("a1").unwrap_err().info().code, "word-letter");
    }

    #[test]
    fn concat_reduces_across_the_seam() {
        let left = Word::parse("aB").unwrap();
        let right = Word::parse("bA").unwrap();
        assert!(left.concat(&right).is_empty());
    }

    #[test]
    fn dotted_lists_round_trip() {
        let words = parse_dotted("a.b.aB").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(join_dotted(&words), "a.b.aB");
        assert!(parse_dotted("").unwrap().is_empty());
    }

    #[test]
    fn exponent_sums_count_signed_letters() {
        let word = Word::parse("ababaBaaB").unwrap();
        assert_eq!(word.exponent_sum('a'), 5);
        assert_eq!(word.exponent_sum('b'), 0);
    }
}
