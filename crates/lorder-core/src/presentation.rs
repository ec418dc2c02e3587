//! Finite group presentations over single-letter generators.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LoError};
use crate::word::{invert_letter, parse_dotted, Word};

fn presentation_error(code: &str, message: impl Into<String>) -> LoError {
    LoError::Word(ErrorInfo::new(code, message))
}

fn generator_error(code: &str, message: &str, generator: char) -> LoError {
    LoError::Word(ErrorInfo::new(code, message).with_context("generator", generator.to_string()))
}

/// Generators and relators of a finitely presented group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    generators: Vec<char>,
    relators: Vec<Word>,
}

impl Presentation {
    /// Validates and builds a presentation.
    ///
    /// Generators must be distinct lowercase letters and relators may only
    /// use those generators and their inverses.
    pub fn new(generators: Vec<char>, relators: Vec<Word>) -> Result<Self, LoError> {
        if generators.is_empty() {
            return Err(presentation_error(
                "presentation-empty",
                "a presentation needs at least one generator",
            ));
        }
        let mut seen = BTreeSet::new();
        for &generator in &generators {
            if !generator.is_ascii_lowercase() {
                return Err(generator_error(
                    "presentation-generator",
                    "generators must be lowercase ASCII letters",
                    generator,
                ));
            }
            if !seen.insert(generator) {
                return Err(generator_error(
                    "presentation-duplicate",
                    "generator listed more than once",
                    generator,
                ));
            }
        }
        let presentation = Self {
            generators,
            relators,
        };
        for relator in &presentation.relators {
            presentation.check_word(relator)?;
        }
        Ok(presentation)
    }

    /// Parses the dot separated generator list used by certificates (`"a.b"`).
    pub fn parse(generators: &str, relators: &[String]) -> Result<Self, LoError> {
        let mut letters = Vec::new();
        for token in generators.split('.') {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => letters.push(letter),
                _ => {
                    return Err(LoError::Word(
                        ErrorInfo::new(
                            "presentation-generator",
                            "generator tokens must be single letters",
                        )
                        .with_context("token", token),
                    ))
                }
            }
        }
        let relators = relators
            .iter()
            .map(|text| Word::parse(text))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(letters, relators)
    }

    /// Ordered generator letters.
    pub fn generators(&self) -> &[char] {
        &self.generators
    }

    /// Ordered relator words.
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Number of generators.
    pub fn rank(&self) -> usize {
        self.generators.len()
    }

    /// Generators followed by their inverses, the letter order used for ball enumeration.
    pub fn letters(&self) -> Vec<char> {
        self.generators
            .iter()
            .copied()
            .chain(self.generators.iter().copied().map(invert_letter))
            .collect()
    }

    /// Dot separated generator list (`"a.b"`).
    pub fn generators_dotted(&self) -> String {
        let parts: Vec<String> = self.generators.iter().map(char::to_string).collect();
        parts.join(".")
    }

    /// Rejects words using letters outside this presentation.
    pub fn check_word(&self, word: &Word) -> Result<(), LoError> {
        for letter in word.letters() {
            if !self.generators.contains(&letter.to_ascii_lowercase()) {
                return Err(LoError::Word(
                    ErrorInfo::new("word-alphabet", "word uses an unknown generator")
                        .with_context("word", word.as_str())
                        .with_context("letter", letter.to_string()),
                ));
            }
        }
        Ok(())
    }

    /// Parses and checks a dot separated token list against the alphabet.
    pub fn parse_tokens(&self, text: &str) -> Result<Vec<Word>, LoError> {
        let words = parse_dotted(text)?;
        for word in &words {
            self.check_word(word)?;
        }
        Ok(words)
    }
}
