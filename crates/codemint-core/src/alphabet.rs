use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Default character pool: lowercase `a`-`z` followed by `0`-`9`.
pub const DEFAULT_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// An ordered set of distinct characters usable in a generated code.
///
/// An `Alphabet` is always the result of [`Alphabet::normalize`], so its
/// characters are guaranteed distinct and kept in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    chars: Vec<char>,
}

/// Outcome of normalizing a raw character string into an [`Alphabet`].
///
/// `removed_duplicates` is a side-channel flag, not an error: the boundary
/// can warn the user about duplicate input characters without failing the
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub alphabet: Alphabet,
    pub removed_duplicates: bool,
}

impl Alphabet {
    /// Deduplicates `raw` preserving first-occurrence order.
    ///
    /// Returns `Err(EmptyAlphabet)` when the normalized result has zero
    /// characters.
    pub fn normalize(raw: &str) -> Result<Normalization, CoreError> {
        let mut chars: Vec<char> = Vec::new();
        let mut removed_duplicates = false;

        for c in raw.chars() {
            if chars.contains(&c) {
                removed_duplicates = true;
            } else {
                chars.push(c);
            }
        }

        if chars.is_empty() {
            return Err(CoreError::EmptyAlphabet);
        }

        Ok(Normalization {
            alphabet: Alphabet { chars },
            removed_duplicates,
        })
    }

    /// Returns the distinct characters in first-occurrence order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a normalized alphabet; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        // DEFAULT_CHARACTERS holds no duplicates, so this cannot fail.
        Self::normalize(DEFAULT_CHARACTERS)
            .map(|n| n.alphabet)
            .expect("default character pool is non-empty")
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
