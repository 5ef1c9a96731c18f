use crate::alphabet::Alphabet;
use crate::code::CodeLength;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Total number of distinct codes representable for a given alphabet size
/// and code length, i.e. `alphabet_len ^ code_length`.
///
/// The exponentiation runs in `u128`. Realistic inputs (alphabet around 100
/// characters, lengths up to the low tens) fit comfortably; anything past
/// 128 bits saturates to [`Capacity::Saturated`], an explicit "effectively
/// unlimited" sentinel, instead of wrapping silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// The combination space fits in 128 bits.
    Exact(u128),
    /// The combination space exceeds `u128::MAX`.
    Saturated,
}

impl Capacity {
    /// Computes the capacity of `alphabet` at `length`.
    pub fn of(alphabet: &Alphabet, length: CodeLength) -> Self {
        let base = alphabet.len() as u128;
        match base.checked_pow(length.get()) {
            Some(capacity) => Self::Exact(capacity),
            None => Self::Saturated,
        }
    }

    /// Whether `requested` distinct codes fit in this combination space.
    pub fn admits(&self, requested: u64) -> bool {
        match self {
            Self::Exact(capacity) => u128::from(requested) <= *capacity,
            Self::Saturated => true,
        }
    }

    /// How many more codes could be generated beyond `requested`.
    ///
    /// Returns `None` for a saturated capacity, where the surplus is not
    /// meaningfully representable.
    pub fn surplus(&self, requested: u64) -> Option<u128> {
        match self {
            Self::Exact(capacity) => capacity.checked_sub(u128::from(requested)),
            Self::Saturated => None,
        }
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(capacity) => write!(f, "{}", capacity),
            Self::Saturated => f.write_str("more than 2^128"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(raw: &str) -> Alphabet {
        Alphabet::normalize(raw).unwrap().alphabet
    }

    fn length(l: u32) -> CodeLength {
        CodeLength::new(l).unwrap()
    }

    #[test]
    fn capacity_is_alphabet_size_to_the_length() {
        assert_eq!(Capacity::of(&alphabet("ab"), length(1)), Capacity::Exact(2));
        assert_eq!(Capacity::of(&alphabet("ab"), length(2)), Capacity::Exact(4));
        assert_eq!(
            Capacity::of(&alphabet("abc0123456"), length(3)),
            Capacity::Exact(1000)
        );
    }

    #[test]
    fn single_character_alphabet_has_capacity_one() {
        assert_eq!(Capacity::of(&alphabet("a"), length(5)), Capacity::Exact(1));
    }

    #[test]
    fn oversized_spaces_saturate() {
        // 36^24 fits in u128, 36^25 does not.
        assert!(matches!(
            Capacity::of(&Alphabet::default(), length(24)),
            Capacity::Exact(_)
        ));
        assert_eq!(
            Capacity::of(&Alphabet::default(), length(25)),
            Capacity::Saturated
        );
    }

    #[test]
    fn admits_up_to_the_exact_capacity() {
        let capacity = Capacity::of(&alphabet("ab"), length(1));
        assert!(capacity.admits(0));
        assert!(capacity.admits(2));
        assert!(!capacity.admits(3));
    }

    #[test]
    fn saturated_capacity_admits_anything() {
        assert!(Capacity::Saturated.admits(u64::MAX));
        assert_eq!(Capacity::Saturated.surplus(u64::MAX), None);
    }

    #[test]
    fn surplus_is_the_remaining_headroom() {
        let capacity = Capacity::of(&alphabet("ab"), length(2));
        assert_eq!(capacity.surplus(1), Some(3));
        assert_eq!(capacity.surplus(4), Some(0));
        assert_eq!(capacity.surplus(5), None);
    }
}
