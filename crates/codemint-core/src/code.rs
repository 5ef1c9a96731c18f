use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One generated string of fixed length over the alphabet.
///
/// Equality is exact string equality; ordering is lexicographic, which is
/// what the sort option of the generator relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Code(String);

impl Code {
    /// Wraps a string produced by a trusted generator.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated code length, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLength(u32);

impl CodeLength {
    /// Creates a code length, rejecting zero.
    pub fn new(length: u32) -> Result<Self, CoreError> {
        if length == 0 {
            return Err(CoreError::ZeroCodeLength);
        }
        Ok(Self(length))
    }

    /// Returns the length as a plain integer.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Display for CodeLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
