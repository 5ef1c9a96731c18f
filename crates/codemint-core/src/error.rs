use thiserror::Error;

/// Errors raised while validating generator inputs.
///
/// All of these are precondition failures detected before any random
/// generation begins; nothing in this crate fails mid-operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,
    #[error("code length must be at least 1")]
    ZeroCodeLength,
}
