//! Core types for the codemint unique code generator.
//!
//! This crate provides the domain types shared by the generation engine
//! and the CLI boundary: the deduplicated character alphabet, the validated
//! code length, the combination-space capacity, and the generated code.

pub mod alphabet;
pub mod capacity;
pub mod code;
pub mod error;

pub use alphabet::{Alphabet, Normalization, DEFAULT_CHARACTERS};
pub use capacity::Capacity;
pub use code::{Code, CodeLength};
pub use error::CoreError;
