//! Unique random code generation engine.
//!
//! This crate implements rejection-sampled generation of N distinct codes
//! over a normalized alphabet. Presentation concerns (progress display,
//! pacing sleeps) are pushed behind the [`ProgressSink`] and [`Pacer`]
//! seams so the engine itself stays pure.

pub mod error;
pub mod generator;
pub mod pacer;
pub mod progress;

pub use error::Error;
pub use generator::{CodeSetGenerator, GeneratorSettings};
pub use pacer::{Pacer, ThreadPacer};
pub use progress::{NoopProgress, ProgressSink};
