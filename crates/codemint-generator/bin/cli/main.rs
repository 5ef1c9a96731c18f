mod cli;
mod output;
mod progress;

use crate::cli::Cli;
use crate::progress::ConsoleProgress;
use clap::Parser;
use codemint_core::{Alphabet, CodeLength};
use codemint_generator::{CodeSetGenerator, GeneratorSettings};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, warn};

// Exit codes: infeasible requests abort before any generation work; a
// write failure happens after the result set was already computed.
const EXIT_INFEASIBLE: u8 = 1;
const EXIT_WRITE_FAILED: u8 = 2;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays a clean code-per-line stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse();

    let length = match CodeLength::new(config.length) {
        Ok(length) => length,
        Err(err) => {
            error!(%err, "invalid code length");
            return ExitCode::from(EXIT_INFEASIBLE);
        }
    };

    let normalization = match Alphabet::normalize(&config.characters) {
        Ok(normalization) => normalization,
        Err(err) => {
            error!(%err, "invalid character pool");
            return ExitCode::from(EXIT_INFEASIBLE);
        }
    };
    if normalization.removed_duplicates {
        warn!(
            characters = %config.characters,
            "duplicate characters were found in the pool and removed"
        );
    }
    let alphabet = normalization.alphabet;

    let settings = GeneratorSettings::builder()
        .length(length)
        .amount(config.amount)
        .sort(config.sort)
        .pace(Duration::from_millis(config.sleep_time_ms))
        .build();

    let generator = match CodeSetGenerator::new(alphabet.clone(), settings) {
        Ok(generator) => generator,
        Err(err) => {
            error!(%err, "cannot satisfy the request");
            return ExitCode::from(EXIT_INFEASIBLE);
        }
    };

    info!(
        amount = config.amount,
        characters = %alphabet,
        "generating combinations"
    );
    if let Some(surplus) = generator.surplus() {
        if surplus > 0 {
            info!(
                surplus = %surplus,
                capacity = %generator.capacity(),
                "more combinations remain available"
            );
        }
    }

    let mut progress = ConsoleProgress::new();
    let codes = generator.generate(&mut rand::thread_rng(), &mut progress);

    match config.output {
        Some(path) => {
            if path.exists() && !config.force && !output::confirm_overwrite(&path) {
                info!(path = %path.display(), "keeping the existing file; codes were not written");
                return ExitCode::SUCCESS;
            }
            if let Err(err) = output::write_codes(&path, &codes) {
                error!(%err, "writing the result set failed");
                return ExitCode::from(EXIT_WRITE_FAILED);
            }
            info!(path = %path.display(), count = codes.len(), "codes written");
        }
        None => {
            for code in &codes {
                println!("{}", code);
            }
        }
    }

    ExitCode::SUCCESS
}
