use clap::Parser;
use codemint_core::DEFAULT_CHARACTERS;
use std::path::PathBuf;

pub const LENGTH_ENV: &str = "CODEMINT_LENGTH";
pub const AMOUNT_ENV: &str = "CODEMINT_AMOUNT";
pub const CHARACTERS_ENV: &str = "CODEMINT_CHARACTERS";
pub const SLEEP_TIME_ENV: &str = "CODEMINT_SLEEP_TIME_MS";

#[derive(Debug, Parser)]
#[command(
    name = "codemint",
    about = "Generates unique random codes from a configurable character pool."
)]
pub struct Cli {
    /// The length of each generated code.
    #[arg(short, long, env = LENGTH_ENV, default_value_t = 1)]
    pub length: u32,

    /// The number of codes to generate.
    #[arg(short, long, env = AMOUNT_ENV, default_value_t = 1)]
    pub amount: u64,

    /// The characters to draw from, as a plain string.
    #[arg(short, long, env = CHARACTERS_ENV, default_value = DEFAULT_CHARACTERS)]
    pub characters: String,

    /// Milliseconds to wait between generations, for visual comfort only.
    #[arg(short = 's', long = "sleep-time", env = SLEEP_TIME_ENV, default_value_t = 0)]
    pub sleep_time_ms: u64,

    /// Write the codes to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sort the results lexicographically before output.
    #[arg(long)]
    pub sort: bool,

    /// Overwrite an existing output file without asking.
    #[arg(long)]
    pub force: bool,
}
