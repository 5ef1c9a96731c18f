use anyhow::{Context, Result};
use codemint_core::Code;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Writes the codes newline-joined, one per line, no trailing metadata.
pub fn write_codes(path: &Path, codes: &[Code]) -> Result<()> {
    let joined = codes
        .iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, joined).with_context(|| format!("could not write to {}", path.display()))
}

/// Asks on stdin whether `path` may be overwritten.
///
/// Anything other than an explicit yes (including a read failure on a
/// non-interactive stdin) keeps the existing file.
pub fn confirm_overwrite(path: &Path) -> bool {
    eprint!("File {} exists. Erase it? [y/N] ", path.display());
    std::io::stderr().flush().ok();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes" | "YES")
}
