use codemint_generator::ProgressSink;
use std::io::Write;

/// Renders a `done/total` counter on stderr, redrawn in place.
///
/// Stderr keeps the counter out of the stdout stream that carries the
/// generated codes.
pub struct ConsoleProgress {
    total: u64,
    done: u64,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }

    fn render(&self) {
        eprint!("\r  {}/{}", self.done, self.total);
        std::io::stderr().flush().ok();
    }
}

impl ProgressSink for ConsoleProgress {
    fn begin(&mut self, total: u64) {
        self.total = total;
        self.done = 0;
        self.render();
    }

    fn advance(&mut self) {
        self.done += 1;
        self.render();
    }

    fn finish(&mut self) {
        eprintln!();
    }
}
