/// Receives progress events while a code set is being generated.
///
/// One `advance` is emitted per accepted code; rejected candidates are
/// invisible to the sink. Implementations live at the boundary (e.g. a
/// console counter); the engine never prints anything itself.
pub trait ProgressSink {
    /// Called once before generation starts, with the target count.
    fn begin(&mut self, total: u64);
    /// Called once per code accepted into the result set.
    fn advance(&mut self);
    /// Called once after the result set is complete.
    fn finish(&mut self);
}

/// A sink that discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn begin(&mut self, _total: u64) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}
