use std::time::Duration;

/// Blocks the generation thread between accepted codes.
///
/// Pacing exists purely so progress stays human-observable during
/// interactive runs; it carries no ordering or correctness implications.
pub trait Pacer: Send + Sync {
    /// Block the current thread for `delay`.
    fn pause(&self, delay: Duration);
}

/// Pacer backed by a real thread sleep.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_pacer {
    use crate::pacer::Pacer;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every pause instead of sleeping.
    #[derive(Clone, Default)]
    pub(crate) struct TestPacer {
        pauses: Arc<Mutex<Vec<Duration>>>,
    }

    impl TestPacer {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn pauses(&self) -> Vec<Duration> {
            self.pauses
                .lock()
                .expect("test pacer lock should not be poisoned")
                .clone()
        }
    }

    impl Pacer for TestPacer {
        fn pause(&self, delay: Duration) {
            self.pauses
                .lock()
                .expect("test pacer lock should not be poisoned")
                .push(delay);
        }
    }

    #[test]
    fn test_pacer_records_pauses() {
        let pacer = TestPacer::new();
        pacer.pause(Duration::from_millis(25));
        pacer.pause(Duration::from_millis(10));
        assert_eq!(
            pacer.pauses(),
            vec![Duration::from_millis(25), Duration::from_millis(10)]
        );
    }
}
