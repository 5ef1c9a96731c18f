use crate::error::Error;
use crate::pacer::{Pacer, ThreadPacer};
use crate::progress::ProgressSink;
use codemint_core::{Alphabet, Capacity, Code, CodeLength};
use rand::Rng;
use std::collections::HashSet;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Configures one generation run.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct GeneratorSettings {
    /// Length of every generated code, in characters.
    #[builder]
    pub length: CodeLength,
    /// Number of distinct codes to produce.
    #[builder]
    pub amount: u64,
    /// Sort the finalized set lexicographically instead of keeping
    /// insertion order.
    #[builder(default)]
    pub sort: bool,
    /// Pause between accepted codes, for human-observable progress.
    #[builder(default)]
    pub pace: Duration,
}

/// Generates a set of distinct random codes by rejection sampling.
///
/// Candidates are drawn uniformly at random with replacement across
/// positions; colliding candidates are discarded and retried. Expected
/// draws stay close to `amount` while the combination space dwarfs the
/// request, and degrade sharply as `amount` approaches the capacity.
/// That slowdown is inherent to the strategy, not a defect.
///
/// The capacity precondition is checked at construction, so
/// [`CodeSetGenerator::generate`] is infallible and always terminates.
pub struct CodeSetGenerator<P: Pacer = ThreadPacer> {
    alphabet: Alphabet,
    settings: GeneratorSettings,
    capacity: Capacity,
    pacer: P,
}

impl CodeSetGenerator<ThreadPacer> {
    /// Creates a generator that paces with real thread sleeps.
    ///
    /// Fails with [`Error::InsufficientCapacity`] when the alphabet and
    /// length cannot yield `amount` distinct codes.
    pub fn new(alphabet: Alphabet, settings: GeneratorSettings) -> Result<Self, Error> {
        Self::with_pacer(alphabet, settings, ThreadPacer)
    }
}

impl<P: Pacer> CodeSetGenerator<P> {
    /// Creates a generator with a custom pacing collaborator.
    pub fn with_pacer(
        alphabet: Alphabet,
        settings: GeneratorSettings,
        pacer: P,
    ) -> Result<Self, Error> {
        let capacity = Capacity::of(&alphabet, settings.length);
        if !capacity.admits(settings.amount) {
            return Err(Error::InsufficientCapacity {
                requested: settings.amount,
                capacity,
            });
        }

        Ok(Self {
            alphabet,
            settings,
            capacity,
            pacer,
        })
    }

    /// The total combination space for this alphabet and length.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// How many more codes could be generated beyond the requested amount.
    ///
    /// `None` when the capacity saturated 128 bits.
    pub fn surplus(&self) -> Option<u128> {
        self.capacity.surplus(self.settings.amount)
    }

    /// Produces exactly `amount` distinct codes.
    ///
    /// Returns codes in insertion order, or lexicographically sorted when
    /// the `sort` setting is on. One `advance` is emitted per accepted
    /// code; a requested amount of zero emits no progress events at all.
    pub fn generate<R: Rng>(&self, rng: &mut R, progress: &mut dyn ProgressSink) -> Vec<Code> {
        let amount = self.settings.amount;
        if amount == 0 {
            return Vec::new();
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(amount as usize);
        let mut codes: Vec<Code> = Vec::with_capacity(amount as usize);

        progress.begin(amount);

        while (codes.len() as u64) < amount {
            let candidate = self.draw_candidate(rng);

            // Collisions are discarded without counting toward the amount.
            // The construction-time capacity check guarantees an unseen
            // code always remains, so this loop terminates.
            if !seen.insert(candidate.clone()) {
                continue;
            }

            codes.push(Code::new(candidate));
            progress.advance();

            if !self.settings.pace.is_zero() {
                self.pacer.pause(self.settings.pace);
            }
        }

        progress.finish();

        if self.settings.sort {
            codes.sort();
        }

        codes
    }

    /// Draws one candidate: `length` characters chosen uniformly and
    /// independently, with replacement across positions.
    fn draw_candidate<R: Rng>(&self, rng: &mut R) -> String {
        let chars = self.alphabet.chars();
        (0..self.settings.length.get())
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }
}
