//! End-to-end flow: normalize a raw character pool, check capacity,
//! generate, and finalize — the same path the CLI drives.

use codemint_core::{Alphabet, Capacity, CodeLength};
use codemint_generator::{CodeSetGenerator, Error, GeneratorSettings, NoopProgress};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

#[test]
fn raw_pool_with_duplicates_flows_through_to_a_sorted_result() {
    let normalization = Alphabet::normalize("abba01").unwrap();
    assert!(normalization.removed_duplicates);
    assert_eq!(normalization.alphabet.chars(), &['a', 'b', '0', '1']);

    let settings = GeneratorSettings::builder()
        .length(CodeLength::new(3).unwrap())
        .amount(40)
        .sort(true)
        .build();
    let generator = CodeSetGenerator::new(normalization.alphabet, settings).unwrap();
    assert_eq!(generator.capacity(), Capacity::Exact(64));
    assert_eq!(generator.surplus(), Some(24));

    let mut rng = StdRng::seed_from_u64(2024);
    let codes = generator.generate(&mut rng, &mut NoopProgress);

    assert_eq!(codes.len(), 40);
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    let distinct: BTreeSet<_> = codes.iter().collect();
    assert_eq!(distinct.len(), 40);
}

#[test]
fn infeasible_request_fails_before_generation() {
    let normalization = Alphabet::normalize("ab").unwrap();
    let settings = GeneratorSettings::builder()
        .length(CodeLength::new(1).unwrap())
        .amount(3)
        .build();

    let result = CodeSetGenerator::new(normalization.alphabet, settings);

    assert_eq!(
        result.err(),
        Some(Error::InsufficientCapacity {
            requested: 3,
            capacity: Capacity::Exact(2),
        })
    );
}

#[test]
fn requesting_the_entire_space_terminates() {
    // Saturating the combination space forces heavy rejection; the run
    // must still complete with every code exactly once.
    let normalization = Alphabet::normalize("abcd").unwrap();
    let settings = GeneratorSettings::builder()
        .length(CodeLength::new(3).unwrap())
        .amount(64)
        .build();
    let generator = CodeSetGenerator::new(normalization.alphabet, settings).unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    let codes = generator.generate(&mut rng, &mut NoopProgress);

    let distinct: BTreeSet<_> = codes.iter().map(|c| c.as_str().to_owned()).collect();
    assert_eq!(distinct.len(), 64);
}
