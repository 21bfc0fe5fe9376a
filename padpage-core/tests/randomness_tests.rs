#![allow(missing_docs)]
use padpage_core::page_builder::{self, PageLayout};
use padpage_core::symbol_source::{OsSymbolSource, SymbolSource, ALPHABET};

const SAMPLE_COUNT: usize = 100_000;

// Chi-squared bound for 35 degrees of freedom; a uniform source exceeds it
// roughly once per million runs.
const CHI_SQUARED_BOUND: f64 = 90.0;

#[test]
fn test_samples_stay_within_the_alphabet() {
    let mut source = OsSymbolSource;
    for _ in 0..10_000 {
        let symbol = source
            .sample()
            .expect("OS entropy source should be available");
        assert!(
            ALPHABET.contains(&u8::try_from(symbol).expect("symbol should be ASCII")),
            "unexpected symbol {symbol:?}"
        );
    }
}

#[test]
fn test_observed_frequencies_are_uniform() {
    let mut source = OsSymbolSource;
    let mut counts = [0usize; 36];
    for _ in 0..SAMPLE_COUNT {
        let symbol = source
            .sample()
            .expect("OS entropy source should be available");
        let byte = u8::try_from(symbol).expect("symbol should be ASCII");
        let index = ALPHABET
            .iter()
            .position(|&c| c == byte)
            .expect("symbol outside the alphabet");
        counts[index] += 1;
    }

    let expected = SAMPLE_COUNT as f64 / ALPHABET.len() as f64;
    let chi_squared: f64 = counts
        .iter()
        .map(|&observed| {
            let delta = observed as f64 - expected;
            delta * delta / expected
        })
        .sum();

    assert!(
        chi_squared < CHI_SQUARED_BOUND,
        "chi-squared statistic {chi_squared:.2} exceeds {CHI_SQUARED_BOUND}"
    );
}

#[test]
fn test_successive_pages_differ() {
    let mut source = OsSymbolSource;
    let layout = PageLayout::default();

    let first =
        page_builder::generate_page(&mut source, &layout).expect("generation should succeed");
    let second =
        page_builder::generate_page(&mut source, &layout).expect("generation should succeed");

    // 3600 independent uniform draws per page; a full collision will not
    // happen.
    assert_ne!(first.messages[0].text, second.messages[0].text);
}
