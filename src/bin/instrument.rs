use std::time::Instant;

use stralgo::fixture::{self, DNA};
use stralgo::instrumentation::{counters_snapshot, reset_counters};
use stralgo::{BoyerMoore, Kmp, RabinKarp, SubstringSearch, ZSearch};

fn run_case<S: SubstringSearch>(name: &str, pattern: &[u8], texts: &[Vec<u8>]) {
    reset_counters();
    let t0 = Instant::now();
    let searcher = S::from_pattern(pattern);
    let mut found = 0usize;
    for text in texts {
        found += searcher.find_all(text).len();
    }
    let dur = t0.elapsed();
    let c = counters_snapshot();
    println!(
        "{name}: time={dur:?} matches={found} compared={} shifts={} hash_hits={} spurious={}",
        c.symbols_compared, c.window_shifts, c.hash_hits, c.spurious_hits
    );
}

fn run_metrics(words: &[String]) {
    reset_counters();
    let t0 = Instant::now();
    let mut total = 0usize;
    for pair in words.windows(2) {
        total += stralgo::edit_distance(&pair[0], &pair[1]);
    }
    let c = counters_snapshot();
    println!(
        "edit_distance: time={:?} total={total} dp_cells={} memo_hits={}",
        t0.elapsed(),
        c.dp_cells,
        c.memo_hits
    );
}

fn main() {
    let pattern = b"GATTACA";
    let texts: Vec<Vec<u8>> = (0..64)
        .map(|seed| fixture::text_with_pattern(seed, 16 * 1024, DNA, pattern).0)
        .collect();

    run_case::<RabinKarp>("RabinKarp", pattern, &texts);
    run_case::<Kmp>("Kmp", pattern, &texts);
    run_case::<ZSearch>("ZSearch", pattern, &texts);
    run_case::<BoyerMoore>("BoyerMoore", pattern, &texts);

    let words = fixture::generate_words(42, 500, b"abcdefgh", 24);
    run_metrics(&words);
}
