use std::time::Instant;

use stralgo::fixture::{DNA, text_with_pattern};
use stralgo::instrumentation::{counters_snapshot, reset_counters};
use stralgo::{RabinKarp, RollingHashConfig, SubstringSearch};

fn run_case(modulus: u64, pattern: &[u8], texts: &[Vec<u8>]) -> stralgo::Result<()> {
    reset_counters();
    let config = RollingHashConfig {
        modulus,
        ..RollingHashConfig::default()
    };
    let t0 = Instant::now();
    let rk = RabinKarp::with_config(config, pattern)?;
    let matches: usize = texts.iter().map(|t| rk.find_all(t).len()).sum();
    let dur = t0.elapsed();
    let c = counters_snapshot();
    let rate = if c.hash_hits > 0 {
        c.spurious_hits as f64 / c.hash_hits as f64
    } else {
        0.0
    };
    println!(
        "MOD={modulus} time={dur:?} matches={matches} hash_hits={} spurious={} spurious_rate={rate:.3} compared={}",
        c.hash_hits, c.spurious_hits, c.symbols_compared
    );
    Ok(())
}

fn main() -> stralgo::Result<()> {
    let pattern = b"ACGTTGCA";
    let texts: Vec<Vec<u8>> = (0..32)
        .map(|seed| text_with_pattern(seed, 64 * 1024, DNA, pattern).0)
        .collect();

    for modulus in [2u64, 13, 101, 1_009, 65_521, 1_000_000_007] {
        run_case(modulus, pattern, &texts)?;
    }
    Ok(())
}
