// RabinKarp: explanatory notes
//
// The pattern and every length-m window of the text are hashed as base-`b`
// polynomials reduced modulo `q` (both from `RollingHashConfig`). Sliding the
// window one byte is O(1): remove the outgoing high-order digit (weighted by
// b^(m-1) mod q), multiply by the base and add the incoming digit, keeping the
// value in [0, q).
//
// Equal hashes are only candidates. Each one is confirmed byte-by-byte, so a
// small or badly chosen modulus costs extra comparisons but never produces a
// wrong answer. Intermediate products are taken in u128, which keeps any
// non-zero u64 modulus overflow-free.
use crate::core::{RollingHashConfig, SubstringSearch};
use crate::error::{Error, Result};
use crate::instrumentation::{self, Counters};

/// Rolling-hash substring search.
pub struct RabinKarp {
    pattern: Vec<u8>,
    // Fixed at construction; the pattern hash and high power depend on it.
    config: RollingHashConfig,
    pattern_hash: u64,
    // base^(m-1) mod q, the weight of the digit leaving the window.
    high_power: u64,
}

impl RabinKarp {
    /// Build using an explicit configuration.
    ///
    /// Fails with [`Error::ZeroModulus`] when `config.modulus` is zero.
    pub fn with_config(config: RollingHashConfig, pattern: &[u8]) -> Result<RabinKarp> {
        if config.modulus == 0 {
            return Err(Error::ZeroModulus);
        }
        Ok(Self::build(config, pattern))
    }

    /// The hashing parameters this searcher was built with.
    pub fn config(&self) -> RollingHashConfig {
        self.config
    }

    // Caller guarantees a non-zero modulus.
    fn build(config: RollingHashConfig, pattern: &[u8]) -> RabinKarp {
        let q = config.modulus;
        let high_power = (1..pattern.len()).fold(1 % q, |acc, _| mul_mod(acc, config.base, q));
        RabinKarp {
            pattern: pattern.to_vec(),
            config,
            pattern_hash: hash_of(pattern, &config),
            high_power,
        }
    }

    // Slide the window: drop `outgoing` from the front, append `incoming`.
    fn roll(&self, hash: u64, outgoing: u8, incoming: u8) -> u64 {
        let q = self.config.modulus as u128;
        let out = mul_mod(outgoing as u64, self.high_power, self.config.modulus) as u128;
        let without = ((hash as u128 + q - out) % q) as u64;
        push_digit(without, incoming, &self.config)
    }
}

fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

fn push_digit(hash: u64, digit: u8, config: &RollingHashConfig) -> u64 {
    ((hash as u128 * config.base as u128 + digit as u128) % config.modulus as u128) as u64
}

fn hash_of(bytes: &[u8], config: &RollingHashConfig) -> u64 {
    bytes.iter().fold(0, |h, &b| push_digit(h, b, config))
}

impl SubstringSearch for RabinKarp {
    fn from_pattern(pattern: &[u8]) -> RabinKarp {
        RabinKarp::build(RollingHashConfig::default(), pattern)
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find(&self, text: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        let n = text.len();
        if m == 0 {
            return Some(0);
        }
        if m > n {
            return None;
        }

        let mut counters = Counters::default();
        let mut hash = hash_of(&text[..m], &self.config);
        let mut found = None;

        for s in 0..=(n - m) {
            if hash == self.pattern_hash {
                counters.hash_hits += 1;
                // Verify to reject collisions.
                let same = text[s..s + m]
                    .iter()
                    .zip(&self.pattern)
                    .take_while(|(a, b)| a == b)
                    .count();
                if same == m {
                    counters.symbols_compared += m as u64;
                    found = Some(s);
                    break;
                }
                counters.symbols_compared += same as u64 + 1;
                counters.spurious_hits += 1;
            }
            if s + m < n {
                hash = self.roll(hash, text[s], text[s + m]);
                counters.window_shifts += 1;
            }
        }

        instrumentation::record("rabin_karp", counters);
        found
    }
}

/// Leftmost occurrence of `pattern` in `text` using a base-256 rolling hash
/// reduced modulo `modulus` (typically a prime such as 101).
///
/// ```
/// let at = stralgo::rabin_karp("XYZOPQRS", "ABCFGHIJKLMNOPQRSTUVWXZXYZOPQRSTUWXYZ", 101);
/// assert_eq!(at, Ok(Some(23)));
/// ```
pub fn rabin_karp(
    pattern: impl AsRef<[u8]>,
    text: impl AsRef<[u8]>,
    modulus: u64,
) -> Result<Option<usize>> {
    let config = RollingHashConfig {
        modulus,
        ..RollingHashConfig::default()
    };
    let searcher = RabinKarp::with_config(config, pattern.as_ref())?;
    Ok(searcher.find(text.as_ref()))
}
