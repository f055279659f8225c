//! Z-algorithm search.
//!
//! The searcher computes the Z-array of `pattern + separator + text` and
//! reports the first text position whose Z-value reaches the pattern length.
//! The separator is `None` in a sequence of `Option<u8>`, so it can never
//! equal a text byte and no Z-value can run past the pattern.

use std::iter;

use crate::core::SubstringSearch;
use crate::instrumentation::{self, Counters};

pub struct ZSearch {
    pattern: Vec<u8>,
}

/// Z-array of `s`: `z[i]` is the length of the longest substring starting at
/// `i` that is also a prefix of `s`. By convention `z[0] == s.len()`.
pub fn z_array<T: PartialEq>(s: &[T]) -> Vec<usize> {
    z_fill(s).0
}

// Returns the Z-array and the number of symbol comparisons made.
fn z_fill<T: PartialEq>(s: &[T]) -> (Vec<usize>, u64) {
    let n = s.len();
    let mut z = vec![0usize; n];
    let mut compared = 0u64;
    if n == 0 {
        return (z, compared);
    }
    z[0] = n;

    // [left, right) is the rightmost window known to match a prefix.
    let (mut left, mut right) = (0usize, 0usize);
    for i in 1..n {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
        }
        while i + z[i] < n && s[z[i]] == s[i + z[i]] {
            z[i] += 1;
            compared += 1;
        }
        if i + z[i] < n {
            compared += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }
    (z, compared)
}

impl SubstringSearch for ZSearch {
    fn from_pattern(pattern: &[u8]) -> ZSearch {
        ZSearch {
            pattern: pattern.to_vec(),
        }
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find(&self, text: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        if m == 0 {
            return Some(0);
        }
        if m > text.len() {
            return None;
        }

        let joined: Vec<Option<u8>> = self
            .pattern
            .iter()
            .copied()
            .map(Some)
            .chain(iter::once(None))
            .chain(text.iter().copied().map(Some))
            .collect();
        let (z, compared) = z_fill(&joined);

        instrumentation::record(
            "z_algorithm",
            Counters {
                symbols_compared: compared,
                ..Counters::default()
            },
        );

        // Text offset i sits at joined[m + 1 + i].
        z[m + 1..].iter().position(|&len| len == m)
    }
}

/// Leftmost occurrence of `pattern` in `text`. Note the argument order:
/// text first, as with [`boyer_moore`](crate::boyer_moore).
pub fn z_search(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Option<usize> {
    ZSearch::from_pattern(pattern.as_ref()).find(text.as_ref())
}
