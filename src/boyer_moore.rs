//! Boyer-Moore search with the bad-character rule.
//!
//! Each window is compared right to left. On a mismatch at pattern index `j`
//! against text symbol `c`, the window moves so that the last occurrence of
//! `c` in the pattern lines up with it: shift `j - last(c)` when that is
//! positive, one step when `c` last occurs at or after `j`, and `j + 1` when
//! `c` is absent from the pattern.

use std::hash::Hash;

use ahash::AHashMap as HashMap;

use crate::core::SubstringSearch;
use crate::instrumentation::{self, Counters};

pub struct BoyerMoore {
    pattern: Vec<u8>,
    // Last index of each byte value in the pattern.
    last: [Option<usize>; 256],
}

impl BoyerMoore {
    /// Last position of `byte` in the pattern, if it occurs.
    pub fn last_occurrence(&self, byte: u8) -> Option<usize> {
        self.last[byte as usize]
    }
}

impl SubstringSearch for BoyerMoore {
    fn from_pattern(pattern: &[u8]) -> BoyerMoore {
        let mut last = [None; 256];
        for (i, &b) in pattern.iter().enumerate() {
            last[b as usize] = Some(i);
        }
        BoyerMoore {
            pattern: pattern.to_vec(),
            last,
        }
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find(&self, text: &[u8]) -> Option<usize> {
        bad_character_search(text, &self.pattern, |&b| self.last[b as usize])
    }
}

// Shared scan loop; `last` maps a text symbol to its last pattern index.
fn bad_character_search<T, F>(text: &[T], pattern: &[T], last: F) -> Option<usize>
where
    T: PartialEq,
    F: Fn(&T) -> Option<usize>,
{
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let mut counters = Counters::default();
    let mut found = None;
    let mut s = 0usize;

    while s + m <= n {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
            counters.symbols_compared += 1;
        }
        if j == 0 {
            found = Some(s);
            break;
        }
        counters.symbols_compared += 1;

        let j = j - 1;
        let shift = match last(&text[s + j]) {
            Some(l) if l < j => j - l,
            Some(_) => 1,
            None => j + 1,
        };
        s += shift;
        counters.window_shifts += 1;
    }

    instrumentation::record("boyer_moore", counters);
    found
}

/// Leftmost occurrence of `pattern` in `text` over bytes.
pub fn boyer_moore(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Option<usize> {
    BoyerMoore::from_pattern(pattern.as_ref()).find(text.as_ref())
}

/// Leftmost occurrence of `pattern` in `text` over an arbitrary symbol type,
/// such as `char`s or tokens. The last-occurrence table is a hash map keyed
/// by symbol instead of a byte-indexed array.
pub fn boyer_moore_symbols<T>(text: &[T], pattern: &[T]) -> Option<usize>
where
    T: Eq + Hash + Copy,
{
    let last: HashMap<T, usize> = pattern.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    bad_character_search(text, pattern, |c| last.get(c).copied())
}
