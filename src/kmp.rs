//! Knuth-Morris-Pratt search and the helpers built on its failure function.
//!
//! The failure function records, for every prefix of the pattern, the length
//! of its longest proper prefix that is also a suffix. On a mismatch the scan
//! falls back through that table instead of re-reading text, so a search is
//! O(n + m) in the worst case.

use crate::core::SubstringSearch;
use crate::instrumentation::{self, Counters};

/// Failure-function automaton for one pattern.
pub struct Kmp {
    pattern: Vec<u8>,
    failure: Vec<usize>,
}

impl Kmp {
    /// The precomputed failure function, one entry per pattern byte.
    pub fn failure(&self) -> &[usize] {
        &self.failure
    }
}

/// Failure (prefix) function of `pattern`.
///
/// `out[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut failure = vec![0usize; pattern.len()];
    let mut k = 0usize;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

impl SubstringSearch for Kmp {
    fn from_pattern(pattern: &[u8]) -> Kmp {
        Kmp {
            pattern: pattern.to_vec(),
            failure: prefix_function(pattern),
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

        let mut counters = Counters::default();
        let mut matched = 0usize;
        let mut found = None;

        for (i, &c) in text.iter().enumerate() {
            while matched > 0 && self.pattern[matched] != c {
                counters.symbols_compared += 1;
                counters.window_shifts += 1;
                matched = self.failure[matched - 1];
            }
            counters.symbols_compared += 1;
            if self.pattern[matched] == c {
                matched += 1;
            }
            if matched == m {
                found = Some(i + 1 - m);
                break;
            }
        }

        instrumentation::record("kmp", counters);
        found
    }
}

/// Leftmost occurrence of `pattern` in `text`.
///
/// ```
/// let at = stralgo::kmp_search("ABABCABC", "ABABDABACDABABCABCABCABCABC");
/// assert_eq!(at, Some(10));
/// ```
pub fn kmp_search(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> Option<usize> {
    Kmp::from_pattern(pattern.as_ref()).find(text.as_ref())
}

/// Length of the longest proper prefix of `s` that is also a suffix of `s`.
pub fn longest_prefix_suffix(s: impl AsRef<[u8]>) -> usize {
    prefix_function(s.as_ref()).last().copied().unwrap_or(0)
}

/// Minimum number of times `a` must be repeated so that `b` occurs in the
/// repetition, or `None` if no repetition count works.
///
/// An empty `b` occurs in zero repetitions.
pub fn repeated_string_match(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Option<usize> {
    let (a, b) = (a.as_ref(), b.as_ref());
    if b.is_empty() {
        return Some(0);
    }
    if a.is_empty() {
        return None;
    }

    // Fewer than ceil(|b|/|a|) copies are too short; one extra copy covers
    // every alignment of `b` against the period of `a`.
    let kmp = Kmp::from_pattern(b);
    let copies = b.len().div_ceil(a.len());
    let mut repeated = a.repeat(copies);
    if kmp.contains(&repeated) {
        return Some(copies);
    }
    repeated.extend_from_slice(a);
    if kmp.contains(&repeated) {
        Some(copies + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_function_classic_pattern() {
        assert_eq!(prefix_function(b"ABABCABAB"), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        assert_eq!(prefix_function(b"AAAA"), vec![0, 1, 2, 3]);
        assert!(prefix_function::<u8>(b"").is_empty());
    }

    #[test]
    fn search_reference_scenario() {
        assert_eq!(kmp_search("ABABCABC", "ABABDABACDABABCABCABCABCABC"), Some(10));
    }

    #[test]
    fn search_edge_cases() {
        assert_eq!(kmp_search("", ""), Some(0));
        assert_eq!(kmp_search("", "abc"), Some(0));
        assert_eq!(kmp_search("abcd", "abc"), None);
        assert_eq!(kmp_search("dabra", "abracadabra"), Some(6));
        assert_eq!(kmp_search("xyz", "abracadabra"), None);
    }

    #[test]
    fn find_all_reports_overlaps() {
        let kmp = Kmp::from_pattern(b"aa");
        assert_eq!(kmp.find_all(b"aaaa"), vec![0, 1, 2]);
        assert_eq!(kmp.failure(), &[0, 1]);
    }

    #[test]
    fn longest_prefix_suffix_values() {
        assert_eq!(longest_prefix_suffix("abab"), 2);
        assert_eq!(longest_prefix_suffix("aaaa"), 3);
        assert_eq!(longest_prefix_suffix("programming"), 0);
        assert_eq!(longest_prefix_suffix(""), 0);
    }

    #[test]
    fn repeated_match_counts() {
        assert_eq!(repeated_string_match("abc", "abcabcabc"), Some(3));
        assert_eq!(repeated_string_match("abcd", "cdabcdab"), Some(3));
        assert_eq!(repeated_string_match("a", "aa"), Some(2));
        assert_eq!(repeated_string_match("abc", "wxyz"), None);
        assert_eq!(repeated_string_match("abc", ""), Some(0));
        assert_eq!(repeated_string_match("", "a"), None);
        assert_eq!(repeated_string_match("abc", "cab"), Some(2));
    }
}
