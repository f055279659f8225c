//! Palindrome detection and metrics.
//!
//! Text-returning functions work on `char`s so results are always valid
//! string slices; [`lps_range`] and [`longest_palindromic_subsequence`] take
//! any slice of comparable symbols.

use ahash::AHashMap as HashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::instrumentation::{self, Counters};

/// Whether `s` reads the same forwards and backwards.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Longest palindromic substring of `s`, found by expanding around every
/// odd and even centre. On ties the leftmost window wins.
///
/// ```
/// let p = stralgo::longest_palindromic_substring("babad");
/// assert_eq!(p, "bab");
/// ```
pub fn longest_palindromic_substring(s: &str) -> &str {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let n = chars.len();
    if n == 0 {
        return s;
    }

    let mut counters = Counters::default();
    // Grow the palindrome chars[lo..hi] outwards while both ends agree.
    let mut grow = |mut lo: usize, mut hi: usize| {
        while lo > 0 && hi < n {
            counters.symbols_compared += 1;
            if chars[lo - 1].1 != chars[hi].1 {
                break;
            }
            lo -= 1;
            hi += 1;
        }
        (lo, hi)
    };

    let (mut best_lo, mut best_hi) = (0usize, 1usize);
    for c in 0..n {
        for (lo, hi) in [grow(c, c + 1), grow(c, c)] {
            if hi - lo > best_hi - best_lo {
                best_lo = lo;
                best_hi = hi;
            }
        }
    }

    instrumentation::record("longest_palindromic_substring", counters);
    let start = chars[best_lo].0;
    let end = chars.get(best_hi).map_or(s.len(), |&(i, _)| i);
    &s[start..end]
}

/// Length of the longest palindromic subsequence of the whole of `seq`.
pub fn longest_palindromic_subsequence<T: PartialEq>(seq: &[T]) -> usize {
    let n = seq.len();
    if n == 0 {
        return 0;
    }

    // dp[j] holds lps(seq[i..=j]) for the row `i` being built.
    let mut dp = vec![0usize; n];
    for i in (0..n).rev() {
        dp[i] = 1;
        let mut inner = 0usize; // lps(seq[i+1..=j-1])
        for j in i + 1..n {
            let below = dp[j];
            dp[j] = if seq[i] == seq[j] {
                inner + 2
            } else {
                below.max(dp[j - 1])
            };
            inner = below;
        }
    }

    instrumentation::record(
        "longest_palindromic_subsequence",
        Counters {
            dp_cells: (n * (n + 1) / 2) as u64,
            ..Counters::default()
        },
    );
    dp[n - 1]
}

/// Length of the longest palindromic subsequence of `seq[start..=end]`.
///
/// Both indices must lie inside `seq`. A window with `start > end` is empty
/// and has length 0.
pub fn lps_range<T: PartialEq>(seq: &[T], start: usize, end: usize) -> Result<usize> {
    for index in [start, end] {
        if index >= seq.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: seq.len(),
            });
        }
    }
    if start > end {
        return Ok(0);
    }
    Ok(longest_palindromic_subsequence(&seq[start..=end]))
}

/// Minimum number of cuts that split `s` into palindromic pieces.
///
/// `pal[i][j]` marks palindromic windows and `cuts[j]` is the answer for
/// the prefix ending at `j`.
pub fn min_palindrome_partition(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n == 0 {
        return 0;
    }

    let mut pal = vec![vec![false; n]; n];
    let mut cuts = vec![0usize; n];
    for j in 0..n {
        let mut best = usize::MAX;
        for i in (0..=j).rev() {
            pal[i][j] = chars[i] == chars[j] && (j - i < 2 || pal[i + 1][j - 1]);
            if pal[i][j] {
                best = if i == 0 { 0 } else { best.min(cuts[i - 1] + 1) };
            }
        }
        cuts[j] = best;
    }

    instrumentation::record(
        "min_palindrome_partition",
        Counters {
            dp_cells: (n * (n + 1) / 2) as u64,
            ..Counters::default()
        },
    );
    cuts[n - 1]
}

/// Every ordered pair `(i, j)`, `i != j`, such that `words[i] + words[j]`
/// is a palindrome, sorted ascending.
///
/// Instead of testing all concatenations, each word is split at every char
/// boundary into `left + right`. If `left` is a palindrome and some word
/// equals `reverse(right)`, that word can go in front; if `right` is a
/// palindrome and some word equals `reverse(left)`, it can go behind.
pub fn palindrome_pairs<S: AsRef<str>>(words: &[S]) -> Vec<(usize, usize)> {
    // Equal words share one entry, so every copy can pair with the others.
    let mut index: HashMap<&str, SmallVec<[usize; 2]>> = HashMap::new();
    for (i, w) in words.iter().enumerate() {
        index.entry(w.as_ref()).or_default().push(i);
    }

    let mut pairs = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let cuts = word.char_indices().map(|(b, _)| b).chain([word.len()]);
        for cut in cuts {
            let (left, right) = word.split_at(cut);
            if is_palindrome(left) {
                let front = reversed_in(&index, right).iter().filter(|&&k| k != i);
                pairs.extend(front.map(|&k| (k, i)));
            }
            // An empty `right` would repeat the whole-word case above.
            if !right.is_empty() && is_palindrome(right) {
                let back = reversed_in(&index, left).iter().filter(|&&k| k != i);
                pairs.extend(back.map(|&k| (i, k)));
            }
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    pairs
}

// Indices of the words equal to `part` reversed.
fn reversed_in<'a>(index: &'a HashMap<&str, SmallVec<[usize; 2]>>, part: &str) -> &'a [usize] {
    let reversed: String = part.chars().rev().collect();
    index
        .get(reversed.as_str())
        .map(|ks| ks.as_slice())
        .unwrap_or_default()
}
