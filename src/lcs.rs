//! Longest common subsequence and its relatives.
//!
//! All of these are table DPs over prefix lengths and work on any slice of
//! comparable symbols. The length-only variants keep two rolling rows; only
//! [`lcs_sequence`] materialises the full table for traceback.

use crate::error::{Result, check_len};
use crate::instrumentation::{self, Counters};

/// Length of the longest common subsequence of `a` and `b`.
///
/// ```
/// assert_eq!(stralgo::lcs_len("ABCDGH".as_bytes(), "AEDFHR".as_bytes()), 3);
/// ```
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = b.len();
    let mut prev = vec![0usize; m + 1];
    let mut cur = vec![0usize; m + 1];

    for x in a {
        for j in 1..=m {
            cur[j] = if *x == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(cur[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    let cells = (a.len() * m) as u64;
    instrumentation::record(
        "lcs",
        Counters {
            symbols_compared: cells,
            dp_cells: cells,
            ..Counters::default()
        },
    );
    prev[m]
}

/// LCS length of the prefixes `a[..m]` and `b[..n]`.
pub fn lcs_prefix_len<T: PartialEq>(a: &[T], b: &[T], m: usize, n: usize) -> Result<usize> {
    check_len("first prefix", m, a.len())?;
    check_len("second prefix", n, b.len())?;
    Ok(lcs_len(&a[..m], &b[..n]))
}

/// One longest common subsequence of `a` and `b`.
///
/// When several exist, ties during traceback drop a symbol of `a` before a
/// symbol of `b`.
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut out = Vec::with_capacity(dp[n][m]);
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();

    instrumentation::record(
        "lcs_sequence",
        Counters {
            symbols_compared: (n * m) as u64,
            dp_cells: (n * m) as u64,
            ..Counters::default()
        },
    );
    out
}

/// Length of the longest subsequence that occurs twice in `s` at disjoint
/// index sets: the LCS of `s` with itself where a symbol may not be paired
/// with its own position.
pub fn longest_repeating_subsequence<T: PartialEq>(s: &[T]) -> usize {
    let n = s.len();
    let mut prev = vec![0usize; n + 1];
    let mut cur = vec![0usize; n + 1];

    for i in 1..=n {
        for j in 1..=n {
            cur[j] = if i != j && s[i - 1] == s[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(cur[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    instrumentation::record(
        "longest_repeating_subsequence",
        Counters {
            dp_cells: (n * n) as u64,
            ..Counters::default()
        },
    );
    prev[n]
}

/// Length of the longest contiguous run shared by `a` and `b`.
///
/// `suffix[j]` holds the length of the common suffix of `a[..i]` and
/// `b[..j]`; the answer is the largest value it ever takes.
pub fn longest_common_substring_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = b.len();
    let mut prev = vec![0usize; m + 1];
    let mut cur = vec![0usize; m + 1];
    let mut best = 0usize;

    for x in a {
        for j in 1..=m {
            cur[j] = if *x == b[j - 1] { prev[j - 1] + 1 } else { 0 };
            best = best.max(cur[j]);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    instrumentation::record(
        "longest_common_substring",
        Counters {
            symbols_compared: (a.len() * m) as u64,
            dp_cells: (a.len() * m) as u64,
            ..Counters::default()
        },
    );
    best
}
