//! Weighted global sequence alignment.
//!
//! A generalisation of edit distance where a substitution costs
//! `costs.mismatch`, an insertion or deletion costs `costs.gap`, and a match
//! is free. `cost(i, j)` over prefixes follows the same three-way recurrence
//! as Levenshtein, with `cost(i, 0) = i * gap` and `cost(0, j) = j * gap`.

use crate::core::AlignmentCosts;
use crate::instrumentation::{self, Counters};

/// An optimal alignment: two equal-length rows in which `None` marks a
/// position where the other sequence has a symbol and this one has none.
/// Every byte value stays available as an input symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub cost: u64,
    pub first: Vec<Option<u8>>,
    pub second: Vec<Option<u8>>,
}

impl Alignment {
    /// Both rows as plain bytes, writing `gap` for every gap.
    ///
    /// ```
    /// let al = stralgo::align("AGGGCT", "AGGCA", stralgo::AlignmentCosts::default());
    /// let (first, second) = al.rows_with_gap(b'-');
    /// assert_eq!(first.len(), second.len());
    /// ```
    pub fn rows_with_gap(&self, gap: u8) -> (Vec<u8>, Vec<u8>) {
        let fill = |row: &[Option<u8>]| -> Vec<u8> { row.iter().map(|&c| c.unwrap_or(gap)).collect() };
        (fill(&self.first), fill(&self.second))
    }
}

/// Minimum total penalty to align `a` with `b`.
///
/// ```
/// use stralgo::AlignmentCosts;
/// let costs = AlignmentCosts { mismatch: 3, gap: 2 };
/// assert_eq!(stralgo::alignment_cost("AGGGCT", "AGGCA", costs), 5);
/// ```
pub fn alignment_cost(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>, costs: AlignmentCosts) -> u64 {
    let (a, b) = (a.as_ref(), b.as_ref());
    let (mismatch, gap) = (costs.mismatch as u64, costs.gap as u64);
    let m = b.len();

    // Two rolling rows are enough when only the cost is wanted.
    let mut prev: Vec<u64> = (0..=m as u64).map(|j| j * gap).collect();
    let mut cur = vec![0u64; m + 1];
    for (i, &x) in a.iter().enumerate() {
        cur[0] = (i as u64 + 1) * gap;
        for j in 1..=m {
            let diag = prev[j - 1] + if x == b[j - 1] { 0 } else { mismatch };
            cur[j] = diag.min(prev[j] + gap).min(cur[j - 1] + gap);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    instrumentation::record(
        "alignment_cost",
        Counters {
            symbols_compared: (a.len() * m) as u64,
            dp_cells: (a.len() * m) as u64,
            ..Counters::default()
        },
    );
    prev[m]
}

/// Optimal alignment of `a` and `b` together with its cost.
///
/// Ties during traceback prefer aligning the two symbols, then a gap in `b`,
/// then a gap in `a`.
pub fn align(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>, costs: AlignmentCosts) -> Alignment {
    let (a, b) = (a.as_ref(), b.as_ref());
    let (mismatch, gap) = (costs.mismatch as u64, costs.gap as u64);
    let (n, m) = (a.len(), b.len());

    let mut dp = vec![vec![0u64; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as u64 * gap;
    }
    for j in 0..=m {
        dp[0][j] = j as u64 * gap;
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + if a[i - 1] == b[j - 1] { 0 } else { mismatch };
            dp[i][j] = diag.min(dp[i - 1][j] + gap).min(dp[i][j - 1] + gap);
        }
    }

    let mut first = Vec::with_capacity(n + m);
    let mut second = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let step = if a[i - 1] == b[j - 1] { 0 } else { mismatch };
            if dp[i][j] == dp[i - 1][j - 1] + step {
                first.push(Some(a[i - 1]));
                second.push(Some(b[j - 1]));
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && dp[i][j] == dp[i - 1][j] + gap {
            first.push(Some(a[i - 1]));
            second.push(None);
            i -= 1;
        } else {
            first.push(None);
            second.push(Some(b[j - 1]));
            j -= 1;
        }
    }
    first.reverse();
    second.reverse();

    instrumentation::record(
        "align",
        Counters {
            symbols_compared: (n * m) as u64,
            dp_cells: ((n + 1) * (m + 1)) as u64,
            ..Counters::default()
        },
    );
    Alignment {
        cost: dp[n][m],
        first,
        second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COSTS: AlignmentCosts = AlignmentCosts {
        mismatch: 3,
        gap: 2,
    };

    // Cost of a finished alignment, recomputed column by column.
    fn rescore(al: &Alignment, costs: AlignmentCosts) -> u64 {
        al.first
            .iter()
            .zip(&al.second)
            .map(|(&x, &y)| match (x, y) {
                (None, _) | (_, None) => costs.gap as u64,
                (Some(x), Some(y)) if x == y => 0,
                _ => costs.mismatch as u64,
            })
            .sum()
    }

    #[test]
    fn reference_costs() {
        assert_eq!(alignment_cost("AGGGCT", "AGGCA", COSTS), 5);
        assert_eq!(alignment_cost("AGGTC", "AGGCA", COSTS), 4);
        assert_eq!(alignment_cost("", "ACG", COSTS), 6);
        assert_eq!(alignment_cost("ACG", "ACG", COSTS), 0);
    }

    #[test]
    fn unit_costs_equal_edit_distance() {
        let unit = AlignmentCosts {
            mismatch: 1,
            gap: 1,
        };
        assert_eq!(alignment_cost("kitten", "sitting", unit), 3);
    }

    #[test]
    fn expensive_mismatch_prefers_gaps() {
        let costs = AlignmentCosts {
            mismatch: 10,
            gap: 1,
        };
        assert_eq!(alignment_cost("A", "C", costs), 2);
        let al = align("A", "C", costs);
        assert_eq!(al.first, vec![None, Some(b'A')]);
        assert_eq!(al.second, vec![Some(b'C'), None]);
        assert_eq!(al.rows_with_gap(b'-'), (b"-A".to_vec(), b"C-".to_vec()));
    }

    #[test]
    fn traceback_is_consistent_with_cost() {
        for (a, b) in [
            ("AGGGCT", "AGGCA"),
            ("ATCGATCGATCG", "ATCGATGGGATCG"),
            ("", "GATTACA"),
            ("GATTACA", ""),
        ] {
            let al = align(a, b, COSTS);
            assert_eq!(al.cost, alignment_cost(a, b, COSTS));
            assert_eq!(al.first.len(), al.second.len());
            assert_eq!(rescore(&al, COSTS), al.cost);
            let strip = |row: &[Option<u8>]| row.iter().flatten().copied().collect::<Vec<_>>();
            assert_eq!(strip(&al.first), a.as_bytes());
            assert_eq!(strip(&al.second), b.as_bytes());
        }
    }

    #[test]
    fn underscore_input_is_not_a_gap() {
        let al = align("a_b", "ab", COSTS);
        assert_eq!(al.cost, 2);
        assert_eq!(al.first, vec![Some(b'a'), Some(b'_'), Some(b'b')]);
        assert_eq!(al.second, vec![Some(b'a'), None, Some(b'b')]);
        assert_eq!(al.rows_with_gap(b'-'), (b"a_b".to_vec(), b"a-b".to_vec()));
    }
}
