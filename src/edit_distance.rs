//! Levenshtein edit distance with a caller-visible memo table.
//!
//! `d(i, j)` is the distance between the prefixes `a[..i]` and `b[..j]`:
//! - `d(0, j) = j` and `d(i, 0) = i` (pure insertions or deletions),
//! - `d(i, j) = d(i-1, j-1)` when `a[i-1] == b[j-1]`,
//! - otherwise `1 + min(d(i, j-1), d(i-1, j), d(i-1, j-1))`.
//!
//! Cells are filled bottom-up in row-major order. A cell that is already
//! present in the table is reused as-is; a missing cell is computed once and
//! stored, so a table can be carried across calls on the same pair of inputs
//! to answer queries about different prefixes.

use crate::error::{Error, Result, check_len};
use crate::instrumentation::{self, Counters};

/// `(len_a + 1) × (len_b + 1)` table of prefix distances; `None` marks a
/// cell that has not been computed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl MemoTable {
    /// An empty table with every cell uncomputed.
    pub fn new(rows: usize, cols: usize) -> MemoTable {
        MemoTable {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// A table sized for comparing `a` against `b`.
    pub fn for_inputs(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> MemoTable {
        MemoTable::new(a.as_ref().len() + 1, b.as_ref().len() + 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Stored distance for the prefixes of length `i` and `j`, if computed.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.cells[i * self.cols + j]
    }

    /// Number of computed cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn store(&mut self, i: usize, j: usize, value: usize) {
        let cell = &mut self.cells[i * self.cols + j];
        debug_assert!(cell.is_none(), "memo cell ({i}, {j}) written twice");
        *cell = Some(value);
    }
}

/// Edit distance between `a` and `b`.
///
/// ```
/// assert_eq!(stralgo::edit_distance("kitten", "sitting"), 3);
/// ```
pub fn edit_distance(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> usize {
    let (a, b) = (a.as_ref(), b.as_ref());
    let mut memo = MemoTable::for_inputs(a, b);
    fill(a, b, a.len(), b.len(), &mut memo)
}

/// Edit distance between the prefixes `a[..m]` and `b[..n]`, reading and
/// extending `memo`.
///
/// `memo` must be shaped for the full inputs (see [`MemoTable::for_inputs`])
/// and must only ever be used with this same pair of inputs.
pub fn edit_distance_with_memo(
    a: impl AsRef<[u8]>,
    b: impl AsRef<[u8]>,
    m: usize,
    n: usize,
    memo: &mut MemoTable,
) -> Result<usize> {
    let (a, b) = (a.as_ref(), b.as_ref());
    check_len("first prefix", m, a.len())?;
    check_len("second prefix", n, b.len())?;
    if memo.rows != a.len() + 1 || memo.cols != b.len() + 1 {
        return Err(Error::MemoShape {
            expected_rows: a.len() + 1,
            expected_cols: b.len() + 1,
            actual_rows: memo.rows,
            actual_cols: memo.cols,
        });
    }
    Ok(fill(a, b, m, n, memo))
}

// Caller has validated bounds and table shape.
fn fill(a: &[u8], b: &[u8], m: usize, n: usize, memo: &mut MemoTable) -> usize {
    let mut counters = Counters::default();
    let mut prev: Vec<usize> = Vec::new();

    for i in 0..=m {
        let mut cur: Vec<usize> = Vec::with_capacity(n + 1);
        for j in 0..=n {
            let d = match memo.get(i, j) {
                Some(d) => {
                    counters.memo_hits += 1;
                    d
                }
                None => {
                    counters.dp_cells += 1;
                    let d = if i == 0 {
                        j
                    } else if j == 0 {
                        i
                    } else {
                        counters.symbols_compared += 1;
                        if a[i - 1] == b[j - 1] {
                            prev[j - 1]
                        } else {
                            1 + cur[j - 1].min(prev[j]).min(prev[j - 1])
                        }
                    };
                    memo.store(i, j, d);
                    d
                }
            };
            cur.push(d);
        }
        prev = cur;
    }

    instrumentation::record("edit_distance", counters);
    prev[n]
}
