// Lightweight instrumentation for counting where the algorithms spend work.
// Uses thread-local cells to avoid locking overhead; reset and snapshot
// helpers let a small dev binary collect simple breakdowns per workload.
// Each algorithm accumulates its counts locally and records them once per
// call, so the scan loops never touch the cells directly.
use std::cell::Cell;

thread_local! {
    static SYMBOLS_COMPARED: Cell<u64> = const { Cell::new(0) };
    static WINDOW_SHIFTS: Cell<u64> = const { Cell::new(0) };
    static HASH_HITS: Cell<u64> = const { Cell::new(0) };
    static SPURIOUS_HITS: Cell<u64> = const { Cell::new(0) };
    static DP_CELLS: Cell<u64> = const { Cell::new(0) };
    static MEMO_HITS: Cell<u64> = const { Cell::new(0) };
}

/// Work counted on the current thread since the last [`reset_counters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Symbol-to-symbol comparisons made while scanning or verifying.
    pub symbols_compared: u64,
    /// Times a search window or pattern pointer moved forward.
    pub window_shifts: u64,
    /// Rabin-Karp windows whose hash equalled the pattern hash.
    pub hash_hits: u64,
    /// Hash hits rejected by the direct comparison (collisions).
    pub spurious_hits: u64,
    /// Dynamic-programming cells computed.
    pub dp_cells: u64,
    /// Memo cells found already filled and reused.
    pub memo_hits: u64,
}

pub fn reset_counters() {
    SYMBOLS_COMPARED.with(|c| c.set(0));
    WINDOW_SHIFTS.with(|c| c.set(0));
    HASH_HITS.with(|c| c.set(0));
    SPURIOUS_HITS.with(|c| c.set(0));
    DP_CELLS.with(|c| c.set(0));
    MEMO_HITS.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        symbols_compared: SYMBOLS_COMPARED.with(|c| c.get()),
        window_shifts: WINDOW_SHIFTS.with(|c| c.get()),
        hash_hits: HASH_HITS.with(|c| c.get()),
        spurious_hits: SPURIOUS_HITS.with(|c| c.get()),
        dp_cells: DP_CELLS.with(|c| c.get()),
        memo_hits: MEMO_HITS.with(|c| c.get()),
    }
}

fn bump(cell: &'static std::thread::LocalKey<Cell<u64>>, n: u64) {
    if n > 0 {
        cell.with(|c| c.set(c.get().wrapping_add(n)));
    }
}

/// Add one call's worth of counts for the algorithm named `op`.
pub(crate) fn record(op: &'static str, delta: Counters) {
    bump(&SYMBOLS_COMPARED, delta.symbols_compared);
    bump(&WINDOW_SHIFTS, delta.window_shifts);
    bump(&HASH_HITS, delta.hash_hits);
    bump(&SPURIOUS_HITS, delta.spurious_hits);
    bump(&DP_CELLS, delta.dp_cells);
    bump(&MEMO_HITS, delta.memo_hits);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op,
        symbols_compared = delta.symbols_compared,
        window_shifts = delta.window_shifts,
        hash_hits = delta.hash_hits,
        spurious_hits = delta.spurious_hits,
        dp_cells = delta.dp_cells,
        memo_hits = delta.memo_hits,
        "algorithm finished"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = op;
}
