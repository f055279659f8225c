/// Trait describing an exact substring-search algorithm.
///
/// Implementations preprocess the pattern once (failure function, Z-array,
/// bad-character table, pattern hash) and can then scan any number of texts.
/// Every implementation must report the same leftmost match for the same
/// inputs; an empty pattern matches at index 0 of any text, including an
/// empty one.
pub trait SubstringSearch {
    /// Construct the algorithm-specific searcher for `pattern`.
    fn from_pattern(pattern: &[u8]) -> Self
    where
        Self: Sized;

    /// The pattern this searcher was built for.
    fn pattern(&self) -> &[u8];

    /// Byte offset of the leftmost occurrence of the pattern in `text`.
    fn find(&self, text: &[u8]) -> Option<usize>;

    /// Every start offset at which the pattern occurs, overlapping
    /// occurrences included, in increasing order.
    fn find_all(&self, text: &[u8]) -> Vec<usize> {
        let mut out = Vec::new();
        let mut start = 0usize;
        while start <= text.len() {
            match self.find(&text[start..]) {
                Some(pos) => {
                    out.push(start + pos);
                    start += pos + 1;
                }
                None => break,
            }
        }
        out
    }

    /// Convenience for `find(text).is_some()`.
    fn contains(&self, text: &[u8]) -> bool {
        self.find(text).is_some()
    }
}

/// Configuration for the Rabin-Karp rolling hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHashConfig {
    /// Radix of the polynomial hash; 256 treats each byte as one digit.
    pub base: u64,
    /// Modulus every hash value is reduced by. Should be prime; must be non-zero.
    pub modulus: u64,
}

impl Default for RollingHashConfig {
    fn default() -> Self {
        RollingHashConfig {
            base: 256,
            modulus: 101,
        }
    }
}

/// Penalties for weighted sequence alignment. A match costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentCosts {
    /// Cost of aligning two different symbols.
    pub mismatch: u32,
    /// Cost of aligning a symbol against a gap.
    pub gap: u32,
}

impl Default for AlignmentCosts {
    fn default() -> Self {
        AlignmentCosts {
            mismatch: 3,
            gap: 2,
        }
    }
}
