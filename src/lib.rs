//! Classic string algorithms: exact and wildcard pattern matching plus
//! dynamic-programming sequence metrics.
//!
//! Searchers implement [`SubstringSearch`] and all report the same leftmost
//! match; the free functions (`rabin_karp`, `kmp_search`, ...) build a
//! searcher and run it once. Metrics such as [`edit_distance`] and
//! [`lcs_len`] are plain functions over slices. Work counters for every
//! call are kept in [`instrumentation`].
//!
//! ```
//! use stralgo::{Kmp, SubstringSearch};
//!
//! let kmp = Kmp::from_pattern(b"ABABCABC");
//! assert_eq!(kmp.find(b"ABABDABACDABABCABCABCABCABC"), Some(10));
//! assert_eq!(stralgo::edit_distance("kitten", "sitting"), 3);
//! ```

pub mod alignment;
pub mod boyer_moore;
pub mod core;
pub mod edit_distance;
pub mod error;
pub mod fixture;
pub mod instrumentation;
pub mod kmp;
pub mod lcs;
pub mod palindrome;
pub mod prefix;
#[cfg(feature = "python")]
pub mod python_bindings;
pub mod rabin_karp;
pub mod search;
pub mod transform;
pub mod wildcard;
pub mod word_break;
pub mod z_algorithm;

pub use crate::alignment::{Alignment, align, alignment_cost};
pub use crate::boyer_moore::{BoyerMoore, boyer_moore, boyer_moore_symbols};
pub use crate::core::{AlignmentCosts, RollingHashConfig, SubstringSearch};
pub use crate::edit_distance::{MemoTable, edit_distance, edit_distance_with_memo};
pub use crate::error::{Error, Result};
pub use crate::kmp::{Kmp, kmp_search, longest_prefix_suffix, prefix_function, repeated_string_match};
pub use crate::lcs::{
    lcs_len, lcs_prefix_len, lcs_sequence, longest_common_substring_len,
    longest_repeating_subsequence,
};
pub use crate::palindrome::{
    is_palindrome, longest_palindromic_subsequence, longest_palindromic_substring, lps_range,
    min_palindrome_partition, palindrome_pairs,
};
pub use crate::prefix::longest_common_prefix;
pub use crate::rabin_karp::{RabinKarp, rabin_karp};
pub use crate::search::{binary_search, linear_search};
pub use crate::transform::{left_rotate, reverse_vowels, right_rotate};
pub use crate::wildcard::{wildcard_match, wildcard_match_window};
pub use crate::word_break::{concatenated_words, word_break, word_break_all};
pub use crate::z_algorithm::{ZSearch, z_array, z_search};
