//! Glob-style wildcard matching over the whole text.
//!
//! `*` matches any run of bytes (including none) and `?` matches exactly one
//! byte. Unlike the substring searchers this is a full match: `"*def*"`
//! matches `"abcdefg"` but `"def"` does not.
//!
//! The matcher walks text and pattern together and remembers only the most
//! recent `*`. On a mismatch it lets that star absorb one more text byte and
//! retries; earlier stars never need revisiting because the latest one can
//! already absorb anything they could.

use crate::error::{Result, check_len};
use crate::instrumentation::{self, Counters};

/// Whether `pattern` matches all of `text`.
///
/// ```
/// assert!(stralgo::wildcard_match("abcdefghijk", "abc?ef*"));
/// assert!(!stralgo::wildcard_match("abcdefghijk", "def"));
/// ```
pub fn wildcard_match(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> bool {
    glob(text.as_ref(), pattern.as_ref())
}

/// Match `pattern[..pattern_len]` against `text[..text_len]`.
///
/// Both lengths bound a prefix window of their input; a length larger than
/// its input is rejected.
pub fn wildcard_match_window(
    text: impl AsRef<[u8]>,
    pattern: impl AsRef<[u8]>,
    text_len: usize,
    pattern_len: usize,
) -> Result<bool> {
    let (text, pattern) = (text.as_ref(), pattern.as_ref());
    check_len("text", text_len, text.len())?;
    check_len("pattern", pattern_len, pattern.len())?;
    Ok(glob(&text[..text_len], &pattern[..pattern_len]))
}

fn glob(text: &[u8], pattern: &[u8]) -> bool {
    let mut counters = Counters::default();
    let (mut t, mut p) = (0usize, 0usize);
    // (pattern index just past the last `*`, text index that star resumes from)
    let mut star: Option<(usize, usize)> = None;

    let matched = loop {
        if t == text.len() {
            // Only trailing stars may remain.
            while p < pattern.len() && pattern[p] == b'*' {
                p += 1;
            }
            break p == pattern.len();
        }
        if p < pattern.len() && pattern[p] == b'*' {
            star = Some((p + 1, t));
            p += 1;
            continue;
        }
        counters.symbols_compared += 1;
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if let Some((after_star, resume)) = star {
            // Let the star swallow one more byte.
            counters.window_shifts += 1;
            star = Some((after_star, resume + 1));
            p = after_star;
            t = resume + 1;
        } else {
            break false;
        }
    };

    instrumentation::record("wildcard", counters);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn star_and_question_mark() {
        assert!(wildcard_match("abcdefghijk", "*def*"));
        assert!(wildcard_match("abcdefghijk", "abc?ef*"));
        assert!(wildcard_match("baaabab", "*****ba*****ab"));
        assert!(wildcard_match("baaabab", "ba*a?"));
        assert!(!wildcard_match("baaabab", "a*ab"));
        assert!(!wildcard_match("abc", "??"));
        assert!(wildcard_match("abc", "???"));
    }

    #[test]
    fn whole_text_must_match() {
        assert!(!wildcard_match("abcdef", "bcd"));
        assert!(!wildcard_match("abcdef", "abc"));
        assert!(wildcard_match("abcdef", "abc*"));
    }

    #[test]
    fn empty_inputs() {
        assert!(wildcard_match("", ""));
        assert!(wildcard_match("", "*"));
        assert!(wildcard_match("", "***"));
        assert!(!wildcard_match("", "?"));
        assert!(!wildcard_match("a", ""));
    }

    #[test]
    fn literal_star_in_text() {
        assert!(wildcard_match("a*b", "a?b"));
        assert!(wildcard_match("a*b", "*"));
    }

    #[test]
    fn window_bounds_select_prefixes() {
        assert_eq!(wildcard_match_window("abcdefghijk", "*def*", 11, 5), Ok(true));
        // only "abcd" is matched against "abc?"
        assert_eq!(wildcard_match_window("abcdefghijk", "abc?ef*", 4, 4), Ok(true));
        assert_eq!(wildcard_match_window("abcdefghijk", "abc?ef*", 4, 6), Ok(false));
    }

    #[test]
    fn window_lengths_are_validated() {
        assert_eq!(
            wildcard_match_window("abc", "*", 4, 1),
            Err(Error::LengthOutOfRange {
                name: "text",
                value: 4,
                max: 3,
            })
        );
        assert!(wildcard_match_window("abc", "*", 3, 2).is_err());
    }
}
