//! Dictionary segmentation: can a string be split into dictionary words, in
//! how many ways, and which list entries are built out of other entries.
//!
//! Positions are byte offsets into the input, but only char boundaries are
//! ever used as cut points. Empty dictionary words are ignored; they would
//! allow zero-width pieces and infinitely many segmentations.

use ahash::AHashSet as HashSet;
use smallvec::SmallVec;

use crate::instrumentation::{self, Counters};

struct Dictionary<'a> {
    words: HashSet<&'a str>,
    longest: usize,
}

impl<'a> Dictionary<'a> {
    fn new<S: AsRef<str>>(dict: &'a [S]) -> Dictionary<'a> {
        let words: HashSet<&str> = dict
            .iter()
            .map(|w| w.as_ref())
            .filter(|w| !w.is_empty())
            .collect();
        let longest = words.iter().map(|w| w.len()).max().unwrap_or(0);
        Dictionary { words, longest }
    }

    fn contains(&self, piece: Option<&str>) -> bool {
        piece.is_some_and(|p| self.words.contains(p))
    }

    /// Whether `s` splits into dictionary words. With `whole_word_allowed`
    /// false, `s` itself is not accepted as a single piece.
    fn segments(&self, s: &str, whole_word_allowed: bool, counters: &mut Counters) -> bool {
        let n = s.len();
        let mut reach = vec![false; n + 1];
        reach[0] = true;
        for end in 1..=n {
            if !s.is_char_boundary(end) {
                continue;
            }
            for start in end.saturating_sub(self.longest)..end {
                if !reach[start] || (!whole_word_allowed && start == 0 && end == n) {
                    continue;
                }
                counters.dp_cells += 1;
                if self.contains(s.get(start..end)) {
                    reach[end] = true;
                    break;
                }
            }
        }
        reach[n]
    }
}

/// Whether `s` can be split into a sequence of words from `dict`. Words may
/// be reused; the empty string is always breakable.
///
/// ```
/// assert!(stralgo::word_break("applepenapple", &["apple", "pen"]));
/// assert!(!stralgo::word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]));
/// ```
pub fn word_break<S: AsRef<str>>(s: &str, dict: &[S]) -> bool {
    let dictionary = Dictionary::new(dict);
    let mut counters = Counters::default();
    let ok = dictionary.segments(s, true, &mut counters);
    instrumentation::record("word_break", counters);
    ok
}

/// Every segmentation of `s` into words of `dict`, each rendered with the
/// words joined by single spaces.
///
/// Segmentations are ordered by their cut positions, so a shorter first
/// word comes first. Suffixes that cannot be completed are pruned before
/// enumeration, so the work is proportional to the size of the output.
pub fn word_break_all<S: AsRef<str>>(s: &str, dict: &[S]) -> Vec<String> {
    let dictionary = Dictionary::new(dict);
    let n = s.len();
    let mut counters = Counters::default();

    // edges[start] lists every `end` such that s[start..end] is a word.
    let mut edges: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); n + 1];
    for start in (0..n).filter(|&i| s.is_char_boundary(i)) {
        for end in start + 1..=n.min(start + dictionary.longest) {
            counters.dp_cells += 1;
            if dictionary.contains(s.get(start..end)) {
                edges[start].push(end);
            }
        }
    }

    // alive[i]: the suffix starting at i can be segmented.
    let mut alive = vec![false; n + 1];
    alive[n] = true;
    for start in (0..n).rev() {
        alive[start] = edges[start].iter().any(|&end| alive[end]);
    }

    let mut out = Vec::new();
    if alive[0] {
        let mut path = Vec::new();
        collect(s, 0, &edges, &alive, &mut path, &mut out);
    }
    instrumentation::record("word_break_all", counters);
    out
}

fn collect<'a>(
    s: &'a str,
    at: usize,
    edges: &[SmallVec<[usize; 4]>],
    alive: &[bool],
    path: &mut Vec<&'a str>,
    out: &mut Vec<String>,
) {
    if at == s.len() {
        out.push(path.join(" "));
        return;
    }
    for &end in edges[at].iter().filter(|&&end| alive[end]) {
        path.push(&s[at..end]);
        collect(s, end, edges, alive, path, out);
        path.pop();
    }
}

/// Words of `words` that are a concatenation of at least two (not
/// necessarily distinct) other non-empty entries of the list, in input
/// order.
pub fn concatenated_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let dictionary = Dictionary::new(words);
    let mut counters = Counters::default();
    let found = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty() && dictionary.segments(w, false, &mut counters))
        .map(str::to_string)
        .collect();
    instrumentation::record("concatenated_words", counters);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feasibility() {
        assert!(word_break("leetcode", &["leet", "code"]));
        assert!(word_break("applepenapple", &["apple", "pen"]));
        assert!(!word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]));
        assert!(word_break("", &["a"]));
        let empty: [&str; 0] = [];
        assert!(!word_break("a", &empty));
    }

    #[test]
    fn every_segmentation_in_cut_order() {
        assert_eq!(
            word_break_all("catsanddog", &["cat", "cats", "and", "sand", "dog"]),
            vec!["cat sand dog", "cats and dog"]
        );
        assert_eq!(
            word_break_all(
                "pineapplepenapple",
                &["apple", "pen", "applepen", "pine", "pineapple"]
            ),
            vec![
                "pine apple pen apple",
                "pine applepen apple",
                "pineapple pen apple",
            ]
        );
        assert!(word_break_all("catsandog", &["cats", "dog", "sand", "and", "cat"]).is_empty());
        assert_eq!(word_break_all("", &["a"]), vec![""]);
    }

    #[test]
    fn empty_dictionary_words_are_ignored() {
        assert_eq!(word_break_all("ab", &["", "a", "b"]), vec!["a b"]);
    }

    #[test]
    fn multibyte_pieces() {
        assert_eq!(word_break_all("größe", &["grö", "ße", "g", "röße"]), vec!["g röße", "grö ße"]);
    }

    #[test]
    fn concatenations_keep_input_order() {
        let words = [
            "cat",
            "cats",
            "catsdogcats",
            "dog",
            "dogcatsdog",
            "hippopotamuses",
            "rat",
            "ratcatdogcat",
        ];
        assert_eq!(
            concatenated_words(&words),
            vec!["catsdogcats", "dogcatsdog", "ratcatdogcat"]
        );
        assert_eq!(concatenated_words(&["cat", "dog", "catdog"]), vec!["catdog"]);
        assert!(concatenated_words(&["a"]).is_empty());
        assert_eq!(concatenated_words(&["a", "aa", ""]), vec!["aa"]);
    }
}
