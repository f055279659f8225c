use proptest::prelude::*;
use stralgo::{
    AlignmentCosts, BoyerMoore, Kmp, RabinKarp, RollingHashConfig, SubstringSearch, ZSearch,
};

fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

// Every ordered pair whose concatenation reads the same both ways.
fn brute_pairs(words: &[String]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..words.len() {
        for j in 0..words.len() {
            let joined = format!("{}{}", words[i], words[j]);
            if i != j && reversed(&joined) == joined {
                out.push((i, j));
            }
        }
    }
    out
}

// Fewest cuts over every way of cutting `s` between chars.
fn brute_min_cuts(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return 0;
    }
    let gaps = chars.len() - 1;
    (0u32..1 << gaps)
        .filter(|mask| {
            let mut start = 0;
            (0..=gaps).all(|g| {
                if g < gaps && mask & (1u32 << g) == 0 {
                    return true;
                }
                let piece: String = chars[start..=g].iter().collect();
                start = g + 1;
                reversed(&piece) == piece
            })
        })
        .map(|mask| mask.count_ones() as usize)
        .min()
        .unwrap_or(gaps)
}

// Whether `rest` splits into `pieces` or more non-empty entries of `words`.
fn splits_into(rest: &str, words: &[String], pieces: usize) -> bool {
    if rest.is_empty() {
        return pieces >= 2;
    }
    (1..=rest.len()).any(|k| {
        words.iter().any(|w| w == &rest[..k]) && splits_into(&rest[k..], words, pieces + 1)
    })
}

proptest! {
    #[test]
    fn searchers_agree_with_naive(text in "[ab]{0,40}", pattern in "[ab]{0,5}") {
        let (t, p) = (text.as_bytes(), pattern.as_bytes());
        let expected = naive_find(t, p);
        prop_assert_eq!(RabinKarp::from_pattern(p).find(t), expected);
        prop_assert_eq!(Kmp::from_pattern(p).find(t), expected);
        prop_assert_eq!(ZSearch::from_pattern(p).find(t), expected);
        prop_assert_eq!(BoyerMoore::from_pattern(p).find(t), expected);
    }

    #[test]
    fn tiny_modulus_still_exact(text in "[ACGT]{0,30}", pattern in "[ACGT]{1,4}", modulus in 1u64..7) {
        let config = RollingHashConfig { modulus, ..RollingHashConfig::default() };
        let rk = RabinKarp::with_config(config, pattern.as_bytes()).unwrap();
        prop_assert_eq!(rk.find(text.as_bytes()), naive_find(text.as_bytes(), pattern.as_bytes()));
    }

    #[test]
    fn symbol_boyer_moore_on_chars(text in "[aé]{0,20}", pattern in "[aé]{1,3}") {
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        let expected = t.windows(p.len()).position(|w| w == p.as_slice());
        prop_assert_eq!(stralgo::boyer_moore_symbols(&t, &p), expected);
    }

    #[test]
    fn wildcard_star_alone_matches_everything(text in "[abc]{0,20}") {
        prop_assert!(stralgo::wildcard_match(&text, "*"));
        prop_assert!(stralgo::wildcard_match(&text, &text));
        let with_star = format!("*{text}");
        prop_assert!(stralgo::wildcard_match(&text, &with_star));
    }

    #[test]
    fn rotations_invert(s in "[a-cñ]{0,12}", k in 0usize..14) {
        let len = s.chars().count();
        prop_assume!(k <= len);
        let left = stralgo::left_rotate(&s, k).unwrap();
        prop_assert_eq!(stralgo::right_rotate(&left, k).unwrap(), s.clone());
        prop_assert_eq!(left.chars().count(), len);
    }

    #[test]
    fn palindrome_matches_reversal(s in "[ab]{0,12}") {
        prop_assert_eq!(stralgo::is_palindrome(&s), reversed(&s) == s);
    }

    #[test]
    fn longest_palindromic_substring_is_maximal(s in "[abc]{0,16}") {
        let best = stralgo::longest_palindromic_substring(&s);
        prop_assert!(s.contains(best));
        prop_assert!(stralgo::is_palindrome(best));
        let chars: Vec<char> = s.chars().collect();
        for i in 0..chars.len() {
            for j in i + best.chars().count() + 1..=chars.len() {
                let window: String = chars[i..j].iter().collect();
                prop_assert!(!stralgo::is_palindrome(&window), "{window} beats {best}");
            }
        }
    }

    #[test]
    fn lcs_bounds(a in "[ACGT]{0,15}", b in "[ACGT]{0,15}") {
        let (x, y) = (a.as_bytes(), b.as_bytes());
        prop_assert_eq!(stralgo::lcs_len(x, x), x.len());
        let l = stralgo::lcs_len(x, y);
        prop_assert!(l <= x.len().min(y.len()));
        prop_assert_eq!(l, stralgo::lcs_len(y, x));
        prop_assert_eq!(stralgo::lcs_sequence(x, y).len(), l);
        prop_assert!(stralgo::longest_common_substring_len(x, y) <= l);
    }

    #[test]
    fn edit_distance_bounds(a in "[abc]{0,12}", b in "[abc]{0,12}") {
        let d = stralgo::edit_distance(&a, &b);
        prop_assert_eq!(stralgo::edit_distance(&a, &a), 0);
        prop_assert_eq!(d, stralgo::edit_distance(&b, &a));
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
        let unit = AlignmentCosts { mismatch: 1, gap: 1 };
        prop_assert_eq!(stralgo::alignment_cost(&a, &b, unit), d as u64);
    }

    #[test]
    fn palindromic_subsequence_bounds(s in "[ab]{0,14}") {
        let lps = stralgo::longest_palindromic_subsequence(s.as_bytes());
        prop_assert!(lps <= s.len());
        prop_assert_eq!(lps, stralgo::lcs_len(s.as_bytes(), reversed(&s).as_bytes()));
    }

    #[test]
    fn every_segmentation_rebuilds_input(s in "[ab]{0,10}") {
        let dict = ["a", "b", "ab", "ba", "aab"];
        let all = stralgo::word_break_all(&s, &dict);
        prop_assert_eq!(!all.is_empty(), stralgo::word_break(&s, &dict));
        for seg in &all {
            prop_assert_eq!(seg.replace(' ', ""), s.clone());
            prop_assert!(seg.split(' ').filter(|w| !w.is_empty()).all(|w| dict.contains(&w)));
        }
    }

    #[test]
    fn binary_matches_linear_on_sorted(mut v in prop::collection::vec(0i32..100, 0..30), target in 0i32..100) {
        v.sort_unstable();
        v.dedup();
        prop_assert_eq!(stralgo::binary_search(&v, &target), stralgo::linear_search(&v, &target));
    }

    #[test]
    fn palindrome_pairs_match_every_concatenation(words in prop::collection::vec("[ab]{0,3}", 0..7)) {
        prop_assert_eq!(stralgo::palindrome_pairs(&words), brute_pairs(&words));
    }

    #[test]
    fn palindrome_pairs_with_repeated_words(word in "[ab]{0,3}", copies in 2usize..4) {
        let words = vec![word; copies];
        prop_assert_eq!(stralgo::palindrome_pairs(&words), brute_pairs(&words));
    }

    #[test]
    fn min_partition_matches_exhaustive_cuts(s in "[ab]{0,9}") {
        prop_assert_eq!(stralgo::min_palindrome_partition(&s), brute_min_cuts(&s));
    }

    #[test]
    fn concatenated_words_match_naive_split(words in prop::collection::vec("[ab]{0,4}", 0..7)) {
        let expected: Vec<String> = words
            .iter()
            .filter(|w| splits_into(w, &words, 0))
            .cloned()
            .collect();
        prop_assert_eq!(stralgo::concatenated_words(&words), expected);
    }
}
