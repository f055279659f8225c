use stralgo::{AlignmentCosts, MemoTable};

fn show<T: std::fmt::Debug>(label: &str, value: T) {
    println!("{label:<40} {value:?}");
}

fn main() -> stralgo::Result<()> {
    println!("-- pattern matching");
    show(
        "rabin_karp",
        stralgo::rabin_karp("XYZOPQRS", "ABCFGHIJKLMNOPQRSTUVWXZXYZOPQRSTUWXYZ", 101)?,
    );
    show(
        "kmp_search",
        stralgo::kmp_search("ABABCABC", "ABABDABACDABABCABCABCABCABC"),
    );
    show("z_search", stralgo::z_search("GEEKS FOR GEEKS", "GEEK"));
    show("boyer_moore", stralgo::boyer_moore("ABAAABCD", "ABC"));
    show("wildcard_match(baaabab, *****ba*****ab)", stralgo::wildcard_match("baaabab", "*****ba*****ab"));
    show("wildcard_match(baaabab, a*ab)", stralgo::wildcard_match("baaabab", "a*ab"));
    show(
        "longest_common_prefix",
        stralgo::longest_common_prefix(&["flower", "flow", "flight"]),
    );

    println!("-- sequence metrics");
    let (a, b) = ("kitten", "sitting");
    let mut memo = MemoTable::for_inputs(a, b);
    show(
        "edit_distance_with_memo",
        stralgo::edit_distance_with_memo(a, b, a.len(), b.len(), &mut memo)?,
    );
    show(
        "alignment_cost",
        stralgo::alignment_cost("AGGGCT", "AGGCA", AlignmentCosts::default()),
    );
    show(
        "lcs_len",
        stralgo::lcs_len("ABCDGH".as_bytes(), "AEDFHR".as_bytes()),
    );
    show("longest_palindromic_substring", stralgo::longest_palindromic_substring("babad"));
    show("min_palindrome_partition", stralgo::min_palindrome_partition("aab"));
    show(
        "palindrome_pairs",
        stralgo::palindrome_pairs(&["abcd", "dcba", "lls", "s", "sssll"]),
    );
    show(
        "word_break_all",
        stralgo::word_break_all("catsanddog", &["cat", "cats", "and", "sand", "dog"]),
    );
    show(
        "concatenated_words",
        stralgo::concatenated_words(&["cat", "cats", "catsdogcats", "dog", "dogcatsdog"]),
    );

    println!("-- transforms");
    let rotated = stralgo::left_rotate("helloworld", 2)?;
    show("left_rotate", &rotated);
    show("reverse_vowels", stralgo::reverse_vowels(&rotated));
    show("binary_search", stralgo::binary_search(&[1, 5, 10, 15, 20, 25, 30], &25));
    Ok(())
}
