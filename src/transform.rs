//! Small string rewrites: rotations and vowel reversal. Shifts count chars,
//! not bytes.

use crate::error::{Error, Result};

// Byte offset of the `k`th char, or `None` if `s` has fewer than `k` chars.
fn char_offset(s: &str, k: usize) -> Option<usize> {
    if k == 0 {
        return Some(0);
    }
    match s.char_indices().nth(k) {
        Some((i, _)) => Some(i),
        None if s.chars().count() == k => Some(s.len()),
        None => None,
    }
}

/// Move the first `k` chars of `s` to the end.
///
/// ```
/// assert_eq!(stralgo::left_rotate("helloworld", 2).unwrap(), "lloworldhe");
/// ```
pub fn left_rotate(s: &str, k: usize) -> Result<String> {
    let at = char_offset(s, k).ok_or_else(|| Error::RotationOutOfRange {
        shift: k,
        len: s.chars().count(),
    })?;
    let (head, tail) = s.split_at(at);
    let mut out = String::with_capacity(s.len());
    out.push_str(tail);
    out.push_str(head);
    Ok(out)
}

/// Move the last `k` chars of `s` to the front.
pub fn right_rotate(s: &str, k: usize) -> Result<String> {
    let len = s.chars().count();
    if k > len {
        return Err(Error::RotationOutOfRange { shift: k, len });
    }
    left_rotate(s, len - k)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Reverse the order of the ASCII vowels in `s`, leaving every other char
/// where it is.
pub fn reverse_vowels(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let (mut i, mut j) = (0usize, chars.len() - 1);
    while i < j {
        if !is_vowel(chars[i]) {
            i += 1;
        } else if !is_vowel(chars[j]) {
            j -= 1;
        } else {
            chars.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
    chars.into_iter().collect()
}
