//! Deterministic input generators for tests, benches and the dev binaries.
//!
//! Everything is seeded through `ChaCha8Rng`, so the same seed yields the
//! same corpus on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// DNA bases, the small alphabet most of the benches use.
pub const DNA: &[u8] = b"ACGT";

fn pick(rng: &mut impl Rng, alphabet: &[u8], len: usize) -> Vec<u8> {
    if alphabet.is_empty() {
        return Vec::new();
    }
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// `len` symbols drawn uniformly from `alphabet`. An empty alphabet gives
/// an empty text.
pub fn generate_text(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    pick(&mut rng, alphabet, len)
}

/// A random text of `len` symbols with `pattern` copied over it at one
/// random offset. Returns the text and that offset. The pattern may also
/// occur earlier by chance, so callers comparing against a leftmost match
/// should search for it rather than trust the offset.
pub fn text_with_pattern(seed: u64, len: usize, alphabet: &[u8], pattern: &[u8]) -> (Vec<u8>, usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = pick(&mut rng, alphabet, len.max(pattern.len()));
    // Only short when the alphabet is empty.
    text.resize(text.len().max(pattern.len()), 0);
    let at = rng.gen_range(0..=text.len() - pattern.len());
    text[at..at + pattern.len()].copy_from_slice(pattern);
    (text, at)
}

/// `count` lowercase ASCII words of 1..=`max_len` letters over `alphabet`.
pub fn generate_words(seed: u64, count: usize, alphabet: &[u8], max_len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len.max(1));
            pick(&mut rng, alphabet, len)
                .into_iter()
                .map(char::from)
                .collect()
        })
        .collect()
}
