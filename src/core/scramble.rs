//! Sequence shuffling and word scrambling
//!
//! Fisher-Yates shuffles that copy their input, plus helpers for producing a
//! scrambled display string from a target word.

use super::Word;
use rand::Rng;

/// Shuffle a slice into a new `Vec` using the given RNG
///
/// The input is not mutated. Iterates i ascending and swaps position i with a
/// uniformly chosen position j in `[0, i]`, which yields an unbiased
/// permutation: each of the n! orderings is equally likely given a uniform
/// random source.
///
/// # Examples
/// ```
/// use scramble::core::shuffle_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let shuffled = shuffle_with(&[1, 2, 3, 4, 5], &mut rng);
///
/// let mut sorted = shuffled.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy: Vec<T> = items.to_vec();

    for i in 0..copy.len() {
        let j = rng.random_range(0..=i);
        copy.swap(i, j);
    }

    copy
}

/// Shuffle a slice into a new `Vec` using the thread-local RNG
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Produce a scrambled display string for a word using the given RNG
///
/// A string input yields a string output: the result has the same length and
/// the same multiset of characters as the target word.
pub fn scramble_word_with<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let chars: Vec<char> = word.text().chars().collect();
    shuffle_with(&chars, rng).into_iter().collect()
}

/// Produce a scrambled display string for a word using the thread-local RNG
#[must_use]
pub fn scramble_word(word: &Word) -> String {
    scramble_word_with(word, &mut rand::rng())
}
