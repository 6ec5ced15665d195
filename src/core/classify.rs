//! Guess classification against the target word
//!
//! Implements the duplicate-safe two-pass algorithm: exact matches consume
//! their target letter first, then displaced letters are matched against
//! whatever remains. A guess letter can therefore be flagged at most as many
//! times as it actually occurs in the target.

use rustc_hash::FxHashMap;

use super::Verdict;

/// Classify `guess` against `target`
///
/// Both words must be lowercase ASCII of the same length (the validator and
/// dictionary provider guarantee this for accepted guesses). Classification
/// is pure and always succeeds for well-formed input.
///
/// # Algorithm
/// 1. First pass: positions with an exact match go to the correct set; every
///    other target letter is added to an availability pool.
/// 2. Second pass, left to right over non-exact positions: a guess letter
///    with remaining availability is flagged wrong-location and consumes one
///    occurrence from the pool.
///
/// All other positions are implicitly absent.
///
/// # Examples
/// ```
/// use wordle_daily::core::classify;
///
/// // SPEED holds one S and two E's, so ERASE gets exactly three
/// // wrong-location flags: the first E, the S, and the final E.
/// let verdict = classify("erase", "speed");
/// assert_eq!(verdict.correct(), &[] as &[usize]);
/// assert_eq!(verdict.wrong_location(), &[0, 3, 4]);
/// ```
///
/// # Panics
/// Panics if `guess` and `target` differ in byte length.
#[must_use]
pub fn classify(guess: &str, target: &str) -> Verdict {
    assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have the same length"
    );

    let guess = guess.as_bytes();
    let target = target.as_bytes();

    // First pass: exact matches; unmatched target letters form the pool
    let mut correct = Vec::new();
    let mut available: FxHashMap<u8, u8> = FxHashMap::default();

    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            correct.push(i);
        } else {
            *available.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: displaced letters consume from the pool, left to right
    let mut wrong_location = Vec::new();

    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            *count -= 1;
            wrong_location.push(i);
        }
    }

    Verdict::new(correct, wrong_location)
}
