//! Roulette-wheel selection over candidate desirabilities.

use rand::Rng;

/// Normalise raw weights into a probability distribution.
///
/// Falls back to a uniform distribution when the total is zero or not a
/// finite positive number (all weights underflowed, or one overflowed).
pub fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total > 0.0 && total.is_finite() {
        weights.iter().map(|w| w / total).collect()
    } else {
        let uniform = 1.0 / weights.len() as f64;
        vec![uniform; weights.len()]
    }
}

/// Pick an index with probability proportional to its weight.
///
/// Draws one uniform `u` in `[0, 1)` and returns the first index whose
/// cumulative probability exceeds it. The last index absorbs any rounding
/// shortfall in the cumulative sum.
///
/// `weights` must not be empty.
pub fn sample_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty(), "cannot sample from an empty candidate set");

    let probabilities = normalize(weights);
    let u: f64 = rng.gen();

    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative > u {
            return index;
        }
    }
    probabilities.len() - 1
}
