use std::fmt;

use num::Float;
use serde::{Deserialize, Serialize};

pub trait Compare<N>
where
    N: Float,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    /// 0.0 when either norm is zero
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Float + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        vec.iter()
            .zip(other.iter())
            .fold(0.0, |acc, (&a, &b)| {
                let (a, b): (f64, f64) = (a.into(), b.into());
                acc + a * b
            })
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute cosine similarity."
        );
        let mut dot = 0_f64;
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        for (&a, &b) in vec.iter().zip(other.iter()) {
            let (a, b): (f64, f64) = (a.into(), b.into());
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        // sqrt(x * x) == x なので同一ベクトルはちょうど 1.0
        dot / (norm_a * norm_b).sqrt()
    }
}

/// Map a cosine to a percentage in [0, 100]
///
/// Non-negative weights keep the cosine in [0, 1]; the clamp only absorbs
/// floating-point artifacts. A non-finite cosine maps to 0.
#[inline]
pub fn to_percentage(cosine: f64) -> f64 {
    if !cosine.is_finite() {
        return 0.0;
    }
    (cosine * 100.0).clamp(0.0, 100.0)
}

/// Outcome of one comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Similarity in percent, 0.0 ..= 100.0
    pub percentage: f64,
}

impl SimilarityResult {
    pub fn from_cosine(cosine: f64) -> Self {
        Self {
            percentage: to_percentage(cosine),
        }
    }
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percentage)
    }
}
