//! Dense vector helpers
//! Every vector shares the vocabulary index space, so lengths must match.

use num::Float;

/// ドット積
/// d(a, b) = Σ(a_i * b_i)
///
/// # Arguments
/// * `a` - vector
/// * `b` - vector of the same length
///
/// # Returns
/// * `N` - dot product, zero for empty vectors
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must be of the same length to compute dot product."
    );
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Σ(a_i^2)
/// same summation order as `dot(a, a)`, so `dot(a, a) == norm_sq(a)` bit for bit
#[inline]
pub fn norm_sq<N>(a: &[N]) -> N
where
    N: Float,
{
    dot(a, a)
}

/// ユークリッドノルム ||a||
#[inline]
pub fn norm<N>(a: &[N]) -> N
where
    N: Float,
{
    norm_sq(a).sqrt()
}

/// アダマール積
/// (a ∘ b)_i = a_i * b_i
#[inline]
pub fn hadamard<N>(a: &[N], b: &[N]) -> Vec<N>
where
    N: Float,
{
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must be of the same length to compute hadamard product."
    );
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).collect()
}

/// Scale a vector to unit length
///
/// A zero vector (a document without tokens) stays a zero vector of the same length.
#[inline]
pub fn l2_normalize<N>(a: &[N]) -> Vec<N>
where
    N: Float,
{
    let n = norm(a);
    if n == N::zero() || !n.is_finite() {
        return vec![N::zero(); a.len()];
    }
    a.iter().map(|&x| x / n).collect()
}
