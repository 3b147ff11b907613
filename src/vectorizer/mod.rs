pub mod compare;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use num::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DocSide;
use crate::utils::math::dense;
use crate::vectorizer::{
    compare::{Compare, DefaultCompare},
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TermFrequency,
    vocabulary::Vocabulary,
};

/// TF-IDF vectors of exactly two documents over their joint vocabulary
///
/// Built fresh for one comparison and dropped afterwards; nothing is shared
/// between two `TFIDFPair`s.
///
/// `TFIDFPair<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Examples
/// ```
/// use tf_idf_similarity::TFIDFPair;
/// let pair: TFIDFPair = TFIDFPair::fit("the cat sat", "the cat sat on the mat");
/// assert_eq!(pair.vocabulary().len(), 5);
/// let cos = pair.cosine_similarity(true);
/// assert!(cos > 0.0 && cos < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TFIDFPair<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// Joint vocabulary, index space of every vector below
    pub vocab: Vocabulary,
    /// IDF Vector
    pub idf_vec: Vec<N>,
    /// TF-IDF vector of document A (not normalized)
    pub tfidf_a: Vec<N>,
    /// TF-IDF vector of document B (not normalized)
    pub tfidf_b: Vec<N>,
    /// token count of document A
    pub token_sum_a: u64,
    /// token count of document B
    pub token_sum_b: u64,
    #[serde(skip)]
    _marker: PhantomData<E>,
}

impl<N, E> TFIDFPair<N, E>
where
    N: Float + Into<f64>,
    E: TFIDFEngine<N>,
{
    /// Tokenize both texts and weight them against each other
    pub fn fit(text_a: &str, text_b: &str) -> Self {
        let freq_a = TermFrequency::from_text(text_a);
        let freq_b = TermFrequency::from_text(text_b);
        Self::from_freqs(&freq_a, &freq_b)
    }

    /// Weight two already counted documents against each other
    pub fn from_freqs(freq_a: &TermFrequency, freq_b: &TermFrequency) -> Self {
        let vocab = Vocabulary::from_freqs(freq_a, freq_b);
        let idf_vec = E::idf_vec(&vocab, freq_a, freq_b);
        let tfidf_a = dense::hadamard(&E::tf_vec(freq_a, &vocab), &idf_vec);
        let tfidf_b = dense::hadamard(&E::tf_vec(freq_b, &vocab), &idf_vec);
        debug!(
            vocab_size = vocab.len(),
            tokens_a = freq_a.total_term_count(),
            tokens_b = freq_b.total_term_count(),
            "fitted tf-idf pair"
        );
        Self {
            vocab,
            idf_vec,
            tfidf_a,
            tfidf_b,
            token_sum_a: freq_a.total_term_count(),
            token_sum_b: freq_b.total_term_count(),
            _marker: PhantomData,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn idf(&self) -> &[N] {
        &self.idf_vec
    }

    /// Raw TF-IDF vector of one document
    pub fn vector(&self, side: DocSide) -> &[N] {
        match side {
            DocSide::A => &self.tfidf_a,
            DocSide::B => &self.tfidf_b,
        }
    }

    /// Unit-length TF-IDF vector of one document
    /// zero vector when the document has no tokens
    pub fn normalized(&self, side: DocSide) -> Vec<N> {
        dense::l2_normalize(self.vector(side))
    }

    /// Cosine of the angle between the two documents' vectors
    ///
    /// # Arguments
    /// * `normalize` - L2 normalize both vectors first; the result is the same up to rounding
    pub fn cosine_similarity(&self, normalize: bool) -> f64 {
        if normalize {
            let a = self.normalized(DocSide::A);
            let b = self.normalized(DocSide::B);
            <DefaultCompare as Compare<N>>::cosine_similarity(a.as_slice(), b.as_slice())
        } else {
            <DefaultCompare as Compare<N>>::cosine_similarity(self.tfidf_a.as_slice(), self.tfidf_b.as_slice())
        }
    }

    /// Highest weighted terms of one document, heaviest first
    /// terms with zero weight (absent from the document) are skipped
    pub fn top_terms(&self, side: DocSide, n: usize) -> Vec<(&str, N)> {
        let mut terms: Vec<(&str, N)> = self
            .vocab
            .iter()
            .zip(self.vector(side).iter().copied())
            .filter(|(_, w)| *w > N::zero())
            .collect();
        // 重み降順、同値は語彙順
        terms.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        terms.truncate(n);
        terms
    }
}

/// TF-IDF vector of `text` over the joint vocabulary of `text` and `other_text`
pub fn tfidf(text: &str, other_text: &str) -> Vec<f64> {
    let pair: TFIDFPair<f64> = TFIDFPair::fit(text, other_text);
    pair.tfidf_a
}
