use crate::vectorizer::{token::TermFrequency, vocabulary::Vocabulary};

/// Number of documents in one comparison.
/// IDF smoothing is `ln((1 + N) / (1 + df)) + 1` with this N.
pub const PAIR_DOC_NUM: u64 = 2;

pub trait TFIDFEngine<N>
where
    N: num::Float,
{
    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `vocab` - joint vocabulary
    /// * `freq_a` - term counts of document A
    /// * `freq_b` - term counts of document B
    /// # Returns
    /// * `Vec<N>` - one IDF weight per vocabulary term
    fn idf_vec(vocab: &Vocabulary, freq_a: &TermFrequency, freq_b: &TermFrequency) -> Vec<N>;
    /// TFベクトルを生成するメソッド
    /// # Returns
    /// * `Vec<N>` - one TF weight per vocabulary term
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<N>;
}

/// デフォルトのTF-IDFエンジン
/// raw count TF, smoothed IDF over the document pair
/// `f32`、`f64`の型に対応
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }

    /// Smoothed IDF
    ///
    /// # Arguments
    /// * `doc_num` - documents in the comparison
    /// * `doc_freq` - documents containing the term
    ///
    /// # Returns
    /// * `f64` - IDF, always >= 1.0 when `doc_freq <= doc_num`
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }

    /// Documents of the pair that contain `term` (0, 1 or 2)
    #[inline]
    pub fn doc_freq(term: &str, freq_a: &TermFrequency, freq_b: &TermFrequency) -> u64 {
        freq_a.contains_term(term) as u64 + freq_b.contains_term(term) as u64
    }

    fn idf_vec_f64(vocab: &Vocabulary, freq_a: &TermFrequency, freq_b: &TermFrequency) -> Vec<f64> {
        vocab
            .iter()
            .map(|term| Self::idf_calc(PAIR_DOC_NUM, Self::doc_freq(term, freq_a, freq_b)))
            .collect()
    }

    fn tf_vec_f64(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<f64> {
        vocab.iter().map(|term| freq.term_count(term) as f64).collect()
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf_vec(vocab: &Vocabulary, freq_a: &TermFrequency, freq_b: &TermFrequency) -> Vec<f64> {
        Self::idf_vec_f64(vocab, freq_a, freq_b)
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<f64> {
        Self::tf_vec_f64(freq, vocab)
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf_vec(vocab: &Vocabulary, freq_a: &TermFrequency, freq_b: &TermFrequency) -> Vec<f32> {
        Self::idf_vec_f64(vocab, freq_a, freq_b)
            .into_iter()
            .map(|idf| idf as f32)
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<f32> {
        Self::tf_vec_f64(freq, vocab)
            .into_iter()
            .map(|tf| tf as f32)
            .collect()
    }
}

/// Raw term counts of `tokens` over `vocab`
pub fn compute_tf<T>(tokens: &[T], vocab: &Vocabulary) -> Vec<f64>
where
    T: AsRef<str>,
{
    let mut freq = TermFrequency::new();
    freq.add_terms(tokens);
    <DefaultTFIDFEngine as TFIDFEngine<f64>>::tf_vec(&freq, vocab)
}

/// Smoothed IDF of every vocabulary term across the two token sequences
pub fn compute_idf<T>(vocab: &Vocabulary, tokens_a: &[T], tokens_b: &[T]) -> Vec<f64>
where
    T: AsRef<str>,
{
    let mut freq_a = TermFrequency::new();
    freq_a.add_terms(tokens_a);
    let mut freq_b = TermFrequency::new();
    freq_b.add_terms(tokens_b);
    <DefaultTFIDFEngine as TFIDFEngine<f64>>::idf_vec(vocab, &freq_a, &freq_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::vocabulary::build_vocabulary;

    const EPS: f64 = 1e-12;

    #[test]
    fn idf_values_for_a_pair() {
        // df = 1 -> ln(3/2) + 1, df = 2 -> ln(1) + 1
        assert!((DefaultTFIDFEngine::idf_calc(2, 1) - (1.5_f64.ln() + 1.0)).abs() < EPS);
        assert_eq!(DefaultTFIDFEngine::idf_calc(2, 2), 1.0);
        assert!(DefaultTFIDFEngine::idf_calc(2, 1) > DefaultTFIDFEngine::idf_calc(2, 2));
    }

    #[test]
    fn tf_is_raw_count() {
        let a = ["the", "cat", "the"];
        let b = ["dog"];
        let vocab = build_vocabulary(&a, &b);
        // vocab: cat, dog, the
        assert_eq!(compute_tf(&a, &vocab), vec![1.0, 0.0, 2.0]);
        assert_eq!(compute_tf(&b, &vocab), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn idf_down_weights_shared_terms() {
        let a = ["the", "cat"];
        let b = ["the", "dog"];
        let vocab = build_vocabulary(&a, &b);
        let idf = compute_idf(&vocab, &a, &b);
        let shared = idf[vocab.index_of("the").unwrap()];
        let only_a = idf[vocab.index_of("cat").unwrap()];
        let only_b = idf[vocab.index_of("dog").unwrap()];
        assert_eq!(shared, 1.0);
        assert!((only_a - (1.5_f64.ln() + 1.0)).abs() < EPS);
        assert_eq!(only_a, only_b);
    }

    #[test]
    fn f32_engine_matches_f64_engine() {
        let freq_a = TermFrequency::from_text("alpha beta beta");
        let freq_b = TermFrequency::from_text("beta gamma");
        let vocab = Vocabulary::from_freqs(&freq_a, &freq_b);
        let idf64: Vec<f64> = DefaultTFIDFEngine::idf_vec(&vocab, &freq_a, &freq_b);
        let idf32: Vec<f32> = DefaultTFIDFEngine::idf_vec(&vocab, &freq_a, &freq_b);
        for (x, y) in idf64.iter().zip(idf32.iter()) {
            assert!((x - *y as f64).abs() < 1e-6);
        }
        let tf32: Vec<f32> = DefaultTFIDFEngine::tf_vec(&freq_a, &vocab);
        assert_eq!(tf32, vec![1.0, 2.0, 0.0]);
    }
}
