//! This crate scores how similar two documents are, as a percentage,
//! using TF-IDF weights and cosine similarity.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

use rayon::prelude::*;
use tracing::{trace, warn};

use crate::error::decode;

/// Options for one comparison
/// Holds the optional input size limit and the normalization switch.
/// `CompareConfig::default()` is what `compare` and `compare_bytes` use.
///
/// # Serialization
/// Supported. Missing fields take their default values.
pub use config::CompareConfig;

/// Input Error
/// The single error kind of this crate.
/// Raised when a document is not valid UTF-8, or is longer than the
/// configured limit. Empty, identical and disjoint documents are never errors.
pub use error::{DocSide, InputError};

/// TF-IDF pair
/// TF-IDF vectors of two documents over their joint vocabulary.
/// Built per comparison and never shared between calls, which makes every
/// function of this crate safe to call from many threads at once.
///
/// `TFIDFPair<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::TFIDFPair;

/// Term Frequency structure
/// Raw occurrence counts of each term in one document.
pub use vectorizer::token::{tokenize, TermFrequency};

/// Vocabulary
/// Distinct terms of both documents, sorted, shared index space of both vectors.
pub use vectorizer::vocabulary::{build_vocabulary, Vocabulary};

/// TF IDF Calculation Engine Trait
/// Plug a different weighting into `TFIDFPair<N, E>` by implementing it.
/// `DefaultTFIDFEngine` uses raw-count TF and smoothed IDF
/// `ln((1 + 2) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{compute_idf, compute_tf, DefaultTFIDFEngine, TFIDFEngine};

/// Similarity scoring
/// Cosine similarity between two vectors of the same index space and its
/// mapping to a percentage.
pub use vectorizer::compare::{to_percentage, Compare, DefaultCompare, SimilarityResult};

pub use utils::math::dense::l2_normalize;
pub use vectorizer::tfidf;

/// Compare two documents
///
/// # Examples
/// ```
/// use tf_idf_similarity::compare;
/// assert_eq!(compare("Hello World!", "hello world").percentage, 100.0);
/// assert_eq!(compare("", "hello").percentage, 0.0);
/// ```
pub fn compare(text_a: &str, text_b: &str) -> SimilarityResult {
    score(&CompareConfig::default(), text_a, text_b)
}

/// Compare two documents with explicit options
/// Fails only when a document exceeds `config.max_input_bytes`.
pub fn compare_with(
    config: &CompareConfig,
    text_a: &str,
    text_b: &str,
) -> Result<SimilarityResult, InputError> {
    check_lengths(config, text_a.len(), text_b.len())?;
    Ok(score(config, text_a, text_b))
}

/// Compare two documents given as raw bytes
/// Both must be valid UTF-8.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{compare_bytes, DocSide};
/// let err = compare_bytes(b"fine", b"\xff\xfe").unwrap_err();
/// assert_eq!(err.side(), DocSide::B);
/// ```
pub fn compare_bytes(bytes_a: &[u8], bytes_b: &[u8]) -> Result<SimilarityResult, InputError> {
    compare_bytes_with(&CompareConfig::default(), bytes_a, bytes_b)
}

/// Compare two documents given as raw bytes, with explicit options
pub fn compare_bytes_with(
    config: &CompareConfig,
    bytes_a: &[u8],
    bytes_b: &[u8],
) -> Result<SimilarityResult, InputError> {
    check_lengths(config, bytes_a.len(), bytes_b.len())?;
    let text_a = decode(DocSide::A, bytes_a).inspect_err(|e| warn!(error = %e, "input rejected"))?;
    let text_b = decode(DocSide::B, bytes_b).inspect_err(|e| warn!(error = %e, "input rejected"))?;
    Ok(score(config, text_a, text_b))
}

/// Compare many independent document pairs in parallel
///
/// Each pair gets its own vocabulary; nothing is shared across pairs.
/// Results are in input order.
pub fn compare_pairs<S>(
    config: &CompareConfig,
    pairs: &[(S, S)],
) -> Vec<Result<SimilarityResult, InputError>>
where
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(a, b)| compare_with(config, a.as_ref(), b.as_ref()))
        .collect()
}

fn check_lengths(config: &CompareConfig, len_a: usize, len_b: usize) -> Result<(), InputError> {
    config
        .check_len(DocSide::A, len_a)
        .and_then(|_| config.check_len(DocSide::B, len_b))
        .inspect_err(|e| warn!(error = %e, "input rejected"))
}

fn score(config: &CompareConfig, text_a: &str, text_b: &str) -> SimilarityResult {
    let pair: TFIDFPair<f64> = TFIDFPair::fit(text_a, text_b);
    let cosine = pair.cosine_similarity(config.normalize);
    trace!(cosine, "cosine similarity");
    SimilarityResult::from_cosine(cosine)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pct(a: &str, b: &str) -> f64 {
        compare(a, b).percentage
    }

    #[test]
    fn identical_documents_score_100() {
        for doc in ["hello", "the cat sat on the mat", "Rust, rust & RUST!!", "東京 大阪 東京"] {
            assert!((pct(doc, doc) - 100.0).abs() < EPS, "{doc:?}");
        }
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(pct("Hello World!", "hello world"), 100.0);
        assert_eq!(pct("a.b,c", "A B C"), 100.0);
    }

    #[test]
    fn empty_and_separator_only_documents_score_zero() {
        assert_eq!(pct("", ""), 0.0);
        assert_eq!(pct("", "hello"), 0.0);
        assert_eq!(pct("hello", ""), 0.0);
        assert_eq!(pct("!!!", "???"), 0.0);
        assert_eq!(pct("   ", "\n\t"), 0.0);
    }

    #[test]
    fn disjoint_documents_score_zero() {
        assert_eq!(pct("apples and oranges", "cats or dogs"), 0.0);
    }

    #[test]
    fn partial_overlap_is_strictly_between() {
        let p = pct("the cat sat", "the cat sat on the mat");
        assert!(p > 0.0 && p < 100.0, "{p}");
        // deterministic
        for _ in 0..10 {
            assert_eq!(pct("the cat sat", "the cat sat on the mat"), p);
        }
    }

    #[test]
    fn partial_overlap_matches_hand_computed_value() {
        // vocab: cat mat on sat the
        // idf shared = 1, idf only-B = ln(1.5) + 1
        // A = [1, 0, 0, 1, 1], B = [1, w, w, 1, 2]
        let w = 1.5_f64.ln() + 1.0;
        let dot = 1.0 + 1.0 + 2.0;
        let norm_a = 3.0_f64;
        let norm_b = 1.0 + w * w + w * w + 1.0 + 4.0;
        let expected = dot / (norm_a * norm_b).sqrt() * 100.0;
        assert!((pct("the cat sat", "the cat sat on the mat") - expected).abs() < EPS);
    }

    #[test]
    fn score_is_symmetric() {
        let docs = [
            "",
            "the cat sat",
            "the cat sat on the mat",
            "a completely different text",
            "cat cat cat",
            "Mat! THE? on.",
        ];
        for a in docs {
            for b in docs {
                assert_eq!(pct(a, b), pct(b, a), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn score_stays_in_range() {
        let docs = ["x", "x y", "y y y z", "", "z x", "q"];
        for a in docs {
            for b in docs {
                let p = pct(a, b);
                assert!((0.0..=100.0).contains(&p), "{a:?} / {b:?} -> {p}");
            }
        }
    }

    #[test]
    fn normalize_switch_gives_the_same_score() {
        let raw = CompareConfig { normalize: false, ..Default::default() };
        let a = "the quick brown fox jumps over the lazy dog";
        let b = "the lazy dog sleeps while the quick fox runs";
        let p_raw = compare_with(&raw, a, b).unwrap().percentage;
        assert!((p_raw - pct(a, b)).abs() < EPS);
    }

    #[test]
    fn invalid_utf8_is_an_input_error() {
        let err = compare_bytes(b"\xc3\x28", b"hello").unwrap_err();
        assert_eq!(err, InputError::InvalidEncoding { side: DocSide::A, valid_up_to: 0 });
        assert!(compare_bytes(b"hello", b"hel\x80lo").is_err());
    }

    #[test]
    fn valid_bytes_match_str_compare() {
        let r = compare_bytes("the cat sat".as_bytes(), "the cat sat on the mat".as_bytes()).unwrap();
        assert_eq!(r, compare("the cat sat", "the cat sat on the mat"));
        assert_eq!(compare_bytes(b"", b"").unwrap().percentage, 0.0);
    }

    #[test]
    fn size_limit_rejects_before_scoring() {
        let config = CompareConfig { max_input_bytes: Some(8), ..Default::default() };
        assert!(compare_with(&config, "short", "tiny").is_ok());
        assert_eq!(
            compare_with(&config, "short", "much too long"),
            Err(InputError::TooLarge { side: DocSide::B, len: 13, limit: 8 })
        );
        // size is checked before decoding
        let err = compare_bytes_with(&config, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff", b"").unwrap_err();
        assert!(matches!(err, InputError::TooLarge { side: DocSide::A, .. }));
    }

    #[test]
    fn compare_pairs_matches_sequential_compare() {
        let pairs = vec![
            ("the cat sat", "the cat sat on the mat"),
            ("", "hello"),
            ("same text", "same text"),
            ("alpha", "beta"),
        ];
        let results = compare_pairs(&CompareConfig::default(), pairs.as_slice());
        assert_eq!(results.len(), pairs.len());
        for ((a, b), r) in pairs.iter().zip(results) {
            assert_eq!(r.unwrap(), compare(a, b));
        }
    }

    #[test]
    fn compare_pairs_reports_errors_per_pair() {
        let config = CompareConfig { max_input_bytes: Some(3), ..Default::default() };
        let pairs = vec![("abc".to_string(), "abc".to_string()), ("abcd".to_string(), "a".to_string())];
        let results = compare_pairs(&config, pairs.as_slice());
        assert_eq!(results[0].as_ref().unwrap().percentage, 100.0);
        assert!(results[1].is_err());
    }

    #[test]
    fn concurrent_calls_do_not_interfere() {
        let expected = pct("the cat sat", "the cat sat on the mat");
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| pct("the cat sat", "the cat sat on the mat")))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
