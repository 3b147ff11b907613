use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TermFrequency;

/// Joint vocabulary of the two documents of one comparison
///
/// Distinct terms sorted lexicographically, so index `i` names the same term
/// in both documents' vectors and the order does not depend on which document
/// came first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Union of the distinct terms of two documents
    pub fn from_freqs(freq_a: &TermFrequency, freq_b: &TermFrequency) -> Self {
        let mut terms: IndexSet<String> =
            IndexSet::with_capacity(freq_a.term_num() + freq_b.term_num());
        for term in freq_a.term_set_ref_str().into_iter().chain(freq_b.term_set_ref_str()) {
            if !terms.contains(term) {
                terms.insert(term.to_string());
            }
        }
        terms.sort();
        Self { terms }
    }

    /// Number of terms (vector dimension)
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Index of a term in every vector built over this vocabulary
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at a vector index
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|s| s.as_str())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Terms in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|s| s.as_str())
    }
}

/// Build the joint vocabulary from two token sequences
///
/// # Examples
/// ```
/// use tf_idf_similarity::vectorizer::vocabulary::build_vocabulary;
/// let vocab = build_vocabulary(&["the", "cat", "sat"], &["the", "dog"]);
/// assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["cat", "dog", "sat", "the"]);
/// ```
pub fn build_vocabulary<T>(tokens_a: &[T], tokens_b: &[T]) -> Vocabulary
where
    T: AsRef<str>,
{
    let mut freq_a = TermFrequency::new();
    freq_a.add_terms(tokens_a);
    let mut freq_b = TermFrequency::new();
    freq_b.add_terms(tokens_b);
    Vocabulary::from_freqs(&freq_a, &freq_b)
}
