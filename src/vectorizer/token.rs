use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// Split text into lower-cased word tokens
///
/// A token is a maximal run of alphanumeric Unicode code points.
/// Every other character is a separator and is dropped.
///
/// # Examples
/// ```
/// use tf_idf_similarity::vectorizer::token::tokenize;
/// assert_eq!(tokenize("Hello, World! 2024"), vec!["hello", "world", "2024"]);
/// assert!(tokenize("!!! ???").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// TermFrequency struct
/// Raw occurrence counts of each term in one document.
///
/// # Examples
/// ```
/// use tf_idf_similarity::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.total_term_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: HashMap<String, u64, RandomState>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: HashMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Tokenize `text` and count every token
    pub fn from_text(text: &str) -> Self {
        let mut freq = Self::new();
        freq.add_terms(&tokenize(text));
        freq
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        // 既存キーなら String を確保しない
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Implementation for reading counts
impl TermFrequency {
    /// Occurrence count of a term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Sum of all term counts (document length in tokens)
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Distinct terms, borrowed, in no particular order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// (term, count) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
