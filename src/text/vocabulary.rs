//! Folding words into a persistent ordered set.

use crate::persistent::PersistentOrderedSet;

/// The distinct words of a document together with how many words were read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: PersistentOrderedSet<String>,
    token_count: usize,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: PersistentOrderedSet::new(),
            token_count: 0,
        }
    }

    /// Returns a new vocabulary that also contains `word`.
    ///
    /// `self` is left unchanged. Repeated words only bump the token count.
    #[must_use]
    pub fn with_word(&self, word: String) -> Self {
        Self {
            words: self.words.insert(word),
            token_count: self.token_count + 1,
        }
    }

    /// The distinct words, in ascending order.
    #[must_use]
    pub const fn words(&self) -> &PersistentOrderedSet<String> {
        &self.words
    }

    /// Consumes the vocabulary and returns the set of distinct words.
    #[must_use]
    pub fn into_words(self) -> PersistentOrderedSet<String> {
        self.words
    }

    /// Number of words read, duplicates included.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of distinct words.
    #[must_use]
    pub const fn unique_count(&self) -> usize {
        self.words.len()
    }
}

/// Builds a vocabulary by inserting every token, in arrival order.
///
/// Each insertion produces a new version of the set; only the latest one is
/// kept.
///
/// # Examples
///
/// ```rust
/// use lexitree::text::collect_vocabulary;
///
/// let words = ["banana", "apple", "cherry", "apple"].map(String::from);
/// let vocabulary = collect_vocabulary(words);
///
/// assert_eq!(vocabulary.token_count(), 4);
/// assert_eq!(
///     vocabulary.words().to_sorted_vec(),
///     vec!["apple", "banana", "cherry"]
/// );
/// ```
pub fn collect_vocabulary<I>(tokens: I) -> Vocabulary
where
    I: IntoIterator<Item = String>,
{
    let vocabulary = tokens
        .into_iter()
        .fold(Vocabulary::new(), |vocabulary, token| vocabulary.with_word(token));

    tracing::debug!(
        tokens = vocabulary.token_count(),
        unique = vocabulary.unique_count(),
        height = vocabulary.words().height(),
        "collected vocabulary"
    );
    vocabulary
}
