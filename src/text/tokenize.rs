//! Word normalization.

/// Normalizes a single whitespace-delimited word.
///
/// ASCII punctuation and ASCII digits are removed and the remaining
/// characters are lowercased. Returns `None` when nothing is left.
///
/// # Examples
///
/// ```rust
/// use lexitree::text::normalize;
///
/// assert_eq!(normalize("Hello,"), Some("hello".to_string()));
/// assert_eq!(normalize("don't"), Some("dont".to_string()));
/// assert_eq!(normalize("1812"), None);
/// ```
#[must_use]
pub fn normalize(word: &str) -> Option<String> {
    let normalized: String = word
        .chars()
        .filter(|character| !(character.is_ascii_punctuation() || character.is_ascii_digit()))
        .flat_map(char::to_lowercase)
        .collect();

    (!normalized.is_empty()).then_some(normalized)
}

/// Splits text on whitespace and yields the normalized words, skipping any
/// word that normalizes to nothing.
///
/// The iterator is lazy and borrows `text`.
///
/// # Examples
///
/// ```rust
/// use lexitree::text::tokenize;
///
/// let words: Vec<String> = tokenize("Hello, World! 123").collect();
/// assert_eq!(words, vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize)
}
