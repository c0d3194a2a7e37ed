//! Stop word filter implementation.
//!
//! Removes common words (stop words) that typically carry no signal for
//! downstream modeling. Includes default stop word lists for English and
//! Japanese, with support for custom word lists.
//!
//! This transform is lossy: removed tokens cannot be reconstructed, so
//! `inverse_transform` passes the surviving tokens through unchanged.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_transform::TokenTransform;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default Japanese stop words list (common particles and auxiliaries).
const DEFAULT_JAPANESE_STOP_WORDS: &[&str] = &[
    "の",
    "に",
    "は",
    "を",
    "た",
    "が",
    "で",
    "て",
    "と",
    "し",
    "れ",
    "さ",
    "ある",
    "いる",
    "も",
    "する",
    "から",
    "な",
    "こと",
    "として",
    "い",
    "や",
    "れる",
    "など",
    "ない",
    "この",
    "ため",
    "その",
    "よう",
    "また",
    "もの",
    "という",
    "まで",
    "へ",
    "か",
    "だ",
    "これ",
    "より",
    "です",
    "ます",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Default Japanese stop words as a HashSet.
pub static DEFAULT_JAPANESE_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_JAPANESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A token transform that removes stop words from the token sequence.
///
/// # Examples
///
/// ```
/// use tsumugi::analysis::token::Token;
/// use tsumugi::analysis::token_transform::TokenTransform;
/// use tsumugi::analysis::token_transform::stopword::StopwordFilter;
///
/// let filter = StopwordFilter::from_words(vec!["custom", "words"]);
/// let tokens = vec![Token::new("custom", 0), Token::new("kept", 1)];
/// let result = filter.transform(tokens).unwrap();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "kept");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordFilter {
    /// The set of stop words to remove
    stop_words: HashSet<String>,
}

impl StopwordFilter {
    /// Create a stop word filter for a language tag ("en" or "ja").
    pub fn for_language(tag: &str) -> Result<Self> {
        match tag {
            "en" => Ok(Self::english()),
            "ja" => Ok(Self::japanese()),
            other => Err(crate::error::TsumugiError::analysis(format!(
                "no stop word list for language '{other}'"
            ))),
        }
    }

    /// Create a filter with the default English stop words.
    pub fn english() -> Self {
        StopwordFilter {
            stop_words: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
        }
    }

    /// Create a filter with the default Japanese stop words.
    pub fn japanese() -> Self {
        StopwordFilter {
            stop_words: DEFAULT_JAPANESE_STOP_WORDS_SET.clone(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopwordFilter {
            stop_words: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Check whether a word is in the stop list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of words in the stop list.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the stop list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenTransform for StopwordFilter {
    fn transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(tokens
            .into_iter()
            .filter(|t| !self.stop_words.contains(&t.text))
            .collect())
    }

    fn inverse_transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        // Removed tokens are gone; pass the remainder through.
        Ok(tokens)
    }

    fn lossy(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "stopword_filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stop_words() {
        let filter = StopwordFilter::english();
        let tokens = vec![
            Token::new("the", 0),
            Token::new("quick", 1),
            Token::new("brown", 2),
        ];

        let result = filter.transform(tokens).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick");
        assert_eq!(result[1].text, "brown");
    }

    #[test]
    fn test_japanese_stop_words() {
        let filter = StopwordFilter::japanese();
        let tokens = vec![
            Token::new("日本語", 0),
            Token::new("の", 1),
            Token::new("解析", 2),
        ];

        let result = filter.transform(tokens).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "日本語");
        assert_eq!(result[1].text, "解析");
    }

    #[test]
    fn test_custom_words() {
        let filter = StopwordFilter::from_words(vec!["foo"]);
        assert!(filter.is_stop_word("foo"));
        assert!(!filter.is_stop_word("bar"));
    }

    #[test]
    fn test_for_language() {
        assert!(StopwordFilter::for_language("en").is_ok());
        assert!(StopwordFilter::for_language("ja").is_ok());
        assert!(StopwordFilter::for_language("xx").is_err());
    }

    #[test]
    fn test_inverse_is_passthrough() {
        let filter = StopwordFilter::english();
        let tokens = vec![Token::new("quick", 0)];
        let result = filter.inverse_transform(tokens.clone()).unwrap();
        assert_eq!(result, tokens);
        assert!(filter.lossy());
    }
}
