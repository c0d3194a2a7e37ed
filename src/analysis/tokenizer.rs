//! Tokenizer implementations for text analysis.
//!
//! This module provides tokenization strategies for breaking text into tokens.
//! Tokenizers run after the text-transform stages and before the
//! token-transform stages, and must be deterministic: the same input always
//! produces the same token sequence.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`japanese::JapaneseTokenizer`] - Script-run segmentation for Japanese
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::tokenizer::Tokenizer;
//! use tsumugi::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{Result, TsumugiError};

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizers have no fit step; they are pure functions of their
/// configuration and input. The trait requires `Send + Sync` to allow use in
/// concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use tsumugi::analysis::token::{Token, TokenStream};
/// use tsumugi::analysis::tokenizer::Tokenizer;
/// use tsumugi::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The closed set of tokenizers shipped with the crate.
///
/// A fitted [`Preprocessor`](crate::preprocessor::Preprocessor) must be fully
/// serializable, so the tokenizer it carries is a value of this enum rather
/// than a trait object. The enum delegates [`Tokenizer`] to its variants.
///
/// # Examples
///
/// ```
/// use tsumugi::analysis::tokenizer::{Tokenizer, TokenizerKind};
///
/// let tokenizer = TokenizerKind::for_language("ja").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("こんにちは、世界").unwrap().collect();
/// assert_eq!(tokens[0].text, "こんにちは");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerKind {
    /// Whitespace splitting for space-joined languages.
    Whitespace(whitespace::WhitespaceTokenizer),
    /// Script-run segmentation for Japanese.
    Japanese(japanese::JapaneseTokenizer),
}

impl TokenizerKind {
    /// Look up the tokenizer for a language tag.
    ///
    /// Currently supported tags are `"ja"` (script-run segmentation) and
    /// `"en"` (whitespace splitting). Unknown tags are an error rather than a
    /// silent fallback.
    pub fn for_language(tag: &str) -> Result<Self> {
        match tag {
            "ja" => Ok(TokenizerKind::Japanese(japanese::JapaneseTokenizer::new())),
            "en" => Ok(TokenizerKind::Whitespace(
                whitespace::WhitespaceTokenizer::new(),
            )),
            other => Err(TsumugiError::analysis(format!(
                "no tokenizer registered for language '{other}'"
            ))),
        }
    }
}

impl Tokenizer for TokenizerKind {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        match self {
            TokenizerKind::Whitespace(t) => t.tokenize(text),
            TokenizerKind::Japanese(t) => t.tokenize(text),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Whitespace(t) => t.name(),
            TokenizerKind::Japanese(t) => t.name(),
        }
    }
}

// Individual tokenizer modules
pub mod japanese;
pub mod whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language() {
        assert_eq!(
            TokenizerKind::for_language("ja").unwrap().name(),
            "japanese"
        );
        assert_eq!(
            TokenizerKind::for_language("en").unwrap().name(),
            "whitespace"
        );
    }

    #[test]
    fn test_for_unknown_language() {
        let err = TokenizerKind::for_language("tlh").unwrap_err();
        match err {
            TsumugiError::Analysis(_) => {}
            other => panic!("Expected analysis error, got {other:?}"),
        }
    }
}
