//! Whitespace tokenizer implementation.

use serde::{Deserialize, Serialize};

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Suitable for space-joined languages. Whitespace itself is discarded, so
/// reconstruction joins tokens with a single space; inputs with irregular
/// spacing reconstruct approximately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut offset = 0;

        for chunk in text.split_inclusive(char::is_whitespace) {
            let word = chunk.trim_end_matches(char::is_whitespace);
            if !word.is_empty() {
                tokens.push(Token::with_offsets(
                    word,
                    position,
                    offset,
                    offset + word.len(),
                ));
                position += 1;
            }
            offset += chunk.len();
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
