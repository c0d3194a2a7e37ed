//! Token transform implementations for token-sequence processing.
//!
//! Token transforms run on the token sequence produced by the tokenizer,
//! before vocabulary indexing. Like text transforms they may learn parameters
//! during `fit`, and lossy transforms (stopword removal, lowercasing) invert
//! as an identity pass-through on what remains.
//!
//! # Available Transforms
//!
//! - [`stopword::StopwordFilter`] - Removes stop words
//! - [`lowercase::LowercaseTransform`] - Converts token text to lowercase
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::token::Token;
//! use tsumugi::analysis::token_transform::TokenTransform;
//! use tsumugi::analysis::token_transform::stopword::StopwordFilter;
//!
//! let filter = StopwordFilter::english();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result = filter.transform(tokens).unwrap();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for transforms applied to token sequences after tokenization.
///
/// `transform` must be a pure function of the fitted state and its input.
/// Non-lossy transforms must satisfy `inverse_transform(transform(x)) == x`;
/// lossy transforms return their input unchanged from `inverse_transform`.
pub trait TokenTransform: Send + Sync {
    /// Learn parameters from a corpus of token sequences. Stateless
    /// transforms keep the default no-op.
    fn fit(&mut self, _corpus: &[Vec<Token>]) -> Result<()> {
        Ok(())
    }

    /// Apply this transform to a token sequence.
    fn transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;

    /// Best-effort reconstruction of the pre-transform token sequence.
    fn inverse_transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;

    /// Whether this transform loses information.
    fn lossy(&self) -> bool;

    /// Get the name of this transform (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The closed set of token transforms shipped with the crate.
///
/// The enum delegates [`TokenTransform`] to its variants; see
/// [`TextStage`](crate::analysis::text_transform::TextStage) for why stages
/// are enums rather than trait objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStage {
    /// Stop word removal.
    StopwordFilter(stopword::StopwordFilter),
    /// Lowercasing of token text.
    Lowercase(lowercase::LowercaseTransform),
}

impl TokenTransform for TokenStage {
    fn fit(&mut self, corpus: &[Vec<Token>]) -> Result<()> {
        match self {
            TokenStage::StopwordFilter(t) => t.fit(corpus),
            TokenStage::Lowercase(t) => t.fit(corpus),
        }
    }

    fn transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        match self {
            TokenStage::StopwordFilter(t) => t.transform(tokens),
            TokenStage::Lowercase(t) => t.transform(tokens),
        }
    }

    fn inverse_transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        match self {
            TokenStage::StopwordFilter(t) => t.inverse_transform(tokens),
            TokenStage::Lowercase(t) => t.inverse_transform(tokens),
        }
    }

    fn lossy(&self) -> bool {
        match self {
            TokenStage::StopwordFilter(t) => t.lossy(),
            TokenStage::Lowercase(t) => t.lossy(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TokenStage::StopwordFilter(t) => t.name(),
            TokenStage::Lowercase(t) => t.name(),
        }
    }
}

// Individual transform modules
pub mod lowercase;
pub mod stopword;
