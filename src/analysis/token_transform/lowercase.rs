//! Lowercase token transform implementation.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_transform::TokenTransform;
use crate::error::Result;

/// A token transform that converts token text to lowercase.
///
/// Lossy: the original casing cannot be recovered, so `inverse_transform`
/// returns the tokens unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowercaseTransform;

impl LowercaseTransform {
    /// Create a new lowercase transform.
    pub fn new() -> Self {
        LowercaseTransform
    }
}

impl TokenTransform for LowercaseTransform {
    fn transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(tokens
            .into_iter()
            .map(|mut t| {
                t.text = t.text.to_lowercase();
                t
            })
            .collect())
    }

    fn inverse_transform(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(tokens)
    }

    fn lossy(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
