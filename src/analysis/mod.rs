//! Text analysis module for Tsumugi.
//!
//! This module provides the stages that run before vocabulary indexing:
//! text-level transforms, tokenization, and token-level transforms.

pub mod text_transform;
pub mod token;
pub mod token_transform;
pub mod tokenizer;

// Re-export commonly used types
pub use text_transform::*;
pub use token::*;
pub use token_transform::*;
pub use tokenizer::*;
