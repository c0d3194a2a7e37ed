//! Vocabulary indexing module for Tsumugi.
//!
//! This module converts token sequences to and from dense integer id
//! sequences, backed by a vocabulary learned from a corpus.

pub mod indexer;
pub mod vocabulary;

// Re-export commonly used types
pub use indexer::*;
pub use vocabulary::*;
