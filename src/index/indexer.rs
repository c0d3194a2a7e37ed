//! Indexer: token sequences to id sequences and back.
//!
//! The [`Indexer`] learns a [`Vocabulary`] from a corpus of token sequences
//! and converts sequences between tokens and ids. Fit state is explicit:
//! `transform` and `inverse_transform` fail with a not-fitted error until
//! [`Indexer::fit`] has run.
//!
//! # Unknown-token policy
//!
//! - `transform`: a token without an id (unseen, or cut by `min_df`) maps to
//!   [`UNKNOWN_ID`]. This is an accepted lossy degradation, not an error.
//! - `inverse_transform`: an id outside the fitted vocabulary is corrupt
//!   input and fails with [`TsumugiError::UnknownIndex`]. [`UNKNOWN_ID`]
//!   itself is a valid id and inverts to the [`UNKNOWN_TOKEN`] marker.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{Result, TsumugiError};
use crate::index::vocabulary::{UNKNOWN_ID, Vocabulary};

/// Converts token sequences to dense id sequences via a fitted vocabulary.
///
/// # Examples
///
/// ```
/// use tsumugi::analysis::token::Token;
/// use tsumugi::index::indexer::Indexer;
///
/// let corpus = vec![
///     vec![Token::new("hello", 0), Token::new("world", 1)],
///     vec![Token::new("hello", 0)],
/// ];
///
/// let mut indexer = Indexer::new(0);
/// indexer.fit(&corpus).unwrap();
///
/// let ids = indexer.transform(&corpus[0]).unwrap();
/// let tokens = indexer.inverse_transform(&ids).unwrap();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Indexer {
    /// Minimum number of documents a token must appear in to receive an id.
    min_df: usize,

    /// Learned vocabulary. `None` until `fit` has run.
    vocab: Option<Vocabulary>,
}

impl Indexer {
    /// Create an unfitted indexer with the given document-frequency cutoff.
    pub fn new(min_df: usize) -> Self {
        Indexer {
            min_df,
            vocab: None,
        }
    }

    /// The configured document-frequency cutoff.
    pub fn min_df(&self) -> usize {
        self.min_df
    }

    /// Whether `fit` has run.
    pub fn fitted(&self) -> bool {
        self.vocab.is_some()
    }

    /// The fitted vocabulary.
    pub fn vocabulary(&self) -> Result<&Vocabulary> {
        self.vocab
            .as_ref()
            .ok_or_else(|| TsumugiError::not_fitted("Indexer has not been fit"))
    }

    /// Learn the vocabulary from a corpus of token sequences.
    ///
    /// Document frequency counts each token once per document it appears in.
    /// Ids are assigned in first-seen corpus order to every token whose
    /// document frequency is at least `min_df`; the rest stay out of the
    /// vocabulary and map to the unknown id at transform time.
    ///
    /// Re-fitting discards all previously learned state. An empty corpus is
    /// valid and yields a vocabulary holding only the reserved markers.
    pub fn fit(&mut self, corpus: &[Vec<Token>]) -> Result<()> {
        let mut vocab = Vocabulary::new();
        let mut first_seen: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for document in corpus {
            let mut in_document: HashSet<&str> = HashSet::new();
            for token in document {
                if seen.insert(token.text.clone()) {
                    first_seen.push(token.text.clone());
                }
                in_document.insert(token.text.as_str());
            }
            vocab.count_document(in_document);
        }

        for token in &first_seen {
            if vocab.doc_freq(token) >= self.min_df {
                vocab.insert(token);
            }
        }

        debug!(
            "indexer fit: {} documents, {} distinct tokens, vocabulary size {} (min_df={})",
            corpus.len(),
            first_seen.len(),
            vocab.len(),
            self.min_df
        );

        self.vocab = Some(vocab);
        Ok(())
    }

    /// Map a token sequence to its id sequence.
    ///
    /// Tokens absent from the vocabulary map to the unknown id. The
    /// vocabulary is never grown here.
    pub fn transform(&self, tokens: &[Token]) -> Result<Vec<u32>> {
        let vocab = self.vocabulary()?;
        Ok(tokens
            .iter()
            .map(|t| vocab.id(&t.text).unwrap_or(UNKNOWN_ID))
            .collect())
    }

    /// Map an id sequence back to its token texts.
    ///
    /// Fails with an unknown-index error on any id outside the fitted
    /// vocabulary.
    pub fn inverse_transform(&self, ids: &[u32]) -> Result<Vec<String>> {
        let vocab = self.vocabulary()?;
        ids.iter()
            .map(|&id| {
                vocab
                    .token(id)
                    .map(|s| s.to_string())
                    .ok_or_else(|| TsumugiError::unknown_index(id, vocab.len()))
            })
            .collect()
    }
}
