//! Bidirectional token/id vocabulary.
//!
//! A [`Vocabulary`] is a bijection between tokens and dense integer ids, plus
//! a document-frequency count per observed token. The two lowest ids are
//! reserved and never evicted by frequency cutoffs:
//!
//! - [`PAD_ID`] (0) — the padding marker [`PAD_TOKEN`]
//! - [`UNKNOWN_ID`] (1) — the marker [`UNKNOWN_TOKEN`] that out-of-vocabulary
//!   tokens map to at transform time
//!
//! Ids are assigned in first-seen corpus order and are stable once assigned;
//! a vocabulary is only ever rebuilt wholesale by a re-fit, never renumbered.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Reserved id for the padding marker.
pub const PAD_ID: u32 = 0;

/// Reserved id for the unknown-token marker.
pub const UNKNOWN_ID: u32 = 1;

/// Marker token occupying [`PAD_ID`].
pub const PAD_TOKEN: &str = "<pad>";

/// Marker token occupying [`UNKNOWN_ID`].
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// A bijective token-to-id mapping with per-token document frequencies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Token to id. Inverse of `id_to_token` over the current key set.
    token_to_id: AHashMap<String, u32>,

    /// Id to token. Ids are dense: the id is the index into this vec.
    id_to_token: Vec<String>,

    /// Documents each observed token appeared in, including tokens that were
    /// cut by min_df and never received an id.
    doc_freq: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Create a vocabulary containing only the reserved marker tokens.
    pub fn new() -> Self {
        let mut vocab = Vocabulary {
            token_to_id: AHashMap::new(),
            id_to_token: Vec::new(),
            doc_freq: AHashMap::new(),
        };
        vocab.insert(PAD_TOKEN);
        vocab.insert(UNKNOWN_TOKEN);
        debug_assert_eq!(vocab.id(PAD_TOKEN), Some(PAD_ID));
        debug_assert_eq!(vocab.id(UNKNOWN_TOKEN), Some(UNKNOWN_ID));
        vocab
    }

    /// Insert a token, assigning the next dense id. Returns the existing id
    /// if the token is already present.
    pub fn insert(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }
        let id = self.id_to_token.len() as u32;
        self.id_to_token.push(token.to_string());
        self.token_to_id.insert(token.to_string(), id);
        id
    }

    /// Record one document's worth of frequency counts. `tokens` must already
    /// be deduplicated per document.
    pub fn count_document<'a, I: IntoIterator<Item = &'a str>>(&mut self, tokens: I) {
        for token in tokens {
            *self.doc_freq.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    /// Look up the id for a token.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the token for an id.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(|s| s.as_str())
    }

    /// Document frequency of a token observed during fit. Tokens never seen
    /// (including the reserved markers) have frequency 0.
    pub fn doc_freq(&self, token: &str) -> usize {
        self.doc_freq.get(token).copied().unwrap_or(0)
    }

    /// Whether the token has an assigned id.
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Number of ids assigned, reserved markers included.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Whether the vocabulary holds only the reserved markers.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.len() <= 2
    }

    /// Iterate over (token, id) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_str(), id as u32))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
