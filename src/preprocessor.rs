//! Preprocessor pipeline that combines transforms, a tokenizer, and an
//! indexer.
//!
//! This is the main entry point of the crate. A [`Preprocessor`] applies
//! processing in this order:
//!
//! 1. Text stages: string-level transforms on the raw input
//! 2. Tokenizer: splits text into tokens
//! 3. Token stages: applied sequentially in the order they were added
//! 4. Indexer: token sequence to id sequence
//!
//! Inversion runs the invertible stages in reverse; for a pipeline without
//! lossy stages, joining the inverse-transformed tokens reproduces the
//! original string exactly.
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::text_transform::TextStage;
//! use tsumugi::analysis::text_transform::unicode_normalize::UnicodeNormalizer;
//! use tsumugi::analysis::tokenizer::TokenizerKind;
//! use tsumugi::index::indexer::Indexer;
//! use tsumugi::preprocessor::Preprocessor;
//!
//! let mut preprocessor = Preprocessor::new(
//!     TokenizerKind::for_language("ja").unwrap(),
//!     Indexer::new(0),
//! )
//! .add_text_stage(TextStage::UnicodeNormalizer(UnicodeNormalizer::nfkc()));
//!
//! let corpus = vec!["こんにちは、世界".to_string()];
//! preprocessor.fit(&corpus).unwrap();
//!
//! let ids = preprocessor.transform_one(&corpus[0]).unwrap();
//! assert_eq!(preprocessor.reconstruct(&ids).unwrap(), corpus[0]);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::text_transform::{TextStage, TextTransform};
use crate::analysis::token::Token;
use crate::analysis::token_transform::{TokenStage, TokenTransform};
use crate::analysis::tokenizer::{Tokenizer, TokenizerKind};
use crate::error::{Result, TsumugiError};
use crate::index::indexer::Indexer;

pub mod snapshot;

/// Join rule for reconstructing a string from inverse-transformed tokens.
///
/// The rule is explicit configuration rather than a hard-coded convention:
/// Japanese text joins with the empty string, space-joined languages with a
/// single space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Joiner {
    /// Concatenate tokens directly (e.g. Japanese).
    None,
    /// Join tokens with a single space (e.g. English).
    Space,
}

impl Joiner {
    /// Join token texts into a single string.
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let parts: Vec<&str> = tokens.iter().map(|s| s.as_ref()).collect();
        match self {
            Joiner::None => parts.concat(),
            Joiner::Space => parts.join(" "),
        }
    }
}

/// A fit/transform/inverse_transform pipeline over raw strings.
///
/// The pipeline owns all of its state: stage parameters, the tokenizer
/// configuration, and the indexer's vocabulary. Nothing is shared between
/// instances, which keeps each instance independently serializable and makes
/// joint multi-field fitting an explicit operation ([`Preprocessor::fit_fields`])
/// rather than implicit global state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    text_stages: Vec<TextStage>,
    tokenizer: TokenizerKind,
    token_stages: Vec<TokenStage>,
    indexer: Indexer,
    joiner: Joiner,
}

impl Preprocessor {
    /// Create an unfitted preprocessor from a tokenizer and an indexer.
    ///
    /// The join rule defaults to the tokenizer's language convention
    /// (empty join for Japanese, space join for whitespace tokenization) and
    /// can be overridden with [`Preprocessor::with_joiner`].
    pub fn new(tokenizer: TokenizerKind, indexer: Indexer) -> Self {
        let joiner = match &tokenizer {
            TokenizerKind::Japanese(_) => Joiner::None,
            TokenizerKind::Whitespace(_) => Joiner::Space,
        };
        Preprocessor {
            text_stages: Vec::new(),
            tokenizer,
            token_stages: Vec::new(),
            indexer,
            joiner,
        }
    }

    /// Add a text stage to the pipeline. Stages apply in insertion order,
    /// before tokenization.
    pub fn add_text_stage(mut self, stage: TextStage) -> Self {
        self.text_stages.push(stage);
        self
    }

    /// Add a token stage to the pipeline. Stages apply in insertion order,
    /// after tokenization.
    pub fn add_token_stage(mut self, stage: TokenStage) -> Self {
        self.token_stages.push(stage);
        self
    }

    /// Override the join rule used by [`Preprocessor::reconstruct`].
    pub fn with_joiner(mut self, joiner: Joiner) -> Self {
        self.joiner = joiner;
        self
    }

    /// The tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &TokenizerKind {
        &self.tokenizer
    }

    /// The indexer used by this pipeline.
    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    /// The configured join rule.
    pub fn joiner(&self) -> Joiner {
        self.joiner
    }

    /// Whether `fit` has run.
    pub fn fitted(&self) -> bool {
        self.indexer.fitted()
    }

    /// Fit every stateful stage and the indexer over the corpus.
    ///
    /// Each stage fits on the corpus as seen at its position in the pipeline:
    /// text stages on the output of the stages before them, token stages on
    /// the staged token sequences. Re-fitting overwrites all learned state.
    pub fn fit(&mut self, corpus: &[String]) -> Result<()> {
        let mut staged: Vec<String> = corpus.to_vec();
        for stage in &mut self.text_stages {
            stage.fit(&staged)?;
            staged = staged.iter().map(|s| stage.transform(s)).collect();
        }

        let mut token_corpus: Vec<Vec<Token>> = Vec::with_capacity(staged.len());
        for text in &staged {
            token_corpus.push(self.tokenizer.tokenize(text)?.collect());
        }

        for stage in &mut self.token_stages {
            stage.fit(&token_corpus)?;
            let mut transformed = Vec::with_capacity(token_corpus.len());
            for tokens in token_corpus {
                transformed.push(stage.transform(tokens)?);
            }
            token_corpus = transformed;
        }

        self.indexer.fit(&token_corpus)?;

        debug!(
            "preprocessor fit over {} records (tokenizer={})",
            corpus.len(),
            self.tokenizer.name()
        );
        Ok(())
    }

    /// Fit jointly across several fields of the same dataset.
    ///
    /// The fields are concatenated into one corpus pass, so document
    /// frequencies and ids are shared: a token appearing in any field gets
    /// one consistent id, and `min_df` counts across the union of all rows.
    pub fn fit_fields(&mut self, corpora: &[&[String]]) -> Result<()> {
        let joint: Vec<String> = corpora.iter().flat_map(|c| c.iter().cloned()).collect();
        self.fit(&joint)
    }

    /// Transform each input record into an id sequence.
    ///
    /// Output order and cardinality match the input: one id sequence per
    /// record.
    pub fn transform(&self, data: &[String]) -> Result<Vec<Vec<u32>>> {
        self.check_fitted()?;
        data.iter().map(|s| self.transform_one(s)).collect()
    }

    /// Transform a single record into an id sequence.
    pub fn transform_one(&self, record: &str) -> Result<Vec<u32>> {
        self.check_fitted()?;

        let mut staged = record.to_string();
        for stage in &self.text_stages {
            staged = stage.transform(&staged);
        }

        let mut tokens: Vec<Token> = self.tokenizer.tokenize(&staged)?.collect();
        for stage in &self.token_stages {
            tokens = stage.transform(tokens)?;
        }

        self.indexer.transform(&tokens)
    }

    /// Reconstruct token sequences from id sequences.
    ///
    /// Applies the indexer's inverse, then the token stages' inverses in
    /// reverse order (lossy stages pass through unchanged).
    pub fn inverse_transform(&self, data: &[Vec<u32>]) -> Result<Vec<Vec<String>>> {
        self.check_fitted()?;
        data.iter()
            .map(|ids| self.inverse_transform_one(ids))
            .collect()
    }

    /// Reconstruct a single token sequence from an id sequence.
    pub fn inverse_transform_one(&self, ids: &[u32]) -> Result<Vec<String>> {
        self.check_fitted()?;

        let texts = self.indexer.inverse_transform(ids)?;
        let mut tokens: Vec<Token> = texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();

        for stage in self.token_stages.iter().rev() {
            tokens = stage.inverse_transform(tokens)?;
        }

        Ok(tokens.into_iter().map(|t| t.text).collect())
    }

    /// Reconstruct the original string from an id sequence.
    ///
    /// Joins the inverse-transformed tokens per the configured [`Joiner`] and
    /// runs the text stages' inverses in reverse order. For a pipeline with
    /// no lossy stage this reproduces the pre-transform input exactly.
    pub fn reconstruct(&self, ids: &[u32]) -> Result<String> {
        let tokens = self.inverse_transform_one(ids)?;
        let mut text = self.joiner.join(&tokens);
        for stage in self.text_stages.iter().rev() {
            text = stage.inverse_transform(&text);
        }
        Ok(text)
    }

    fn check_fitted(&self) -> Result<()> {
        if self.fitted() {
            Ok(())
        } else {
            Err(TsumugiError::not_fitted("Preprocessor has not been fit"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::text_transform::unicode_normalize::UnicodeNormalizer;
    use crate::analysis::token_transform::stopword::StopwordFilter;
    use crate::index::vocabulary::UNKNOWN_TOKEN;

    fn japanese_pipeline(min_df: usize) -> Preprocessor {
        Preprocessor::new(
            TokenizerKind::for_language("ja").unwrap(),
            Indexer::new(min_df),
        )
        .add_text_stage(TextStage::UnicodeNormalizer(UnicodeNormalizer::nfkc()))
    }

    #[test]
    fn test_unfitted_transform_fails() {
        let preprocessor = japanese_pipeline(0);
        assert!(matches!(
            preprocessor.transform(&["テスト".to_string()]),
            Err(TsumugiError::NotFitted(_))
        ));
        assert!(matches!(
            preprocessor.inverse_transform(&[vec![2]]),
            Err(TsumugiError::NotFitted(_))
        ));
    }

    #[test]
    fn test_japanese_round_trip() {
        let corpus = vec!["こんにちは、世界".to_string()];
        let mut preprocessor = japanese_pipeline(0);
        preprocessor.fit(&corpus).unwrap();

        let transformed = preprocessor.transform(&corpus).unwrap();
        let inversed = preprocessor.inverse_transform(&transformed).unwrap();

        assert_eq!(inversed[0].concat(), corpus[0]);
        assert_eq!(preprocessor.reconstruct(&transformed[0]).unwrap(), corpus[0]);
    }

    #[test]
    fn test_cardinality_and_order_preserved() {
        let corpus = vec![
            "猫が好き".to_string(),
            "犬が好き".to_string(),
            "猫が好き".to_string(),
        ];
        let mut preprocessor = japanese_pipeline(0);
        preprocessor.fit(&corpus).unwrap();

        let transformed = preprocessor.transform(&corpus).unwrap();
        assert_eq!(transformed.len(), 3);
        assert_eq!(transformed[0], transformed[2]);
        assert_ne!(transformed[0], transformed[1]);
    }

    #[test]
    fn test_stopword_stage_is_lossy_but_stable() {
        let corpus = vec!["this is a test".to_string()];
        let mut preprocessor = Preprocessor::new(
            TokenizerKind::for_language("en").unwrap(),
            Indexer::new(0),
        )
        .add_token_stage(TokenStage::StopwordFilter(StopwordFilter::english()));
        preprocessor.fit(&corpus).unwrap();

        let ids = preprocessor.transform_one(&corpus[0]).unwrap();
        // "this", "is", "a" are stop words
        assert_eq!(ids.len(), 1);
        assert_eq!(preprocessor.reconstruct(&ids).unwrap(), "test");
    }

    #[test]
    fn test_unknown_token_maps_to_marker() {
        let mut preprocessor = japanese_pipeline(0);
        preprocessor.fit(&["世界".to_string()]).unwrap();

        let ids = preprocessor.transform_one("火星").unwrap();
        let tokens = preprocessor.inverse_transform_one(&ids).unwrap();
        assert_eq!(tokens, vec![UNKNOWN_TOKEN]);
    }

    #[test]
    fn test_fit_fields_shares_vocabulary() {
        let review = vec!["良い映画".to_string()];
        let comment = vec!["映画が好き".to_string()];

        let mut preprocessor = japanese_pipeline(0);
        preprocessor
            .fit_fields(&[review.as_slice(), comment.as_slice()])
            .unwrap();

        let vocab = preprocessor.indexer().vocabulary().unwrap();
        // "映画" appears in both fields and has exactly one id
        assert!(vocab.contains("映画"));
        assert_eq!(vocab.doc_freq("映画"), 2);
    }

    #[test]
    fn test_refit_resets_state() {
        let mut preprocessor = japanese_pipeline(0);
        preprocessor.fit(&["古い".to_string()]).unwrap();
        preprocessor.fit(&["新しい".to_string()]).unwrap();

        let vocab = preprocessor.indexer().vocabulary().unwrap();
        assert!(!vocab.contains("古い"));
        assert!(vocab.contains("新しい"));
    }

    #[test]
    fn test_space_joiner() {
        let corpus = vec!["hello world".to_string()];
        let mut preprocessor = Preprocessor::new(
            TokenizerKind::for_language("en").unwrap(),
            Indexer::new(0),
        );
        assert_eq!(preprocessor.joiner(), Joiner::Space);

        preprocessor.fit(&corpus).unwrap();
        let ids = preprocessor.transform_one(&corpus[0]).unwrap();
        assert_eq!(preprocessor.reconstruct(&ids).unwrap(), "hello world");
    }
}
