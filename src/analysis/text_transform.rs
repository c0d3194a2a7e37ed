//! Text transform implementations for string-level normalization.
//!
//! Text transforms run on the raw string before tokenization. A transform may
//! learn parameters from the corpus during `fit` (stateless transforms no-op),
//! and may declare itself lossy, in which case its `inverse_transform` is a
//! best-effort pass-through rather than an exact inversion.
//!
//! # Available Transforms
//!
//! - [`unicode_normalize::UnicodeNormalizer`] - Unicode normalization (NFC, NFKC, etc.)
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::text_transform::TextTransform;
//! use tsumugi::analysis::text_transform::unicode_normalize::UnicodeNormalizer;
//!
//! let normalizer = UnicodeNormalizer::nfkc();
//! // Fullwidth "Ａ" becomes halfwidth "A"
//! assert_eq!(normalizer.transform("\u{ff21}BC"), "ABC");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Trait for transforms applied to whole strings before tokenization.
///
/// `transform` must be a pure function of the fitted state and its input:
/// applying it twice with the same state yields the same result. For a
/// non-lossy transform, `inverse_transform(transform(x)) == x` must hold;
/// lossy transforms (where `lossy()` returns true) may return their input
/// unchanged from `inverse_transform`.
pub trait TextTransform: Send + Sync {
    /// Learn parameters from the corpus. Stateless transforms keep the
    /// default no-op. Never called automatically more than once per fit.
    fn fit(&mut self, _corpus: &[String]) -> Result<()> {
        Ok(())
    }

    /// Apply this transform to the input string.
    fn transform(&self, input: &str) -> String;

    /// Best-effort reconstruction of the pre-transform string.
    fn inverse_transform(&self, output: &str) -> String;

    /// Whether this transform loses information (making `inverse_transform`
    /// approximate).
    fn lossy(&self) -> bool;

    /// Get the name of this transform (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The closed set of text transforms shipped with the crate.
///
/// Pipelines are composed from values of this enum so that a fitted
/// [`Preprocessor`](crate::preprocessor::Preprocessor) serializes without
/// trait objects. The enum delegates [`TextTransform`] to its variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStage {
    /// Unicode normalization (NFC/NFD/NFKC/NFKD).
    UnicodeNormalizer(unicode_normalize::UnicodeNormalizer),
}

impl TextTransform for TextStage {
    fn fit(&mut self, corpus: &[String]) -> Result<()> {
        match self {
            TextStage::UnicodeNormalizer(t) => t.fit(corpus),
        }
    }

    fn transform(&self, input: &str) -> String {
        match self {
            TextStage::UnicodeNormalizer(t) => t.transform(input),
        }
    }

    fn inverse_transform(&self, output: &str) -> String {
        match self {
            TextStage::UnicodeNormalizer(t) => t.inverse_transform(output),
        }
    }

    fn lossy(&self) -> bool {
        match self {
            TextStage::UnicodeNormalizer(t) => t.lossy(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TextStage::UnicodeNormalizer(t) => t.name(),
        }
    }
}

// Individual transform modules
pub mod unicode_normalize;
