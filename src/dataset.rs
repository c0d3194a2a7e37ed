//! Per-field preprocessing for tabular datasets.
//!
//! A dataset column is either passed through untouched (labels, ids) or run
//! through a [`Preprocessor`]. This module maps field names to their
//! transformers and applies them per column; actual column storage and file
//! I/O stay outside the crate.
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::tokenizer::TokenizerKind;
//! use tsumugi::dataset::{DatasetPreprocessor, FieldTransformer, TransformedColumn};
//! use tsumugi::index::indexer::Indexer;
//! use tsumugi::preprocessor::Preprocessor;
//!
//! let mut preprocessor = Preprocessor::new(
//!     TokenizerKind::for_language("ja").unwrap(),
//!     Indexer::new(0),
//! );
//! let reviews = vec!["面白い映画".to_string()];
//! preprocessor.fit(&reviews).unwrap();
//!
//! let mut dataset = DatasetPreprocessor::new();
//! dataset.insert("label", FieldTransformer::Passthrough);
//! dataset.insert("review", FieldTransformer::Pipeline(preprocessor));
//!
//! let column = dataset.transform_field("review", &reviews).unwrap();
//! assert!(matches!(column, TransformedColumn::Indexed(_)));
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TsumugiError};
use crate::preprocessor::Preprocessor;

/// What to do with one dataset field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldTransformer {
    /// Leave the column's values untouched.
    Passthrough,
    /// Run the column through a preprocessing pipeline.
    Pipeline(Preprocessor),
}

/// One transformed dataset column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransformedColumn {
    /// Pass-through values.
    Raw(Vec<String>),
    /// Index sequences produced by a pipeline, one per input record.
    Indexed(Vec<Vec<u32>>),
}

/// Maps field names to their transformers and applies them per column.
///
/// Each field owns its transformer; fields sharing a vocabulary share a
/// jointly fitted [`Preprocessor`] by value (see
/// [`Preprocessor::fit_fields`]). Requesting a field that was never
/// configured is a field error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetPreprocessor {
    fields: AHashMap<String, FieldTransformer>,
}

impl DatasetPreprocessor {
    /// Create an empty field mapping.
    pub fn new() -> Self {
        DatasetPreprocessor {
            fields: AHashMap::new(),
        }
    }

    /// Configure the transformer for a field.
    pub fn insert(&mut self, field: impl Into<String>, transformer: FieldTransformer) {
        self.fields.insert(field.into(), transformer);
    }

    /// Get the transformer configured for a field.
    pub fn transformer(&self, field: &str) -> Result<&FieldTransformer> {
        self.fields
            .get(field)
            .ok_or_else(|| TsumugiError::field(format!("no transformer for field '{field}'")))
    }

    /// Names of all configured fields.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    /// Transform one field's column of values.
    pub fn transform_field(&self, field: &str, values: &[String]) -> Result<TransformedColumn> {
        match self.transformer(field)? {
            FieldTransformer::Passthrough => Ok(TransformedColumn::Raw(values.to_vec())),
            FieldTransformer::Pipeline(preprocessor) => {
                Ok(TransformedColumn::Indexed(preprocessor.transform(values)?))
            }
        }
    }

    /// Inverse-transform one field's column of id sequences back to token
    /// sequences.
    ///
    /// Fails with a field error if the field is configured as pass-through:
    /// there are no ids to invert for such a column.
    pub fn inverse_transform_field(
        &self,
        field: &str,
        values: &[Vec<u32>],
    ) -> Result<Vec<Vec<String>>> {
        match self.transformer(field)? {
            FieldTransformer::Passthrough => Err(TsumugiError::field(format!(
                "field '{field}' is pass-through and has no inverse transform"
            ))),
            FieldTransformer::Pipeline(preprocessor) => preprocessor.inverse_transform(values),
        }
    }

    /// Transform every configured field of a dataset, keyed by field name.
    ///
    /// Fails with a field error if a configured field has no column in the
    /// input.
    pub fn transform_all(
        &self,
        columns: &AHashMap<String, Vec<String>>,
    ) -> Result<AHashMap<String, TransformedColumn>> {
        let mut out = AHashMap::new();
        for field in self.fields.keys() {
            let values = columns.get(field).ok_or_else(|| {
                TsumugiError::field(format!("no data for configured field '{field}'"))
            })?;
            out.insert(field.clone(), self.transform_field(field, values)?);
        }
        Ok(out)
    }
}
