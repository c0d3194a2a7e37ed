//! # Tsumugi
//!
//! A composable text preprocessing pipeline for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable tokenizers selected by language tag
//! - Invertible text and token transform stages
//! - Vocabulary indexing with document-frequency cutoff
//! - Exact string reconstruction from index sequences
//! - Versioned snapshot persistence

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod index;
pub mod preprocessor;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
