//! Versioned snapshot persistence for fitted preprocessors.
//!
//! A snapshot captures the entire pipeline state: stage parameters, tokenizer
//! configuration, join rule, and the indexer's vocabulary. The format carries
//! an explicit version number so cross-version compatibility is a checked
//! contract rather than an accident. Restoring a snapshot yields a
//! preprocessor that is behaviorally identical to the one that produced it.
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::tokenizer::TokenizerKind;
//! use tsumugi::index::indexer::Indexer;
//! use tsumugi::preprocessor::Preprocessor;
//!
//! let mut preprocessor = Preprocessor::new(
//!     TokenizerKind::for_language("ja").unwrap(),
//!     Indexer::new(0),
//! );
//! preprocessor.fit(&["こんにちは".to_string()]).unwrap();
//!
//! let json = preprocessor.to_snapshot_json().unwrap();
//! let restored = Preprocessor::from_snapshot_json(&json).unwrap();
//! assert_eq!(restored, preprocessor);
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TsumugiError};
use crate::preprocessor::Preprocessor;

/// Current snapshot format version.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// On-disk representation of a preprocessor.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    format_version: u32,
    preprocessor: Preprocessor,
}

impl Preprocessor {
    /// Serialize this preprocessor to a versioned JSON snapshot.
    pub fn to_snapshot_json(&self) -> Result<String> {
        let snapshot = Snapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            preprocessor: self.clone(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Restore a preprocessor from a JSON snapshot.
    ///
    /// Fails with a snapshot error if the format version does not match.
    pub fn from_snapshot_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(TsumugiError::snapshot(format!(
                "unsupported snapshot format version {} (expected {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }
        Ok(snapshot.preprocessor)
    }

    /// Write a snapshot to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = Snapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            preprocessor: self.clone(),
        };
        let file = File::create(path.as_ref())?;
        serde_json::to_writer(BufWriter::new(file), &snapshot)?;
        debug!("preprocessor snapshot saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Restore a preprocessor from a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(TsumugiError::snapshot(format!(
                "unsupported snapshot format version {} (expected {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }
        debug!(
            "preprocessor snapshot loaded from {}",
            path.as_ref().display()
        );
        Ok(snapshot.preprocessor)
    }
}
