//! Dataset loading: retrieval of raw CSV text and parsing into rows.
//!
//! The loader is deliberately dumb. It fetches raw text from a
//! [`DatasetSource`], hands it to the CSV parser, and returns loosely-typed
//! [`RawPlayerRow`]s for the ranking engine to validate. There is no caching:
//! every load refetches and reparses from scratch, and the resulting dataset
//! replaces any prior one wholesale.

pub mod csv;
pub mod validation;

use crate::error::{CourtrankError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub use csv::{parse_rows, RawPlayerRow};
pub use validation::validate_source_path;

/// Abstraction over the collaborator that serves the raw dataset text.
///
/// The original deployment fronted the CSV file with an HTTP endpoint; the
/// engine only ever needed "a function returning raw tabular text or failing
/// explicitly", which is exactly this seam.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Retrieve the full raw CSV text. Failure is a `LoadError`; the caller
    /// must never substitute an empty dataset for a failed fetch.
    async fn fetch_raw(&self) -> Result<String>;

    /// Short human-readable name of the source for status display.
    fn describe(&self) -> String;
}

/// File-backed dataset source reading via tokio.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch_raw(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CourtrankError::SourceNotFound {
                    path: self.path.clone(),
                }
            } else {
                CourtrankError::load(format!("Cannot read {}", self.path.display()), e)
            }
        })
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}

/// Fetch and parse in one step: the loader contract from the engine's side.
pub async fn load_rows(source: &dyn DatasetSource) -> Result<Vec<RawPlayerRow>> {
    let raw = source.fetch_raw().await?;
    let rows = parse_rows(&raw)?;
    log::info!(
        "loaded {} raw rows from {}",
        rows.len(),
        source.describe()
    );
    Ok(rows)
}
