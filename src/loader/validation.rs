//! Pre-flight validation of the dataset path.
//!
//! Run before the terminal UI takes over the screen, so obviously unusable
//! inputs fail with a plain error message instead of a blank viewer.

use crate::error::{CourtrankError, Result};
use std::fs::File;
use std::path::Path;

/// Validate that a dataset path is accessible and plausibly a CSV file.
///
/// # Validations Performed
/// - Path exists and is a regular file
/// - File is readable by the current process
/// - File is not empty (an empty file cannot even carry a header row)
pub fn validate_source_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CourtrankError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| CourtrankError::load("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(CourtrankError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(CourtrankError::InvalidArgument {
            message: format!("Dataset file is empty: {}", path.display()),
        });
    }

    // Verify read permissions up front
    File::open(path).map_err(|e| CourtrankError::load("Cannot open dataset for reading", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content)
            .expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[test]
    fn test_validate_valid_file() {
        let test_file = create_test_file(b"Player ID,Player Name\n1,Alice\n");
        assert!(validate_source_path(test_file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let non_existent = std::path::Path::new("/this/file/does/not/exist.csv");
        let result = validate_source_path(non_existent);

        assert!(matches!(
            result.unwrap_err(),
            CourtrankError::SourceNotFound { .. }
        ));
    }

    #[test]
    fn test_validate_empty_file() {
        let empty_file = create_test_file(&[]);
        let result = validate_source_path(empty_file.path());

        match result.unwrap_err() {
            CourtrankError::InvalidArgument { message } => {
                assert!(message.contains("empty"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = validate_source_path(temp_dir.path());

        assert!(matches!(
            result.unwrap_err(),
            CourtrankError::NotAFile { .. }
        ));
    }
}
