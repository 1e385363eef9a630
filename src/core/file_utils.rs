//! File utilities for safe and robust file operations.
//!
//! Reading tolerates encoding problems by substituting undecodable bytes
//! rather than aborting; binary files are rejected up front so the parser
//! never sees them.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::errors::{NameshiftError, Result};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        if Self::is_likely_binary(file_path)? {
            return Err(NameshiftError::validation(format!(
                "file appears to be binary: {}",
                file_path.display()
            )));
        }

        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                let bytes = fs::read(file_path)
                    .map_err(|err| NameshiftError::io("failed to read file as bytes", err))?;

                let content = String::from_utf8_lossy(&bytes).to_string();
                warn!(
                    "file contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(content)
            }
            Err(e) => Err(NameshiftError::io("failed to read file", e)),
        }
    }

    /// Check if a file is likely to be binary based on content sampling
    pub fn is_likely_binary(file_path: &Path) -> Result<bool> {
        let metadata = fs::metadata(file_path)
            .map_err(|e| NameshiftError::io("failed to read file metadata", e))?;

        // Don't process very large files
        if metadata.len() > 10 * 1024 * 1024 {
            return Ok(true);
        }

        let sample_size = std::cmp::min(1024, metadata.len() as usize);
        if sample_size == 0 {
            return Ok(false);
        }

        use std::io::Read;
        let mut buffer = vec![0u8; sample_size];
        let mut file = fs::File::open(file_path)
            .map_err(|e| NameshiftError::io("failed to open file for sampling", e))?;
        file.read_exact(&mut buffer)
            .map_err(|e| NameshiftError::io("failed to read file sample", e))?;

        // Null bytes are a reliable binary indicator
        let null_bytes = buffer.iter().filter(|&&b| b == 0).count();
        let null_percentage = (null_bytes as f64 / buffer.len() as f64) * 100.0;

        Ok(null_percentage > 1.0)
    }
}
