// Preprocessor abstraction for text extraction
//
// This module defines the boundary between file-format handling (bytes -> text)
// and contract analysis (text -> report). Everything after this point works on
// a single UTF-8 string and is format-agnostic.

use crate::types::DocumentFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Preprocessor trait - converts one document format to plain text
pub trait Preprocessor {
    /// Extract the document's text from its raw bytes
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;

    /// Convenience method: read a file and extract its text
    fn process_file(&self, input: &Path) -> Result<String> {
        let bytes = std::fs::read(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        self.extract_text(&bytes)
    }

    /// Format this preprocessor handles
    fn format(&self) -> DocumentFormat;

    /// Get preprocessor name for debugging/logging
    fn name(&self) -> &str;
}
