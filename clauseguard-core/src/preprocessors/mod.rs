//! Document Preprocessors
//!
//! This module provides the text-extraction layer that turns an uploaded file
//! into the single text blob the analysis pipeline consumes.
//!
//! ## Architecture
//!
//! ```text
//! Document (PDF, DOCX, TXT)
//!     ↓
//! [Format-specific Preprocessor]   chosen by file extension
//!     ↓
//! Document { text }
//!     ↓
//! [ContractAnalyzer]
//! ```
//!
//! ## Available Preprocessors
//!
//! - `PdfPreprocessor` - PDF text layer via `pdf-extract`
//! - `DocxPreprocessor` - Word documents, paragraphs joined with spaces
//! - `TextPreprocessor` - UTF-8 plain text

pub mod docx;
pub mod pdf;
pub mod preprocessor;
pub mod text;

use crate::types::{Document, DocumentFormat};
use std::path::Path;

// Re-export main types
pub use docx::DocxPreprocessor;
pub use pdf::PdfPreprocessor;
pub use preprocessor::Preprocessor;
pub use text::TextPreprocessor;

/// Dispatches a file to the preprocessor registered for its extension.
///
/// Extraction never fails outright: an unrecognised extension or a backend
/// error is logged and yields a document with empty text, which the analysis
/// gate then rejects.
pub struct TextExtractor {
    preprocessors: Vec<Box<dyn Preprocessor + Send + Sync>>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::with_preprocessors(vec![
            Box::new(PdfPreprocessor),
            Box::new(DocxPreprocessor),
            Box::new(TextPreprocessor),
        ])
    }

    pub fn with_preprocessors(preprocessors: Vec<Box<dyn Preprocessor + Send + Sync>>) -> Self {
        Self { preprocessors }
    }

    fn preprocessor_for(&self, format: DocumentFormat) -> Option<&(dyn Preprocessor + Send + Sync)> {
        self.preprocessors
            .iter()
            .find(|p| p.format() == format)
            .map(|p| p.as_ref())
    }

    /// Extract text from in-memory bytes of a known format
    pub fn extract_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Document {
        let text = self.run(format, |preprocessor| preprocessor.extract_text(bytes));
        Document::new(text, Some(format))
    }

    /// Extract text from a file, choosing the preprocessor by extension
    pub fn extract_file(&self, path: &Path) -> Document {
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let Some(format) = DocumentFormat::from_path(path) else {
            tracing::warn!("unrecognised file type: {}", path.display());
            return Document::new(String::new(), None).with_source(source);
        };

        let text = self.run(format, |preprocessor| preprocessor.process_file(path));
        tracing::info!(
            "extracted {} chars from {} ({format})",
            text.chars().count(),
            path.display()
        );
        Document::new(text, Some(format)).with_source(source)
    }

    fn run<F>(&self, format: DocumentFormat, extract: F) -> String
    where
        F: FnOnce(&(dyn Preprocessor + Send + Sync)) -> anyhow::Result<String>,
    {
        let Some(preprocessor) = self.preprocessor_for(format) else {
            tracing::warn!("no preprocessor registered for {format}");
            return String::new();
        };
        extract(preprocessor).unwrap_or_else(|e| {
            tracing::warn!("{} failed: {e:#}", preprocessor.name());
            String::new()
        })
    }
}
