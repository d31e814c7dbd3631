//! PDF Preprocessor
//!
//! Extracts the text layer with `pdf-extract`. Scanned PDFs without a text
//! layer come back (nearly) empty and are rejected later by the analysis gate.

use super::preprocessor::Preprocessor;
use crate::types::DocumentFormat;
use anyhow::{anyhow, Result};

pub struct PdfPreprocessor;

impl Preprocessor for PdfPreprocessor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| anyhow!("PDF text extraction failed: {e}"))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &str {
        "PdfPreprocessor"
    }
}
