//! Plain-text Preprocessor (UTF-8)

use super::preprocessor::Preprocessor;
use crate::types::DocumentFormat;
use anyhow::{Context, Result};

pub struct TextPreprocessor;

impl Preprocessor for TextPreprocessor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).context("Text file is not valid UTF-8")?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Txt
    }

    fn name(&self) -> &str {
        "TextPreprocessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let text = TextPreprocessor.extract_text("Lease — ₹ clause\n".as_bytes()).unwrap();
        assert_eq!(text, "Lease — ₹ clause\n");
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let text = TextPreprocessor.extract_text(b"\xEF\xBB\xBFhello").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        assert!(TextPreprocessor.extract_text(&[0xff, 0xfe, 0x00]).is_err());
    }
}
