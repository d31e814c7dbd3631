//! DOCX Preprocessor
//!
//! A .docx file is a zip container; the body lives in `word/document.xml`.
//! Text runs (`<w:t>`) are concatenated per paragraph (`<w:p>`) and the
//! paragraphs are joined with single spaces, so a Word document reaches the
//! segmenter as one line.

use super::preprocessor::Preprocessor;
use crate::types::DocumentFormat;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxPreprocessor;

impl DocxPreprocessor {
    fn read_document_part(bytes: &[u8]) -> Result<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("Not a DOCX (zip) archive")?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .with_context(|| format!("DOCX archive has no {DOCUMENT_PART}"))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .with_context(|| format!("{DOCUMENT_PART} is not valid UTF-8"))?;
        Ok(xml)
    }

    /// Paragraph texts of a WordprocessingML body, in document order
    pub fn paragraphs(xml: &str) -> Result<Vec<String>> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" | b"w:cr" => current.push(' '),
                    b"w:p" => paragraphs.push(String::new()),
                    _ => {}
                },
                Event::Text(t) if in_text_run => current.push_str(&t.unescape()?),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

impl Preprocessor for DocxPreprocessor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let xml = Self::read_document_part(bytes)?;
        Ok(Self::paragraphs(&xml)?.join(" "))
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &str {
        "DocxPreprocessor"
    }
}
