use thiserror::Error;

/// Failures the analysis pipeline reports to its caller.
///
/// Every rule stage is total over arbitrary text, so the only way an
/// analysis can stop is at the extraction gate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The extractor produced empty or whitespace-only text
    #[error("Unable to extract text from document{}", document_suffix(.document))]
    NoExtractableText { document: Option<String> },
}

fn document_suffix(document: &Option<String>) -> String {
    document
        .as_ref()
        .map(|s| format!(" '{s}'"))
        .unwrap_or_default()
}
