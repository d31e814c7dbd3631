use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

// ===== DOCUMENT =====

/// Source format of an uploaded document, inferred from its file extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Infer the format from a path's extension (case-insensitive).
    /// Returns `None` for anything other than `.pdf`, `.docx` or `.txt`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of one uploaded document. Created once per analysis and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// File name the text came from, if any
    pub source: Option<String>,
    /// `None` when the file extension was not recognised
    pub format: Option<DocumentFormat>,
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>, format: Option<DocumentFormat>) -> Self {
        Self {
            source: None,
            format,
            text: text.into(),
        }
    }

    /// Plain-text document with no source file, for analysing strings directly
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, Some(DocumentFormat::Txt))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// True when there is nothing left to analyse after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Hex SHA-256 of the document text
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

// ===== LABELS =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContractType {
    #[serde(rename = "Employment Contract")]
    Employment,
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Service Agreement")]
    Service,
    #[serde(rename = "Non-Disclosure Agreement")]
    NonDisclosure,
    #[serde(rename = "Commercial Contract")]
    Commercial,
}

impl ContractType {
    pub const ALL: [ContractType; 5] = [
        Self::Employment,
        Self::Lease,
        Self::Service,
        Self::NonDisclosure,
        Self::Commercial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employment => "Employment Contract",
            Self::Lease => "Lease Agreement",
            Self::Service => "Service Agreement",
            Self::NonDisclosure => "Non-Disclosure Agreement",
            Self::Commercial => "Commercial Contract",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClauseType {
    #[serde(rename = "Termination Clause")]
    Termination,
    #[serde(rename = "Penalty Clause")]
    Penalty,
    #[serde(rename = "Liability / Indemnity Clause")]
    LiabilityIndemnity,
    #[serde(rename = "Jurisdiction Clause")]
    Jurisdiction,
    #[serde(rename = "IP / Non-Compete Clause")]
    IpNonCompete,
    #[serde(rename = "General Obligation Clause")]
    GeneralObligation,
}

impl ClauseType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Termination => "Termination Clause",
            Self::Penalty => "Penalty Clause",
            Self::LiabilityIndemnity => "Liability / Indemnity Clause",
            Self::Jurisdiction => "Jurisdiction Clause",
            Self::IpNonCompete => "IP / Non-Compete Clause",
            Self::GeneralObligation => "General Obligation Clause",
        }
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-level risk rating. Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Severity implied by a number of matched risk reasons
    pub fn from_reason_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== PIPELINE VALUES =====

/// A trimmed, line-derived fragment of the document treated as one obligation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clause {
    /// Position in the document, starting at 1
    pub index: usize,
    pub text: String,
}

/// Entities pulled from the full document text.
///
/// Field names serialize in the `Parties` / `Dates` / `Amounts` / `Jurisdiction`
/// shape that report consumers expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityRecord {
    pub parties: Vec<String>,
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub jurisdiction: String,
}

pub const JURISDICTION_NOT_SPECIFIED: &str = "Not Specified";

impl Default for EntityRecord {
    fn default() -> Self {
        Self {
            parties: Vec::new(),
            dates: Vec::new(),
            amounts: Vec::new(),
            jurisdiction: JURISDICTION_NOT_SPECIFIED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub severity: Severity,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
}
