//! Named-entity extraction.
//!
//! Each entity kind has its own [`EntityRule`]; the [`EntityExtractor`] only
//! folds the rules over the text into an [`EntityRecord`]. Matches are purely
//! syntactic: a "date" is never checked against the calendar and a "party" is
//! any capitalised word followed by a company suffix.

use crate::config::EntityConfig;
use crate::types::EntityRecord;
use anyhow::{bail, Context, Result};
use regex::Regex;

pub const DATE_PATTERN: &str = r"\b\d{1,2}\s\w+\s\d{4}\b";
/// Digit groups are comma-separated; a comma that ends the sentence is not part of the amount.
pub const AMOUNT_PATTERN: &str = r"INR\s?\d+(?:,\d+)*";

/// One extraction rule, writing its findings into its own field of the record
pub trait EntityRule {
    fn apply(&self, text: &str, record: &mut EntityRecord);

    /// Rule name for logging
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Parties,
    Dates,
    Amounts,
}

impl ListField {
    fn slot<'r>(&self, record: &'r mut EntityRecord) -> &'r mut Vec<String> {
        match self {
            ListField::Parties => &mut record.parties,
            ListField::Dates => &mut record.dates,
            ListField::Amounts => &mut record.amounts,
        }
    }
}

/// Appends every regex match, in order of appearance and without deduplication
pub struct RegexListRule {
    name: String,
    pattern: Regex,
    field: ListField,
}

impl RegexListRule {
    pub fn new(name: &str, pattern: &str, field: ListField) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid pattern for entity rule {name}: {pattern}"))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            field,
        })
    }

    /// Capitalised word followed by one of `suffixes`, e.g. "Acme Services"
    pub fn parties(suffixes: &[String]) -> Result<Self> {
        // An empty alternation would match every capitalised word
        if suffixes.iter().all(|s| s.trim().is_empty()) {
            bail!("entities.party_suffixes must list at least one non-empty suffix");
        }
        let alternation = suffixes
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| regex::escape(s.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\b[A-Z][a-zA-Z]+\s(?:{alternation})\b");
        Self::new("Parties", &pattern, ListField::Parties)
    }

    /// Day, month word and year, e.g. "12 March 2024"
    pub fn dates() -> Result<Self> {
        Self::new("Dates", DATE_PATTERN, ListField::Dates)
    }

    /// Rupee amounts, e.g. "INR 50,000"
    pub fn amounts() -> Result<Self> {
        Self::new("Amounts", AMOUNT_PATTERN, ListField::Amounts)
    }
}

impl EntityRule for RegexListRule {
    fn apply(&self, text: &str, record: &mut EntityRecord) {
        let slot = self.field.slot(record);
        slot.extend(self.pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Sets the jurisdiction label when its keyword appears anywhere (case-insensitive)
pub struct JurisdictionRule {
    keyword: String,
    label: String,
}

impl JurisdictionRule {
    pub fn new(keyword: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            label: label.to_string(),
        }
    }
}

impl EntityRule for JurisdictionRule {
    fn apply(&self, text: &str, record: &mut EntityRecord) {
        if text.to_lowercase().contains(&self.keyword) {
            record.jurisdiction = self.label.clone();
        }
    }

    fn name(&self) -> &str {
        "Jurisdiction"
    }
}

pub struct EntityExtractor {
    rules: Vec<Box<dyn EntityRule + Send + Sync>>,
}

impl EntityExtractor {
    pub fn new(config: &EntityConfig) -> Result<Self> {
        let rules: Vec<Box<dyn EntityRule + Send + Sync>> = vec![
            Box::new(RegexListRule::parties(&config.party_suffixes)?),
            Box::new(RegexListRule::dates()?),
            Box::new(RegexListRule::amounts()?),
            Box::new(JurisdictionRule::new(
                &config.jurisdiction.keyword,
                &config.jurisdiction.label,
            )),
        ];
        Ok(Self { rules })
    }

    /// Extractor with an explicit rule list, for callers adding their own rules
    pub fn with_rules(rules: Vec<Box<dyn EntityRule + Send + Sync>>) -> Self {
        Self { rules }
    }

    pub fn extract(&self, text: &str) -> EntityRecord {
        let mut record = EntityRecord::default();
        for rule in &self.rules {
            rule.apply(text, &mut record);
        }
        tracing::debug!(
            parties = record.parties.len(),
            dates = record.dates.len(),
            amounts = record.amounts.len(),
            jurisdiction = %record.jurisdiction,
            "extracted entities"
        );
        record
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}
