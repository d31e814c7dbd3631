use crate::types::*;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// One clause with its classification and risk assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClauseReport {
    /// 1-based position in the document
    pub index: usize,
    pub text: String,
    pub clause_type: ClauseType,
    pub risk: RiskAssessment,
}

impl ClauseReport {
    /// "Detected Issues" line: comma-joined reasons, or "None"
    pub fn issues_line(&self) -> String {
        if self.risk.reasons.is_empty() {
            "None".to_string()
        } else {
            self.risk.reasons.join(", ")
        }
    }
}

/// Complete analysis of one document.
///
/// Holds no timestamps or generated ids: analysing the same text twice yields
/// an identical report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractReport {
    pub source: Option<String>,
    pub format: Option<DocumentFormat>,
    /// Hex SHA-256 of the analysed text
    pub fingerprint: String,
    pub contract_type: ContractType,
    pub entities: EntityRecord,
    pub clauses: Vec<ClauseReport>,
    pub overall_risk: Severity,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => bail!("Unknown report format '{other}' (expected text, markdown or json)"),
        }
    }
}

impl ContractReport {
    /// Clause counts per severity as (low, medium, high)
    pub fn severity_counts(&self) -> (usize, usize, usize) {
        self.clauses
            .iter()
            .fold((0, 0, 0), |(low, medium, high), clause| match clause.risk.severity {
                Severity::Low => (low + 1, medium, high),
                Severity::Medium => (low, medium + 1, high),
                Severity::High => (low, medium, high + 1),
            })
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Markdown => self.to_markdown(),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn save_with_format(&self, path: &str, format: ReportFormat) -> Result<()> {
        std::fs::write(path, self.render(format)?)?;
        Ok(())
    }

    fn entities_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entities)?)
    }

    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();
        let rule = "-".repeat(60);

        writeln!(out, "Contract Type")?;
        writeln!(out, "{}", self.contract_type)?;
        writeln!(out)?;
        writeln!(out, "Named Entity Recognition")?;
        writeln!(out, "{}", self.entities_json()?)?;
        writeln!(out)?;
        writeln!(out, "Clause-by-Clause Risk Assessment")?;
        if self.clauses.is_empty() {
            writeln!(out, "(no clauses found)")?;
        }
        for clause in &self.clauses {
            writeln!(out)?;
            writeln!(out, "Clause {}", clause.index)?;
            writeln!(out, "{}", clause.text)?;
            writeln!(out, "Clause Type: {}", clause.clause_type)?;
            writeln!(out, "Risk Level: {}", clause.risk.severity)?;
            writeln!(out, "Detected Issues: {}", clause.issues_line())?;
            writeln!(out, "Suggested Renegotiation:")?;
            for suggestion in &clause.risk.suggestions {
                writeln!(out, "  - {suggestion}")?;
            }
            writeln!(out, "{rule}")?;
        }
        writeln!(out)?;
        writeln!(out, "Overall Contract Risk Score")?;
        writeln!(out, "Contract Risk Level: {}", self.overall_risk)?;
        writeln!(out)?;
        writeln!(out, "Simplified Contract Summary")?;
        writeln!(out, "{}", self.summary)?;
        Ok(out)
    }

    pub fn to_markdown(&self) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "## Contract Type\n")?;
        writeln!(out, "{}\n", self.contract_type)?;
        writeln!(out, "## Named Entity Recognition\n")?;
        writeln!(out, "```json\n{}\n```\n", self.entities_json()?)?;
        writeln!(out, "## Clause-by-Clause Risk Assessment\n")?;
        for clause in &self.clauses {
            writeln!(out, "### Clause {}\n", clause.index)?;
            writeln!(out, "{}\n", clause.text)?;
            writeln!(out, "**Clause Type:** {}\n", clause.clause_type)?;
            writeln!(out, "**Risk Level:** {}\n", clause.risk.severity)?;
            writeln!(out, "**Detected Issues:** {}\n", clause.issues_line())?;
            writeln!(out, "**Suggested Renegotiation:**\n")?;
            for suggestion in &clause.risk.suggestions {
                writeln!(out, "- {suggestion}")?;
            }
            writeln!(out, "\n---\n")?;
        }
        writeln!(out, "## Overall Contract Risk Score\n")?;
        writeln!(out, "**Contract Risk Level:** {}\n", self.overall_risk)?;
        writeln!(out, "## Simplified Contract Summary\n")?;
        writeln!(out, "{}", self.summary)?;
        Ok(out)
    }
}
