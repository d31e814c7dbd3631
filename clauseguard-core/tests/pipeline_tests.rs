//! Pipeline boundary tests.
//!
//! These tests run the analyzer end to end on the documents in
//! `test_fixtures/` and assert on the report at each boundary:
//!
//! - Boundary 1 (extraction gate): blank input stops the run
//! - Boundary 2 (report): contract type, entities, clause blocks, overall risk
//! - Renderings: stable across repeated runs

use clauseguard_core::{
    AnalysisConfig, AnalysisError, ClauseType, ContractAnalyzer, ContractType, DocumentFormat,
    ReportFormat, Severity,
};
use std::io::{Cursor, Write};
use std::path::PathBuf;

// ============================================================================
// Fixture helpers
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

fn analyzer() -> ContractAnalyzer {
    ContractAnalyzer::new(&AnalysisConfig::default()).expect("default config compiles")
}

/// Minimal .docx with one `<w:p>` per line
fn write_docx(name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let dir = std::env::temp_dir().join("clauseguard_pipeline_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

// ============================================================================
// Boundary 1: extraction gate
// ============================================================================

mod extraction_gate {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_halts_with_error() {
        let err = analyzer().analyze_file(&fixture("empty.txt")).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NoExtractableText {
                document: Some("empty.txt".to_string())
            }
        );
    }

    #[test]
    fn whitespace_file_halts_with_error() {
        let result = analyzer().analyze_file(&fixture("whitespace.txt"));
        assert!(matches!(result, Err(AnalysisError::NoExtractableText { .. })));
    }

    #[test]
    fn unknown_extension_halts_with_error() {
        let path = std::env::temp_dir().join("clauseguard_contract.odt");
        std::fs::write(&path, "This lease agreement is long enough to be a clause.").unwrap();
        let result = analyzer().analyze_file(&path);
        assert!(matches!(result, Err(AnalysisError::NoExtractableText { .. })));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn short_lines_are_not_an_error() {
        let report = analyzer().analyze_file(&fixture("short_lines.txt")).unwrap();
        assert!(report.clauses.is_empty());
        assert_eq!(report.overall_risk, Severity::Low);
    }
}

// ============================================================================
// Boundary 2: report contents
// ============================================================================

mod report_contract {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_sentence_from_readme() {
        let text = "Employment Agreement between Acme Services and John Doe, effective 12 March 2024, amount INR 50,000, governed by laws of India.";
        let report = analyzer().analyze_text(text).unwrap();

        assert_eq!(report.contract_type, ContractType::Employment);
        assert_eq!(report.entities.jurisdiction, "India");
        assert_eq!(report.entities.amounts, vec!["INR 50,000"]);
        assert_eq!(report.entities.dates, vec!["12 March 2024"]);
        assert!(report.entities.parties.iter().any(|p| p == "Acme Services"));

        // the whole sentence is one line, so one clause
        assert_eq!(report.clauses.len(), 1);
        assert_eq!(report.clauses[0].clause_type, ClauseType::Jurisdiction);
    }

    #[test]
    fn vendor_agreement_classification_and_entities() {
        let report = analyzer()
            .analyze_file(&fixture("vendor_agreement.txt"))
            .unwrap();

        assert_eq!(report.source.as_deref(), Some("vendor_agreement.txt"));
        assert_eq!(report.format, Some(DocumentFormat::Txt));
        assert_eq!(report.contract_type, ContractType::Service);
        assert_eq!(report.entities.parties, vec!["Zenith Solutions", "Orbit Private"]);
        assert_eq!(report.entities.dates, vec!["1 April 2024", "15 April 2024"]);
        assert_eq!(report.entities.amounts, vec!["INR 25,000", "INR 1,50,000"]);
        assert_eq!(report.entities.jurisdiction, "India");
    }

    #[test]
    fn vendor_agreement_clause_blocks() {
        let report = analyzer()
            .analyze_file(&fixture("vendor_agreement.txt"))
            .unwrap();

        let summary: Vec<(usize, ClauseType, Severity)> = report
            .clauses
            .iter()
            .map(|c| (c.index, c.clause_type, c.risk.severity))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, ClauseType::GeneralObligation, Severity::Low),
                (2, ClauseType::GeneralObligation, Severity::Low),
                (3, ClauseType::Termination, Severity::High),
                (4, ClauseType::Penalty, Severity::Medium),
                (5, ClauseType::LiabilityIndemnity, Severity::Medium),
                (6, ClauseType::Jurisdiction, Severity::Low),
                (7, ClauseType::IpNonCompete, Severity::Low),
            ]
        );

        assert_eq!(
            report.clauses[2].risk.reasons,
            vec!["Unilateral termination", "One-sided discretion"]
        );
        assert_eq!(report.clauses[4].issues_line(), "Unlimited liability");
        assert_eq!(report.clauses[0].issues_line(), "None");
        assert_eq!(report.severity_counts(), (4, 2, 1));
        assert_eq!(report.overall_risk, Severity::High);
        assert!(report.summary.contains("**Service Agreement**"));
        assert!(report.summary.contains("assessed as **High**"));
    }

    #[test]
    fn docx_paragraphs_are_joined_into_one_line() {
        let path = write_docx(
            "lease.docx",
            &[
                "The Tenant shall pay monthly rent of INR 20,000 before the 5th.",
                "A penalty of one month's rent applies to late payment.",
                "The Landlord may end the tenancy without notice.",
            ],
        );
        let report = analyzer().analyze_file(&path).unwrap();

        assert_eq!(report.format, Some(DocumentFormat::Docx));
        assert_eq!(report.contract_type, ContractType::Lease);
        assert_eq!(report.clauses.len(), 1);
        assert!(report.clauses[0].text.starts_with("The Tenant shall pay monthly rent"));
        assert!(report.clauses[0].text.ends_with("payment. The Landlord may end the tenancy without notice."));
        assert_eq!(report.clauses[0].clause_type, ClauseType::Penalty);
        assert_eq!(
            report.clauses[0].risk.reasons,
            vec!["Unilateral termination", "Financial penalty"]
        );
        assert_eq!(report.overall_risk, Severity::High);
        assert_eq!(report.entities.amounts, vec!["INR 20,000"]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn pdf_text_layer_is_analysed() {
        let report = analyzer()
            .analyze_file(&fixture("lease_text_layer.pdf"))
            .unwrap();

        assert_eq!(report.format, Some(DocumentFormat::Pdf));
        assert_eq!(report.contract_type, ContractType::Lease);
        assert_eq!(report.entities.amounts, vec!["INR 10,000"]);
        assert!(report.entities.parties.iter().any(|p| p == "Cedar Ltd"));
        assert_eq!(report.overall_risk, Severity::High);
    }

    #[test]
    fn empty_party_suffixes_are_rejected() {
        let config = AnalysisConfig::from_yaml("entities:\n  party_suffixes: []\n").unwrap();
        let err = ContractAnalyzer::new(&config).err().unwrap();
        assert!(format!("{err:#}").contains("party_suffixes"));
    }

    #[test]
    fn capture_stages_exposes_each_boundary() {
        let stages = analyzer()
            .capture_stages(&fixture("vendor_agreement.txt"))
            .unwrap();
        assert!(stages.document.text.starts_with("VENDOR SERVICES AGREEMENT"));
        assert_eq!(stages.clauses.len(), stages.report.clauses.len());
        for (clause, block) in stages.clauses.iter().zip(&stages.report.clauses) {
            assert_eq!(clause.index, block.index);
            assert_eq!(clause.text, block.text);
        }
    }

    #[test]
    fn configured_threshold_changes_segmentation() {
        let config = AnalysisConfig::from_yaml("segmentation:\n  min_clause_chars: 5\n").unwrap();
        let report = ContractAnalyzer::new(&config)
            .unwrap()
            .analyze_file(&fixture("short_lines.txt"))
            .unwrap();
        let texts: Vec<&str> = report.clauses.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Short title", "A few words", "Signed"]);
    }

    #[test]
    fn shipped_strict_config_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../configs/strict.yaml");
        let config = AnalysisConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.segmentation.min_clause_chars, 25);
        assert!(config.entities.party_suffixes.iter().any(|s| s == "LLP"));

        let report = ContractAnalyzer::new(&config)
            .unwrap()
            .analyze_text("Agreement between Lotus Technologies and Birch LLP for consulting work.")
            .unwrap();
        assert_eq!(report.entities.parties, vec!["Lotus Technologies", "Birch LLP"]);
    }
}

// ============================================================================
// Determinism
// ============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repeated_runs_render_identically() {
        let path = fixture("vendor_agreement.txt");
        for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Json] {
            let first = analyzer().analyze_file(&path).unwrap().render(format).unwrap();
            let second = analyzer().analyze_file(&path).unwrap().render(format).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn one_analyzer_many_documents() {
        let analyzer = analyzer();
        let before = analyzer.analyze_file(&fixture("vendor_agreement.txt")).unwrap();
        analyzer.analyze_file(&fixture("short_lines.txt")).unwrap();
        let after = analyzer.analyze_file(&fixture("vendor_agreement.txt")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn fingerprint_tracks_text() {
        let a = analyzer().analyze_text("Lease text that is certainly longer than forty characters.").unwrap();
        let b = analyzer().analyze_text("Lease text that is certainly longer than forty characters!").unwrap();
        assert_eq!(a.fingerprint.len(), 64);
        assert_ne!(a.fingerprint, b.fingerprint);
    }
}
