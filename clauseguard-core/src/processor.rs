use crate::aggregator::{contract_summary, overall_risk};
use crate::classifier::{ClauseClassifier, ContractClassifier};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::preprocessors::TextExtractor;
use crate::report::{ClauseReport, ContractReport};
use crate::rules::{EntityExtractor, RiskAssessor};
use crate::segmenter::ClauseSegmenter;
use crate::types::*;
use anyhow::Result;
use std::path::Path;
use std::time::{Duration, Instant};

/// Captured intermediate outputs from each pipeline stage
/// Lets tests and `--dump-stages` inspect each boundary
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStages {
    pub document: Document,
    pub clauses: Vec<Clause>,
    pub report: ContractReport,
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        tracing::debug!(step = step_name, elapsed_us = elapsed.as_micros() as u64, "pipeline step finished");

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    /// Timing table for the recorded steps; `None` when profiling is off or nothing ran
    pub fn summary(&self) -> Option<String> {
        if !self.enabled || self.timings.is_empty() {
            return None;
        }

        let mut out = String::from("\n📊 Performance Summary:\n");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            out.push_str(&format!(
                "   {:.<35} {}µs ({:.1}%)\n",
                step,
                duration.as_micros(),
                percentage
            ));
        }
        out.push_str(&format!("   {:.<35} {}µs\n", "Total", total.as_micros()));
        Some(out)
    }

    pub fn print_summary(&self) {
        if let Some(summary) = self.summary() {
            print!("{summary}");
        }
    }

    /// Same table on stderr, for when stdout carries the report
    pub fn eprint_summary(&self) {
        if let Some(summary) = self.summary() {
            eprint!("{summary}");
        }
    }
}

/// Runs the full analysis: extraction gate, classification, entities,
/// segmentation, per-clause typing and risk, aggregation.
///
/// Holds only compiled rules, so one analyzer can be reused for any number of
/// documents without runs influencing each other.
pub struct ContractAnalyzer {
    extractor: TextExtractor,
    contract_classifier: ContractClassifier,
    clause_classifier: ClauseClassifier,
    segmenter: ClauseSegmenter,
    entity_extractor: EntityExtractor,
    risk_assessor: RiskAssessor,
}

impl ContractAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        Self::new_with_extractor(config, TextExtractor::new())
    }

    /// Create ContractAnalyzer with a custom text extractor
    pub fn new_with_extractor(config: &AnalysisConfig, extractor: TextExtractor) -> Result<Self> {
        Ok(Self {
            extractor,
            contract_classifier: ContractClassifier::new(),
            clause_classifier: ClauseClassifier::new(),
            segmenter: ClauseSegmenter::new(&config.segmentation),
            entity_extractor: EntityExtractor::new(&config.entities)?,
            risk_assessor: RiskAssessor::new(),
        })
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    /// Analyse a file: extract its text, then run the pipeline
    pub fn analyze_file(&self, input: &Path) -> Result<ContractReport, AnalysisError> {
        let document = self.extractor.extract_file(input);
        self.analyze_document(&document)
    }

    /// Analyse raw text as a plain-text document
    pub fn analyze_text(&self, text: &str) -> Result<ContractReport, AnalysisError> {
        self.analyze_document(&Document::from_text(text))
    }

    pub fn analyze_document(&self, document: &Document) -> Result<ContractReport, AnalysisError> {
        self.analyze_with_profiler(document, &mut StepProfiler::new(false))
            .map(|(_, report)| report)
    }

    /// Run the pipeline with per-stage timing
    pub fn analyze_with_profiler(
        &self,
        document: &Document,
        profiler: &mut StepProfiler,
    ) -> Result<(Vec<Clause>, ContractReport), AnalysisError> {
        // Gate: nothing downstream runs without text
        if document.is_blank() {
            tracing::warn!("no extractable text in {:?}", document.source);
            return Err(AnalysisError::NoExtractableText {
                document: document.source.clone(),
            });
        }

        let text = document.text.as_str();

        let contract_type =
            profiler.time_step("1. Contract Classification", || self.contract_classifier.classify(text));
        let entities = profiler.time_step("2. Entity Extraction", || self.entity_extractor.extract(text));
        let clauses = profiler.time_step("3. Clause Segmentation", || self.segmenter.segment(text));

        let clause_reports = profiler.time_step("4. Clause Assessment", || {
            clauses
                .iter()
                .map(|clause| self.assess_clause(clause))
                .collect::<Vec<_>>()
        });

        let (overall, summary) = profiler.time_step("5. Aggregation", || {
            let severities: Vec<Severity> =
                clause_reports.iter().map(|c| c.risk.severity).collect();
            let overall = overall_risk(&severities);
            (overall, contract_summary(contract_type, &entities, overall))
        });

        tracing::info!(
            "analysed {} clauses: {contract_type}, overall risk {overall}",
            clause_reports.len()
        );

        let report = ContractReport {
            source: document.source.clone(),
            format: document.format,
            fingerprint: document.fingerprint(),
            contract_type,
            entities,
            clauses: clause_reports,
            overall_risk: overall,
            summary,
        };
        Ok((clauses, report))
    }

    fn assess_clause(&self, clause: &Clause) -> ClauseReport {
        ClauseReport {
            index: clause.index,
            text: clause.text.clone(),
            clause_type: self.clause_classifier.classify(&clause.text),
            risk: self.risk_assessor.assess(&clause.text),
        }
    }

    /// Process a file and capture all intermediate stage outputs
    /// Used for pipeline diagnostics and testing stage boundaries
    pub fn capture_stages(&self, input: &Path) -> Result<PipelineStages, AnalysisError> {
        let document = self.extractor.extract_file(input);
        let (clauses, report) =
            self.analyze_with_profiler(&document, &mut StepProfiler::new(false))?;
        Ok(PipelineStages {
            document,
            clauses,
            report,
        })
    }
}
