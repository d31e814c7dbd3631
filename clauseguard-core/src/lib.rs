// ClauseGuard Core Library
//
// Contract analysis as a pure pipeline: extracted text in, structured risk
// report out. Hosting surfaces (the CLI, a web handler) call ContractAnalyzer
// and render the returned ContractReport.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod preprocessors;
pub mod processor;
pub mod report;
pub mod rules;
pub mod segmenter;
pub mod types;

// Re-export main types and functions for easy use
pub use types::*;
pub use aggregator::{contract_summary, overall_risk};
pub use classifier::{ClauseClassifier, ContractClassifier};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use preprocessors::{Preprocessor, TextExtractor};
pub use processor::{ContractAnalyzer, PipelineStages, StepProfiler};
pub use report::{ClauseReport, ContractReport, ReportFormat};
pub use segmenter::ClauseSegmenter;
