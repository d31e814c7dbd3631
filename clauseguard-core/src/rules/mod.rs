// Rule tables and evaluators used by the analysis pipeline:
// - engine.rs: ordered keyword rules shared by the classifiers
// - risk.rs: per-clause risk rules and severity derivation
// - entities.rs: one extraction rule per entity kind

pub mod engine;
pub mod entities;
pub mod risk;

pub use engine::{KeywordRule, OrderedRuleSet};
pub use entities::{EntityExtractor, EntityRule};
pub use risk::{RiskAssessor, RiskRule};
