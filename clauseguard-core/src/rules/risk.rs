use super::engine::contains_any;
use crate::types::{RiskAssessment, Severity};

/// Suggestion reported for a clause that triggers no risk rule
pub const BALANCED_SUGGESTION: &str = "Clause appears balanced";

/// A risky phrase family with the issue it signals and the renegotiation it calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskRule {
    pub keywords: &'static [&'static str],
    pub reason: &'static str,
    pub suggestion: &'static str,
}

/// Risk rules in reporting order. Rules are independent; several may fire on one clause.
pub const RISK_RULES: [RiskRule; 4] = [
    RiskRule {
        keywords: &["without notice"],
        reason: "Unilateral termination",
        suggestion: "Add mutual notice period",
    },
    RiskRule {
        keywords: &["sole discretion"],
        reason: "One-sided discretion",
        suggestion: "Balance rights of both parties",
    },
    RiskRule {
        keywords: &["penalty"],
        reason: "Financial penalty",
        suggestion: "Cap penalty amount",
    },
    RiskRule {
        keywords: &["fully liable", "unlimited liability"],
        reason: "Unlimited liability",
        suggestion: "Introduce liability cap",
    },
];

pub struct RiskAssessor {
    rules: Vec<RiskRule>,
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskAssessor {
    pub fn new() -> Self {
        Self {
            rules: RISK_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    /// Collect every matching rule's reason and suggestion, then rate by count.
    pub fn assess(&self, clause: &str) -> RiskAssessment {
        let lowered = clause.to_lowercase();
        let (reasons, suggestions): (Vec<String>, Vec<String>) = self
            .rules
            .iter()
            .filter(|rule| contains_any(&lowered, rule.keywords))
            .map(|rule| (rule.reason.to_string(), rule.suggestion.to_string()))
            .unzip();

        if reasons.is_empty() {
            return RiskAssessment {
                severity: Severity::Low,
                reasons,
                suggestions: vec![BALANCED_SUGGESTION.to_string()],
            };
        }

        RiskAssessment {
            severity: Severity::from_reason_count(reasons.len()),
            reasons,
            suggestions,
        }
    }
}
