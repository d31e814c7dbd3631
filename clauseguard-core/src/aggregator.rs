use crate::types::{ContractType, EntityRecord, Severity};

/// Overall contract risk from the already-computed clause severities:
/// High if any clause is High, else Medium if any is Medium, else Low.
/// No clauses means Low.
pub fn overall_risk(severities: &[Severity]) -> Severity {
    if severities.contains(&Severity::High) {
        Severity::High
    } else if severities.contains(&Severity::Medium) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Plain-language summary paragraph for the report.
///
/// The entity record is accepted so the summary can reference it, but the
/// current template only names the kinds of entities extracted.
pub fn contract_summary(
    contract_type: ContractType,
    _entities: &EntityRecord,
    overall: Severity,
) -> String {
    format!(
        "This document is identified as a **{contract_type}**.\n\
         \n\
         The system extracted key legal entities such as **parties, dates, monetary amounts, and jurisdiction** using rule-based NLP.\n\
         \n\
         The **overall contract risk level** is assessed as **{overall}**.\n\
         \n\
         High-risk or medium-risk clauses may expose SMEs to legal or financial disadvantage and should be renegotiated before execution."
    )
}
