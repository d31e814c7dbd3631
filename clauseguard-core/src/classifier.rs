use crate::rules::engine::{KeywordRule, OrderedRuleSet};
use crate::types::*;

/// Contract-type rules in precedence order
pub const CONTRACT_TYPE_RULES: [KeywordRule<ContractType>; 4] = [
    KeywordRule::new(&["employment"], ContractType::Employment),
    KeywordRule::new(&["lease", "rent"], ContractType::Lease),
    KeywordRule::new(&["service", "vendor"], ContractType::Service),
    KeywordRule::new(&["confidential", "nda"], ContractType::NonDisclosure),
];

/// Clause-type rules in precedence order
pub const CLAUSE_TYPE_RULES: [KeywordRule<ClauseType>; 5] = [
    KeywordRule::new(&["terminate"], ClauseType::Termination),
    KeywordRule::new(&["penalty"], ClauseType::Penalty),
    KeywordRule::new(&["liable", "indemn"], ClauseType::LiabilityIndemnity),
    KeywordRule::new(&["jurisdiction", "governed by"], ClauseType::Jurisdiction),
    KeywordRule::new(
        &["non compete", "intellectual property"],
        ClauseType::IpNonCompete,
    ),
];

/// Maps a whole document to one of the five contract types.
pub struct ContractClassifier {
    rules: OrderedRuleSet<ContractType>,
}

impl Default for ContractClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractClassifier {
    pub fn new() -> Self {
        Self {
            rules: OrderedRuleSet::new(CONTRACT_TYPE_RULES.to_vec(), ContractType::Commercial),
        }
    }

    pub fn classify(&self, text: &str) -> ContractType {
        let contract_type = self.rules.first_match(text);
        tracing::debug!("classified contract as {contract_type}");
        contract_type
    }
}

/// Tags a single clause with its legal category.
pub struct ClauseClassifier {
    rules: OrderedRuleSet<ClauseType>,
}

impl Default for ClauseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseClassifier {
    pub fn new() -> Self {
        Self {
            rules: OrderedRuleSet::new(CLAUSE_TYPE_RULES.to_vec(), ClauseType::GeneralObligation),
        }
    }

    pub fn classify(&self, clause: &str) -> ClauseType {
        self.rules.first_match(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_employment_takes_precedence() {
        let classifier = ContractClassifier::new();
        assert_eq!(
            classifier.classify("EMPLOYMENT terms incl. monthly rent allowance"),
            ContractType::Employment
        );
    }

    #[test]
    fn test_lease_and_rent() {
        let classifier = ContractClassifier::new();
        assert_eq!(classifier.classify("This Lease is made"), ContractType::Lease);
        assert_eq!(classifier.classify("monthly rent of"), ContractType::Lease);
    }

    #[test]
    fn test_service_and_vendor() {
        let classifier = ContractClassifier::new();
        assert_eq!(classifier.classify("Master Service terms"), ContractType::Service);
        assert_eq!(classifier.classify("the Vendor shall"), ContractType::Service);
    }

    #[test]
    fn test_nda() {
        let classifier = ContractClassifier::new();
        assert_eq!(classifier.classify("Mutual NDA"), ContractType::NonDisclosure);
        assert_eq!(
            classifier.classify("Confidential information"),
            ContractType::NonDisclosure
        );
    }

    #[test]
    fn test_substring_containment_not_words() {
        // "current" contains "rent"
        let classifier = ContractClassifier::new();
        assert_eq!(classifier.classify("the current agreement"), ContractType::Lease);
    }

    #[test]
    fn test_commercial_fallback() {
        let classifier = ContractClassifier::new();
        assert_eq!(classifier.classify(""), ContractType::Commercial);
        assert_eq!(classifier.classify("Purchase order"), ContractType::Commercial);
    }

    #[test]
    fn test_clause_types_in_order() {
        let classifier = ClauseClassifier::new();
        let cases = [
            ("Either party may terminate with penalty", ClauseType::Termination),
            ("A penalty applies if the party is liable", ClauseType::Penalty),
            ("The Vendor shall indemnify the Client", ClauseType::LiabilityIndemnity),
            ("The Vendor is liable for losses", ClauseType::LiabilityIndemnity),
            ("This agreement is governed by Indian law", ClauseType::Jurisdiction),
            ("Courts of Delhi have exclusive jurisdiction", ClauseType::Jurisdiction),
            ("All intellectual property vests in the Client", ClauseType::IpNonCompete),
            ("Employee agrees to a non compete period", ClauseType::IpNonCompete),
            ("The Client shall pay invoices monthly", ClauseType::GeneralObligation),
        ];
        for (clause, expected) in cases {
            assert_eq!(classifier.classify(clause), expected, "clause: {clause}");
        }
    }

    #[test]
    fn test_hyphenated_non_compete_is_not_matched() {
        let classifier = ClauseClassifier::new();
        assert_eq!(
            classifier.classify("A non-compete obligation applies for two years"),
            ClauseType::GeneralObligation
        );
    }

    proptest! {
        #[test]
        fn classify_is_total(text in ".*") {
            let label = ContractClassifier::new().classify(&text);
            prop_assert!(ContractType::ALL.contains(&label));
        }

        #[test]
        fn lease_without_employment_is_lease(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
            let text = format!("{prefix}lease{suffix}");
            prop_assume!(!text.contains("employment"));
            prop_assert_eq!(ContractClassifier::new().classify(&text), ContractType::Lease);
        }
    }
}
