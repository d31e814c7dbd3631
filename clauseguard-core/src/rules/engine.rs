//! Shared rule primitives.
//!
//! Every classifier in this crate is an ordered list of keyword rules where
//! the first rule whose keywords appear in the lower-cased text decides the
//! label. Keeping the rules as data makes the precedence visible and lets each
//! table be inspected and tested on its own.

/// True if any keyword occurs in `lowered`. Callers lower-case the text once.
pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// A label guarded by a set of lower-case keywords (any one suffices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<L> {
    pub keywords: &'static [&'static str],
    pub label: L,
}

impl<L> KeywordRule<L> {
    pub const fn new(keywords: &'static [&'static str], label: L) -> Self {
        Self { keywords, label }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }
}

/// First-match-wins rule list with a fallback label
#[derive(Debug, Clone)]
pub struct OrderedRuleSet<L: Copy> {
    rules: Vec<KeywordRule<L>>,
    fallback: L,
}

impl<L: Copy> OrderedRuleSet<L> {
    pub fn new(rules: Vec<KeywordRule<L>>, fallback: L) -> Self {
        Self { rules, fallback }
    }

    /// Label of the first rule matching the lower-cased `text`, else the fallback
    pub fn first_match(&self, text: &str) -> L {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.label)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[KeywordRule<L>] {
        &self.rules
    }

    pub fn fallback(&self) -> L {
        self.fallback
    }
}
