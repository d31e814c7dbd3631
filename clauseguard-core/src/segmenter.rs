use crate::config::SegmentationConfig;
use crate::types::Clause;

/// Splits document text into clauses, one candidate per line.
pub struct ClauseSegmenter {
    min_clause_chars: usize,
}

impl Default for ClauseSegmenter {
    fn default() -> Self {
        Self::new(&SegmentationConfig::default())
    }
}

impl ClauseSegmenter {
    pub fn new(config: &SegmentationConfig) -> Self {
        Self {
            min_clause_chars: config.min_clause_chars,
        }
    }

    /// Trimmed lines strictly longer than the threshold, in document order.
    /// Text with no qualifying line yields no clauses; that is not an error.
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        let clauses: Vec<Clause> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| line.chars().count() > self.min_clause_chars)
            .enumerate()
            .map(|(i, line)| Clause {
                index: i + 1,
                text: line.to_string(),
            })
            .collect();
        tracing::debug!("segmented {} clauses", clauses.len());
        clauses
    }
}
