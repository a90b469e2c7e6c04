use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-class token occurrence counts.
///
/// Absent tokens have an implicit count of zero; every stored count is at
/// least one. One instance exists per sentiment class and is treated as
/// read-only once training has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrequencyModel {
    counts: HashMap<String, u64>,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `token`.
    pub fn increment(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Observed occurrences of `token`, zero if never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Total number of token occurrences across the whole class.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_token_counts_as_zero() {
        let model = FrequencyModel::new();
        assert_eq!(model.count("unseen"), 0);
        assert!(!model.contains("unseen"));
        assert!(model.is_empty());
    }

    #[test]
    fn increment_accumulates() {
        let mut model = FrequencyModel::new();
        model.increment("great");
        model.increment("great");
        model.increment("dull");

        assert_eq!(model.count("great"), 2);
        assert_eq!(model.count("dull"), 1);
        assert_eq!(model.len(), 2);
        assert_eq!(model.total(), 3);
    }

    #[test]
    fn tokens_with_quotes_and_hyphens_are_plain_keys() {
        let mut model = FrequencyModel::new();
        model.increment("\"so-called\"");
        model.increment("b_movie");

        assert!(model.contains("\"so-called\""));
        assert!(model.contains("b_movie"));
    }
}
