// src/simulation/results.rs
use crate::core::{ProcessError, Word};
use std::collections::HashMap;
use std::fmt;

/// Empirical distribution of emitted words, accumulated over trials.
///
/// Invariant: the sum of all counts equals the number of trials recorded
/// into it. The distribution is owned by the accumulating run and read-only
/// once reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    /// Maps each observed word to its occurrence count.
    counts: HashMap<Word, u64>,
}

impl Distribution {
    /// Creates a new, empty distribution. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Tallies one observed word. (Internal visibility)
    pub(crate) fn record(&mut self, word: Word) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    /// Occurrence count for a specific word; zero if never observed.
    pub fn count(&self, word: &Word) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns `true` if no trials have been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns a reference to the map containing all recorded counts.
    pub fn all_counts(&self) -> &HashMap<Word, u64> {
        &self.counts
    }

    /// Normalizes counts into probabilities, reported in ascending
    /// lexicographic (equivalently ascending binary-value) word order.
    ///
    /// # Returns
    /// * `Ok(Vec<(Word, f64)>)` with probabilities summing to 1.0 within
    ///   floating-point tolerance.
    /// * `Err(ProcessError::EmptyDistribution)` if no trials were recorded,
    ///   since dividing by a zero total is undefined.
    pub fn normalize(&self) -> Result<Vec<(Word, f64)>, ProcessError> {
        let total = self.total();
        if total == 0 {
            return Err(ProcessError::EmptyDistribution {
                message: "Cannot normalize a distribution with zero recorded trials".to_string(),
            });
        }
        let mut entries: Vec<(Word, f64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count as f64 / total as f64))
            .collect();
        // Sort for the conventional ascending-binary reporting order.
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(entries)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word Distribution ({} trials):", self.total())?;
        if self.counts.is_empty() {
            writeln!(f, "  No trials recorded.")?;
        } else {
            // Sort by word for consistent and readable output
            let mut sorted_counts: Vec<_> = self.counts.iter().collect();
            sorted_counts.sort_by_key(|(word, _)| (*word).clone());
            for (word, count) in sorted_counts {
                writeln!(f, "  {}: {}", word, count)?;
            }
        }
        Ok(())
    }
}
