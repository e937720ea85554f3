//! Local search configuration and acceptance rules.

use crate::error::{LabsError, Result};
use crate::scorer::ScoreMode;

/// Rule deciding whether a round's best neighbor replaces the current
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Accept when `candidate <= current`. Equal-energy candidates move the
    /// search sideways.
    #[default]
    AllowTies,

    /// Accept only when `candidate < current`.
    StrictImprovement,
}

impl Acceptance {
    /// Whether `candidate` replaces a current state of energy `current`.
    pub fn accepts(self, candidate: u64, current: u64) -> bool {
        match self {
            Acceptance::AllowTies => candidate <= current,
            Acceptance::StrictImprovement => candidate < current,
        }
    }
}

/// Configuration for the batched single-flip local search.
///
/// # Examples
///
/// ```
/// use labs_search::search::{Acceptance, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_length(80)
///     .with_batch_size(4096)
///     .with_steps(30)
///     .with_seed(0)
///     .with_acceptance(Acceptance::AllowTies);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Sequence length `N` for a randomly drawn start. Ignored when the
    /// caller supplies the initial sequence.
    pub length: usize,

    /// Neighbors drawn per round `B`.
    pub batch_size: usize,

    /// Exact number of rounds to run.
    pub steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    pub acceptance: Acceptance,

    /// Whether to score batches on the rayon pool.
    pub parallel: bool,

    /// Batch reduction strategy.
    pub scoring: ScoreMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            length: 32,
            batch_size: 1024,
            steps: 50,
            seed: None,
            acceptance: Acceptance::default(),
            parallel: true,
            scoring: ScoreMode::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_length(mut self, n: usize) -> Self {
        self.length = n;
        self
    }

    pub fn with_batch_size(mut self, b: usize) -> Self {
        self.batch_size = b;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoreMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(LabsError::config("length must be at least 1, got 0"));
        }
        self.validate_rounds()
    }

    /// Validates only the settings a run from a caller-supplied start uses.
    pub fn validate_rounds(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(LabsError::config("batch_size must be at least 1, got 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.length, 32);
        assert_eq!(config.batch_size, 1024);
        assert_eq!(config.steps, 50);
        assert_eq!(config.acceptance, Acceptance::AllowTies);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::default().with_steps(0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_length() {
        let err = SearchConfig::default().with_length(0).validate().unwrap_err();
        assert!(matches!(err, LabsError::Configuration(_)));
    }

    #[test]
    fn test_validate_rounds_ignores_length() {
        let config = SearchConfig::default().with_length(0);
        assert!(config.validate().is_err());
        assert!(config.validate_rounds().is_ok());
        assert!(config.with_batch_size(0).validate_rounds().is_err());
    }

    #[test]
    fn test_validate_zero_batch() {
        let err = SearchConfig::default()
            .with_batch_size(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("batch_size"), "{err}");
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default()
            .with_length(100)
            .with_batch_size(16)
            .with_steps(7)
            .with_seed(3)
            .with_acceptance(Acceptance::StrictImprovement)
            .with_parallel(false)
            .with_scoring(ScoreMode::Streaming);
        assert_eq!(config.length, 100);
        assert_eq!(config.batch_size, 16);
        assert_eq!(config.steps, 7);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.acceptance, Acceptance::StrictImprovement);
        assert!(!config.parallel);
        assert_eq!(config.scoring, ScoreMode::Streaming);
    }

    #[test]
    fn test_acceptance_rules() {
        assert!(Acceptance::AllowTies.accepts(4, 4));
        assert!(Acceptance::AllowTies.accepts(3, 4));
        assert!(!Acceptance::AllowTies.accepts(5, 4));
        assert!(!Acceptance::StrictImprovement.accepts(4, 4));
        assert!(Acceptance::StrictImprovement.accepts(3, 4));
    }
}
