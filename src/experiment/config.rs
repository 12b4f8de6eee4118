//! Experiment configuration.

/// Configuration for a batch experiment.
///
/// # Examples
///
/// ```
/// use nqueens_search::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_board_sizes(vec![4, 8, 12])
///     .with_runs(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Board sizes to test.
    pub board_sizes: Vec<usize>,

    /// Trials per (strategy, size) pair.
    pub runs: usize,

    /// Base seed for per-trial RNGs. `None` draws one at random.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            board_sizes: vec![4, 8],
            runs: 100,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the board sizes.
    pub fn with_board_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.board_sizes = sizes;
        self
    }

    /// Sets the trial count per case.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_sizes.is_empty() {
            return Err("board_sizes must not be empty".into());
        }
        if let Some(&n) = self.board_sizes.iter().find(|&&n| n == 0) {
            return Err(format!("board size must be at least 1, got {n}"));
        }
        if self.runs == 0 {
            return Err("runs must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.board_sizes, vec![4, 8]);
        assert_eq!(config.runs, 100);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_sizes() {
        let config = ExperimentConfig::default().with_board_sizes(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_size() {
        let config = ExperimentConfig::default().with_board_sizes(vec![4, 0]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_runs() {
        let config = ExperimentConfig::default().with_runs(0);
        assert!(config.validate().is_err());
    }
}
