//! Random-restart configuration.

/// Configuration for random-restart hill climbing.
///
/// # Examples
///
/// ```
/// use nqueens_search::restart::RestartConfig;
///
/// let config = RestartConfig::default().with_max_restarts(25);
/// assert_eq!(config.max_restarts, 25);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Maximum number of steepest-ascent descents.
    pub max_restarts: usize,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self { max_restarts: 100 }
    }
}

impl RestartConfig {
    /// Sets the restart budget.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_restarts == 0 {
            return Err("max_restarts must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RestartConfig::default();
        assert_eq!(config.max_restarts, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = RestartConfig::default().with_max_restarts(0);
        assert!(config.validate().is_err());
    }
}
