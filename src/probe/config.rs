//! Stochastic probing configuration.

/// Configuration for stochastic probing.
///
/// # Examples
///
/// ```
/// use nqueens_search::probe::ProbeConfig;
///
/// let config = ProbeConfig::default().with_max_stagnant(250);
/// assert_eq!(config.max_stagnant, 250);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeConfig {
    /// Consecutive non-improving probes tolerated before giving up.
    pub max_stagnant: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { max_stagnant: 100 }
    }
}

impl ProbeConfig {
    /// Sets the stagnation cap.
    pub fn with_max_stagnant(mut self, n: usize) -> Self {
        self.max_stagnant = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stagnant == 0 {
            return Err("max_stagnant must be positive".into());
        }
        Ok(())
    }
}
