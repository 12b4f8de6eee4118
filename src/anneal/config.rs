//! Simulated annealing configuration.

/// Configuration for simulated annealing.
///
/// # Examples
///
/// ```
/// use nqueens_search::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.95)
///     .with_max_iterations(2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// Multiplicative per-iteration decay factor in (0, 1). Applied
    /// every iteration whether or not the move was accepted.
    pub cooling_rate: f64,

    /// Hard iteration budget.
    pub max_iterations: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.99,
            max_iterations: 1000,
        }
    }
}

impl AnnealConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the per-iteration cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}
