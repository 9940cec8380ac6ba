use conduit_generator::GeneratorOptions;

/// Settings for building a [`Game`](crate::Game).
///
/// # Examples
///
/// ```
/// use conduit_game::GameConfig;
///
/// let config = GameConfig::default()
///     .rows(12)
///     .cols(8)
///     .block_probability(0.1)
///     .conveyor_length(3);
///
/// assert_eq!(config.generator.rows, 12);
/// assert_eq!(config.conveyor_length, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Grid generation settings.
    pub generator: GeneratorOptions,
    /// Number of upcoming tiles on the conveyor.
    pub conveyor_length: usize,
}

impl GameConfig {
    /// Default number of upcoming tiles.
    pub const DEFAULT_CONVEYOR_LENGTH: usize = 5;

    /// Sets the grid height.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.generator = self.generator.rows(rows);
        self
    }

    /// Sets the grid width.
    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.generator = self.generator.cols(cols);
        self
    }

    /// Sets the per-cell blocking probability.
    #[must_use]
    pub fn block_probability(mut self, probability: f64) -> Self {
        self.generator = self.generator.block_probability(probability);
        self
    }

    /// Sets the starting-point draw budget.
    #[must_use]
    pub fn max_start_attempts(mut self, attempts: usize) -> Self {
        self.generator = self.generator.max_start_attempts(attempts);
        self
    }

    /// Sets the number of upcoming tiles.
    #[must_use]
    pub fn conveyor_length(mut self, len: usize) -> Self {
        self.conveyor_length = len;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            conveyor_length: Self::DEFAULT_CONVEYOR_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = GameConfig::default();
        assert_eq!(config.generator.rows, 9);
        assert_eq!(config.generator.cols, 7);
        let probability = config.generator.block_probability;
        assert!((probability - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.generator.max_start_attempts, None);
        assert_eq!(config.conveyor_length, 5);
    }

    #[test]
    fn test_setters_reach_generator() {
        let config = GameConfig::default().max_start_attempts(10).cols(3);
        assert_eq!(config.generator.max_start_attempts, Some(10));
        assert_eq!(config.generator.cols, 3);
        assert_eq!(config.generator.rows, 9);
    }
}
