use crate::error::ConfigError;

/// The search depth used when none is configured
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// The chance of playing a found blocking move when none is configured
pub const DEFAULT_BLOCK_PROBABILITY: f64 = 0.8;

/// Tuning knobs of the computer opponent
///
/// `block_probability` is a difficulty setting: even when the opponent threatens
/// to win on its next move, the AI only blocks with this probability and
/// otherwise plays as if there was no threat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    pub search_depth: u32,
    pub block_probability: f64,
}

impl AiConfig {
    pub fn new(search_depth: u32, block_probability: f64) -> Result<Self, ConfigError> {
        let config = Self {
            search_depth,
            block_probability,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_search_depth(mut self, search_depth: u32) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn with_block_probability(mut self, block_probability: f64) -> Self {
        self.block_probability = block_probability;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.block_probability) {
            return Err(ConfigError::InvalidBlockProbability(self.block_probability));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            block_probability: DEFAULT_BLOCK_PROBABILITY,
        }
    }
}
