use crate::engine::aggregate::Ranking;
use crate::engine::errors::AnalyticsError;
use crate::shared::config::{CONFIG, SelectionConfig};

/// Number of ranked values to display, within `1..=max_top_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopN(usize);

impl TopN {
    pub fn new(n: usize) -> Result<Self, AnalyticsError> {
        Self::new_in(n, &CONFIG.selection)
    }

    pub fn new_in(n: usize, config: &SelectionConfig) -> Result<Self, AnalyticsError> {
        if n == 0 || n > config.max_top_n {
            return Err(AnalyticsError::InvalidTopN(n));
        }
        Ok(Self(n))
    }

    /// Saturates `n` into the slider range instead of rejecting it.
    pub fn clamp_in(n: usize, config: &SelectionConfig) -> Self {
        Self(n.clamp(1, config.max_top_n.max(1)))
    }

    pub fn default_in(config: &SelectionConfig) -> Self {
        Self::clamp_in(config.default_top_n, config)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn ranking(&self) -> Ranking {
        Ranking::Head(Some(self.0))
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::default_in(&CONFIG.selection)
    }
}

impl From<TopN> for Ranking {
    fn from(top: TopN) -> Self {
        top.ranking()
    }
}
