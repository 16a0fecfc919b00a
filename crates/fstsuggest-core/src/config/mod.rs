use crate::error::{Result, SuggestError};
use crate::models::{LookupOptions, RankingMode};

mod env;
mod lookup;

use self::env::{parse_enabled_default_true, read_env_usize};

const ENV_RANKING: &str = "FSTSUGGEST_RANKING";
const ENV_EXACT_FIRST: &str = "FSTSUGGEST_EXACT_FIRST";
const ENV_MAX_KEY_BYTES: &str = "FSTSUGGEST_MAX_KEY_BYTES";
const ENV_MAX_DEPTH: &str = "FSTSUGGEST_MAX_DEPTH";

const DEFAULT_MAX_KEY_BYTES: usize = 1024;
const DEFAULT_MAX_DEPTH: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleterConfig {
    pub ranking: RankingMode,
    pub exact_first: bool,
    /// Longest lookup key accepted, in bytes.
    pub max_key_bytes: usize,
    /// Longest completion the collector will descend to, in bytes.
    pub max_depth: usize,
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            ranking: RankingMode::WeightFirst,
            exact_first: true,
            max_key_bytes: DEFAULT_MAX_KEY_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompleterConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            ranking: lookup::parse_ranking(std::env::var(ENV_RANKING).ok().as_deref())?,
            exact_first: parse_enabled_default_true(std::env::var(ENV_EXACT_FIRST).ok().as_deref()),
            max_key_bytes: read_env_usize(ENV_MAX_KEY_BYTES, defaults.max_key_bytes, 1),
            max_depth: read_env_usize(ENV_MAX_DEPTH, defaults.max_depth, 1),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_key_bytes == 0 {
            return Err(SuggestError::Validation(
                "max_key_bytes must be at least 1".to_string(),
            ));
        }
        if self.max_depth < self.max_key_bytes {
            return Err(SuggestError::Validation(format!(
                "max_depth ({}) must not be smaller than max_key_bytes ({})",
                self.max_depth, self.max_key_bytes
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            ranking: self.ranking,
            exact_first: self.exact_first,
        }
    }
}
