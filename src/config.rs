//! Configuration types.
//!
//! A filter is described as an ordered list of `RuleConfig` entries, e.g.
//!
//! ```json
//! {"rules": [
//!   {"type": "spam", "keywords": ["viagra", "win money"]},
//!   {"type": "negative_tone"},
//!   {"type": "too_long", "max_length": 280},
//!   {"type": "keyword_frequency", "keywords": ["buy"], "max_count": 3}
//! ]}
//! ```

use std::env::VarError;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Error, Result};
use crate::pipeline::processor::Pipeline;
use crate::pipeline::rules::{KeywordFrequencyRule, NegativeToneRule, Rule, SpamRule, TooLongRule};

/// Environment variable holding a JSON `FilterConfig`.
pub const RULES_ENV_VAR: &str = "TEXT_FILTER_RULES";

/// Configuration for a single rule.
///
/// Thresholds are signed so that negative values can be reported instead of
/// failing deep inside deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    Spam {
        keywords: Vec<String>,
    },
    NegativeTone,
    TooLong {
        max_length: i64,
    },
    KeywordFrequency {
        keywords: Vec<String>,
        max_count: i64,
    },
}

impl RuleConfig {
    /// Validate and construct the rule.
    pub fn build(&self) -> std::result::Result<Box<dyn Rule>, ConfigError> {
        let rule: Box<dyn Rule> = match self {
            Self::Spam { keywords } => Box::new(SpamRule::new(keywords.iter().cloned())),
            Self::NegativeTone => Box::new(NegativeToneRule::new()),
            Self::TooLong { max_length } => Box::new(TooLongRule::new(non_negative(
                "too_long.max_length",
                *max_length,
            )?)),
            Self::KeywordFrequency {
                keywords,
                max_count,
            } => Box::new(KeywordFrequencyRule::new(
                keywords.iter().cloned(),
                non_negative("keyword_frequency.max_count", *max_count)?,
            )),
        };
        Ok(rule)
    }
}

fn non_negative(key: &str, value: i64) -> std::result::Result<usize, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidConfiguration {
        key: key.to_string(),
        message,
    };
    if value < 0 {
        return Err(invalid(format!(
            "must be a non-negative integer, got {}",
            value
        )));
    }
    usize::try_from(value)
        .map_err(|_| invalid(format!("{} does not fit in usize on this target", value)))
}

/// Filter configuration: the rules of a pipeline, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            rules: vec![RuleConfig::KeywordFrequency {
                keywords: vec!["джава".to_string()],
                max_count: 3,
            }],
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.into()))
    }

    /// Load from `TEXT_FILTER_RULES`, or fall back to the default when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(RULES_ENV_VAR))
    }

    fn from_var(value: std::result::Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(json) => {
                let config = Self::from_json(&json)?;
                debug!(
                    rules = config.rules.len(),
                    "Loaded filter configuration from {}", RULES_ENV_VAR
                );
                Ok(config)
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::ParseError(format!(
                "{} is not valid unicode",
                RULES_ENV_VAR
            ))
            .into()),
        }
    }

    /// Validate every rule and assemble the pipeline.
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let rules = self
            .rules
            .iter()
            .map(RuleConfig::build)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Pipeline::new(rules)?)
    }
}
