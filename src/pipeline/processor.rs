//! Rule pipeline. Runs rules in order and stops at the first flag.
//!
//! Flow:
//! 1. Rules are evaluated strictly in construction order
//! 2. The first non-`OK` label is returned; later rules are never invoked
//! 3. If every rule passes, the text is `OK`

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::pipeline::rules::Rule;
use crate::pipeline::types::{Label, Verdict};

/// An ordered, non-empty list of rules.
///
/// Immutable after construction and `Send + Sync`, so one instance can be
/// shared behind an `Arc` by any number of callers.
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Pipeline {
    /// Create a pipeline from an ordered list of rules.
    ///
    /// Returns `ConfigError::EmptyPipeline` if `rules` is empty.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::EmptyPipeline);
        }
        Ok(Self { rules })
    }

    /// Start building a pipeline rule by rule.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Classify `text`, returning the first non-`OK` label or `OK`.
    pub fn evaluate(&self, text: &str) -> Label {
        self.verdict(text).label
    }

    /// Classify `text` and report which rule flagged it.
    pub fn verdict(&self, text: &str) -> Verdict {
        for rule in &self.rules {
            let label = rule.evaluate(text);
            if !label.is_ok() {
                debug!(rule = rule.name(), label = %label, "Pipeline short-circuited");
                return Verdict::flagged(label, rule.name());
            }
        }
        Verdict::ok()
    }

    /// Classify each text independently, preserving input order.
    pub fn evaluate_batch<I, S>(&self, texts: I) -> Vec<Label>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<Label> = texts
            .into_iter()
            .map(|t| self.evaluate(t.as_ref()))
            .collect();

        let flagged = labels.iter().filter(|l| !l.is_ok()).count();
        info!(total = labels.len(), flagged, "Batch classification complete");
        labels
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: construction rejects empty rule lists.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Rule for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn evaluate(&self, text: &str) -> Label {
        Pipeline::evaluate(self, text)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Fluent builder for `Pipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    rules: Vec<Box<dyn Rule>>,
}

impl PipelineBuilder {
    /// Append a rule; it runs after every rule added before it.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(self) -> Result<Pipeline, ConfigError> {
        Pipeline::new(self.rules)
    }
}
