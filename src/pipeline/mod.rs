//! Rule-based text classification pipeline.
//!
//! Every text flows through:
//! 1. `Pipeline::evaluate()`: rules in configured order
//! 2. `Rule::evaluate()`: keyword, length or frequency check
//! 3. First non-`OK` label wins; otherwise the text is `OK`
//!
//! **One label per text.** There is no multi-label output.

pub mod processor;
pub mod rules;
pub mod types;

pub use processor::{Pipeline, PipelineBuilder};
pub use rules::{KeywordFrequencyRule, NegativeToneRule, Rule, SpamRule, TooLongRule};
pub use types::{Label, Verdict};
