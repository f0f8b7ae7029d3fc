//! Text Filter: rule-based content moderation.

pub mod config;
pub mod error;
pub mod pipeline;
