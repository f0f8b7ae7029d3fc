//! Shared types for the classification pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Label ───────────────────────────────────────────────────────────

/// Outcome of classifying a text.
///
/// `Ok` is the "no rule matched" value; every other variant flags the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    #[default]
    Ok,
    Spam,
    NegativeText,
    TooLong,
    TooMuchKeywords,
}

impl Label {
    /// Upper-snake name used for output and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Spam => "SPAM",
            Self::NegativeText => "NEGATIVE_TEXT",
            Self::TooLong => "TOO_LONG",
            Self::TooMuchKeywords => "TOO_MUCH_KEYWORDS",
        }
    }

    /// True for the pass value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Verdict ─────────────────────────────────────────────────────────

/// A label together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub label: Label,
    /// Name of the first flagging rule. `None` when the text passed.
    pub rule: Option<&'static str>,
}

impl Verdict {
    /// A passing verdict.
    pub fn ok() -> Self {
        Self {
            label: Label::Ok,
            rule: None,
        }
    }

    pub fn flagged(label: Label, rule: &'static str) -> Self {
        Self {
            label,
            rule: Some(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_by_name() {
        assert_eq!(Label::Ok.to_string(), "OK");
        assert_eq!(Label::NegativeText.to_string(), "NEGATIVE_TEXT");
        assert_eq!(Label::TooMuchKeywords.to_string(), "TOO_MUCH_KEYWORDS");
    }

    #[test]
    fn label_serde_uses_same_names_as_display() {
        let labels = [
            Label::Ok,
            Label::Spam,
            Label::NegativeText,
            Label::TooLong,
            Label::TooMuchKeywords,
        ];
        for label in labels {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label));
        }
        let parsed: Label = serde_json::from_str("\"TOO_LONG\"").unwrap();
        assert_eq!(parsed, Label::TooLong);
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(Label::Ok.is_ok());
        assert!(!Label::Spam.is_ok());
        assert!(!Label::TooLong.is_ok());
        assert_eq!(Label::default(), Label::Ok);
    }

    #[test]
    fn verdict_constructors() {
        assert_eq!(Verdict::ok().label, Label::Ok);
        assert!(Verdict::ok().rule.is_none());
        let v = Verdict::flagged(Label::Spam, "spam");
        assert_eq!(v.rule, Some("spam"));
    }
}
