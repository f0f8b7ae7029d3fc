//! Classification rules.
//!
//! Each rule is a pure function of the text and its own configuration:
//! - `SpamRule`: any configured keyword as a substring → `SPAM`
//! - `NegativeToneRule`: sad/neutral emoticons → `NEGATIVE_TEXT`
//! - `TooLongRule`: more characters than allowed → `TOO_LONG`
//! - `KeywordFrequencyRule`: a keyword repeated too often → `TOO_MUCH_KEYWORDS`
//!
//! Configuration is copied in at construction and never changes afterwards.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::pipeline::types::Label;

/// Emoticons flagged by `NegativeToneRule`.
pub const NEGATIVE_TONE_KEYWORDS: [&str; 3] = [":(", "=(", ":|"];

/// A word is a maximal run of Unicode letters or decimal digits.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nd}]+").expect("word pattern is valid"));

/// A single classification rule.
///
/// `evaluate` must be total: every input, including the empty string,
/// yields exactly one label.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs and verdicts.
    fn name(&self) -> &'static str;

    /// Classify `text`, returning `Label::Ok` when the rule does not apply.
    fn evaluate(&self, text: &str) -> Label;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, text: &str) -> Label {
        (**self).evaluate(text)
    }
}

/// Return `label` on the first keyword (in order) contained in `text`, else `Ok`.
///
/// Matching is a literal, case-sensitive substring test. An empty keyword is
/// contained in every text.
pub fn scan_keywords<K: AsRef<str>>(
    rule: &'static str,
    text: &str,
    keywords: &[K],
    label: Label,
) -> Label {
    let matched = keywords
        .iter()
        .map(|k| k.as_ref())
        .find(|k: &&str| text.contains(*k));
    match matched {
        Some(keyword) => {
            debug!(rule, keyword, label = %label, "Text matched keyword rule");
            label
        }
        None => Label::Ok,
    }
}

fn owned_keywords<I, S>(keywords: I) -> Box<[String]>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keywords.into_iter().map(Into::into).collect()
}

// ── Spam ────────────────────────────────────────────────────────────

/// Flags texts containing any of the configured spam phrases.
#[derive(Debug, Clone)]
pub struct SpamRule {
    keywords: Box<[String]>,
}

impl SpamRule {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: owned_keywords(keywords),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Rule for SpamRule {
    fn name(&self) -> &'static str {
        "spam"
    }

    fn evaluate(&self, text: &str) -> Label {
        scan_keywords(self.name(), text, self.keywords(), Label::Spam)
    }
}

// ── Negative tone ───────────────────────────────────────────────────

/// Flags texts containing a negative emoticon (`:(`, `=(`, `:|`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeToneRule;

impl NegativeToneRule {
    pub fn new() -> Self {
        Self
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        &NEGATIVE_TONE_KEYWORDS
    }
}

impl Rule for NegativeToneRule {
    fn name(&self) -> &'static str {
        "negative_tone"
    }

    fn evaluate(&self, text: &str) -> Label {
        scan_keywords(self.name(), text, self.keywords(), Label::NegativeText)
    }
}

// ── Length ──────────────────────────────────────────────────────────

/// Flags texts longer than `max_length` characters.
#[derive(Debug, Clone, Copy)]
pub struct TooLongRule {
    max_length: usize,
}

impl TooLongRule {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Rule for TooLongRule {
    fn name(&self) -> &'static str {
        "too_long"
    }

    fn evaluate(&self, text: &str) -> Label {
        // Counts chars, not bytes.
        let length = text.chars().count();
        if length > self.max_length {
            debug!(
                rule = self.name(),
                length,
                max_length = self.max_length,
                "Text exceeds length limit"
            );
            return Label::TooLong;
        }
        Label::Ok
    }
}

// ── Keyword frequency ───────────────────────────────────────────────

/// Flags texts in which some keyword occurs as a whole word more than
/// `max_count` times, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct KeywordFrequencyRule {
    keywords: Box<[String]>,
    max_count: usize,
}

impl KeywordFrequencyRule {
    pub fn new<I, S>(keywords: I, max_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: owned_keywords(keywords),
            max_count,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

impl Rule for KeywordFrequencyRule {
    fn name(&self) -> &'static str {
        "keyword_frequency"
    }

    fn evaluate(&self, text: &str) -> Label {
        if self.keywords.is_empty() {
            return Label::Ok;
        }

        let words: Vec<&str> = split_words(text).collect();

        for keyword in self.keywords.iter() {
            let count = words
                .iter()
                .filter(|w| eq_ignore_case(w, keyword))
                .count();
            if count > self.max_count {
                debug!(
                    rule = self.name(),
                    keyword = %keyword,
                    count,
                    max_count = self.max_count,
                    "Keyword repeated too often"
                );
                return Label::TooMuchKeywords;
            }
        }

        Label::Ok
    }
}

/// Split `text` into words: maximal runs of Unicode letters and digits.
/// Never yields an empty word.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Case-insensitive equality, one char at a time.
///
/// Each pair of chars matches if equal, equal after simple upper-casing, or
/// equal after lower-casing those upper-cased forms. Strings of different
/// char counts never match.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_eq_ignore_case(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (a, b) = (simple_upper(a), simple_upper(b));
    a == b || simple_lower(a) == simple_lower(b)
}

/// Single-char upper case; chars with multi-char mappings (`ß`) stay as is.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-char lower case. The only multi-char lower mapping is `İ` → `i̇`,
/// whose simple form is its first char.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
