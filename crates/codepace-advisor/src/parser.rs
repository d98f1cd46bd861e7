//! Best-effort decoder for "Key: Value" model replies.
//!
//! The model is asked for a fixed set of lines but nothing guarantees it
//! complies. Parsing never fails: unrecognized lines are ignored and missing
//! fields come back empty.

use std::collections::HashMap;

use codepace_protocols::ProblemSuggestion;

pub const PROBLEM_ID: &str = "problem_id";
pub const PROBLEM_TITLE: &str = "problem_title";
pub const TOPIC: &str = "topic";
pub const DIFFICULTY: &str = "difficulty";
pub const FOCUS_AREA: &str = "focus_area";
pub const URL_SLUG: &str = "url_slug";

/// Normalized keys read into a [`ProblemSuggestion`].
pub const SUGGESTION_FIELDS: [&str; 6] =
    [PROBLEM_ID, PROBLEM_TITLE, TOPIC, DIFFICULTY, FOCUS_AREA, URL_SLUG];

/// Normalized key/value pairs found in a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    fields: HashMap<String, String>,
}

impl ParsedReply {
    /// Value for a normalized key, empty when absent.
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Suggestion fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        SUGGESTION_FIELDS
            .iter()
            .copied()
            .filter(|key| self.field(key).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build a suggestion. `url` is `problem_base_url` + slug + `/` when a slug exists.
    pub fn to_suggestion(&self, problem_base_url: &str) -> ProblemSuggestion {
        let url_slug = self.field(URL_SLUG).trim_matches('/').to_string();
        let url = if url_slug.is_empty() {
            String::new()
        } else {
            format!("{}{}/", problem_base_url, url_slug)
        };

        ProblemSuggestion {
            id: self.field(PROBLEM_ID).to_string(),
            title: self.field(PROBLEM_TITLE).to_string(),
            topic: self.field(TOPIC).to_string(),
            difficulty: self.field(DIFFICULTY).to_string(),
            focus_area: self.field(FOCUS_AREA).to_string(),
            url_slug,
            url,
        }
    }
}

/// Scan the reply line by line, keeping lines that contain a `:`.
///
/// Each qualifying line is split on its first `:`; the key is normalized
/// (markdown emphasis stripped, lower-cased, whitespace runs joined with `_`)
/// and the whitespace-trimmed value stored. Later duplicates overwrite earlier ones.
pub fn parse_reply(text: &str) -> ParsedReply {
    let mut fields = HashMap::new();

    for line in text.lines() {
        let Some((raw_key, raw_value)) = line.split_once(':') else {
            continue;
        };

        let key = normalize_key(raw_key);
        if key.is_empty() {
            continue;
        }

        let value = clean_value(raw_key, raw_value);
        fields.insert(key, value);
    }

    ParsedReply { fields }
}

fn normalize_key(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| matches!(c, '*' | '#' | '-' | '_' | '`') || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Values are only trimmed. The one exception is the closing `**` of a
/// bold key (`**Key:** value`), which lands at the start of the value.
fn clean_value(raw_key: &str, raw: &str) -> String {
    let value = raw.trim();
    let bold_key = raw_key
        .trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .starts_with("**");
    match value.strip_prefix("**") {
        Some(rest) if bold_key => rest.trim_start().to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
