//! Prompt templates and placeholder substitution.
//!
//! Templates use `{{name}}` tokens. Every token must be resolved by a supplied
//! parameter; a leftover token fails the build so no half-filled prompt ever
//! reaches the model.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use codepace_protocols::error::PromptError;

/// Template behind `POST /api/ask-gemini` in the default setup.
pub const EXPERT_CODING_MENTOR: &str = "expert_coding_mentor";

/// Template behind `POST /api/next-problem`.
pub const NEXT_PROBLEM: &str = "next_problem";

/// Named prompt parameters.
pub type PromptParams = BTreeMap<String, String>;

// Any `{{...}}` counts as a token, so a malformed name in a configured
// template is reported instead of reaching the model verbatim.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("placeholder pattern is valid"));

const EXPERT_CODING_MENTOR_TEXT: &str = concat!(
    "As a {{coding_language}} expert with 20+ years of experience, analyze my performance based on ",
    "the time taken to solve my last question: {{question}} in {{time}}. ",
    "Time is the most crucial factor: if I take too long on an easy question, it indicates weakness ",
    "in that topic, and I need more practice. ",
    "The second weightage factor is my starting skill level ({{starting_difficulty}}), which should ",
    "help determine my next question. ",
    "Adjust difficulty naturally so I don't notice the increase, reinforcing weak logic by mixing ",
    "concepts without repeating topics. ",
    "Ensure my progress is smooth while covering all coding topics. Provide a structured response, ",
    "and give me **one question at a time**. Do not give more than one question. \n\n",
    "**Question Name:**\n",
    "**Explanation:**\n",
    "**Example Input & Output:**\n",
    "**Difficulty Level:**\n",
    "**Topic:**\n",
    "**Recommendation:**\n",
);

const NEXT_PROBLEM_TEXT: &str = concat!(
    "You are a coding interview coach. I just solved \"{{last_problem}}\" ({{difficulty}} difficulty, ",
    "topic: {{topic}}) in {{time_taken}} minutes. The expected time for a {{difficulty}} problem is ",
    "{{benchmark}} minutes.\n",
    "Recommend exactly one next LeetCode problem. Reply using exactly these lines and nothing else:\n",
    "Problem ID: <number>\n",
    "Problem Title: <title>\n",
    "Topic: <main topic>\n",
    "Difficulty: <easy|medium|hard>\n",
    "Focus Area: <concept to focus on>\n",
    "URL Slug: <leetcode url slug>\n",
);

/// Closed registry of prompt templates, built once at startup.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, String>,
}

impl TemplateRegistry {
    /// The built-in templates.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(
            EXPERT_CODING_MENTOR.to_string(),
            EXPERT_CODING_MENTOR_TEXT.to_string(),
        );
        templates.insert(NEXT_PROBLEM.to_string(), NEXT_PROBLEM_TEXT.to_string());
        Self { templates }
    }

    /// Built-ins, then configured templates added or replacing by ID.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut registry = Self::builtin();
        for (id, text) in overrides {
            registry.templates.insert(id.clone(), text.clone());
        }
        registry
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.templates.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Template IDs in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Look up a template and fill it.
    pub fn render(&self, id: &str, params: &PromptParams) -> Result<String, PromptError> {
        let text = self
            .get(id)
            .ok_or_else(|| PromptError::UnknownTemplate(id.to_string()))?;
        fill_template(text, params)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substitute every `{{name}}` token with its parameter.
///
/// Substitution is a single pass over the template, so values that themselves
/// contain braces are inserted verbatim and never re-expanded. Unresolved names
/// are reported in order of first appearance.
pub fn fill_template(template: &str, params: &PromptParams) -> Result<String, PromptError> {
    let mut missing: Vec<String> = Vec::new();
    let mut seen = BTreeSet::new();

    let filled = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        match params.get(name) {
            Some(value) => value.clone(),
            None => {
                if seen.insert(name.to_string()) {
                    missing.push(name.to_string());
                }
                caps[0].to_string()
            }
        }
    });

    // An opening `{{` that never closes is a token too.
    let rest = PLACEHOLDER.replace_all(template, "");
    if let Some(pos) = rest.find("{{") {
        let fragment: String = rest[pos..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();
        missing.push(fragment);
    }

    if !missing.is_empty() {
        return Err(PromptError::MissingParameter(missing.join(", ")));
    }

    Ok(filled.into_owned())
}

/// Convert a JSON parameters object into prompt parameters.
///
/// Strings are used verbatim, `null` becomes an empty string, everything else
/// is rendered as JSON text.
pub fn params_from_json(object: &Map<String, Value>) -> PromptParams {
    object
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
