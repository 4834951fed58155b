use regex::NoExpand;
use serde::{Deserialize, Serialize};

use crate::rules::RedactionRuleSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub term: String,
    pub replacement: String,
    pub count: usize,
}

/// Replace every case-insensitive occurrence of each rule's term, rule by rule.
///
/// Never fails; an empty rule set returns the input unchanged.
pub fn redact(text: &str, rules: &RedactionRuleSet) -> String {
    let mut result = text.to_string();

    for compiled in rules.compiled() {
        result = compiled
            .matcher
            .replace_all(&result, NoExpand(compiled.rule.replacement.as_str()))
            .into_owned();
    }

    result
}

/// Redaction engine bound to a fixed rule set
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    rules: RedactionRuleSet,
}

impl Redactor {
    pub fn new(rules: RedactionRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RedactionRuleSet {
        &self.rules
    }

    pub fn redact(&self, text: &str) -> String {
        redact(text, &self.rules)
    }

    /// Redact and report how many matches each rule replaced
    pub fn redact_with_report(&self, text: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = text.to_string();
        let mut redactions = Vec::new();

        for compiled in self.rules.compiled() {
            let count = compiled.matcher.find_iter(&result).count();

            if count > 0 {
                result = compiled
                    .matcher
                    .replace_all(&result, NoExpand(compiled.rule.replacement.as_str()))
                    .into_owned();

                redactions.push(RedactionInfo {
                    term: compiled.rule.term.clone(),
                    replacement: compiled.rule.replacement.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }
}
