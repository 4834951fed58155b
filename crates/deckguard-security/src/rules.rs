use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder used by the built-in rules
pub const DEFAULT_REPLACEMENT: &str = "[REDACTED-SEC]";

/// A single term to scrub and the text that replaces it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionRule {
    pub term: String,
    pub replacement: String,
}

impl RedactionRule {
    pub fn new(term: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidRuleError {
    #[error("Redaction rule #{position} has an empty match term")]
    EmptyMatchTerm { position: usize },

    #[error("Redaction rule #{position} could not be compiled: {source}")]
    Pattern {
        position: usize,
        #[source]
        source: regex::Error,
    },
}

/// Rule paired with its case-insensitive literal matcher
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) rule: RedactionRule,
    pub(crate) matcher: Regex,
}

impl CompiledRule {
    fn compile(position: usize, rule: RedactionRule) -> Result<Self, InvalidRuleError> {
        if rule.term.is_empty() {
            return Err(InvalidRuleError::EmptyMatchTerm { position });
        }

        let matcher = RegexBuilder::new(&regex::escape(&rule.term))
            .case_insensitive(true)
            .build()
            .map_err(|source| InvalidRuleError::Pattern { position, source })?;

        Ok(Self { rule, matcher })
    }
}

/// Ordered, immutable set of redaction rules.
///
/// Rules are applied in insertion order, each one over the output of the
/// previous, so a later term can match text introduced by an earlier
/// replacement.
#[derive(Debug, Clone)]
pub struct RedactionRuleSet {
    compiled: Vec<CompiledRule>,
}

impl RedactionRuleSet {
    /// Build a rule set, rejecting it as a whole if any rule is invalid
    pub fn new<I>(rules: I) -> Result<Self, InvalidRuleError>
    where
        I: IntoIterator<Item = RedactionRule>,
    {
        let compiled = rules
            .into_iter()
            .enumerate()
            .map(|(position, rule)| CompiledRule::compile(position, rule))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { compiled })
    }

    /// A rule set that leaves every input untouched
    pub fn empty() -> Self {
        Self {
            compiled: Vec::new(),
        }
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// The built-in rules, in the order they are applied
    pub fn default_rules() -> Vec<RedactionRule> {
        vec![
            RedactionRule::new("password", DEFAULT_REPLACEMENT),
            RedactionRule::new("confidential", DEFAULT_REPLACEMENT),
        ]
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RedactionRule> {
        self.compiled.iter().map(|c| &c.rule)
    }

    pub fn rules(&self) -> Vec<RedactionRule> {
        self.iter().cloned().collect()
    }

    pub(crate) fn compiled(&self) -> &[CompiledRule] {
        &self.compiled
    }
}

impl Default for RedactionRuleSet {
    fn default() -> Self {
        Self::new(Self::default_rules()).expect("built-in redaction rules are valid")
    }
}

/// Collects rules at configuration time; validation happens in `build`
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: Vec<RedactionRule>,
}

impl RuleSetBuilder {
    pub fn rule(mut self, term: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.push(RedactionRule::new(term, replacement));
        self
    }

    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RedactionRule>,
    {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> Result<RedactionRuleSet, InvalidRuleError> {
        RedactionRuleSet::new(self.rules)
    }
}
