//! Prompt sanitization for deckguard
//!
//! This crate contains:
//! - Redaction rules and ordered rule sets
//! - The redaction engine applied to free text before it leaves the process

pub mod redactor;
pub mod rules;

pub use redactor::{RedactionInfo, Redactor, redact};
pub use rules::{
    DEFAULT_REPLACEMENT, InvalidRuleError, RedactionRule, RedactionRuleSet, RuleSetBuilder,
};
