use regex::{NoExpand, Regex};
use std::borrow::Cow;

use crate::core::error::Result;

/// What a matched pattern is replaced with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted verbatim, `$` has no special meaning
    Literal(String),
    /// Expanded with capture groups (`${1}`), `$$` for a literal `$`
    Expand(String),
}

/// A named (pattern, replacement) pair
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    pub fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replace every non-overlapping match. Borrowed when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replacement {
            Replacement::Literal(with) => {
                self.pattern.replace_all(text, NoExpand(with.as_str()))
            }
            Replacement::Expand(with) => self.pattern.replace_all(text, with.as_str()),
        }
    }
}

/// Output of running a [`RuleSet`] over one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub rules_applied: Vec<&'static str>,
}

impl Rewrite {
    pub fn changed_from(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Rules applied in a fixed order, each one seeing the previous one's output
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> Rewrite {
        let mut current = text.to_string();
        let mut rules_applied = Vec::new();

        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule.apply(&current) {
                rules_applied.push(rule.name());
                current = rewritten;
            }
        }

        Rewrite {
            text: current,
            rules_applied,
        }
    }
}

/// Escape `$` so a string survives [`Replacement::Expand`] unchanged
pub fn escape_expansion(text: &str) -> String {
    text.replace('$', "$$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_replacement_keeps_dollar_signs() {
        let rule = Rule::new(
            "host",
            "HOST",
            Replacement::Literal("${config.API_URL}".to_string()),
        )
        .unwrap();

        assert_eq!(rule.apply("a HOST b"), "a ${config.API_URL} b");
    }

    #[test]
    fn test_expand_replacement_uses_groups() {
        let rule = Rule::new(
            "swap",
            r"(\w+)-(\w+)",
            Replacement::Expand("${2}-${1}".to_string()),
        )
        .unwrap();

        assert_eq!(rule.apply("left-right"), "right-left");
    }

    #[test]
    fn test_apply_without_match_is_borrowed() {
        let rule = Rule::new("x", "x", Replacement::Literal("y".to_string())).unwrap();

        assert!(matches!(rule.apply("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_rule_set_applies_in_order() {
        let rules = RuleSet::new(vec![
            Rule::new("a_to_b", "a", Replacement::Literal("b".to_string())).unwrap(),
            Rule::new("b_to_c", "b", Replacement::Literal("c".to_string())).unwrap(),
        ]);

        let rewrite = rules.apply("a");

        assert_eq!(rewrite.text, "c");
        assert_eq!(rewrite.rules_applied, vec!["a_to_b", "b_to_c"]);
        assert!(rewrite.changed_from("a"));
    }

    #[test]
    fn test_rule_set_reports_only_matching_rules() {
        let rules = RuleSet::new(vec![
            Rule::new("a_to_b", "a", Replacement::Literal("b".to_string())).unwrap(),
            Rule::new("z_to_y", "z", Replacement::Literal("y".to_string())).unwrap(),
        ]);

        let rewrite = rules.apply("aaa");

        assert_eq!(rewrite.text, "bbb");
        assert_eq!(rewrite.rules_applied, vec!["a_to_b"]);
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let rewrite = RuleSet::default().apply("unchanged");

        assert_eq!(rewrite.text, "unchanged");
        assert!(rewrite.rules_applied.is_empty());
        assert!(!rewrite.changed_from("unchanged"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = Rule::new("bad", "[unclosed", Replacement::Literal(String::new()));

        assert!(result.is_err());
    }

    #[test]
    fn test_escape_expansion() {
        assert_eq!(escape_expansion("${x}"), "$${x}");
        assert_eq!(escape_expansion("plain"), "plain");
    }
}
