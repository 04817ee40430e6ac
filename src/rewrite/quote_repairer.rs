use once_cell::sync::Lazy;

use super::rules::{Replacement, Rule, RuleSet};
use super::template::Template;
use crate::core::error::Result;

static DEFAULT_QUOTE_RULES: Lazy<RuleSet> = Lazy::new(|| {
    quote_rules(&Template::default()).expect("Failed to compile default quote repair rules")
});

/// Build the rules closing `` `${expr}...' `` with a backtick
pub fn quote_rules(template: &Template) -> Result<RuleSet> {
    let placeholder_re = template.placeholder_pattern();
    let closed = "`${1}`".to_string();

    Ok(RuleSet::new(vec![
        // Stops at the first quote of either kind, newlines included
        Rule::new(
            "mixed_quote_close",
            &format!("`({placeholder_re}[^`']+)'"),
            Replacement::Expand(closed.clone()),
        )?,
        Rule::new(
            "mixed_quote_close_lazy",
            &format!("`({placeholder_re}[^`]*?)'"),
            Replacement::Expand(closed),
        )?,
    ]))
}

/// Repair `text` with the default expression
pub fn repair_quotes(text: &str) -> String {
    DEFAULT_QUOTE_RULES.apply(text).text
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_repair__trailing_single_quote() {
        let out = repair_quotes("fetch(`${config.API_URL}/api/foo')");

        assert_eq!(out, "fetch(`${config.API_URL}/api/foo`)");
    }

    #[test]
    fn test_repair__second_run_changes_nothing() {
        let once = repair_quotes("fetch(`${config.API_URL}/api/foo')");
        let rewrite = DEFAULT_QUOTE_RULES.apply(&once);

        assert_eq!(rewrite.text, once);
        assert!(rewrite.rules_applied.is_empty());
    }

    #[test]
    fn test_repair__followed_by_options_object() {
        let out = repair_quotes("axios.get(`${config.API_URL}/api/users', {\n  headers\n})");

        assert_eq!(out, "axios.get(`${config.API_URL}/api/users`, {\n  headers\n})");
    }

    #[test]
    fn test_repair__expression_broken_across_lines() {
        let out = repair_quotes("post(`${config.API_URL}/api/a\n/b')");

        assert_eq!(out, "post(`${config.API_URL}/api/a\n/b`)");
    }

    #[test]
    fn test_repair__placeholder_directly_before_quote() {
        let rewrite = DEFAULT_QUOTE_RULES.apply("get(`${config.API_URL}')");

        assert_eq!(rewrite.text, "get(`${config.API_URL}`)");
        assert_eq!(rewrite.rules_applied, vec!["mixed_quote_close_lazy"]);
    }

    #[test]
    fn test_repair__well_formed_template_untouched() {
        let text = "get(`${config.API_URL}/api/projects/${id}`, { params: { q: 'x' } })";

        assert_eq!(repair_quotes(text), text);
    }

    #[test]
    fn test_repair__single_quoted_strings_elsewhere_untouched() {
        let text = "const a = 'b'\nconst c = `${other}'`";

        assert_eq!(repair_quotes(text), text);
    }

    #[test]
    fn test_repair__multiple_expressions() {
        let out = repair_quotes("a(`${config.API_URL}/x')\nb(`${config.API_URL}/y')");

        assert_eq!(out, "a(`${config.API_URL}/x`)\nb(`${config.API_URL}/y`)");
    }

    #[test]
    fn test_quote_rules__custom_expression() {
        let template = Template::new("http://localhost:3000", "env.API").unwrap();
        let rules = quote_rules(&template).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.apply("f(`${env.API}/z')").text, "f(`${env.API}/z`)");
        assert_eq!(
            rules.apply("f(`${config.API_URL}/z')").text,
            "f(`${config.API_URL}/z')"
        );
    }
}
