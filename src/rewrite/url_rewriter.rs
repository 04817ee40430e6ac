//! Replaces the hard-coded development host with the template expression.
//!
//! Order matters: the quoted forms are rewritten before the bare host so
//! that their opening quote turns into a backtick, and the repairs for
//! earlier mechanical edits run last so they also see this pass's output.

use once_cell::sync::Lazy;

use super::rules::{Replacement, Rule, RuleSet, escape_expansion};
use super::template::Template;
use crate::core::error::Result;

static DEFAULT_URL_RULES: Lazy<RuleSet> = Lazy::new(|| {
    url_rules(&Template::default()).expect("Failed to compile default URL rewrite rules")
});

/// Build the ordered URL rewrite rules for `template`
pub fn url_rules(template: &Template) -> Result<RuleSet> {
    let host = template.host_pattern();
    let expression = template.expression_pattern();
    let placeholder_re = template.placeholder_pattern();

    let placeholder = template.placeholder();
    let opened = format!("`{placeholder}");
    // Closes the literal too: `${expr}<rest>`
    let enclosed = format!("`{}${{1}}`", escape_expansion(&placeholder));

    Ok(RuleSet::new(vec![
        Rule::new(
            "single_quoted_url",
            &format!(r"'{host}([^'`\r\n]*)'"),
            Replacement::Expand(enclosed.clone()),
        )?,
        Rule::new(
            "single_quote_prefix",
            &format!("'{host}"),
            Replacement::Literal(opened.clone()),
        )?,
        Rule::new(
            "double_quoted_url",
            &format!(r#""{host}([^"`\r\n]*)""#),
            Replacement::Expand(enclosed.clone()),
        )?,
        Rule::new(
            "double_quote_prefix",
            &format!("\"{host}"),
            Replacement::Literal(opened.clone()),
        )?,
        Rule::new(
            "backtick_prefix",
            &format!("`{host}"),
            Replacement::Literal(opened.clone()),
        )?,
        Rule::new("bare_host", &host, Replacement::Literal(placeholder.clone()))?,
        Rule::new(
            "path_inside_braces",
            &format!(r"\$\{{{expression}(/api/[^\}}]+?)\}}"),
            Replacement::Expand(format!("{}${{1}}", escape_expansion(&placeholder))),
        )?,
        Rule::new(
            "repeated_backticks",
            &format!("`{{2,}}{placeholder_re}"),
            Replacement::Literal(opened.clone()),
        )?,
        Rule::new(
            "single_quoted_placeholder",
            &format!(r"'{placeholder_re}([^'`\r\n]*)'"),
            Replacement::Expand(enclosed),
        )?,
        Rule::new(
            "single_quote_before_placeholder",
            &format!("'{placeholder_re}"),
            Replacement::Literal(opened),
        )?,
    ]))
}

/// Rewrite `text` with the default host and expression
pub fn rewrite_urls(text: &str) -> String {
    DEFAULT_URL_RULES.apply(text).text
}
