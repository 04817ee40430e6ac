use serde::Serialize;

use crate::core::constants::defaults;
use crate::core::error::{ApifixError, Result};

/// The host being replaced and the expression replacing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    host: String,
    expression: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            expression: defaults::EXPRESSION.to_string(),
        }
    }
}

impl Template {
    pub fn new(host: impl Into<String>, expression: impl Into<String>) -> Result<Self> {
        let host = host.into();
        let expression = expression.into();

        if host.is_empty() {
            return Err(ApifixError::InvalidArgument(
                "Host cannot be empty".to_string(),
            ));
        }
        if expression.is_empty() {
            return Err(ApifixError::InvalidArgument(
                "Template expression cannot be empty".to_string(),
            ));
        }
        if expression.contains(['{', '}', '`']) {
            return Err(ApifixError::InvalidArgument(format!(
                "Template expression '{expression}' must not contain braces or backticks"
            )));
        }

        Ok(Self { host, expression })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// `${expression}`, the interpolation inserted in place of the host
    pub fn placeholder(&self) -> String {
        format!("${{{}}}", self.expression)
    }

    pub(crate) fn host_pattern(&self) -> String {
        regex::escape(&self.host)
    }

    pub(crate) fn expression_pattern(&self) -> String {
        regex::escape(&self.expression)
    }

    pub(crate) fn placeholder_pattern(&self) -> String {
        regex::escape(&self.placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let template = Template::default();

        assert_eq!(template.host(), "http://localhost:3000");
        assert_eq!(template.placeholder(), "${config.API_URL}");
    }

    #[test]
    fn test_placeholder_pattern_is_escaped() {
        let template = Template::default();

        assert_eq!(template.placeholder_pattern(), r"\$\{config\.API_URL\}");
        assert_eq!(template.host_pattern(), r"http://localhost:3000");
    }

    #[test]
    fn test_custom_template() {
        let template = Template::new("http://127.0.0.1:8080", "env.BACKEND").unwrap();

        assert_eq!(template.placeholder(), "${env.BACKEND}");
        assert_eq!(template.expression_pattern(), r"env\.BACKEND");
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(Template::new("", "config.API_URL").is_err());
        assert!(Template::new("http://localhost:3000", "").is_err());
    }

    #[test]
    fn test_rejects_delimiters_in_expression() {
        let result = Template::new("http://localhost:3000", "config.API_URL}");

        assert!(matches!(result, Err(ApifixError::InvalidArgument(_))));
    }
}
