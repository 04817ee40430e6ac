//! Text rewriting
//!
//! Each pass is an ordered list of regular-expression rules. Rules are
//! applied one after another to a file's whole text, so a later rule
//! sees what the earlier ones produced.

pub mod quote_repairer;
pub mod rules;
pub mod template;
pub mod url_rewriter;

// Re-export commonly used items
pub use quote_repairer::{quote_rules, repair_quotes};
pub use rules::{Replacement, Rewrite, Rule, RuleSet};
pub use template::Template;
pub use url_rewriter::{rewrite_urls, url_rules};

use crate::core::error::Result;
use crate::core::types::Pass;

/// Compile the rules a pass runs with
pub fn rules_for(pass: Pass, template: &Template) -> Result<RuleSet> {
    match pass {
        Pass::Urls => url_rules(template),
        Pass::Quotes => quote_rules(template),
    }
}
