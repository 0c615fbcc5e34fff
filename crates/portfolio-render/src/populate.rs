//! Template population: literal token replacement.
//!
//! The populator resolves a token table for the record, then replaces every
//! occurrence of each token's `{{NAME}}` marker in the template with its
//! value. Matching is plain substring search with scan-and-splice: markers
//! are literal text, never a pattern language, so no escaping pitfalls
//! exist. Replacement walks [`Token::ALL`](crate::Token::ALL) in order;
//! markers never contain one another, so the order is not observable.
//!
//! # Example
//!
//! ```rust
//! use portfolio_render::{populate, ResumeData};
//!
//! let data = ResumeData::from_json_str(
//!     r#"{ "personalInfo": { "firstName": "Ana", "email": "a@x.com" }, "professionalInfo": {} }"#,
//! ).unwrap();
//!
//! let out = populate("Hello {{FIRST_NAME}}, your email is {{EMAIL}}", &data);
//! assert_eq!(out.html, "Hello Ana, your email is a@x.com");
//! ```

use crate::resume::ResumeData;
use crate::tokens::{resolve_tokens, Token, TokenTable};

/// The result of populating a template: the rewritten string plus the
/// resolved token table, exposed for inspection and testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Populated {
    /// The template with every token marker replaced.
    pub html: String,
    /// The table the replacement used.
    pub tokens: TokenTable,
}

/// Populates a template string with values resolved from a resume record.
///
/// Every occurrence of every recognized marker is replaced; text without
/// markers passes through untouched, and an empty template yields an empty
/// result. The input is not mutated and no error path exists; absent
/// record fields resolve to defaults.
pub fn populate(template: &str, data: &ResumeData) -> Populated {
    let tokens = resolve_tokens(data);
    let html = tokens.apply(template);
    Populated { html, tokens }
}

impl TokenTable {
    /// Rewrites a template using this table's values.
    pub fn apply(&self, template: &str) -> String {
        let mut out = template.to_string();
        for token in Token::ALL {
            let marker = token.marker();
            if out.contains(&marker) {
                out = replace_all(&out, &marker, self.get(token));
            }
        }
        out
    }
}

/// Replaces every occurrence of `needle` in `haystack` with `replacement`.
///
/// Already-spliced output is never rescanned, so replacement values that
/// happen to contain marker-like text are inserted verbatim.
fn replace_all(haystack: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(idx) = rest.find(needle) {
        out.push_str(&rest[..idx]);
        out.push_str(replacement);
        rest = &rest[idx + needle.len()..];
    }
    out.push_str(rest);
    out
}
