//! Positive tabindex - WCAG 2.4.7 Focus Visible (Level A)
//!
//! Explicit positive tab order fights the document order; 0 and negative
//! values are fine.

use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements() {
        let Some(raw) = doc.attr(id, "tabindex") else {
            continue;
        };
        let Ok(tabindex) = raw.trim().parse::<i32>() else {
            continue;
        };
        if tabindex > 0 {
            issues.push(Issue {
                rule_id: RuleId::TabindexPositive,
                severity: Severity::Warning,
                element: doc.outer_html(id),
                message: format!("Positive tabindex value ({tabindex}) disrupts natural focus order"),
                suggestion: Some(
                    "Use tabindex=\"0\" or tabindex=\"-1\" instead, and manage focus order with DOM structure"
                        .to_string(),
                ),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Issue> {
        check(&Document::parse(html))
    }

    #[test]
    fn flags_positive_tabindex() {
        let issues = run(r#"<input tabindex="3">"#);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("(3)"));
    }

    #[test]
    fn zero_and_negative_pass() {
        assert!(run(r#"<div tabindex="0"></div>"#).is_empty());
        assert!(run(r#"<div tabindex="-1"></div>"#).is_empty());
    }

    #[test]
    fn non_numeric_tabindex_is_ignored() {
        assert!(run(r#"<div tabindex="first"></div>"#).is_empty());
    }

    #[test]
    fn multiple_offenders_in_document_order() {
        let issues = run(r#"<a href="/" tabindex="2">a</a><input tabindex="1">"#);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].element.starts_with("<a"));
    }
}
