//! Semantic interactivity - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Click handlers on generic containers are invisible to assistive
//! technology unless the element at least claims role="button".

use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements_by_tag(&["div", "span"]) {
        if !doc.has_attr(id, "onclick") && !doc.has_attr(id, "onkeypress") {
            continue;
        }
        if doc.attr(id, "role") == Some("button") {
            continue;
        }
        issues.push(Issue {
            rule_id: RuleId::SemanticButton,
            severity: Severity::Warning,
            element: doc.outer_html(id),
            message: "Clickable element should use semantic button".to_string(),
            suggestion: Some(
                "Use a <button> element instead of a clickable div/span for better accessibility"
                    .to_string(),
            ),
        });
    }
    issues
}
