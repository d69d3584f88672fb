//! Image alternative text - WCAG 1.1.1 Non-text Content (Level A)

use super::attr_nonempty;
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements_by_tag(&["img"]) {
        // Decorative images opt out via role
        if matches!(doc.attr(id, "role"), Some("presentation") | Some("none")) {
            continue;
        }
        // An empty alt="" is valid (decorative); only a missing attribute fails
        if !doc.has_attr(id, "alt") && !attr_nonempty(doc, id, "aria-label") {
            issues.push(Issue {
                rule_id: RuleId::ImgAlt,
                severity: Severity::Error,
                element: doc.outer_html(id),
                message: "Image is missing alt attribute".to_string(),
                suggestion: Some(
                    "Add an alt attribute describing the image, or alt=\"\" for decorative images"
                        .to_string(),
                ),
            });
        }
    }
    issues
}
