//! Link purpose - WCAG 2.4.4 Link Purpose (In Context) (Level A)
//!
//! Links need an accessible name, and that name should describe the
//! destination. A missing name is an error; a generic phrase like
//! "click here" is only a warning.

use super::GENERIC_LINK_TEXT;
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements_by_tag(&["a"]) {
        if !doc.has_attr(id, "href") {
            continue;
        }
        let text = doc.text_content(id).trim().to_lowercase();
        let aria_label = doc.attr(id, "aria-label").unwrap_or("").trim().to_lowercase();
        let title = doc.attr(id, "title").unwrap_or("").trim().to_lowercase();

        // Name resolution order: aria-label, text content, title
        let accessible_name = [aria_label, text, title]
            .into_iter()
            .find(|n| !n.is_empty());

        match accessible_name {
            None => issues.push(Issue {
                rule_id: RuleId::LinkName,
                severity: Severity::Error,
                element: doc.outer_html(id),
                message: "Link has no accessible name".to_string(),
                suggestion: Some(
                    "Add text content, aria-label, or a descriptive title".to_string(),
                ),
            }),
            Some(name) if GENERIC_LINK_TEXT.contains(&name.as_str()) => issues.push(Issue {
                rule_id: RuleId::LinkName,
                severity: Severity::Warning,
                element: doc.outer_html(id),
                message: format!("Link text \"{name}\" is not descriptive"),
                suggestion: Some(
                    "Use descriptive link text that explains the destination or purpose"
                        .to_string(),
                ),
            }),
            Some(_) => {}
        }
    }
    issues
}
