//! aria-hidden focus conflict - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! An element hidden from assistive technology must not be reachable by
//! keyboard: neither itself focusable nor containing a focusable
//! descendant.

use super::FOCUSABLE_TAGS;
use crate::dom::{Document, NodeId};
use crate::{Issue, RuleId, Severity};

fn is_self_focusable(doc: &Document, id: NodeId) -> bool {
    FOCUSABLE_TAGS.contains(&doc.node(id).tag.as_str()) || doc.has_attr(id, "tabindex")
}

fn is_focusable_descendant(doc: &Document, id: NodeId) -> bool {
    FOCUSABLE_TAGS.contains(&doc.node(id).tag.as_str())
        || doc.attr(id, "tabindex").is_some_and(|t| t != "-1")
}

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements() {
        if doc.attr(id, "aria-hidden") != Some("true") {
            continue;
        }
        if is_self_focusable(doc, id) {
            issues.push(Issue {
                rule_id: RuleId::AriaHiddenFocus,
                severity: Severity::Error,
                element: doc.outer_html(id),
                message: "Focusable element has aria-hidden=\"true\"".to_string(),
                suggestion: Some(
                    "Remove aria-hidden or make the element non-focusable".to_string(),
                ),
            });
            continue;
        }
        if doc
            .descendant_elements(id)
            .iter()
            .any(|d| is_focusable_descendant(doc, *d))
        {
            issues.push(Issue {
                rule_id: RuleId::AriaHiddenFocus,
                severity: Severity::Error,
                element: doc.outer_html(id),
                message: "aria-hidden=\"true\" contains focusable elements".to_string(),
                suggestion: Some(
                    "Remove focusable elements from aria-hidden container or restructure"
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
    fn flags_hidden_native_control() {
        let issues = run(r#"<button aria-hidden="true">X</button>"#);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Focusable element"));
    }

    #[test]
    fn flags_hidden_element_with_tabindex() {
        assert_eq!(run(r#"<div aria-hidden="true" tabindex="0"></div>"#).len(), 1);
        // Even tabindex="-1" on the hidden element itself is a conflict
        assert_eq!(run(r#"<div aria-hidden="true" tabindex="-1"></div>"#).len(), 1);
    }

    #[test]
    fn flags_focusable_descendant() {
        let issues = run(r#"<div aria-hidden="true"><a href="/x">link</a></div>"#);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("contains focusable"));
    }

    #[test]
    fn descendant_with_negative_tabindex_is_fine() {
        assert!(run(r#"<div aria-hidden="true"><span tabindex="-1">x</span></div>"#).is_empty());
    }

    #[test]
    fn descendant_with_zero_tabindex_is_flagged() {
        assert_eq!(
            run(r#"<div aria-hidden="true"><span tabindex="0">x</span></div>"#).len(),
            1
        );
    }

    #[test]
    fn plain_hidden_content_passes() {
        assert!(run(r#"<div aria-hidden="true"><p>Decoration</p></div>"#).is_empty());
    }

    #[test]
    fn aria_hidden_false_is_skipped() {
        assert!(run(r#"<button aria-hidden="false">X</button>"#).is_empty());
    }
}
