//! Button accessible name - WCAG 4.1.2 Name, Role, Value (Level A)

use super::{button_like, has_accessible_name};
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in button_like(doc) {
        if has_accessible_name(doc, id) {
            continue;
        }
        issues.push(Issue {
            rule_id: RuleId::ButtonName,
            severity: Severity::Error,
            element: doc.outer_html(id),
            message: "Button has no accessible name".to_string(),
            suggestion: Some(
                "Add text content, aria-label, or aria-labelledby to the button".to_string(),
            ),
        });
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
    fn flags_empty_button() {
        let issues = run("<button></button>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, RuleId::ButtonName);
    }

    #[test]
    fn flags_role_button_without_name() {
        assert_eq!(run(r#"<div role="button"></div>"#).len(), 1);
    }

    #[test]
    fn text_content_names_the_button() {
        assert!(run("<button>Save</button>").is_empty());
    }

    #[test]
    fn nested_text_counts() {
        assert!(run("<button><span>Save</span></button>").is_empty());
    }

    #[test]
    fn aria_label_names_the_button() {
        assert!(run(r#"<button aria-label="Close"></button>"#).is_empty());
    }

    #[test]
    fn title_names_the_button() {
        assert!(run(r#"<button title="Close dialog"></button>"#).is_empty());
    }

    #[test]
    fn icon_only_button_is_flagged() {
        assert_eq!(run(r#"<button class="icon-close"><svg></svg></button>"#).len(), 1);
    }
}
