//! Heading content - WCAG 2.4.6 Headings and Labels (Level AA)

use super::HEADING_TAGS;
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements_by_tag(HEADING_TAGS) {
        if doc.text_content(id).trim().is_empty() {
            issues.push(Issue {
                rule_id: RuleId::HeadingContent,
                severity: Severity::Warning,
                element: doc.outer_html(id),
                message: "Heading is empty".to_string(),
                suggestion: Some("Add descriptive text content to the heading".to_string()),
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
    fn flags_empty_heading() {
        assert_eq!(run("<h2></h2>").len(), 1);
    }

    #[test]
    fn flags_whitespace_only_heading() {
        assert_eq!(run("<h1>   </h1>").len(), 1);
    }

    #[test]
    fn flags_heading_with_only_an_image() {
        assert_eq!(run(r#"<h1><img src="logo.png" alt=""></h1>"#).len(), 1);
    }

    #[test]
    fn heading_with_text_passes() {
        assert!(run("<h1>Welcome</h1>").is_empty());
        assert!(run("<h3><span>Nested</span> text</h3>").is_empty());
    }
}
