//! Page language - WCAG 3.1.1 Language of Page (Level A)

use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let Some(html) = doc.elements_by_tag(&["html"]).into_iter().next() else {
        // Fragments without a root document element produce no issues
        return Vec::new();
    };

    let lang = doc.attr(html, "lang").unwrap_or("");
    if lang.trim().is_empty() {
        return vec![Issue {
            rule_id: RuleId::HtmlLang,
            severity: Severity::Error,
            element: "<html>".to_string(),
            message: "HTML element is missing a valid lang attribute".to_string(),
            suggestion: Some(
                "Add a lang attribute to the html element, e.g., lang=\"en\"".to_string(),
            ),
        }];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Issue> {
        check(&Document::parse(html))
    }

    #[test]
    fn flags_missing_lang() {
        let issues = run("<html><body></body></html>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].element, "<html>");
    }

    #[test]
    fn flags_empty_and_blank_lang() {
        assert_eq!(run(r#"<html lang=""></html>"#).len(), 1);
        assert_eq!(run(r#"<html lang="  "></html>"#).len(), 1);
    }

    #[test]
    fn valid_lang_passes() {
        assert!(run(r#"<html lang="en"></html>"#).is_empty());
    }

    #[test]
    fn fragment_without_root_passes() {
        assert!(run("<div>Just a fragment</div>").is_empty());
    }
}
