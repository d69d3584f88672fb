//! Form input labels - WCAG 1.3.1 Info and Relationships (Level A)

use super::{has_label, EXEMPT_INPUT_TYPES};
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements_by_tag(&["input", "select", "textarea"]) {
        let control_type = doc.attr(id, "type").unwrap_or("text");
        if EXEMPT_INPUT_TYPES.contains(&control_type) {
            continue;
        }
        if has_label(doc, id) {
            continue;
        }
        issues.push(Issue {
            rule_id: RuleId::FormLabel,
            severity: Severity::Error,
            element: doc.outer_html(id),
            message: "Form input is missing an associated label".to_string(),
            suggestion: Some(
                "Add a <label> element with for attribute, or use aria-label/aria-labelledby"
                    .to_string(),
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
    fn flags_bare_input() {
        let issues = run(r#"<input type="text" name="email">"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, RuleId::FormLabel);
    }

    #[test]
    fn exempt_types_skipped() {
        for t in ["hidden", "submit", "button", "reset", "image"] {
            assert!(
                run(&format!(r#"<input type="{t}">"#)).is_empty(),
                "type {t} should be exempt"
            );
        }
    }

    #[test]
    fn label_for_association_satisfies() {
        let html = r#"<label for="email">Email</label><input type="text" id="email">"#;
        assert!(run(html).is_empty());
    }

    #[test]
    fn wrapping_label_satisfies() {
        assert!(run(r#"<label>Email <input type="text"></label>"#).is_empty());
    }

    #[test]
    fn aria_label_satisfies() {
        assert!(run(r#"<input type="text" aria-label="Email">"#).is_empty());
        assert!(run(r#"<input type="text" aria-labelledby="lbl">"#).is_empty());
    }

    #[test]
    fn title_satisfies() {
        assert!(run(r#"<input type="text" title="Email address">"#).is_empty());
    }

    #[test]
    fn select_and_textarea_are_checked() {
        let issues = run("<select></select><textarea></textarea>");
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn missing_type_defaults_to_text() {
        assert_eq!(run("<input>").len(), 1);
    }

    #[test]
    fn label_for_other_id_does_not_satisfy() {
        let html = r#"<label for="other">X</label><input type="text" id="email">"#;
        assert_eq!(run(html).len(), 1);
    }
}
