//! ARIA role validity - WCAG 4.1.2 Name, Role, Value (Level A)

use super::VALID_ARIA_ROLES;
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for id in doc.elements() {
        let Some(role) = doc.attr(id, "role") else {
            continue;
        };
        if !VALID_ARIA_ROLES.contains(&role) {
            issues.push(Issue {
                rule_id: RuleId::AriaValidRole,
                severity: Severity::Error,
                element: doc.outer_html(id),
                message: format!("Invalid ARIA role: \"{role}\""),
                suggestion: Some(
                    "Use a valid ARIA role from the WAI-ARIA specification".to_string(),
                ),
            });
        }
    }
    issues
}
