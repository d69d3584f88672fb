//! Resizable text - WCAG 1.4.4 Resize Text (Level AA)
//!
//! A viewport directive that disables pinch zoom or caps the maximum scale
//! below 2.0 prevents users from enlarging text.

use crate::dom::Document;
use crate::{Issue, RuleId, Severity};
use regex::Regex;

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    let max_scale_re = Regex::new(r"maximum-scale\s*=\s*([\d.]+)").expect("valid regex");

    for id in doc.elements_by_tag(&["meta"]) {
        if doc.attr(id, "name") != Some("viewport") {
            continue;
        }
        let content = doc.attr(id, "content").unwrap_or("");

        if content.contains("user-scalable=no") || content.contains("user-scalable=0") {
            issues.push(Issue {
                rule_id: RuleId::TextSizing,
                severity: Severity::Warning,
                element: doc.outer_html(id),
                message: "Viewport meta prevents text scaling (user-scalable=no)".to_string(),
                suggestion: Some("Remove user-scalable=no to allow users to zoom".to_string()),
            });
        }

        if let Some(caps) = max_scale_re.captures(content) {
            if let Ok(scale) = caps[1].parse::<f64>() {
                if scale < 2.0 {
                    issues.push(Issue {
                        rule_id: RuleId::TextSizing,
                        severity: Severity::Warning,
                        element: doc.outer_html(id),
                        message: format!("Viewport maximum-scale ({}) is too restrictive", &caps[1]),
                        suggestion: Some(
                            "Set maximum-scale to at least 2.0 or remove the restriction"
                                .to_string(),
                        ),
                    });
                }
            }
        }
    }
    issues
}
