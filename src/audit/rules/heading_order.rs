//! Heading hierarchy - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Tracks the most recently seen heading depth and flags a heading that
//! jumps more than one step deeper. Returning to any shallower depth is
//! always allowed.

use super::{heading_depth, HEADING_TAGS};
use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut last_depth = 0u8;

    for id in doc.elements_by_tag(HEADING_TAGS) {
        let Some(depth) = heading_depth(&doc.node(id).tag) else {
            continue;
        };
        if last_depth > 0 && depth > last_depth + 1 {
            issues.push(Issue {
                rule_id: RuleId::HeadingOrder,
                severity: Severity::Warning,
                element: doc.outer_html(id),
                message: format!("Heading level h{depth} skipped from h{last_depth}"),
                suggestion: Some(format!(
                    "Use h{} instead, or add intermediate heading levels",
                    last_depth + 1
                )),
            });
        }
        last_depth = depth;
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
    fn flags_skipped_level() {
        let issues = run("<h1>T</h1><h3>S</h3>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, RuleId::HeadingOrder);
        assert!(issues[0].message.contains("h3"));
        assert!(issues[0].message.contains("h1"));
    }

    #[test]
    fn sequential_levels_pass() {
        assert!(run("<h1>A</h1><h2>B</h2><h3>C</h3>").is_empty());
    }

    #[test]
    fn jumping_back_is_allowed() {
        assert!(run("<h1>A</h1><h2>B</h2><h3>C</h3><h1>D</h1><h2>E</h2>").is_empty());
    }

    #[test]
    fn first_heading_sets_baseline() {
        // Starting at h2 is not itself a skip
        assert!(run("<h2>Only</h2>").is_empty());
    }

    #[test]
    fn skip_after_jump_back_is_flagged() {
        let issues = run("<h1>A</h1><h3>B</h3><h2>C</h2><h4>D</h4>");
        // h1->h3 skips; h3->h2 fine; h2->h4 skips
        assert_eq!(issues.len(), 2);
    }
}
