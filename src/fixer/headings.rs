//! Heading-hierarchy pass: rewrite headings that skip levels.
//!
//! A heading deeper than one step below the running depth is renamed to
//! `last + 1`; the running depth then follows the corrected value so the
//! rest of the document is checked against the repaired chain.

use super::FixOutcome;
use crate::audit::rules::{heading_depth, HEADING_TAGS};
use crate::dom::Document;
use crate::{Change, ChangeKind};

pub fn apply(markup: &str) -> FixOutcome {
    let mut doc = Document::parse(markup);
    let mut changes = Vec::new();
    let mut last_depth = 0u8;

    for id in doc.elements_by_tag(HEADING_TAGS) {
        let Some(depth) = heading_depth(&doc.node(id).tag) else {
            continue;
        };
        if last_depth > 0 && depth > last_depth + 1 {
            let corrected = last_depth + 1;
            let original = doc.outer_html(id);
            doc.rename_tag(id, &format!("h{corrected}"));
            changes.push(Change {
                kind: ChangeKind::FixHeadingLevel,
                description: format!("Changed h{depth} to h{corrected} to fix hierarchy"),
                original,
                replacement: doc.outer_html(id),
            });
            last_depth = corrected;
        } else {
            last_depth = depth;
        }
    }

    if changes.is_empty() {
        return FixOutcome::unchanged(markup);
    }
    FixOutcome {
        fixed: doc.to_html(),
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_skipped_level() {
        let outcome = apply("<h1>T</h1><h3>S</h3>");
        assert!(outcome.fixed.contains("<h2>S</h2>"));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].kind, ChangeKind::FixHeadingLevel);
        assert!(outcome.changes[0].original.contains("<h3>"));
        assert!(outcome.changes[0].replacement.contains("<h2>"));
    }

    #[test]
    fn preserves_attributes_and_content() {
        let outcome = apply(r#"<h1>A</h1><h4 class="sub" id="s">Deep <em>text</em></h4>"#);
        assert!(outcome
            .fixed
            .contains(r#"<h2 class="sub" id="s">Deep <em>text</em></h2>"#));
    }

    #[test]
    fn corrected_depth_feeds_the_chain() {
        // h1 -> h4 corrects to h2; the following h3 is then only one step
        // deeper and stays
        let outcome = apply("<h1>A</h1><h4>B</h4><h3>C</h3>");
        assert_eq!(outcome.changes.len(), 1);
        assert!(outcome.fixed.contains("<h2>B</h2>"));
        assert!(outcome.fixed.contains("<h3>C</h3>"));
    }

    #[test]
    fn sequential_headings_untouched() {
        let markup = "<h1>A</h1><h2>B</h2><h3>C</h3><h1>D</h1>";
        let outcome = apply(markup);
        assert_eq!(outcome.fixed, markup);
        assert!(outcome.changes.is_empty());
    }

    #[test]
    fn is_idempotent() {
        let outcome = apply("<h2>A</h2><h6>B</h6><h6>C</h6>");
        let again = apply(&outcome.fixed);
        assert_eq!(again.fixed, outcome.fixed);
        assert!(again.changes.is_empty());
    }
}
