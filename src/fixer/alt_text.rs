//! Alt-text pass: add an empty alt attribute to images lacking one.

use super::FixOutcome;
use crate::dom::Document;
use crate::{Change, ChangeKind};

pub fn apply(markup: &str) -> FixOutcome {
    let mut doc = Document::parse(markup);
    let mut changes = Vec::new();

    for id in doc.elements_by_tag(&["img"]) {
        // Never overwrite an existing alt, even an empty one
        if doc.has_attr(id, "alt") {
            continue;
        }
        if matches!(doc.attr(id, "role"), Some("presentation") | Some("none")) {
            continue;
        }
        let original = doc.outer_html(id);
        doc.set_attr(id, "alt", "");
        changes.push(Change {
            kind: ChangeKind::AddAlt,
            description:
                "Added empty alt attribute for image (mark as decorative or add description)"
                    .to_string(),
            original,
            replacement: doc.outer_html(id),
        });
    }

    if changes.is_empty() {
        return FixOutcome::unchanged(markup);
    }
    FixOutcome {
        fixed: doc.to_html(),
        changes,
    }
}
