//! Button-naming pass: synthesize aria-label for nameless controls.
//!
//! Icon-only buttons get a label inferred from class-name keywords; the
//! rest get a generic placeholder a human should replace.

use super::FixOutcome;
use crate::audit::rules::{button_like, has_accessible_name};
use crate::dom::{Document, NodeId};
use crate::{Change, ChangeKind};

const CLASS_KEYWORD_LABELS: &[(&str, &str)] = &[
    ("close", "Close"),
    ("menu", "Menu"),
    ("search", "Search"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("add", "Add"),
    ("remove", "Remove"),
    ("submit", "Submit"),
    ("cancel", "Cancel"),
];

fn has_icon_child(doc: &Document, id: NodeId) -> bool {
    doc.descendant_elements(id).iter().any(|d| {
        let node = doc.node(*d);
        node.tag == "svg"
            || node.tag == "i"
            || (node.tag == "span"
                && doc.attr(*d, "class").is_some_and(|c| c.contains("icon")))
    })
}

fn infer_label(doc: &Document, id: NodeId) -> String {
    if !has_icon_child(doc, id) {
        return "Button".to_string();
    }
    let class = doc.attr(id, "class").unwrap_or("");
    for (keyword, label) in CLASS_KEYWORD_LABELS {
        if class.contains(keyword) {
            return (*label).to_string();
        }
    }
    "Button (needs description)".to_string()
}

pub fn apply(markup: &str) -> FixOutcome {
    let mut doc = Document::parse(markup);
    let mut changes = Vec::new();

    for id in button_like(&doc) {
        if has_accessible_name(&doc, id) {
            continue;
        }
        let label = infer_label(&doc, id);
        let original = doc.outer_html(id);
        doc.set_attr(id, "aria-label", &label);
        changes.push(Change {
            kind: ChangeKind::AddButtonLabel,
            description: format!("Added aria-label=\"{label}\" to button"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_icon_button_from_class_keyword() {
        let outcome = apply(r#"<button class="btn-close"><svg></svg></button>"#);
        assert!(outcome.fixed.contains(r#"aria-label="Close""#));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].kind, ChangeKind::AddButtonLabel);
    }

    #[test]
    fn keyword_mapping_covers_common_actions() {
        for (keyword, label) in [("menu", "Menu"), ("search", "Search"), ("delete", "Delete")] {
            let markup = format!(r#"<button class="{keyword}-btn"><i></i></button>"#);
            let outcome = apply(&markup);
            assert!(
                outcome.fixed.contains(&format!(r#"aria-label="{label}""#)),
                "class {keyword} should label as {label}"
            );
        }
    }

    #[test]
    fn icon_without_keyword_gets_placeholder() {
        let outcome = apply(r#"<button class="fancy"><span class="icon-star"></span></button>"#);
        assert!(outcome
            .fixed
            .contains(r#"aria-label="Button (needs description)""#));
    }

    #[test]
    fn plain_empty_button_gets_generic_label() {
        let outcome = apply("<button></button>");
        assert!(outcome.fixed.contains(r#"aria-label="Button""#));
    }

    #[test]
    fn role_button_elements_are_covered() {
        let outcome = apply(r#"<div role="button" class="close"><svg></svg></div>"#);
        assert!(outcome.fixed.contains(r#"aria-label="Close""#));
    }

    #[test]
    fn named_buttons_are_untouched() {
        for markup in [
            "<button>Save</button>",
            r#"<button aria-label="Close"></button>"#,
            r#"<button title="Help"></button>"#,
        ] {
            let outcome = apply(markup);
            assert_eq!(outcome.fixed, markup);
            assert!(outcome.changes.is_empty());
        }
    }

    #[test]
    fn is_idempotent() {
        let outcome = apply(r#"<button class="icon-menu"><i></i></button><button></button>"#);
        assert_eq!(outcome.changes.len(), 2);
        let again = apply(&outcome.fixed);
        assert_eq!(again.fixed, outcome.fixed);
        assert!(again.changes.is_empty());
    }
}
