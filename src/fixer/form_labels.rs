//! Label pass: synthesize aria-label for unlabeled form controls.
//!
//! Label text priority: placeholder verbatim, then a readable transform of
//! the name attribute, then of the id, then a generic "<Type> field"
//! fallback. Controls with any existing labeling are never touched.

use super::FixOutcome;
use crate::audit::rules::{has_label, EXEMPT_INPUT_TYPES};
use crate::dom::Document;
use crate::{Change, ChangeKind};
use regex::Regex;

/// Split camelCase and snake/kebab-case into space-separated Title Case.
pub(crate) fn to_readable_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let camel_re = Regex::new("([a-z])([A-Z])").expect("valid regex");
    let spaced = camel_re.replace_all(s, "$1 $2").replace(['-', '_'], " ");
    spaced
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply(markup: &str) -> FixOutcome {
    let mut doc = Document::parse(markup);
    let mut changes = Vec::new();

    for id in doc.elements_by_tag(&["input", "select", "textarea"]) {
        let control_type = doc.attr(id, "type").unwrap_or("text").to_string();
        if EXEMPT_INPUT_TYPES.contains(&control_type.as_str()) {
            continue;
        }
        if has_label(&doc, id) {
            continue;
        }

        let label_text = if let Some(placeholder) =
            doc.attr(id, "placeholder").filter(|p| !p.is_empty())
        {
            placeholder.to_string()
        } else if let Some(name) = doc.attr(id, "name").filter(|n| !n.is_empty()) {
            to_readable_text(name)
        } else if let Some(elem_id) = doc.attr(id, "id").filter(|i| !i.is_empty()) {
            to_readable_text(elem_id)
        } else {
            format!("{} field", to_readable_text(&control_type))
        };

        let original = doc.outer_html(id);
        doc.set_attr(id, "aria-label", &label_text);
        changes.push(Change {
            kind: ChangeKind::AddAriaLabel,
            description: format!("Added aria-label=\"{label_text}\" to form input"),
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
