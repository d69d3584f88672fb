//! Document-language pass: set a default lang on the root element.

use super::FixOutcome;
use crate::dom::Document;
use crate::{Change, ChangeKind};

pub fn apply(markup: &str, lang: &str) -> FixOutcome {
    let mut doc = Document::parse(markup);
    let Some(html) = doc.elements_by_tag(&["html"]).into_iter().next() else {
        return FixOutcome::unchanged(markup);
    };

    // Only fill in an absent or empty attribute, never overwrite a value
    let current = doc.attr(html, "lang").unwrap_or("");
    if !current.trim().is_empty() {
        return FixOutcome::unchanged(markup);
    }

    let original = doc.start_tag_html(html);
    doc.set_attr(html, "lang", lang);
    let change = Change {
        kind: ChangeKind::AddLang,
        description: format!("Added lang=\"{lang}\" to html element"),
        original,
        replacement: doc.start_tag_html(html),
    };

    FixOutcome {
        fixed: doc.to_html(),
        changes: vec![change],
    }
}
