//! Accessibility rule checks, one module per catalog entry.
//!
//! Every check is a pure function from the parsed markup tree to a list of
//! issues: no shared state, safe to run in any order. Issue order within a
//! check follows document order of the matched elements.

pub mod aria_hidden_focus;
pub mod aria_valid_role;
pub mod button_name;
pub mod form_label;
pub mod heading_content;
pub mod heading_order;
pub mod html_lang;
pub mod img_alt;
pub mod landmark_regions;
pub mod link_name;
pub mod semantic_button;
pub mod tabindex_positive;
pub mod text_sizing;

use crate::dom::{Document, NodeId};

/// Input types that carry their own labeling or are invisible.
pub(crate) const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

/// Natively focusable tags.
pub(crate) const FOCUSABLE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

/// Link text too generic to describe a destination.
pub(crate) const GENERIC_LINK_TEXT: &[&str] = &[
    "click here",
    "here",
    "read more",
    "more",
    "link",
    "learn more",
    "click",
    "this",
    "go",
    "see more",
    "continue",
    "details",
];

/// Role vocabulary per the WAI-ARIA specification.
pub(crate) const VALID_ARIA_ROLES: &[&str] = &[
    "alert",
    "alertdialog",
    "application",
    "article",
    "banner",
    "button",
    "cell",
    "checkbox",
    "columnheader",
    "combobox",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "grid",
    "gridcell",
    "group",
    "heading",
    "img",
    "link",
    "list",
    "listbox",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "navigation",
    "none",
    "note",
    "option",
    "presentation",
    "progressbar",
    "radio",
    "radiogroup",
    "region",
    "row",
    "rowgroup",
    "rowheader",
    "scrollbar",
    "search",
    "searchbox",
    "separator",
    "slider",
    "spinbutton",
    "status",
    "switch",
    "tab",
    "table",
    "tablist",
    "tabpanel",
    "term",
    "textbox",
    "timer",
    "toolbar",
    "tooltip",
    "tree",
    "treegrid",
    "treeitem",
];

/// Heading depth for `h1`..`h6` tags.
pub(crate) fn heading_depth(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

pub(crate) const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Attribute present with a non-empty value. Most naming attributes only
/// count when they actually carry text.
pub(crate) fn attr_nonempty(doc: &Document, id: NodeId, name: &str) -> bool {
    doc.attr(id, name).is_some_and(|v| !v.is_empty())
}

/// Whether a form control has any programmatic label: aria attributes, a
/// `label[for]` association, a wrapping label, or a title.
pub(crate) fn has_label(doc: &Document, control: NodeId) -> bool {
    if attr_nonempty(doc, control, "aria-label") || attr_nonempty(doc, control, "aria-labelledby")
    {
        return true;
    }
    if let Some(id) = doc.attr(control, "id") {
        if !id.is_empty()
            && doc
                .elements_by_tag(&["label"])
                .iter()
                .any(|l| doc.attr(*l, "for") == Some(id))
        {
            return true;
        }
    }
    if doc.has_ancestor_tag(control, "label") {
        return true;
    }
    attr_nonempty(doc, control, "title")
}

/// Elements that present as buttons: the native tag or an explicit role.
pub(crate) fn button_like(doc: &Document) -> Vec<NodeId> {
    doc.elements()
        .into_iter()
        .filter(|id| doc.node(*id).tag == "button" || doc.attr(*id, "role") == Some("button"))
        .collect()
}

/// Whether a button-like element exposes any accessible name.
pub(crate) fn has_accessible_name(doc: &Document, id: NodeId) -> bool {
    !doc.text_content(id).trim().is_empty()
        || attr_nonempty(doc, id, "aria-label")
        || attr_nonempty(doc, id, "aria-labelledby")
        || attr_nonempty(doc, id, "title")
}
