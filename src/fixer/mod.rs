//! Auto-fix pipeline.
//!
//! Five independent rewriting passes, each idempotent: running a pass on
//! its own output yields identical markup and zero further changes. A pass
//! parses its input into a fresh tree, collects substitutions in document
//! order, and serializes; when nothing matched, the input string is
//! returned untouched. `fix_all` threads the passes in a fixed order so
//! later passes see earlier output.

pub mod alt_text;
pub mod button_names;
pub mod document_lang;
pub mod form_labels;
pub mod headings;

use crate::{Change, FixReport, FixSummary};
use std::collections::BTreeMap;

/// The result of one fix pass
#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub fixed: String,
    pub changes: Vec<Change>,
}

impl FixOutcome {
    pub(crate) fn unchanged(markup: &str) -> Self {
        Self {
            fixed: markup.to_string(),
            changes: Vec::new(),
        }
    }
}

/// Options for the fix pipeline
#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Language code the document-language pass applies when none is set
    pub lang: String,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
        }
    }
}

/// Run every pass in pipeline order, flattening changes pass-then-document
/// order and grouping counts by change kind.
pub fn fix_all(markup: &str, options: &FixOptions) -> FixReport {
    let mut current = markup.to_string();
    let mut changes = Vec::new();

    let passes: [&dyn Fn(&str) -> FixOutcome; 5] = [
        &alt_text::apply,
        &form_labels::apply,
        &headings::apply,
        &|m: &str| document_lang::apply(m, &options.lang),
        &button_names::apply,
    ];

    for pass in passes {
        let outcome = pass(&current);
        current = outcome.fixed;
        changes.extend(outcome.changes);
    }

    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    for change in &changes {
        *by_type.entry(change.kind.to_string()).or_insert(0) += 1;
    }

    FixReport {
        fixed: current,
        summary: FixSummary {
            total_changes: changes.len(),
            by_type,
        },
        changes,
    }
}

/// Line-oriented diff between original and fixed markup. Emits `-`/`+`
/// lines for every differing line position; a display aid, not a minimal
/// edit script.
pub fn generate_patch(original: &str, fixed: &str) -> String {
    let original_lines: Vec<&str> = original.split('\n').collect();
    let fixed_lines: Vec<&str> = fixed.split('\n').collect();
    let mut patch = Vec::new();

    for i in 0..original_lines.len().max(fixed_lines.len()) {
        let before = original_lines.get(i);
        let after = fixed_lines.get(i);
        if before != after {
            if let Some(line) = before {
                patch.push(format!("- {line}"));
            }
            if let Some(line) = after {
                patch.push(format!("+ {line}"));
            }
        }
    }

    patch.join("\n")
}
