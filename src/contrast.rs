//! Contrast analysis - WCAG 1.4.3 Contrast (Minimum) and 1.4.6 (Enhanced)
//!
//! Evaluates declared foreground/background pairs against the required
//! ratio for a level, scans style rule-sets and inline `style=` attributes
//! for failing pairs, and searches for a corrected foreground color.

use crate::color::{clamp_channel, contrast_ratio, Color};
use crate::dom::Document;
use crate::WcagLevel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contrast evaluation of one foreground/background pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastFinding {
    pub foreground: String,
    pub background: String,
    /// Display ratio, rounded to 2 decimals. Pass/fail uses the unrounded
    /// value.
    pub ratio: f64,
    pub required_ratio: f64,
    pub level: WcagLevel,
    pub passes: bool,
    /// CSS selector the pair was declared under, when scanning a rule-set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Element snippet, when scanning inline styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

/// A corrected foreground color from [`suggest_fix`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastSuggestion {
    pub original_foreground: String,
    pub original_background: String,
    /// Suggested replacement, hex-encoded
    pub suggested_foreground: String,
    pub new_ratio: f64,
    pub required_ratio: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContrastError {
    #[error("could not parse colors")]
    UnparseableColor,
}

/// Required contrast ratio for a level and text size.
/// Level A carries no contrast criterion of its own and evaluates with the
/// AA table.
pub fn required_ratio(level: WcagLevel, is_large_text: bool) -> f64 {
    match level {
        WcagLevel::AAA => {
            if is_large_text {
                4.5
            } else {
                7.0
            }
        }
        _ => {
            if is_large_text {
                3.0
            } else {
                4.5
            }
        }
    }
}

/// Evaluate one foreground/background pair against the level requirement.
/// Unparseable colors degrade to a 1:1 ratio, never an error.
pub fn meets_requirement(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    is_large_text: bool,
) -> ContrastFinding {
    let required = required_ratio(level, is_large_text);
    let ratio = crate::color::contrast_ratio_str(foreground, background);
    ContrastFinding {
        foreground: foreground.to_string(),
        background: background.to_string(),
        ratio: round2(ratio),
        required_ratio: required,
        level,
        passes: ratio >= required,
        selector: None,
        element: None,
    }
}

/// Scan a CSS rule-set and any inline `style=` attributes in `source` for
/// failing color pairs. Only pairs where both sides parse as a single solid
/// color are evaluated; shorthand `background` values that do not parse
/// (gradients, images) are skipped, not flagged.
pub fn scan_declarations(source: &str, level: WcagLevel) -> Vec<ContrastFinding> {
    let mut findings = scan_stylesheet(source, level);
    findings.extend(scan_inline_styles(source, level));
    findings
}

/// Scan `selector { declarations }` blocks.
pub fn scan_stylesheet(css: &str, level: WcagLevel) -> Vec<ContrastFinding> {
    let block_re = Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("valid regex");
    let mut findings = Vec::new();

    for caps in block_re.captures_iter(css) {
        let selector = caps[1].trim().to_string();
        let declarations = &caps[2];
        if let Some((fg, bg)) = declared_pair(declarations) {
            let mut finding = meets_requirement(&fg, &bg, level, false);
            if !finding.passes {
                finding.selector = Some(selector);
                findings.push(finding);
            }
        }
    }

    findings
}

/// Scan `style="…"` attributes of elements in markup.
pub fn scan_inline_styles(markup: &str, level: WcagLevel) -> Vec<ContrastFinding> {
    let doc = Document::parse(markup);
    let mut findings = Vec::new();

    for id in doc.elements() {
        let Some(style) = doc.attr(id, "style") else {
            continue;
        };
        if let Some((fg, bg)) = declared_pair(style) {
            let mut finding = meets_requirement(&fg, &bg, level, false);
            if !finding.passes {
                finding.element = Some(truncate(&doc.outer_html(id), 100));
                findings.push(finding);
            }
        }
    }

    findings
}

/// Pull a `color` declaration and the nearest `background`/`background-color`
/// declaration out of one declaration scope. Returns `None` unless both are
/// present and parseable. Repeated declarations resolve like the cascade:
/// last one wins.
fn declared_pair(declarations: &str) -> Option<(String, String)> {
    let color_re = Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*([^;]+)").expect("valid regex");
    let bg_re = Regex::new(r"(?i)(?:^|;)\s*background(?:-color)?\s*:\s*([^;]+)").expect("valid regex");

    let fg = color_re.captures_iter(declarations).last()?[1].trim().to_string();
    let bg = bg_re.captures_iter(declarations).last()?[1].trim().to_string();
    // Shorthand background values are only usable as a single solid color
    if Color::parse(&fg).is_none() || Color::parse(&bg).is_none() {
        return None;
    }
    Some((fg, bg))
}

/// Search for a foreground color that satisfies the requirement against the
/// given background.
///
/// Picks darken vs lighten from the background luminance midpoint, then runs
/// 20 binary-search iterations over a blend factor in [0, 1]. The iteration
/// count bounds the search to better than one channel unit of precision.
pub fn suggest_fix(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    is_large_text: bool,
) -> Result<ContrastSuggestion, ContrastError> {
    let fg = Color::parse(foreground).ok_or(ContrastError::UnparseableColor)?;
    let bg = Color::parse(background).ok_or(ContrastError::UnparseableColor)?;

    let required = required_ratio(level, is_large_text);
    let should_darken = bg.luminance() > 0.5;

    let mut low = 0.0_f64;
    let mut high = 1.0_f64;

    for _ in 0..20 {
        let mid = (low + high) / 2.0;
        if contrast_ratio(blend(fg, mid, should_darken), bg) >= required {
            high = mid;
        } else {
            low = mid;
        }
    }

    // `high` converges onto the meeting side of the interval; the last
    // midpoint itself may sit one channel unit short.
    let suggested = blend(fg, high, should_darken);
    let new_ratio = contrast_ratio(suggested, bg);
    Ok(ContrastSuggestion {
        original_foreground: foreground.to_string(),
        original_background: background.to_string(),
        suggested_foreground: suggested.to_hex(),
        new_ratio: round2(new_ratio),
        required_ratio: required,
    })
}

/// Blend a color toward black (darken) or white (lighten) by `factor`.
fn blend(color: Color, factor: f64, darken: bool) -> Color {
    let channel = |c: u8| -> u8 {
        let v = c as f64;
        if darken {
            clamp_channel(v * (1.0 - factor))
        } else {
            clamp_channel(v + (255.0 - v) * factor)
        }
    };
    Color::rgb(channel(color.r), channel(color.g), channel(color.b))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s[..end].to_string()
    }
}
