//! Markdown rendering for audit results, fixes, and contrast findings.

use crate::audit::Catalog;
use crate::contrast::ContrastFinding;
use crate::{AuditResult, FixReport, Issue, Severity};

/// Render an audit result as a Markdown report.
pub fn audit_report(result: &AuditResult) -> String {
    let mut lines = vec![
        "# Accessibility Audit Report".to_string(),
        String::new(),
        format!("## Summary (WCAG {})", result.summary.level),
        String::new(),
        "| Metric | Count |".to_string(),
        "|--------|-------|".to_string(),
        format!("| Total Issues | {} |", result.summary.total),
        format!("| Errors | {} |", result.summary.errors),
        format!("| Warnings | {} |", result.summary.warnings),
        format!("| Info | {} |", result.summary.info),
        String::new(),
    ];

    if result.issues.is_empty() {
        lines.push("**No accessibility issues found.**".to_string());
        return lines.join("\n");
    }

    let catalog = Catalog::new();
    let sections = [
        (Severity::Error, "## Errors"),
        (Severity::Warning, "## Warnings"),
        (Severity::Info, "## Info"),
    ];
    for (severity, heading) in sections {
        let matching: Vec<&Issue> = result
            .issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect();
        if matching.is_empty() {
            continue;
        }
        lines.push(heading.to_string());
        lines.push(String::new());
        for issue in matching {
            let rule = catalog.rule(&issue.rule_id.to_string());
            let name = rule.map(|r| r.name).unwrap_or("Unknown rule");
            let criteria = rule.map(|r| r.wcag_criteria).unwrap_or("N/A");
            lines.push(format!("### {name}"));
            lines.push(format!(
                "- **Rule:** `{}` (WCAG {criteria})",
                issue.rule_id
            ));
            lines.push(format!("- **Message:** {}", issue.message));
            if !issue.element.is_empty() {
                lines.push(format!("- **Element:** `{}`", truncate(&issue.element, 80)));
            }
            if let Some(ref suggestion) = issue.suggestion {
                lines.push(format!("- **Suggestion:** {suggestion}"));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Render contrast findings as a Markdown table.
pub fn contrast_report(findings: &[ContrastFinding]) -> String {
    let mut lines = vec!["# Color Contrast Report".to_string(), String::new()];

    if findings.is_empty() {
        lines.push("**No contrast issues found.**".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Found **{}** contrast issue(s):", findings.len()));
    lines.push(String::new());
    lines.push("| Location | Foreground | Background | Ratio | Required |".to_string());
    lines.push("|----------|------------|------------|-------|----------|".to_string());
    for finding in findings {
        let location = finding
            .selector
            .as_deref()
            .or(finding.element.as_deref())
            .map(|l| truncate(l, 30))
            .unwrap_or_else(|| "Unknown".to_string());
        lines.push(format!(
            "| {location} | {} | {} | {}:1 | {}:1 |",
            finding.foreground, finding.background, finding.ratio, finding.required_ratio
        ));
    }

    lines.join("\n")
}

/// Render a fix report as Markdown.
pub fn fix_report(report: &FixReport) -> String {
    let mut lines = vec!["# Applied Fixes".to_string(), String::new()];
    if report.changes.is_empty() {
        lines.push("**Nothing to fix.**".to_string());
        return lines.join("\n");
    }
    lines.push("| Fix | Count |".to_string());
    lines.push("|-----|-------|".to_string());
    for (kind, count) in &report.summary.by_type {
        lines.push(format!("| `{kind}` | {count} |"));
    }
    lines.push(String::new());
    for change in &report.changes {
        lines.push(format!("- {}", change.description));
    }
    lines.join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
