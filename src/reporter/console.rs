//! Console reporter with colored output

use crate::audit::Catalog;
use crate::{AuditResult, FixReport, Issue, RuleId, Severity};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report one audit result
    pub fn report_audit(&self, result: &AuditResult, source: Option<&str>) {
        println!();
        match source {
            Some(name) => println!("{}", format!("Accessibility audit: {name}").bold()),
            None => println!("{}", "Accessibility audit".bold()),
        }
        self.print_summary(result);

        if result.issues.is_empty() {
            println!("   {}", "No accessibility issues found".green());
            println!();
            return;
        }

        let catalog = Catalog::new();
        println!("   {}", "Issues:".bold());
        for (rule_id, issues) in group_by_rule(&result.issues) {
            let rule = catalog.rule(&rule_id.to_string());
            let heading = match rule {
                Some(r) => format!(
                    "{} ({} issue{})",
                    r.name,
                    issues.len(),
                    if issues.len() > 1 { "s" } else { "" }
                ),
                None => rule_id.to_string(),
            };
            println!();
            println!("   {} {}", self.severity_icon(issues[0].severity), heading);
            if let Some(r) = rule {
                println!(
                    "     {}",
                    format!("Rule: {} | WCAG {}", r.id, r.wcag_criteria).dimmed()
                );
            }
            for issue in issues {
                self.print_issue(issue);
            }
        }
        println!();
    }

    /// Report quiet mode: one line of severity counts
    pub fn report_quiet(&self, result: &AuditResult, source: &str) {
        println!(
            "{source}: {} errors, {} warnings, {} info",
            result.summary.errors, result.summary.warnings, result.summary.info
        );
    }

    /// Report the result of a fix run
    pub fn report_fixes(&self, report: &FixReport, source: Option<&str>) {
        println!();
        match source {
            Some(name) => println!("{}", format!("Fixes applied: {name}").bold()),
            None => println!("{}", "Fixes applied".bold()),
        }
        if report.changes.is_empty() {
            println!("   Nothing to fix");
            println!();
            return;
        }
        for (kind, count) in &report.summary.by_type {
            println!("   {} {} x{}", "+".green(), kind, count);
        }
        if self.verbose {
            println!();
            for change in &report.changes {
                println!("   {} {}", "-".red(), truncate(&change.original, 70).dimmed());
                println!("   {} {}", "+".green(), truncate(&change.replacement, 70));
            }
        }
        println!(
            "   {} change{} total",
            report.summary.total_changes.to_string().bold(),
            if report.summary.total_changes == 1 { "" } else { "s" }
        );
        println!();
    }

    fn print_summary(&self, result: &AuditResult) {
        let errors = result.summary.errors.to_string();
        let warnings = result.summary.warnings.to_string();
        println!(
            "   Level: WCAG {} | Total: {} | Errors: {} | Warnings: {} | Info: {}",
            result.summary.level,
            result.summary.total,
            if self.use_colors && result.summary.errors > 0 {
                errors.red().to_string()
            } else {
                errors
            },
            if self.use_colors && result.summary.warnings > 0 {
                warnings.yellow().to_string()
            } else {
                warnings
            },
            result.summary.info
        );
    }

    fn print_issue(&self, issue: &Issue) {
        println!("     {} {}", "-".dimmed(), issue.message);
        if !issue.element.is_empty() {
            println!(
                "       {}",
                format!("Element: {}", truncate(&issue.element, 60)).dimmed()
            );
        }
        if self.verbose {
            if let Some(ref suggestion) = issue.suggestion {
                println!("       {} {}", "→".cyan(), suggestion.italic());
            }
        }
    }

    fn severity_icon(&self, severity: Severity) -> colored::ColoredString {
        match severity {
            Severity::Error => "✗ [error]".red(),
            Severity::Warning => "⚠ [warning]".yellow(),
            Severity::Info => "ℹ [info]".blue(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Group issues by rule, preserving first-seen order.
fn group_by_rule(issues: &[Issue]) -> Vec<(RuleId, Vec<&Issue>)> {
    let mut groups: Vec<(RuleId, Vec<&Issue>)> = Vec::new();
    for issue in issues {
        match groups.iter_mut().find(|(id, _)| *id == issue.rule_id) {
            Some((_, list)) => list.push(issue),
            None => groups.push((issue.rule_id, vec![issue])),
        }
    }
    groups
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleId;

    fn issue(rule_id: RuleId, message: &str) -> Issue {
        Issue {
            rule_id,
            severity: Severity::Error,
            element: "<img>".to_string(),
            message: message.to_string(),
            suggestion: None,
        }
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let issues = vec![
            issue(RuleId::ImgAlt, "a"),
            issue(RuleId::FormLabel, "b"),
            issue(RuleId::ImgAlt, "c"),
        ];
        let groups = group_by_rule(&issues);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, RuleId::ImgAlt);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, RuleId::FormLabel);
    }

    #[test]
    fn truncate_short_strings_untouched() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn truncate_long_strings_elided() {
        let long = "x".repeat(100);
        let out = truncate(&long, 60);
        assert!(out.len() <= 60);
        assert!(out.ends_with("..."));
    }
}
