//! a11yguard: accessibility auditor and auto-fixer for HTML
//!
//! This library audits markup against a fixed catalog of WCAG-derived rules,
//! reports issues with severity and remediation guidance, and can apply a
//! bounded set of idempotent automatic fixes.

pub mod audit;
pub mod color;
pub mod config;
pub mod contrast;
pub mod dom;
pub mod extract;
pub mod fixer;
pub mod reporter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// WCAG conformance level. Levels are cumulative: AA includes A, AAA
/// includes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl WcagLevel {
    /// Parse a level string case-insensitively; anything unrecognized
    /// falls back to the AA default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A" => WcagLevel::A,
            "AAA" => WcagLevel::AAA,
            _ => WcagLevel::AA,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            WcagLevel::A => 0,
            WcagLevel::AA => 1,
            WcagLevel::AAA => 2,
        }
    }

    /// Whether auditing at `self` includes rules registered at `other`.
    pub fn includes(&self, other: WcagLevel) -> bool {
        self.rank() >= other.rank()
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Catalog rule identifiers. One variant per registered rule; ids
/// serialize in kebab-case for the downstream report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ImgAlt,
    FormLabel,
    HeadingOrder,
    HtmlLang,
    ButtonName,
    LinkName,
    AriaValidRole,
    AriaHiddenFocus,
    TabindexPositive,
    SemanticButton,
    TextSizing,
    HeadingContent,
    LandmarkRegions,
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleId::ImgAlt => write!(f, "img-alt"),
            RuleId::FormLabel => write!(f, "form-label"),
            RuleId::HeadingOrder => write!(f, "heading-order"),
            RuleId::HtmlLang => write!(f, "html-lang"),
            RuleId::ButtonName => write!(f, "button-name"),
            RuleId::LinkName => write!(f, "link-name"),
            RuleId::AriaValidRole => write!(f, "aria-valid-role"),
            RuleId::AriaHiddenFocus => write!(f, "aria-hidden-focus"),
            RuleId::TabindexPositive => write!(f, "tabindex-positive"),
            RuleId::SemanticButton => write!(f, "semantic-button"),
            RuleId::TextSizing => write!(f, "text-sizing"),
            RuleId::HeadingContent => write!(f, "heading-content"),
            RuleId::LandmarkRegions => write!(f, "landmark-regions"),
        }
    }
}

/// One reported defect from a single rule against one matched element
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Rule that found this issue
    pub rule_id: RuleId,
    /// Severity of the issue
    pub severity: Severity,
    /// Markup snippet of the matched element, or a synthetic placeholder
    /// like `<body>` for document-scoped issues
    pub element: String,
    /// Human-readable message
    pub message: String,
    /// Suggested remediation (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Issue counts by severity for one audit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub level: WcagLevel,
}

/// The result of one audit call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub issues: Vec<Issue>,
    pub summary: AuditSummary,
}

impl AuditResult {
    /// Fold issues into a summary. `total` always equals `issues.len()`.
    pub fn from_issues(issues: Vec<Issue>, level: WcagLevel) -> Self {
        let count = |s: Severity| issues.iter().filter(|i| i.severity == s).count();
        let summary = AuditSummary {
            total: issues.len(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            info: count(Severity::Info),
            level,
        };
        AuditResult { issues, summary }
    }
}

/// The kind of rewrite a fix pass applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    AddAlt,
    AddAriaLabel,
    FixHeadingLevel,
    AddLang,
    AddButtonLabel,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::AddAlt => write!(f, "add-alt"),
            ChangeKind::AddAriaLabel => write!(f, "add-aria-label"),
            ChangeKind::FixHeadingLevel => write!(f, "fix-heading-level"),
            ChangeKind::AddLang => write!(f, "add-lang"),
            ChangeKind::AddButtonLabel => write!(f, "add-button-label"),
        }
    }
}

/// One attributable rewrite from a fix pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub description: String,
    pub original: String,
    pub replacement: String,
}

/// Change counts grouped by kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSummary {
    pub total_changes: usize,
    pub by_type: BTreeMap<String, usize>,
}

/// The composite result of running the whole fix pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixReport {
    pub fixed: String,
    pub changes: Vec<Change>,
    pub summary: FixSummary,
}

/// Public API: audit a markup string at the given level.
pub fn audit(markup: &str, level: WcagLevel) -> AuditResult {
    let engine = audit::AuditEngine::new();
    engine.audit(markup, &audit::AuditOptions { level })
}

/// Public API: audit file content, normalizing component dialects
/// (jsx/tsx/vue/svelte) into HTML-shaped markup first.
pub fn audit_file(content: &str, filename: &str, level: WcagLevel) -> AuditResult {
    let engine = audit::AuditEngine::new();
    engine.audit_file(content, filename, &audit::AuditOptions { level })
}

/// Public API: run every fix pass in order with default options.
pub fn fix_all(markup: &str) -> FixReport {
    fixer::fix_all(markup, &fixer::FixOptions::default())
}
