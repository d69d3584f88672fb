//! Audit engine - orchestrates rule execution over one markup snapshot.

use super::catalog::Catalog;
use crate::config::{Config, RuleSetting};
use crate::dom::Document;
use crate::extract;
use crate::{AuditResult, Issue, WcagLevel};
use serde::{Deserialize, Serialize};

/// Options for one audit call
#[derive(Debug, Clone, Copy)]
pub struct AuditOptions {
    pub level: WcagLevel,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            level: WcagLevel::AA,
        }
    }
}

/// An audit result tagged with the file it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAuditResult {
    pub file: String,
    #[serde(flatten)]
    pub result: AuditResult,
}

/// Main audit engine holding the immutable rule catalog
pub struct AuditEngine {
    catalog: Catalog,
}

impl AuditEngine {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Audit markup at the requested level. Level filtering is cumulative:
    /// AA includes A rules, AAA includes everything.
    pub fn audit(&self, markup: &str, options: &AuditOptions) -> AuditResult {
        self.audit_with_config(markup, options, None)
    }

    /// Audit with per-rule config overrides applied after the checks run.
    pub fn audit_with_config(
        &self,
        markup: &str,
        options: &AuditOptions,
        config: Option<&Config>,
    ) -> AuditResult {
        let doc = Document::parse(markup);
        let mut issues = Vec::new();

        for rule in self.catalog.rules() {
            if !options.level.includes(rule.wcag_level) {
                continue;
            }
            issues.extend(rule.id.check(&doc));
        }

        let issues = apply_config_to_issues(issues, config);
        AuditResult::from_issues(issues, options.level)
    }

    /// Audit file content, normalizing component dialects into HTML-shaped
    /// markup first based on the file extension.
    pub fn audit_file(
        &self,
        content: &str,
        filename: &str,
        options: &AuditOptions,
    ) -> AuditResult {
        let markup = extract::auditable_markup(content, filename);
        self.audit(&markup, options)
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop issues for rules configured off and re-tag severities that the
/// config overrides.
fn apply_config_to_issues(issues: Vec<Issue>, config: Option<&Config>) -> Vec<Issue> {
    let Some(config) = config else {
        return issues;
    };
    let mut out = Vec::with_capacity(issues.len());
    for mut issue in issues {
        match config.rules.get(&issue.rule_id.to_string()) {
            Some(RuleSetting::Off) => continue,
            Some(setting) => {
                if let Some(severity) = setting.to_severity() {
                    issue.severity = severity;
                }
                out.push(issue);
            }
            None => out.push(issue),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RuleId, Severity};
    use std::collections::HashMap;

    fn audit_at(markup: &str, level: WcagLevel) -> AuditResult {
        AuditEngine::new().audit(markup, &AuditOptions { level })
    }

    #[test]
    fn summary_counts_match_issues() {
        let result = audit_at(r#"<img src="x.jpg"><button></button>"#, WcagLevel::AA);
        assert_eq!(result.summary.total, result.issues.len());
        let errors = result
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        assert_eq!(result.summary.errors, errors);
    }

    #[test]
    fn level_a_excludes_aa_rules() {
        let markup = r#"<meta name="viewport" content="user-scalable=no">"#;
        let at_a = audit_at(markup, WcagLevel::A);
        let at_aa = audit_at(markup, WcagLevel::AA);
        assert!(!at_a.issues.iter().any(|i| i.rule_id == RuleId::TextSizing));
        assert!(at_aa.issues.iter().any(|i| i.rule_id == RuleId::TextSizing));
    }

    #[test]
    fn higher_level_is_a_superset() {
        let markup = r#"<img src="x.jpg"><h1></h1><meta name="viewport" content="user-scalable=no">"#;
        let at_a = audit_at(markup, WcagLevel::A);
        let at_aaa = audit_at(markup, WcagLevel::AAA);
        assert!(at_aaa.summary.total >= at_a.summary.total);
        for issue in &at_a.issues {
            assert!(
                at_aaa
                    .issues
                    .iter()
                    .any(|i| i.rule_id == issue.rule_id && i.element == issue.element),
                "AAA audit should contain every A issue"
            );
        }
    }

    #[test]
    fn issues_follow_catalog_order() {
        // img-alt is declared before landmark-regions
        let result = audit_at(r#"<img src="x.jpg">"#, WcagLevel::AA);
        let img_pos = result
            .issues
            .iter()
            .position(|i| i.rule_id == RuleId::ImgAlt)
            .unwrap();
        let landmark_pos = result
            .issues
            .iter()
            .position(|i| i.rule_id == RuleId::LandmarkRegions)
            .unwrap();
        assert!(img_pos < landmark_pos);
    }

    #[test]
    fn accessible_page_has_no_errors() {
        let markup = r#"
            <html lang="en">
              <body>
                <header><nav><a href="/">Home page</a></nav></header>
                <main>
                  <h1>Title</h1>
                  <img src="photo.jpg" alt="A nice photo">
                  <button>Click me</button>
                </main>
                <footer>Footer content</footer>
              </body>
            </html>
        "#;
        let result = audit_at(markup, WcagLevel::AA);
        assert_eq!(result.summary.errors, 0, "issues: {:?}", result.issues);
    }

    #[test]
    fn config_can_disable_a_rule() {
        let mut rules = HashMap::new();
        rules.insert("img-alt".to_string(), RuleSetting::Off);
        let config = Config {
            rules,
            ..Config::default()
        };
        let engine = AuditEngine::new();
        let result = engine.audit_with_config(
            r#"<img src="x.jpg">"#,
            &AuditOptions::default(),
            Some(&config),
        );
        assert!(!result.issues.iter().any(|i| i.rule_id == RuleId::ImgAlt));
    }

    #[test]
    fn config_can_override_severity() {
        let mut rules = HashMap::new();
        rules.insert("img-alt".to_string(), RuleSetting::Info);
        let config = Config {
            rules,
            ..Config::default()
        };
        let engine = AuditEngine::new();
        let result = engine.audit_with_config(
            r#"<img src="x.jpg">"#,
            &AuditOptions::default(),
            Some(&config),
        );
        let issue = result
            .issues
            .iter()
            .find(|i| i.rule_id == RuleId::ImgAlt)
            .unwrap();
        assert_eq!(issue.severity, Severity::Info);
    }

    #[test]
    fn audit_file_extracts_jsx() {
        let jsx = r#"
            function Component() {
              return (
                <div>
                  <img src="test.jpg" />
                  <button></button>
                </div>
              );
            }
        "#;
        let engine = AuditEngine::new();
        let result = engine.audit_file(jsx, "Component.jsx", &AuditOptions::default());
        assert!(result.issues.iter().any(|i| i.rule_id == RuleId::ImgAlt));
    }

    #[test]
    fn arbitrary_garbage_still_returns_well_formed_result() {
        let result = audit_at("<<<not markup at all", WcagLevel::AAA);
        assert_eq!(result.summary.total, result.issues.len());
    }
}
