//! The immutable rule catalog.
//!
//! Rules are registered once, in a fixed order, and looked up by their
//! kebab-case id. Checks dispatch through the closed [`RuleId`] enum, so
//! the catalog is a plain value with no dynamic registration.

use super::rules;
use crate::dom::Document;
use crate::{Issue, RuleId, Severity, WcagLevel};
use thiserror::Error;

/// Metadata for one registered rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    pub description: &'static str,
    pub wcag_level: WcagLevel,
    pub wcag_criteria: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Rule not found: {0}")]
    RuleNotFound(String),
}

impl RuleId {
    /// Run this rule's check against a parsed document.
    pub fn check(&self, doc: &Document) -> Vec<Issue> {
        match self {
            RuleId::ImgAlt => rules::img_alt::check(doc),
            RuleId::FormLabel => rules::form_label::check(doc),
            RuleId::HeadingOrder => rules::heading_order::check(doc),
            RuleId::HtmlLang => rules::html_lang::check(doc),
            RuleId::ButtonName => rules::button_name::check(doc),
            RuleId::LinkName => rules::link_name::check(doc),
            RuleId::AriaValidRole => rules::aria_valid_role::check(doc),
            RuleId::AriaHiddenFocus => rules::aria_hidden_focus::check(doc),
            RuleId::TabindexPositive => rules::tabindex_positive::check(doc),
            RuleId::SemanticButton => rules::semantic_button::check(doc),
            RuleId::TextSizing => rules::text_sizing::check(doc),
            RuleId::HeadingContent => rules::heading_content::check(doc),
            RuleId::LandmarkRegions => rules::landmark_regions::check(doc),
        }
    }
}

/// The ordered, immutable set of registered rules
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<Rule>,
}

impl Catalog {
    pub fn new() -> Self {
        let rules = vec![
            Rule {
                id: RuleId::ImgAlt,
                name: "Image Alternative Text",
                description: "Images must have alternative text",
                wcag_level: WcagLevel::A,
                wcag_criteria: "1.1.1",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::FormLabel,
                name: "Form Input Labels",
                description: "Form inputs must have associated labels",
                wcag_level: WcagLevel::A,
                wcag_criteria: "1.3.1",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::HeadingOrder,
                name: "Heading Hierarchy",
                description: "Heading levels should not skip levels",
                wcag_level: WcagLevel::A,
                wcag_criteria: "1.3.1",
                severity: Severity::Warning,
            },
            Rule {
                id: RuleId::HtmlLang,
                name: "Page Language",
                description: "HTML element must have a lang attribute",
                wcag_level: WcagLevel::A,
                wcag_criteria: "3.1.1",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::ButtonName,
                name: "Button Accessible Name",
                description: "Buttons must have an accessible name",
                wcag_level: WcagLevel::A,
                wcag_criteria: "4.1.2",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::LinkName,
                name: "Link Purpose",
                description: "Links must have an accessible and descriptive name",
                wcag_level: WcagLevel::A,
                wcag_criteria: "2.4.4",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::AriaValidRole,
                name: "Valid ARIA Roles",
                description: "ARIA roles must be valid",
                wcag_level: WcagLevel::A,
                wcag_criteria: "4.1.2",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::AriaHiddenFocus,
                name: "ARIA Hidden Focusable",
                description: "aria-hidden elements should not contain focusable elements",
                wcag_level: WcagLevel::A,
                wcag_criteria: "4.1.2",
                severity: Severity::Error,
            },
            Rule {
                id: RuleId::TabindexPositive,
                name: "Positive Tabindex",
                description: "Avoid positive tabindex values",
                wcag_level: WcagLevel::A,
                wcag_criteria: "2.4.7",
                severity: Severity::Warning,
            },
            Rule {
                id: RuleId::SemanticButton,
                name: "Semantic Button",
                description: "Use semantic button elements instead of clickable divs",
                wcag_level: WcagLevel::A,
                wcag_criteria: "4.1.2",
                severity: Severity::Warning,
            },
            Rule {
                id: RuleId::TextSizing,
                name: "Text Sizing",
                description: "Text should be resizable up to 200% without loss of content",
                wcag_level: WcagLevel::AA,
                wcag_criteria: "1.4.4",
                severity: Severity::Warning,
            },
            Rule {
                id: RuleId::HeadingContent,
                name: "Heading Content",
                description: "Headings should have meaningful content",
                wcag_level: WcagLevel::AA,
                wcag_criteria: "2.4.6",
                severity: Severity::Warning,
            },
            Rule {
                id: RuleId::LandmarkRegions,
                name: "Landmark Regions",
                description: "Page should have proper landmark regions",
                wcag_level: WcagLevel::A,
                wcag_criteria: "1.3.1",
                severity: Severity::Info,
            },
        ];
        Catalog { rules }
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by its kebab-case id.
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id.to_string() == id)
    }

    /// Rules registered at exactly `level`.
    pub fn rules_by_level(&self, level: WcagLevel) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.wcag_level == level).collect()
    }

    /// Run a single rule against markup. Unknown ids are programmer error
    /// and surface as [`CatalogError::RuleNotFound`].
    pub fn run_rule(&self, id: &str, markup: &str) -> Result<Vec<Issue>, CatalogError> {
        let rule = self
            .rule(id)
            .ok_or_else(|| CatalogError::RuleNotFound(id.to_string()))?;
        let doc = Document::parse(markup);
        Ok(rule.id.check(&doc))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
