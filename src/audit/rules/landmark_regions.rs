//! Landmark regions - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Each landmark category is checked independently and reported once when
//! missing; the synthetic `<body>` placeholder stands in for the document.

use crate::dom::Document;
use crate::{Issue, RuleId, Severity};

pub(crate) fn check(doc: &Document) -> Vec<Issue> {
    let has_landmark = |tag: &str, role: &str| {
        doc.elements().iter().any(|id| {
            doc.node(*id).tag == tag || doc.attr(*id, "role") == Some(role)
        })
    };

    let categories = [
        (
            has_landmark("main", "main"),
            "Page is missing a main landmark region",
            "Add a <main> element or role=\"main\" to identify the main content",
        ),
        (
            has_landmark("header", "banner"),
            "Page is missing a header/banner landmark region",
            "Add a <header> element or role=\"banner\" for the site header",
        ),
        (
            has_landmark("nav", "navigation"),
            "Page is missing a navigation landmark region",
            "Add a <nav> element or role=\"navigation\" for navigation links",
        ),
        (
            has_landmark("footer", "contentinfo"),
            "Page is missing a footer/contentinfo landmark region",
            "Add a <footer> element or role=\"contentinfo\" for the site footer",
        ),
    ];

    categories
        .into_iter()
        .filter(|(present, _, _)| !present)
        .map(|(_, message, suggestion)| Issue {
            rule_id: RuleId::LandmarkRegions,
            severity: Severity::Info,
            element: "<body>".to_string(),
            message: message.to_string(),
            suggestion: Some(suggestion.to_string()),
        })
        .collect()
}
