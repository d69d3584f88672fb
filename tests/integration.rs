//! End-to-end audit behavior through the public API.

use a11yguard::audit::{AuditEngine, AuditOptions, Catalog};
use a11yguard::{audit, RuleId, Severity, WcagLevel};

#[test]
fn missing_alt_scenario() {
    let result = audit(r#"<img src="x.jpg">"#, WcagLevel::AA);
    let img_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.rule_id == RuleId::ImgAlt)
        .collect();
    assert_eq!(img_issues.len(), 1);
    assert_eq!(img_issues[0].severity, Severity::Error);
    assert!(img_issues[0].element.contains("x.jpg"));
}

#[test]
fn heading_order_scenario() {
    let result = audit("<h1>T</h1><h3>S</h3>", WcagLevel::AA);
    let heading_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.rule_id == RuleId::HeadingOrder)
        .collect();
    assert_eq!(heading_issues.len(), 1);
}

#[test]
fn landmark_scenario_missing_all_four() {
    let result = audit("<div>Content</div>", WcagLevel::AA);
    let landmark_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.rule_id == RuleId::LandmarkRegions)
        .collect();
    assert_eq!(landmark_issues.len(), 4);
    assert!(landmark_issues.iter().all(|i| i.severity == Severity::Info));
}

#[test]
fn landmark_scenario_complete_structure() {
    let markup = r#"<header><nav><a href="/">Home page</a></nav></header><main>Body</main><footer>End</footer>"#;
    let result = audit(markup, WcagLevel::AA);
    assert!(!result
        .issues
        .iter()
        .any(|i| i.rule_id == RuleId::LandmarkRegions));
}

#[test]
fn summary_total_always_matches_issue_count() {
    for markup in [
        "",
        "<div>Content</div>",
        r#"<img src="x.jpg"><button></button><input type="text">"#,
        "<<<garbage",
    ] {
        let result = audit(markup, WcagLevel::AAA);
        assert_eq!(result.summary.total, result.issues.len());
        assert_eq!(
            result.summary.total,
            result.summary.errors + result.summary.warnings + result.summary.info
        );
    }
}

#[test]
fn aaa_audit_is_superset_of_a() {
    let markup = r#"
        <img src="x.jpg">
        <h2></h2>
        <meta name="viewport" content="user-scalable=no">
        <a href="/x">click here</a>
    "#;
    let at_a = audit(markup, WcagLevel::A);
    let at_aaa = audit(markup, WcagLevel::AAA);

    assert!(at_aaa.summary.total >= at_a.summary.total);
    for issue in &at_a.issues {
        assert!(
            at_aaa
                .issues
                .iter()
                .any(|i| i.rule_id == issue.rule_id && i.message == issue.message),
            "AAA should include A-level issue {:?}",
            issue.rule_id
        );
    }
}

#[test]
fn unknown_level_defaults_to_aa() {
    assert_eq!(WcagLevel::from_str_or_default("gold"), WcagLevel::AA);
    assert_eq!(WcagLevel::from_str_or_default("aaa"), WcagLevel::AAA);
    assert_eq!(WcagLevel::from_str_or_default(" a "), WcagLevel::A);
}

#[test]
fn catalog_lookup_surface() {
    let catalog = Catalog::new();
    assert_eq!(catalog.rules().len(), 13);
    assert!(catalog.rule("heading-order").is_some());
    assert_eq!(
        catalog.rules_by_level(WcagLevel::A).len()
            + catalog.rules_by_level(WcagLevel::AA).len()
            + catalog.rules_by_level(WcagLevel::AAA).len(),
        13
    );
}

#[test]
fn run_rule_unknown_id_is_the_only_error_path() {
    let catalog = Catalog::new();
    assert!(catalog.run_rule("img-alt", "<p>fine</p>").is_ok());
    assert!(catalog.run_rule("imaginary-rule", "<p>fine</p>").is_err());
}

#[test]
fn audit_never_fails_on_arbitrary_input() {
    let engine = AuditEngine::new();
    for markup in ["", "\u{0}\u{1}", "<", "</", "<!", "<a", "plain text", "<p"] {
        let result = engine.audit(markup, &AuditOptions::default());
        assert_eq!(result.summary.total, result.issues.len());
    }
}

#[test]
fn fragment_audits_do_not_demand_a_document() {
    // No <html> element: the language rule stays silent
    let result = audit("<p>hello</p>", WcagLevel::AA);
    assert!(!result.issues.iter().any(|i| i.rule_id == RuleId::HtmlLang));
}

#[test]
fn aria_and_keyboard_rules_fire_together() {
    let markup = r#"
        <div role="wizard">x</div>
        <div aria-hidden="true"><button>hidden</button></div>
        <input tabindex="5" aria-label="Search">
        <span onclick="go()">Go</span>
    "#;
    let result = audit(markup, WcagLevel::AA);
    let rule_ids: Vec<RuleId> = result.issues.iter().map(|i| i.rule_id).collect();
    assert!(rule_ids.contains(&RuleId::AriaValidRole));
    assert!(rule_ids.contains(&RuleId::AriaHiddenFocus));
    assert!(rule_ids.contains(&RuleId::TabindexPositive));
    assert!(rule_ids.contains(&RuleId::SemanticButton));
}
