//! JSON rendering of the stable output contracts.

use crate::audit::engine::FileAuditResult;
use crate::{AuditResult, FixReport};
use anyhow::Result;

/// Render one audit result as pretty JSON.
pub fn audit_report(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render several per-file audit results as one JSON array.
pub fn audit_reports(results: &[FileAuditResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Render a fix report as pretty JSON.
pub fn fix_report(report: &FixReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
