//! Custom assertion helpers for E2E tests.

use sp_core::config::Severity;
use sp_core::config::ValidationIssue;

/// True when no issue has error severity.
pub fn has_no_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().all(|issue| issue.severity != Severity::Error)
}

/// Assert that some issue of `severity` mentions `needle`.
pub fn assert_issue(issues: &[ValidationIssue], severity: Severity, needle: &str) {
    assert!(
        issues
            .iter()
            .any(|issue| issue.severity == severity && issue.message.contains(needle)),
        "Expected a {severity} mentioning '{needle}', got: {issues:?}"
    );
}
