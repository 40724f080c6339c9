//! Assertions over validator output.

use powerenum::Diagnostic;
use powerenum::hir::Severity;

/// Codes of `diagnostics`, in report order.
pub fn codes_of(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect()
}

pub fn count_with_code(diagnostics: &[Diagnostic], code: &str) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some(code))
        .count()
}

pub fn severity_of<'a>(diagnostics: &'a [Diagnostic], code: &str) -> Option<&'a Severity> {
    diagnostics
        .iter()
        .find(|d| d.code.as_deref() == Some(code))
        .map(|d| &d.severity)
}

#[track_caller]
pub fn assert_message_contains(diagnostics: &[Diagnostic], code: &str, substring: &str) {
    let found = diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some(code))
        .any(|d| d.message.contains(substring));
    assert!(
        found,
        "no {code} diagnostic mentions {substring:?}; got: {:?}",
        diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>()
    );
}
