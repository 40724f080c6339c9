//! Analysis options

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::hir::{Diagnostic, Severity};
use crate::syntax::AttributeName;

/// Options for a [`GeneratorHost`](super::GeneratorHost).
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Attribute that opts a type into generation.
    pub marker_attribute: AttributeName,
    /// Diagnostic codes to drop, e.g. `"E3"`.
    pub suppressed_codes: FxHashSet<SmolStr>,
    /// Report warnings as errors.
    pub warnings_as_errors: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            marker_attribute: AttributeName::marker(),
            suppressed_codes: FxHashSet::default(),
            warnings_as_errors: false,
        }
    }
}

impl AnalysisOptions {
    pub fn suppress(mut self, code: impl Into<SmolStr>) -> Self {
        self.suppressed_codes.insert(code.into());
        self
    }

    pub fn is_suppressed(&self, diagnostic: &Diagnostic) -> bool {
        diagnostic
            .code
            .as_deref()
            .is_some_and(|code| self.suppressed_codes.contains(code))
    }

    /// Drop suppressed diagnostics and promote warnings if configured.
    pub fn apply(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        diagnostics
            .into_iter()
            .filter(|diagnostic| !self.is_suppressed(diagnostic))
            .map(|mut diagnostic| {
                if self.warnings_as_errors && diagnostic.severity == Severity::Warning {
                    diagnostic.severity = Severity::Error;
                }
                diagnostic
            })
            .collect()
    }
}
