//! Diagnostics: usage errors and warnings for annotated types.
//!
//! Diagnostics are data: the validator collects them and the host decides
//! what to do with them. Each carries its message template and arguments
//! so hosts can localize or filter without parsing text.

use std::sync::Arc;

use crate::base::{FileId, Location, Span};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Stable rule code (see [`codes`]).
    pub code: Option<Arc<str>>,
    /// Message with `{0}`, `{1}`, ... placeholders.
    pub template: Arc<str>,
    /// Values for the template placeholders.
    pub args: Vec<Arc<str>>,
    /// The rendered message.
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedInfo {
    pub location: Location,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new diagnostic from a message template.
    pub fn new(
        severity: Severity,
        location: Location,
        template: impl Into<Arc<str>>,
        args: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        let template = template.into();
        let args: Vec<Arc<str>> = args.into_iter().map(Into::into).collect();
        Self {
            file: location.file,
            span: location.span,
            severity,
            code: None,
            message: render(&template, &args).into(),
            template,
            args,
            related: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(
        location: Location,
        template: impl Into<Arc<str>>,
        args: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        Self::new(Severity::Error, location, template, args)
    }

    /// Create a new warning diagnostic.
    pub fn warning(
        location: Location,
        template: impl Into<Arc<str>>,
        args: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        Self::new(Severity::Warning, location, template, args)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn location(&self) -> Location {
        Location::new(self.file, self.span)
    }
}

/// Substitute `{N}` placeholders; unknown indices are left as written.
fn render(template: &str, args: &[Arc<str>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes for usage diagnostics, suitable for suppression.
pub mod codes {
    /// Annotated type is not `partial`.
    pub const ENUM_NOT_PARTIAL: &str = "E1";
    /// A type enclosing the annotated type is not `partial`.
    pub const CONTAINING_TYPE_NOT_PARTIAL: &str = "E2";
    /// Constructor can be invoked from outside the type.
    pub const CONSTRUCTOR_TOO_VISIBLE: &str = "E3";
    /// Item constructed outside the enum's own declarations.
    pub const CONSTRUCTED_OUTSIDE_ENUM: &str = "E4";
}

/// Message templates; `{0}` is always a type name.
pub mod templates {
    pub const ENUM_NOT_PARTIAL: &str =
        "The class '{0}' must be marked as partial to allow code generation to provide the implementation of the enum functionality";
    pub const CONTAINING_TYPE_NOT_PARTIAL: &str =
        "The containing type '{0}' must be marked as partial to allow code generation to provide the implementation of the enum functionality";
    pub const CONSTRUCTOR_TOO_VISIBLE: &str =
        "Any constructors for '{0}' should be made private or protected, as they will result in a runtime error if called outside of the '{0}' class";
    pub const PUBLIC_PRIMARY_CONSTRUCTOR: &str =
        "Primary constructors cannot be made private, so the class '{0}' should be made internal; to keep it public, use a private partial constructor instead";
    pub const CONSTRUCTED_OUTSIDE_ENUM: &str =
        "Enums have a fixed set of items and constructing a new one is a runtime error; use the static members of '{0}' to locate existing items";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during validation.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an error for an annotated type that is not `partial`.
    pub fn enum_not_partial(&mut self, location: Location, type_name: &str) {
        self.add(
            Diagnostic::error(location, templates::ENUM_NOT_PARTIAL, [type_name])
                .with_code(codes::ENUM_NOT_PARTIAL),
        );
    }

    /// Add an error for an enclosing type that is not `partial`.
    pub fn containing_type_not_partial(&mut self, location: Location, parent_name: &str) {
        self.add(
            Diagnostic::error(location, templates::CONTAINING_TYPE_NOT_PARTIAL, [parent_name])
                .with_code(codes::CONTAINING_TYPE_NOT_PARTIAL),
        );
    }

    /// Add a warning for an explicit constructor callers outside the type can reach.
    pub fn constructor_too_visible(&mut self, location: Location, type_name: &str) {
        self.add(
            Diagnostic::warning(location, templates::CONSTRUCTOR_TOO_VISIBLE, [type_name])
                .with_code(codes::CONSTRUCTOR_TOO_VISIBLE),
        );
    }

    /// Add a warning for a public type whose primary constructor is public with it.
    pub fn public_primary_constructor(&mut self, location: Location, type_name: &str) {
        self.add(
            Diagnostic::warning(location, templates::PUBLIC_PRIMARY_CONSTRUCTOR, [type_name])
                .with_code(codes::CONSTRUCTOR_TOO_VISIBLE),
        );
    }

    /// Add a warning for an item constructed outside the enum.
    pub fn constructed_outside_enum(
        &mut self,
        location: Location,
        enum_name: &str,
        enum_declaration: Option<Location>,
    ) {
        let mut diag =
            Diagnostic::warning(location, templates::CONSTRUCTED_OUTSIDE_ENUM, [enum_name])
                .with_code(codes::CONSTRUCTED_OUTSIDE_ENUM);
        if let Some(declaration) = enum_declaration {
            diag = diag.with_related(RelatedInfo {
                location: declaration,
                message: Arc::from(format!("'{}' declared here", enum_name)),
            });
        }
        self.add(diag);
    }

    /// Append everything from another collector.
    pub fn extend(&mut self, other: DiagnosticCollector) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Consume the collector, dropping repeats of the same diagnostic at the
    /// same location (partial types report shared members once per part).
    pub fn finish(self) -> Vec<Diagnostic> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.diagnostics
            .into_iter()
            .filter(|d| {
                let key = (d.file, d.span, d.code.clone(), d.message.clone());
                seen.insert(key)
            })
            .collect()
    }
}
