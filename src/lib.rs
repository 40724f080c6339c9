//! # powerenum-base
//!
//! Analysis and caching engine for build-time smart enums: a closed set of
//! singleton items declared inside an ordinary class, turned into a
//! canonical model an emitter can generate code from.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! host      → GeneratorHost driver, Emitter seam, options
//!   ↓
//! hir       → Enum models, Salsa stages, usage validation
//!   ↓
//! syntax    → Declaration model supplied by the host front-end
//!   ↓
//! base      → Primitives (FileId, Span, stable identity hash)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → host)
// ============================================================================

/// Foundation types: FileId, Span/Location, identity hash
pub mod base;

/// Error types for host-facing entry points
pub mod error;

/// Syntax: declaration model, expressions, resolved symbols
pub mod syntax;

/// High-level IR: Salsa-based generation pipeline and validator
pub mod hir;

/// Host driver: database ownership and emission
pub mod host;

// Re-export foundation types
pub use base::{FileId, Location, Position, Span, derive_name, fingerprint};
pub use error::{AnalysisError, Result};
pub use hir::{CompilationFeatures, Diagnostic, EnumDefinition};
pub use host::{AnalysisOptions, Emitter, GeneratorHost, RunReport};
