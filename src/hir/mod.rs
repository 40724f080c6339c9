//! High-level IR (HIR): enum models, generation stages and validation.
//!
//! ## Key Types
//!
//! - [`EnumDefinition`]: the canonical model handed to an emitter
//! - [`CompilationFeatures`]: capability flags shared by one compilation
//! - [`RootDatabase`]: Salsa database running the generation stages
//! - [`ValidationContext`]: one validation run over a [`Program`](crate::syntax::Program)
//! - [`Diagnostic`]: a usage error or warning
//!
//! ## Stages
//!
//! ```text
//! CompilationInput            DeclarationInput (one per annotated type)
//!     │                           │
//!     ▼                           ▼
//! compilation_features        enum_definition      ← properties + items
//!     │                           │
//!     │                           ▼
//!     │                       enum_definitions     ← drop absent models
//!     │                           │
//!     └──────────► generation_units ◄──┘            ← broadcast join
//! ```

mod analyze;
mod db;
mod diagnostics;
mod docs;
mod features;
mod items;
mod model;
mod properties;
mod validate;

pub use analyze::analyze_declaration;
pub use db::{
    CompilationInput, DeclarationInput, GenerationUnit, GeneratorWorkspace, RootDatabase,
    compilation_features, enum_definition, enum_definitions, generation_units, tracking,
};
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes, templates,
};
pub use features::{
    CompilationFeatures, CompilationMetadata, KnownConstructor, KnownType, LanguageVersion,
};
pub use items::{claim_accessors, extract_items, initializer_items, member_items};
pub use model::{
    EnumDefinition, EnumTypeInfo, ItemDeclaration, ParentType, PropertyOrigin, PropertySchema,
};
pub use properties::{ResolvedProperties, field_name, property_name, resolve_properties};
pub use validate::{ValidationContext, validate_program};
