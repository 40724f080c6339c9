//! Salsa database definition and the generation stages.
//!
//! ```text
//! CompilationInput ──► compilation_features ───────────────┐
//!                                                           ▼
//! DeclarationInput ──► enum_definition ──► enum_definitions ──► generation_units
//! ```
//!
//! Every stage output compares structurally, so an edit that leaves a
//! stage's result unchanged stops propagating there.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::analyze::analyze_declaration;
use super::features::{CompilationFeatures, CompilationMetadata};
use super::model::EnumDefinition;
use crate::base::FileId;
use crate::syntax::SourceUnit;

/// Stage names, as they appear in logs.
pub mod tracking {
    pub const COMPILATION_FEATURES: &str = "compilation_features";
    pub const ENUM_DEFINITION: &str = "enum_definition";
    pub const ENUM_DEFINITIONS: &str = "enum_definitions";
    pub const GENERATION_UNITS: &str = "generation_units";
}

// ============================================================================
// INPUTS
// ============================================================================

/// Input: what the host knows about the compilation as a whole.
#[salsa::input]
pub struct CompilationInput {
    #[return_ref]
    pub metadata: CompilationMetadata,
}

/// Input: one annotated declaration.
///
/// Set this again whenever the declaration's text or symbols change.
#[salsa::input]
pub struct DeclarationInput {
    pub file: FileId,
    #[return_ref]
    pub unit: SourceUnit,
}

/// Input: the set of declarations that take part in generation.
#[salsa::input]
pub struct GeneratorWorkspace {
    pub compilation: CompilationInput,
    #[return_ref]
    pub declarations: Vec<DeclarationInput>,
}

// ============================================================================
// DATABASE
// ============================================================================

/// The root Salsa database for generation.
///
/// Optionally records every stage execution, which is how tests observe
/// what the cache reused.
#[salsa::db]
#[derive(Default, Clone)]
pub struct RootDatabase {
    storage: salsa::Storage<Self>,
    executions: Arc<Mutex<Option<Vec<String>>>>,
}

#[salsa::db]
impl salsa::Database for RootDatabase {
    fn salsa_event(&self, event: &dyn Fn() -> salsa::Event) {
        let mut executions = self.executions.lock();
        if let Some(log) = executions.as_mut() {
            let event = event();
            if let salsa::EventKind::WillExecute { .. } = event.kind {
                log.push(format!("{:?}", event.kind));
            }
        }
    }
}

impl RootDatabase {
    /// Create a new, empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording stage executions.
    pub fn record_executions(&self) {
        self.executions.lock().get_or_insert_with(Vec::new);
    }

    /// Executions recorded since the last call; recording stays on.
    pub fn take_executions(&self) -> Vec<String> {
        self.executions
            .lock()
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

// ============================================================================
// STAGES
// ============================================================================

/// One enum ready for emission, joined with the compilation's features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationUnit {
    pub declaration: DeclarationInput,
    pub definition: EnumDefinition,
    pub features: CompilationFeatures,
}

/// Probe the compilation for optional capabilities.
#[salsa::tracked]
pub fn compilation_features(
    db: &dyn salsa::Database,
    compilation: CompilationInput,
) -> CompilationFeatures {
    let features = CompilationFeatures::probe(compilation.metadata(db));
    tracing::debug!(stage = tracking::COMPILATION_FEATURES, ?features);
    features
}

/// The enum model for one declaration, or `None` if it does not qualify.
#[salsa::tracked]
pub fn enum_definition(
    db: &dyn salsa::Database,
    declaration: DeclarationInput,
) -> Option<EnumDefinition> {
    let unit = declaration.unit(db);
    tracing::debug!(
        stage = tracking::ENUM_DEFINITION,
        file = %declaration.file(db),
        ty = %unit.decl.name
    );

    // Salsa cancels stale revisions itself; this token never fires.
    analyze_declaration(unit, &CancellationToken::new()).unwrap_or_else(|err| {
        tracing::debug!(stage = tracking::ENUM_DEFINITION, "analysis aborted: {err}");
        None
    })
}

/// Every declaration that produced an enum model, in workspace order.
#[salsa::tracked]
pub fn enum_definitions(
    db: &dyn salsa::Database,
    workspace: GeneratorWorkspace,
) -> Vec<(DeclarationInput, EnumDefinition)> {
    let definitions: Vec<_> = workspace
        .declarations(db)
        .iter()
        .filter_map(|&declaration| {
            enum_definition(db, declaration).map(|definition| (declaration, definition))
        })
        .collect();
    tracing::debug!(stage = tracking::ENUM_DEFINITIONS, count = definitions.len());
    definitions
}

/// Pair every enum model with the single current feature snapshot.
#[salsa::tracked]
pub fn generation_units(
    db: &dyn salsa::Database,
    workspace: GeneratorWorkspace,
) -> Vec<GenerationUnit> {
    let features = compilation_features(db, workspace.compilation(db));
    let units: Vec<_> = enum_definitions(db, workspace)
        .into_iter()
        .map(|(declaration, definition)| GenerationUnit {
            declaration,
            definition,
            features,
        })
        .collect();
    tracing::debug!(stage = tracking::GENERATION_UNITS, count = units.len());
    units
}
