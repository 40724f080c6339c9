//! GeneratorHost: owns the database and drives generation runs.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = GeneratorHost::new(AnalysisOptions::default());
//! host.set_compilation(metadata);
//! host.set_declaration("Paint.Colour", unit);
//!
//! // Emit every enum that is new or changed since the last run
//! let report = host.run(&mut emitter);
//!
//! // Usage diagnostics for the whole program
//! let diagnostics = host.validate(&program, &cancel)?;
//! ```

use indexmap::IndexMap;
use salsa::Setter;
use rustc_hash::FxHashMap;
use tokio_util::sync::CancellationToken;

use super::options::AnalysisOptions;
use crate::error::{AnalysisError, Result};
use crate::hir::{
    CompilationFeatures, CompilationInput, CompilationMetadata, DeclarationInput, Diagnostic,
    EnumDefinition, GenerationUnit, GeneratorWorkspace, RootDatabase, enum_definition,
    generation_units, validate_program,
};
use crate::syntax::{Program, SourceUnit};

/// Receives the enums a run produces; text synthesis lives behind this seam.
pub trait Emitter {
    fn emit(&mut self, definition: &EnumDefinition, features: &CompilationFeatures);
}

impl<F> Emitter for F
where
    F: FnMut(&EnumDefinition, &CompilationFeatures),
{
    fn emit(&mut self, definition: &EnumDefinition, features: &CompilationFeatures) {
        self(definition, features)
    }
}

/// What a [`GeneratorHost::run`] did, by declaration key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Declarations handed to the emitter, in registration order.
    pub emitted: Vec<String>,
    /// Declarations whose output matched the previous run.
    pub unchanged: usize,
    /// Declarations emitted before that no longer produce an enum, sorted.
    pub dropped: Vec<String>,
}

/// Owns all mutable generation state.
///
/// Declarations are registered under a host-chosen key. Setting a value
/// equal to the stored one is a no-op, so re-feeding an unchanged
/// declaration never invalidates anything.
pub struct GeneratorHost {
    db: RootDatabase,
    options: AnalysisOptions,
    compilation: CompilationInput,
    workspace: GeneratorWorkspace,
    declarations: IndexMap<String, DeclarationInput>,
    /// Last unit handed to the emitter, per declaration key.
    emitted: FxHashMap<String, GenerationUnit>,
}

impl Default for GeneratorHost {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

impl GeneratorHost {
    /// Create a host with an empty compilation and no declarations.
    pub fn new(options: AnalysisOptions) -> Self {
        let db = RootDatabase::new();
        let compilation = CompilationInput::new(&db, CompilationMetadata::default());
        let workspace = GeneratorWorkspace::new(&db, compilation, Vec::new());
        Self {
            db,
            options,
            compilation,
            workspace,
            declarations: IndexMap::new(),
            emitted: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// The underlying database, e.g. to record stage executions.
    pub fn db(&self) -> &RootDatabase {
        &self.db
    }

    /// Replace the compilation snapshot.
    pub fn set_compilation(&mut self, metadata: CompilationMetadata) {
        if *self.compilation.metadata(&self.db) == metadata {
            return;
        }
        tracing::debug!("compilation metadata changed");
        self.compilation.set_metadata(&mut self.db).to(metadata);
    }

    /// Add or update the declaration registered under `key`.
    pub fn set_declaration(&mut self, key: impl Into<String>, unit: SourceUnit) {
        let key = key.into();
        match self.declarations.get(&key).copied() {
            Some(input) => {
                if *input.unit(&self.db) == unit {
                    tracing::trace!(%key, "declaration unchanged");
                    return;
                }
                tracing::debug!(%key, "declaration changed");
                if input.file(&self.db) != unit.file {
                    input.set_file(&mut self.db).to(unit.file);
                }
                input.set_unit(&mut self.db).to(unit);
            }
            None => {
                tracing::debug!(%key, "declaration added");
                let input = DeclarationInput::new(&self.db, unit.file, unit);
                self.declarations.insert(key, input);
                self.sync_workspace();
            }
        }
    }

    /// Forget the declaration registered under `key`.
    pub fn remove_declaration(&mut self, key: &str) -> Result<()> {
        if self.declarations.shift_remove(key).is_none() {
            return Err(AnalysisError::UnknownDeclaration(key.to_string()));
        }
        tracing::debug!(%key, "declaration removed");
        self.sync_workspace();
        Ok(())
    }

    /// Registered declaration keys, in registration order.
    pub fn declaration_keys(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }

    /// The enum model for one registered declaration.
    pub fn definition(&self, key: &str) -> Result<Option<EnumDefinition>> {
        let input = self
            .declarations
            .get(key)
            .ok_or_else(|| AnalysisError::UnknownDeclaration(key.to_string()))?;
        Ok(enum_definition(&self.db, *input))
    }

    /// Current output of the pipeline, without touching emitter state.
    pub fn generation_units(&self) -> Vec<GenerationUnit> {
        generation_units(&self.db, self.workspace)
    }

    /// Hand every unit that is new or changed since the last run to `emitter`.
    pub fn run(&mut self, emitter: &mut dyn Emitter) -> RunReport {
        let units = generation_units(&self.db, self.workspace);
        let mut by_input: FxHashMap<DeclarationInput, GenerationUnit> = units
            .into_iter()
            .map(|unit| (unit.declaration, unit))
            .collect();

        let mut report = RunReport::default();
        let mut emitted = FxHashMap::default();
        for (key, input) in &self.declarations {
            let Some(unit) = by_input.remove(input) else {
                continue;
            };
            if self.emitted.get(key) == Some(&unit) {
                report.unchanged += 1;
            } else {
                emitter.emit(&unit.definition, &unit.features);
                report.emitted.push(key.clone());
            }
            emitted.insert(key.clone(), unit);
        }

        report.dropped = self
            .emitted
            .keys()
            .filter(|key| !emitted.contains_key(*key))
            .cloned()
            .collect();
        report.dropped.sort();
        self.emitted = emitted;

        tracing::debug!(
            emitted = report.emitted.len(),
            unchanged = report.unchanged,
            dropped = report.dropped.len(),
            "generation run finished"
        );
        report
    }

    /// Usage diagnostics for `program`, filtered through the host options.
    pub fn validate(
        &self,
        program: &Program,
        cancel: &CancellationToken,
    ) -> Result<Vec<Diagnostic>> {
        let diagnostics = validate_program(program, &self.options.marker_attribute, cancel)?;
        Ok(self.options.apply(diagnostics))
    }

    fn sync_workspace(&mut self) {
        let declarations: Vec<_> = self.declarations.values().copied().collect();
        self.workspace.set_declarations(&mut self.db).to(declarations);
    }
}
