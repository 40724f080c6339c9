//! Usage validation for annotated types.
//!
//! Generation cannot stop code from creating items at run time or from
//! declaring a type the generated half cannot merge into, so this pass
//! reports those mistakes instead:
//!
//! | Code | Severity | Fires when |
//! |------|----------|------------|
//! | E1 | error | the annotated class is not `partial` |
//! | E2 | error | an enclosing type is not `partial` (once per type) |
//! | E3 | warning | an explicit constructor is internal or wider, or a public class has a primary constructor |
//! | E4 | warning | an annotated type (or subtype) is constructed outside the annotated type's declarations |
//!
//! Declarations and call sites are checked in parallel.

use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio_util::sync::CancellationToken;

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::base::Location;
use crate::error::{Result, check_cancelled};
use crate::syntax::{
    Accessibility, AttributeName, ConstructorCall, ConstructorOrigin, Program, SourceUnit,
    TypeId, TypeKind, TypeSymbol,
};

/// Per-run validation state over one [`Program`].
///
/// Owns the memo from a type to its nearest annotated ancestor. Entries are
/// written once and never change; concurrent lookups of the same type may
/// both walk the chain, but they store the same answer.
pub struct ValidationContext<'a> {
    program: &'a Program,
    marker: AttributeName,
    ancestors: RwLock<FxHashMap<TypeId, Option<TypeId>>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(program: &'a Program, marker: AttributeName) -> Self {
        Self {
            program,
            marker,
            ancestors: RwLock::new(FxHashMap::default()),
        }
    }

    /// Run every check and return the diagnostics, declarations first, then
    /// call sites, each in program order.
    pub fn validate(&self, cancel: &CancellationToken) -> Result<Vec<Diagnostic>> {
        let declarations = self
            .program
            .declarations
            .par_iter()
            .map(|unit| self.check_declaration(unit, cancel))
            .collect::<Result<Vec<_>>>()?;
        let calls = self
            .program
            .calls
            .par_iter()
            .map(|call| self.check_call(call, cancel))
            .collect::<Result<Vec<_>>>()?;

        let mut collector = DiagnosticCollector::new();
        for part in declarations.into_iter().chain(calls) {
            collector.extend(part);
        }
        tracing::debug!(
            declarations = self.program.declarations.len(),
            calls = self.program.calls.len(),
            errors = collector.error_count(),
            warnings = collector.warning_count(),
            "validated program"
        );
        Ok(collector.finish())
    }

    /// E1, E2 and E3 for one declaration of an annotated class.
    pub fn check_declaration(
        &self,
        unit: &SourceUnit,
        cancel: &CancellationToken,
    ) -> Result<DiagnosticCollector> {
        check_cancelled(cancel)?;
        let mut collector = DiagnosticCollector::new();

        let Some(symbol) = unit.symbol.as_ref() else {
            return Ok(collector);
        };
        if unit.decl.kind != TypeKind::Class || !symbol.has_attribute(&self.marker) {
            return Ok(collector);
        }

        if !unit.decl.modifiers.is_partial() {
            collector.enum_not_partial(unit.location(), &unit.decl.name);
        }

        for parent in unit.enclosing.iter().rev() {
            if !parent.modifiers.is_partial() {
                collector.containing_type_not_partial(
                    Location::new(unit.file, parent.span),
                    &parent.name,
                );
            }
        }

        for ctor in &symbol.instance_constructors {
            check_cancelled(cancel)?;
            if !ctor.accessibility.is_publicly_invocable() {
                continue;
            }
            match ctor.origin {
                ConstructorOrigin::Declared(location) => {
                    collector.constructor_too_visible(location, &unit.decl.name);
                }
                ConstructorOrigin::Primary if symbol.accessibility == Accessibility::Public => {
                    collector.public_primary_constructor(
                        primary_location(symbol, unit),
                        &unit.decl.name,
                    );
                }
                ConstructorOrigin::Primary | ConstructorOrigin::Implicit => {}
            }
        }

        Ok(collector)
    }

    /// E4 for one constructor call.
    pub fn check_call(
        &self,
        call: &ConstructorCall,
        cancel: &CancellationToken,
    ) -> Result<DiagnosticCollector> {
        check_cancelled(cancel)?;
        let mut collector = DiagnosticCollector::new();

        let Some(ancestor) = call
            .constructor_type
            .and_then(|ty| self.annotated_ancestor(ty))
            .and_then(|id| self.program.types.get(id))
        else {
            return Ok(collector);
        };

        let inside = ancestor
            .declarations
            .iter()
            .any(|declaration| declaration.contains(&call.location));
        if !inside {
            tracing::trace!(
                enum_type = %ancestor.name,
                location = ?call.location,
                "item constructed outside enum"
            );
            collector.constructed_outside_enum(
                call.location,
                &ancestor.name,
                ancestor.declarations.first().copied(),
            );
        }

        Ok(collector)
    }

    /// Nearest type on `ty`'s base chain (itself included) that carries the
    /// marker attribute.
    ///
    /// Unknown types end the chain. A cyclic chain ends at the first
    /// repeated type.
    pub fn annotated_ancestor(&self, ty: TypeId) -> Option<TypeId> {
        if let Some(&cached) = self.ancestors.read().get(&ty) {
            return cached;
        }

        let mut walked = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = Some(ty);
        let found = loop {
            let Some(id) = current else {
                break None;
            };
            if let Some(&cached) = self.ancestors.read().get(&id) {
                break cached;
            }
            if !visited.insert(id) {
                tracing::warn!(ty = id.index(), "cyclic base type chain");
                break None;
            }
            walked.push(id);
            match self.program.types.get(id) {
                Some(symbol) if symbol.has_attribute(&self.marker) => break Some(id),
                Some(symbol) => current = symbol.base,
                None => current = None,
            }
        };

        let mut memo = self.ancestors.write();
        for id in walked {
            memo.entry(id).or_insert(found);
        }
        found
    }

    /// Memoized answer for `ty`, if one has been computed.
    pub fn cached_ancestor(&self, ty: TypeId) -> Option<Option<TypeId>> {
        self.ancestors.read().get(&ty).copied()
    }
}

/// Primary constructors have no syntax of their own; report them on the
/// type's first declaration.
fn primary_location(symbol: &TypeSymbol, unit: &SourceUnit) -> Location {
    symbol
        .declarations
        .first()
        .copied()
        .unwrap_or_else(|| unit.location())
}

/// Validate `program` with a fresh [`ValidationContext`].
pub fn validate_program(
    program: &Program,
    marker: &AttributeName,
    cancel: &CancellationToken,
) -> Result<Vec<Diagnostic>> {
    ValidationContext::new(program, marker.clone()).validate(cancel)
}
