//! Host-supplied units of work: one annotated declaration, or a whole program.

use std::sync::Arc;

use super::decl::{EnclosingType, TypeDecl};
use super::symbols::{TypeId, TypeSymbol, TypeTable};
use crate::base::{FileId, Location, fingerprint};

/// One annotated type declaration as handed over by the host.
///
/// `text` is the exact source text the fingerprint is computed over; the
/// structured `decl` and the resolved `symbol` describe the same code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceUnit {
    pub file: FileId,
    pub text: Arc<str>,
    pub decl: TypeDecl,
    /// `None` when the host could not resolve the declared symbol.
    pub symbol: Option<TypeSymbol>,
    /// Lexically enclosing types, outermost first.
    pub enclosing: Vec<EnclosingType>,
}

impl SourceUnit {
    pub fn new(file: FileId, text: impl Into<Arc<str>>, decl: TypeDecl) -> Self {
        Self {
            file,
            text: text.into(),
            decl,
            symbol: None,
            enclosing: Vec::new(),
        }
    }

    pub fn with_symbol(mut self, symbol: TypeSymbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_enclosing(mut self, enclosing: EnclosingType) -> Self {
        self.enclosing.push(enclosing);
        self
    }

    pub fn location(&self) -> Location {
        Location::new(self.file, self.decl.span)
    }

    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.text)
    }
}

/// A constructor invocation somewhere in the program.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorCall {
    pub location: Location,
    /// Type containing the invoked constructor, `None` if unresolved.
    pub constructor_type: Option<TypeId>,
}

impl ConstructorCall {
    pub fn new(location: Location, constructor_type: Option<TypeId>) -> Self {
        Self {
            location,
            constructor_type,
        }
    }
}

/// Everything the usage validator looks at for one compilation.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub types: TypeTable,
    pub declarations: Vec<SourceUnit>,
    pub calls: Vec<ConstructorCall>,
}

impl Program {
    pub fn new(types: TypeTable) -> Self {
        Self {
            types,
            declarations: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, unit: SourceUnit) -> Self {
        self.declarations.push(unit);
        self
    }

    pub fn with_call(mut self, call: ConstructorCall) -> Self {
        self.calls.push(call);
        self
    }
}
