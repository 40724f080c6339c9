//! Expressions and statements, as far as item recognition needs them.
//!
//! Anything the recognizers do not care about is an [`Expr::Other`] or
//! [`Stmt::Other`] node; its children are kept so traversals stay complete.

use smol_str::SmolStr;

use super::symbols::TypeId;
use crate::base::Span;

/// What a name resolved to in the host's semantic model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Type(TypeId),
    Member { owner: TypeId, name: SmolStr },
    Local,
}

/// An identifier occurrence with its resolution, if the host found one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NameRef {
    pub text: SmolStr,
    pub symbol: Option<SymbolRef>,
}

impl NameRef {
    pub fn unresolved(text: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            symbol: None,
        }
    }

    pub fn resolved(text: impl Into<SmolStr>, symbol: SymbolRef) -> Self {
        Self {
            text: text.into(),
            symbol: Some(symbol),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.symbol.is_some()
    }

    pub fn names_type(&self, id: TypeId) -> bool {
        self.symbol == Some(SymbolRef::Type(id))
    }

    /// Unresolved, or resolved to a member declared directly in `owner`.
    pub fn may_be_member_of(&self, owner: TypeId) -> bool {
        match &self.symbol {
            None => true,
            Some(SymbolRef::Member { owner: declared, .. }) => *declared == owner,
            Some(SymbolRef::Type(_) | SymbolRef::Local) => false,
        }
    }
}

/// A constructed type together with its base-type chain (nearest first).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    pub id: TypeId,
    pub bases: Vec<TypeId>,
}

impl ResolvedType {
    pub fn new(id: TypeId) -> Self {
        Self {
            id,
            bases: Vec::new(),
        }
    }

    pub fn with_bases(mut self, bases: impl IntoIterator<Item = TypeId>) -> Self {
        self.bases.extend(bases);
        self
    }

    /// Whether this type is `target` or has it somewhere up its base chain.
    ///
    /// The walk stops at the first repeated id, so a malformed cyclic chain
    /// from the host terminates.
    pub fn derives_from(&self, target: TypeId) -> bool {
        let mut seen = Vec::with_capacity(self.bases.len() + 1);
        for id in std::iter::once(self.id).chain(self.bases.iter().copied()) {
            if id == target {
                return true;
            }
            if seen.contains(&id) {
                return false;
            }
            seen.push(id);
        }
        false
    }
}

/// `new T(...)` or a target-typed `new(...)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectCreation {
    /// The constructed type, `None` when the host could not resolve it.
    pub ty: Option<ResolvedType>,
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberAccess {
    pub target: Box<Expr>,
    pub name: NameRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub left: Expr,
    pub right: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Name(NameRef),
    MemberAccess(MemberAccess),
    New(ObjectCreation),
    Assign(Box<Assignment>),
    Other(Vec<Expr>),
}

impl Expr {
    pub fn name(text: impl Into<SmolStr>) -> Self {
        Expr::Name(NameRef::unresolved(text))
    }

    pub fn resolved_name(text: impl Into<SmolStr>, symbol: SymbolRef) -> Self {
        Expr::Name(NameRef::resolved(text, symbol))
    }

    /// A name that resolves to the type `id`.
    pub fn type_name(text: impl Into<SmolStr>, id: TypeId) -> Self {
        Expr::Name(NameRef::resolved(text, SymbolRef::Type(id)))
    }

    pub fn member(target: Expr, name: NameRef) -> Self {
        Expr::MemberAccess(MemberAccess {
            target: Box::new(target),
            name,
        })
    }

    pub fn new_object(ty: Option<ResolvedType>) -> Self {
        Expr::New(ObjectCreation {
            ty,
            args: Vec::new(),
            span: Span::default(),
        })
    }

    pub fn assign(left: Expr, right: Expr) -> Self {
        Expr::Assign(Box::new(Assignment { left, right }))
    }

    pub fn as_object_creation(&self) -> Option<&ObjectCreation> {
        match self {
            Expr::New(creation) => Some(creation),
            _ => None,
        }
    }

    /// `X` or `Target.X`, where `Target` resolves to `target`.
    ///
    /// Returns the referenced name `X`. Deeper access paths, accesses
    /// through anything but the target type, and names that resolve to
    /// locals or to members of another type are not references.
    pub fn static_reference(&self, target: TypeId) -> Option<&NameRef> {
        let name = match self {
            Expr::Name(name) => name,
            Expr::MemberAccess(access) => match access.target.as_ref() {
                Expr::Name(qualifier) if qualifier.names_type(target) => &access.name,
                _ => return None,
            },
            _ => return None,
        };
        name.may_be_member_of(target).then_some(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stmt {
    Expr(Expr),
    Return(Option<Expr>),
    Other(Vec<Stmt>),
}
