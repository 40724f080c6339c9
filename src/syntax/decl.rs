//! Type declarations and their members.

use smol_str::SmolStr;

use super::expr::{Block, Expr, Stmt};
use super::modifiers::{Modifier, Modifiers};
use crate::base::Span;

/// Keyword form of a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Record,
    RecordStruct,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::RecordStruct => "record struct",
        }
    }
}

/// A type written in source, with its resolved display if known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub text: SmolStr,
    /// Fully qualified display, `None` when the host could not resolve it.
    pub resolved: Option<SmolStr>,
}

impl TypeRef {
    pub fn resolved(text: impl Into<SmolStr>, qualified: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            resolved: Some(qualified.into()),
        }
    }

    pub fn unresolved(text: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            resolved: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: SmolStr,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableDeclarator {
    pub name: SmolStr,
    pub initializer: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub declarators: Vec<VariableDeclarator>,
    pub span: Span,
}

impl FieldDecl {
    /// A single-declarator field.
    pub fn new(
        modifiers: impl Into<Modifiers>,
        ty: TypeRef,
        name: impl Into<SmolStr>,
        initializer: Option<Expr>,
    ) -> Self {
        Self {
            modifiers: modifiers.into(),
            ty,
            declarators: vec![VariableDeclarator {
                name: name.into(),
                initializer,
                span: Span::default(),
            }],
            span: Span::default(),
        }
    }

    pub fn with_declarator(mut self, name: impl Into<SmolStr>, initializer: Option<Expr>) -> Self {
        self.declarators.push(VariableDeclarator {
            name: name.into(),
            initializer,
            span: Span::default(),
        });
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorBody {
    /// `get;`
    Auto,
    /// `get => expr;`
    Expression(Expr),
    /// `get { ... }`
    Block(Block),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub body: AccessorBody,
}

impl Accessor {
    pub fn auto(kind: AccessorKind) -> Self {
        Self {
            kind,
            body: AccessorBody::Auto,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyBody {
    /// `T P => expr;`
    Expression(Expr),
    Accessors(Vec<Accessor>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDecl {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub name: SmolStr,
    pub body: PropertyBody,
    pub initializer: Option<Expr>,
    pub span: Span,
}

impl PropertyDecl {
    pub fn new(
        modifiers: impl Into<Modifiers>,
        ty: TypeRef,
        name: impl Into<SmolStr>,
        body: PropertyBody,
    ) -> Self {
        Self {
            modifiers: modifiers.into(),
            ty,
            name: name.into(),
            body,
            initializer: None,
            span: Span::default(),
        }
    }

    /// `T P { get; } = initializer;`
    pub fn auto_get(
        modifiers: impl Into<Modifiers>,
        ty: TypeRef,
        name: impl Into<SmolStr>,
        initializer: Option<Expr>,
    ) -> Self {
        let mut property = Self::new(
            modifiers,
            ty,
            name,
            PropertyBody::Accessors(vec![Accessor::auto(AccessorKind::Get)]),
        );
        property.initializer = initializer;
        property
    }

    /// A property whose only accessor is `get`.
    pub fn is_get_only(&self) -> bool {
        match &self.body {
            PropertyBody::Expression(_) => true,
            PropertyBody::Accessors(accessors) => {
                accessors.len() == 1 && accessors[0].kind == AccessorKind::Get
            }
        }
    }

    /// The single expression this property returns, if its getter is that simple.
    ///
    /// Covers `=> expr`, `get => expr` and `get { return expr; }`.
    pub fn returned_expression(&self) -> Option<&Expr> {
        match &self.body {
            PropertyBody::Expression(expr) => Some(expr),
            PropertyBody::Accessors(accessors) => {
                let [accessor] = accessors.as_slice() else {
                    return None;
                };
                if accessor.kind != AccessorKind::Get {
                    return None;
                }
                match &accessor.body {
                    AccessorBody::Expression(expr) => Some(expr),
                    AccessorBody::Block(block) => match block.statements.as_slice() {
                        [Stmt::Return(Some(expr))] => Some(expr),
                        _ => None,
                    },
                    AccessorBody::Auto => None,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub params: Vec<Parameter>,
    /// `None` for a forward declaration.
    pub body: Option<Block>,
    /// Structured documentation text (XML) attached to the constructor.
    pub doc: Option<String>,
    pub span: Span,
}

impl ConstructorDecl {
    pub fn new(modifiers: impl Into<Modifiers>, body: Option<Block>) -> Self {
        Self {
            modifiers: modifiers.into(),
            params: Vec::new(),
            body,
            doc: None,
            span: Span::default(),
        }
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    /// A `partial` constructor without a body; the emitter supplies it.
    pub fn is_forward_declaration(&self) -> bool {
        self.modifiers.has(Modifier::Partial) && self.body.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    Field(FieldDecl),
    Property(PropertyDecl),
    Constructor(ConstructorDecl),
    Type(TypeDecl),
    /// Methods, events, operators and anything else.
    Other(Span),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDecl {
    pub name: SmolStr,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    /// Generic constraint clauses as written, e.g. `where T : class`.
    pub constraints: SmolStr,
    pub span: Span,
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(name: impl Into<SmolStr>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::new(),
            constraints: SmolStr::default(),
            span: Span::default(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<SmolStr>) -> Self {
        self.constraints = constraints.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    pub fn static_initializers(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.constructors().filter(|ctor| ctor.is_static())
    }
}

impl From<FieldDecl> for Member {
    fn from(field: FieldDecl) -> Self {
        Member::Field(field)
    }
}

impl From<PropertyDecl> for Member {
    fn from(property: PropertyDecl) -> Self {
        Member::Property(property)
    }
}

impl From<ConstructorDecl> for Member {
    fn from(ctor: ConstructorDecl) -> Self {
        Member::Constructor(ctor)
    }
}

impl From<TypeDecl> for Member {
    fn from(decl: TypeDecl) -> Self {
        Member::Type(decl)
    }
}

/// One lexically enclosing type of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnclosingType {
    pub name: SmolStr,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    pub constraints: SmolStr,
    pub span: Span,
}

impl EnclosingType {
    pub fn new(name: impl Into<SmolStr>, kind: TypeKind, modifiers: impl Into<Modifiers>) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: modifiers.into(),
            constraints: SmolStr::default(),
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
