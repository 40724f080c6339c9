//! Declaration model supplied by the host front-end.
//!
//! The host parses and binds its source language and hands over the pieces
//! this crate reasons about: annotated type declarations with their members,
//! the handful of expression shapes item recognition needs, and resolved
//! symbols. Nothing here parses text.
//!
//! ## Key Types
//!
//! - [`SourceUnit`]: one annotated declaration plus its resolved symbol
//! - [`TypeDecl`], [`Member`]: structural view of a type declaration
//! - [`Expr`], [`Stmt`]: the recognizable expression/statement shapes
//! - [`TypeSymbol`], [`TypeTable`]: semantic view of named types
//! - [`Program`]: declarations, type table and call sites for validation

mod decl;
mod expr;
mod modifiers;
mod symbols;
mod unit;

pub use decl::{
    Accessor, AccessorBody, AccessorKind, ConstructorDecl, EnclosingType, FieldDecl, Member,
    Parameter, PropertyBody, PropertyDecl, TypeDecl, TypeKind, TypeRef, VariableDeclarator,
};
pub use expr::{
    Assignment, Block, Expr, MemberAccess, NameRef, ObjectCreation, ResolvedType, Stmt, SymbolRef,
};
pub use modifiers::{Accessibility, Modifier, Modifiers};
pub use symbols::{
    AttributeName, ConstructorOrigin, ConstructorSymbol, ParameterSymbol, TypeId, TypeSymbol,
    TypeTable,
};
pub use unit::{ConstructorCall, Program, SourceUnit};

// Re-export Position and Span from base for convenience
pub use crate::base::{Location, Position, Span};
