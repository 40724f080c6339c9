//! Property schema resolution.
//!
//! Per-item data properties come from exactly one constructor shape:
//! the primary constructor (parameters on the type header) or a single
//! forward-declared `partial` constructor. The primary shape always wins.

use smol_str::SmolStr;

use super::docs::ParamDocs;
use super::model::{PropertyOrigin, PropertySchema};
use crate::syntax::{Accessibility, ConstructorDecl, ConstructorSymbol, TypeDecl, TypeSymbol};

/// Resolver output: the schema list and, for the partial shape, the
/// accessibility keyword to emit on the constructor implementation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedProperties {
    pub properties: Vec<PropertySchema>,
    pub partial_constructor_visibility: Option<String>,
}

/// Property name for a parameter: first character upper-cased.
///
/// Single-character names are lower-cased instead.
pub fn property_name(name: &str) -> SmolStr {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => SmolStr::default(),
        (Some(_), None) => SmolStr::new(name.to_lowercase()),
        (Some(first), Some(_)) => {
            let rest = &name[first.len_utf8()..];
            SmolStr::new(format!("{}{}", first.to_uppercase(), rest))
        }
    }
}

/// Backing-field name for a parameter: first character lower-cased.
///
/// Single-character names are lower-cased, so `A` and `a` map to the same field.
pub fn field_name(name: &str) -> SmolStr {
    let mut chars = name.chars();
    match chars.next() {
        None => SmolStr::default(),
        Some(first) => {
            let rest = &name[first.len_utf8()..];
            SmolStr::new(format!("{}{}", first.to_lowercase(), rest))
        }
    }
}

pub fn resolve_properties(decl: &TypeDecl, symbol: &TypeSymbol) -> ResolvedProperties {
    if let Some(primary) = primary_constructor(symbol) {
        tracing::trace!(ty = %symbol.name, "properties from primary constructor");
        return ResolvedProperties {
            properties: primary
                .parameters
                .iter()
                .map(|param| PropertySchema {
                    property_name: property_name(&param.name),
                    field_name: field_name(&param.name),
                    parameter_name: param.name.clone(),
                    origin: PropertyOrigin::Primary,
                    type_name: param.type_name.clone(),
                    description: None,
                })
                .collect(),
            partial_constructor_visibility: None,
        };
    }

    if let Some(forward) = forward_declared_constructor(decl) {
        tracing::trace!(ty = %symbol.name, "properties from partial constructor");
        return ResolvedProperties {
            properties: partial_properties(forward),
            partial_constructor_visibility: Some(
                forward
                    .modifiers
                    .declared_accessibility()
                    .map(|accessibility| accessibility.keyword().to_string())
                    .unwrap_or_default(),
            ),
        };
    }

    ResolvedProperties::default()
}

/// The type's only public instance constructor, when that one is a primary
/// constructor with parameters.
fn primary_constructor(symbol: &TypeSymbol) -> Option<&ConstructorSymbol> {
    let mut public = symbol
        .instance_constructors
        .iter()
        .filter(|ctor| ctor.accessibility == Accessibility::Public);
    match (public.next(), public.next()) {
        (Some(ctor), None) if ctor.is_primary() && !ctor.parameters.is_empty() => Some(ctor),
        _ => None,
    }
}

/// The unique non-static, parameterized, body-less `partial` constructor.
fn forward_declared_constructor(decl: &TypeDecl) -> Option<&ConstructorDecl> {
    let mut candidates = decl.constructors().filter(|ctor| {
        !ctor.is_static() && !ctor.params.is_empty() && ctor.is_forward_declaration()
    });
    match (candidates.next(), candidates.next()) {
        (Some(ctor), None) => Some(ctor),
        _ => None,
    }
}

fn partial_properties(ctor: &ConstructorDecl) -> Vec<PropertySchema> {
    let docs = ctor.doc.as_deref().map(ParamDocs::parse).unwrap_or_default();

    ctor.params
        .iter()
        .filter_map(|param| {
            let Some(type_name) = param.ty.resolved.clone() else {
                tracing::trace!(param = %param.name, "skipping parameter with unresolved type");
                return None;
            };
            Some(PropertySchema {
                property_name: property_name(&param.name),
                field_name: field_name(&param.name),
                parameter_name: param.name.clone(),
                origin: PropertyOrigin::Partial,
                type_name,
                description: docs.get(&param.name).map(str::to_string),
            })
        })
        .collect()
}
