//! Per-declaration analysis: one annotated declaration in, one
//! [`EnumDefinition`] out.

use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;

use super::items::extract_items;
use super::model::{EnumDefinition, EnumTypeInfo, ParentType};
use super::properties::resolve_properties;
use crate::error::{Result, check_cancelled};
use crate::syntax::{EnclosingType, SourceUnit, TypeKind};

/// Build the enum model for `unit`.
///
/// Returns `Ok(None)` when the declaration cannot be an enum: it is not a
/// class, or the host could not resolve its symbol. The only error is
/// cancellation.
pub fn analyze_declaration(
    unit: &SourceUnit,
    cancel: &CancellationToken,
) -> Result<Option<EnumDefinition>> {
    if unit.decl.kind != TypeKind::Class {
        tracing::debug!(
            ty = %unit.decl.name,
            kind = unit.decl.kind.keyword(),
            "skipping non-class declaration"
        );
        return Ok(None);
    }
    let Some(symbol) = unit.symbol.as_ref() else {
        tracing::debug!(ty = %unit.decl.name, "skipping declaration with unresolved symbol");
        return Ok(None);
    };
    check_cancelled(cancel)?;

    let resolved = resolve_properties(&unit.decl, symbol);
    let items = extract_items(&unit.decl, symbol, cancel)?;

    Ok(Some(EnumDefinition {
        type_info: EnumTypeInfo {
            namespace: symbol.namespace.clone(),
            name: symbol.name.clone(),
            visibility: SmolStr::new_static(symbol.accessibility.keyword()),
            qualified_name: symbol.qualified_name.clone(),
            parents: unit.enclosing.iter().map(parent_type).collect(),
        },
        items,
        properties: resolved.properties,
        partial_constructor_visibility: resolved.partial_constructor_visibility,
        fingerprint: unit.fingerprint(),
    }))
}

fn parent_type(enclosing: &EnclosingType) -> ParentType {
    ParentType {
        name: enclosing.name.clone(),
        keyword: SmolStr::new_static(enclosing.kind.keyword()),
        constraints: enclosing.constraints.clone(),
    }
}
