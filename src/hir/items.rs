//! Declarative item extraction.
//!
//! An item is a singleton of the enum type (or a subtype) created inside
//! the type itself. Three recognizers run over the declaration:
//!
//! - static members initialized with `new` ([`member_items`])
//! - `X = new ...` statements in the single static initializer ([`initializer_items`])
//! - get-only properties exposing a field item under a public name ([`claim_accessors`])
//!
//! Anything else is ignored; extraction never reports an error of its own.

use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;

use super::model::ItemDeclaration;
use crate::error::{Result, check_cancelled};
use crate::syntax::{Expr, Member, PropertyDecl, Stmt, TypeDecl, TypeId, TypeSymbol};

/// Ordered items of `decl`: member items (after accessor renaming) followed
/// by static-initializer items. An item's index is its value.
pub fn extract_items(
    decl: &TypeDecl,
    symbol: &TypeSymbol,
    cancel: &CancellationToken,
) -> Result<Vec<ItemDeclaration>> {
    let mut items = member_items(decl, symbol.id, cancel)?;
    claim_accessors(decl, symbol.id, &mut items, cancel)?;
    items.extend(initializer_items(decl, symbol, cancel)?);

    warn_duplicates(&items, symbol);
    Ok(items)
}

/// Static fields and static get-only properties declared directly in the
/// type whose initializer constructs the type or a subtype.
///
/// Field items need an accessor until a property claims them.
pub fn member_items(
    decl: &TypeDecl,
    target: TypeId,
    cancel: &CancellationToken,
) -> Result<Vec<ItemDeclaration>> {
    let mut items = Vec::new();

    for member in &decl.members {
        check_cancelled(cancel)?;
        match member {
            Member::Field(field) if field.modifiers.is_static() => {
                items.extend(
                    field
                        .declarators
                        .iter()
                        .filter(|declarator| constructs(declarator.initializer.as_ref(), target))
                        .map(|declarator| ItemDeclaration::new(declarator.name.clone(), true)),
                );
            }
            Member::Property(property)
                if property.modifiers.is_static() && property.is_get_only() =>
            {
                if constructs(property.initializer.as_ref(), target) {
                    items.push(ItemDeclaration::new(property.name.clone(), false));
                }
            }
            _ => {}
        }
    }

    Ok(items)
}

/// Assignments in the type's only static initializer.
///
/// `X = new ...` and `Target.X = new ...` at the top level of the body
/// count. A target-typed `new(...)` the host could not resolve still counts:
/// it usually assigns a property that does not exist yet.
pub fn initializer_items(
    decl: &TypeDecl,
    symbol: &TypeSymbol,
    cancel: &CancellationToken,
) -> Result<Vec<ItemDeclaration>> {
    if symbol.static_initializer_count != 1 {
        return Ok(Vec::new());
    }
    let mut bodies = decl.static_initializers().filter_map(|ctor| ctor.body.as_ref());
    let (Some(body), None) = (bodies.next(), bodies.next()) else {
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    for stmt in &body.statements {
        check_cancelled(cancel)?;
        let Stmt::Expr(Expr::Assign(assignment)) = stmt else {
            continue;
        };
        let Some(name) = assignment.left.static_reference(symbol.id) else {
            continue;
        };
        let qualifies = assignment
            .right
            .as_object_creation()
            .is_some_and(|creation| {
                creation
                    .ty
                    .as_ref()
                    .is_none_or(|ty| ty.derives_from(symbol.id))
            });
        if qualifies {
            items.push(ItemDeclaration::new(name.text.clone(), !name.is_resolved()));
        }
    }

    Ok(items)
}

/// Rename field items to the property that exposes them.
///
/// Walks every property of the type, nested types included, in declaration
/// order. Only the first property returning a given field claims it.
pub fn claim_accessors(
    decl: &TypeDecl,
    target: TypeId,
    items: &mut [ItemDeclaration],
    cancel: &CancellationToken,
) -> Result<()> {
    let mut stack = vec![decl.members.iter()];

    while let Some(members) = stack.last_mut() {
        let Some(member) = members.next() else {
            stack.pop();
            continue;
        };
        check_cancelled(cancel)?;
        match member {
            Member::Property(property) => claim(property, target, items),
            Member::Type(nested) => stack.push(nested.members.iter()),
            _ => {}
        }
    }

    Ok(())
}

fn claim(property: &PropertyDecl, target: TypeId, items: &mut [ItemDeclaration]) {
    let Some(name) = property
        .returned_expression()
        .and_then(|expr| expr.static_reference(target))
    else {
        return;
    };
    let Some(item) = items.iter_mut().find(|item| item.name == name.text) else {
        return;
    };

    if item.needs_accessor {
        tracing::trace!(
            field = %item.name,
            property = %property.name,
            "accessor claims field item"
        );
        item.name = property.name.clone();
        item.needs_accessor = false;
    } else {
        tracing::trace!(item = %item.name, property = %property.name, "item already claimed");
    }
}

fn constructs(initializer: Option<&Expr>, target: TypeId) -> bool {
    initializer
        .and_then(Expr::as_object_creation)
        .and_then(|creation| creation.ty.as_ref())
        .is_some_and(|ty| ty.derives_from(target))
}

fn warn_duplicates(items: &[ItemDeclaration], symbol: &TypeSymbol) {
    let mut seen = FxHashSet::default();
    for item in items {
        if !seen.insert(item.name.as_str()) {
            tracing::warn!(ty = %symbol.name, item = %item.name, "duplicate item name");
        }
    }
}
