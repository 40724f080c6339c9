//! Extraction scenarios on complete declarations.

use crate::helpers::fixtures::*;
use powerenum::hir::{PropertyOrigin, analyze_declaration};
use powerenum::hir::ItemDeclaration;
use powerenum::syntax::{
    Accessibility, ConstructorDecl, ConstructorOrigin, ConstructorSymbol, Expr, Modifier,
    Parameter, ParameterSymbol, PropertyBody, PropertyDecl, SourceUnit, SymbolRef, TypeDecl,
    TypeId, TypeRef,
};
use powerenum::{EnumDefinition, FileId};
use tokio_util::sync::CancellationToken;

fn analyze(unit: &SourceUnit) -> EnumDefinition {
    analyze_declaration(unit, &CancellationToken::new())
        .expect("analysis should not be cancelled")
        .expect("declaration should qualify")
}

fn item_names(definition: &EnumDefinition) -> Vec<&str> {
    definition.item_names().collect()
}

#[test]
fn test_item_values_follow_declaration_order() {
    let definition = analyze(&colour_unit());
    assert_eq!(item_names(&definition), vec!["Red", "Green"]);
    assert_eq!(definition.item_value("Red"), Some(0));
    assert_eq!(definition.item_value("Green"), Some(1));
    assert_eq!(definition.item_value("Blue"), None);
}

#[test]
fn test_static_initializer_items_follow_member_items() {
    // static Colour() { C = new(); }
    // private static Colour _a = new();
    // public static Colour B { get; } = new();
    // public static Colour A => _a;
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Public, Modifier::Partial])
        .with_member(static_constructor(["C"], COLOUR))
        .with_member(static_field("_a", COLOUR))
        .with_member(static_property("B", COLOUR))
        .with_member(exposing_property("A", "_a"));
    let symbol = colour_symbol(COLOUR, "Colour").with_static_initializers(1);
    let unit = SourceUnit::new(FileId::new(0), "", decl).with_symbol(symbol);

    let definition = analyze(&unit);
    assert_eq!(item_names(&definition), vec!["A", "B", "C"]);
    assert_eq!(
        definition.items.iter().map(|i| i.needs_accessor).collect::<Vec<_>>(),
        vec![false, false, true]
    );
}

#[test]
fn test_member_items_keep_declaration_order_before_initializer_items() {
    // static Colour() { C = new(); }
    // public static Colour B { get; } = new();
    // public static Colour A = new();
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Public, Modifier::Partial])
        .with_member(static_constructor(["C"], COLOUR))
        .with_member(static_property("B", COLOUR))
        .with_member(static_field("A", COLOUR));
    let symbol = colour_symbol(COLOUR, "Colour").with_static_initializers(1);
    let unit = SourceUnit::new(FileId::new(0), "", decl).with_symbol(symbol);

    let definition = analyze(&unit);
    assert_eq!(item_names(&definition), vec!["B", "A", "C"]);
    assert_eq!(definition.item_value("C"), Some(2));
}

#[test]
fn test_nested_property_does_not_claim_outer_item() {
    const INNER: TypeId = TypeId::new(7);
    let hijack = PropertyDecl::new(
        [Modifier::Public, Modifier::Static],
        colour_ref(),
        "Hijack",
        PropertyBody::Expression(Expr::resolved_name(
            "_x",
            SymbolRef::Member { owner: INNER, name: "_x".into() },
        )),
    );
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Partial])
        .with_member(static_field("_x", COLOUR))
        .with_member(TypeDecl::class("Inner").with_member(hijack));
    let unit =
        SourceUnit::new(FileId::new(0), "", decl).with_symbol(colour_symbol(COLOUR, "Colour"));

    assert_eq!(analyze(&unit).items, vec![ItemDeclaration::new("_x", true)]);
}

#[test]
fn test_field_behind_property_is_renamed() {
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Partial])
        .with_member(static_field("_x", COLOUR))
        .with_member(exposing_property("X", "_x"));
    let unit =
        SourceUnit::new(FileId::new(0), "", decl).with_symbol(colour_symbol(COLOUR, "Colour"));

    let definition = analyze(&unit);
    assert_eq!(item_names(&definition), vec!["X"]);
    assert!(!definition.items[0].needs_accessor);
}

#[test]
fn test_two_static_initializers_contribute_nothing() {
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Partial])
        .with_member(static_constructor(["C"], COLOUR));
    let symbol = colour_symbol(COLOUR, "Colour").with_static_initializers(2);
    let unit = SourceUnit::new(FileId::new(0), "", decl).with_symbol(symbol);

    assert!(analyze(&unit).items.is_empty());
}

#[test]
fn test_primary_constructor_wins_over_partial_constructor() {
    let partial_ctor = ConstructorDecl::new([Modifier::Private, Modifier::Partial], None)
        .with_param(Parameter::new("weight", TypeRef::resolved("int", "int")));
    let symbol = colour_symbol(COLOUR, "Colour")
        .with_constructor(
            ConstructorSymbol::new(Accessibility::Public, ConstructorOrigin::Primary)
                .with_parameter(ParameterSymbol::new("hex", "string")),
        )
        .with_constructor(
            ConstructorSymbol::new(
                Accessibility::Private,
                ConstructorOrigin::Declared(Default::default()),
            )
                .with_parameter(ParameterSymbol::new("weight", "int")),
        );
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Public, Modifier::Partial])
        .with_member(partial_ctor);
    let unit = SourceUnit::new(FileId::new(0), "", decl).with_symbol(symbol);

    let definition = analyze(&unit);
    assert_eq!(definition.properties.len(), 1);
    assert_eq!(definition.properties[0].property_name, "Hex");
    assert_eq!(definition.properties[0].origin, PropertyOrigin::Primary);
    assert_eq!(definition.partial_constructor_visibility, None);
}

#[test]
fn test_primary_constructor_next_to_another_public_constructor_gives_no_schema() {
    // public partial class Colour(string hex) { public Colour() : this("#000") { } }
    let symbol = colour_symbol(COLOUR, "Colour")
        .with_constructor(
            ConstructorSymbol::new(Accessibility::Public, ConstructorOrigin::Primary)
                .with_parameter(ParameterSymbol::new("hex", "string")),
        )
        .with_constructor(ConstructorSymbol::new(
            Accessibility::Public,
            ConstructorOrigin::Declared(Default::default()),
        ));
    let decl = TypeDecl::class("Colour").with_modifiers([Modifier::Public, Modifier::Partial]);
    let unit = SourceUnit::new(FileId::new(0), "", decl).with_symbol(symbol);

    let definition = analyze(&unit);
    assert!(definition.properties.is_empty());
    assert_eq!(definition.partial_constructor_visibility, None);
}

#[test]
fn test_partial_constructor_schema_with_docs() {
    let partial_ctor = ConstructorDecl::new([Modifier::Private, Modifier::Partial], None)
        .with_param(Parameter::new("weight", TypeRef::resolved("int", "int")))
        .with_param(Parameter::new("x", TypeRef::resolved("bool", "bool")))
        .with_doc(r#"<member><param name="weight">Relative weight.</param></member>"#);
    let decl = TypeDecl::class("Colour")
        .with_modifiers([Modifier::Internal, Modifier::Partial])
        .with_member(partial_ctor);
    let unit = SourceUnit::new(FileId::new(0), "", decl)
        .with_symbol(colour_symbol(COLOUR, "Colour").with_accessibility(Accessibility::Internal));

    let definition = analyze(&unit);
    let names: Vec<_> = definition
        .properties
        .iter()
        .map(|p| (p.property_name.as_str(), p.field_name.as_str()))
        .collect();
    assert_eq!(names, vec![("Weight", "weight"), ("x", "x")]);
    assert_eq!(definition.properties[0].description.as_deref(), Some("Relative weight."));
    assert_eq!(definition.properties[1].description, None);
    assert_eq!(definition.partial_constructor_visibility.as_deref(), Some("private"));
    assert_eq!(definition.type_info.visibility, "internal");
}
