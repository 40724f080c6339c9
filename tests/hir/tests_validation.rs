//! Usage validation over whole programs.

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::fixtures::*;
use powerenum::hir::{Severity, codes, validate_program};
use powerenum::syntax::{
    Accessibility, AttributeName, ConstructorCall, ConstructorOrigin, ConstructorSymbol,
    EnclosingType, Modifier, ParameterSymbol, Program, SourceUnit, TypeDecl, TypeId, TypeKind,
    TypeSymbol, TypeTable,
};
use powerenum::{Diagnostic, FileId, Span};
use tokio_util::sync::CancellationToken;

const SHADE: TypeId = TypeId::new(2);

fn validate(program: &Program) -> Vec<Diagnostic> {
    validate_program(program, &AttributeName::marker(), &CancellationToken::new())
        .expect("validation should not be cancelled")
}

/// `public class Colour { public Colour(string hex) { } }` plus one call
/// `new Colour("#fff")` in another file.
fn misused_program() -> Program {
    let symbol = colour_symbol(COLOUR, "Colour")
        .with_declaration(lines(0, 0, 10))
        .with_constructor(
            ConstructorSymbol::new(
                Accessibility::Public,
                ConstructorOrigin::Declared(lines(0, 2, 2)),
            )
                .with_parameter(ParameterSymbol::new("hex", "string")),
        );
    let unit = SourceUnit::new(
        FileId::new(0),
        "public class Colour { public Colour(string hex) { } }",
        TypeDecl::class("Colour")
            .with_modifiers([Modifier::Public])
            .with_span(Span::from_coords(0, 0, 10, 0)),
    )
    .with_symbol(symbol.clone());

    Program::new(TypeTable::from_iter([symbol]))
        .with_declaration(unit)
        .with_call(ConstructorCall::new(lines(1, 4, 4), Some(COLOUR)))
}

#[test]
fn test_misused_enum_reports_each_problem() {
    let diagnostics = validate(&misused_program());

    assert_eq!(codes_of(&diagnostics), vec!["E1", "E3", "E4"]);
    assert_eq!(severity_of(&diagnostics, codes::ENUM_NOT_PARTIAL), Some(&Severity::Error));
    assert_eq!(severity_of(&diagnostics, codes::CONSTRUCTOR_TOO_VISIBLE), Some(&Severity::Warning));
    assert_message_contains(
        &diagnostics,
        codes::ENUM_NOT_PARTIAL,
        "'Colour' must be marked as partial",
    );
    assert_message_contains(
        &diagnostics,
        codes::CONSTRUCTED_OUTSIDE_ENUM,
        "static members of 'Colour'",
    );

    let e4 = &diagnostics[2];
    assert_eq!(e4.file, FileId::new(1));
    assert_eq!(e4.related.len(), 1);
    assert_eq!(e4.related[0].location, lines(0, 0, 10));
}

#[test]
fn test_fixed_declaration_leaves_only_the_call() {
    let fixed = colour_symbol(COLOUR, "Colour")
        .with_declaration(lines(0, 0, 10))
        .with_constructor(ConstructorSymbol::new(
            Accessibility::Private,
            ConstructorOrigin::Declared(lines(0, 2, 2)),
        ));
    let mut program = misused_program();
    program.declarations[0].decl.modifiers.push(Modifier::Partial);
    program.declarations[0].symbol = Some(fixed.clone());
    program.types = TypeTable::from_iter([fixed]);

    assert_eq!(codes_of(&validate(&program)), vec!["E4"]);
}

#[test]
fn test_construction_inside_any_partial_declaration_is_allowed() {
    let symbol = colour_symbol(COLOUR, "Colour")
        .with_declaration(lines(0, 0, 10))
        .with_declaration(lines(3, 0, 5));
    let program = Program::new(TypeTable::from_iter([symbol]))
        .with_call(ConstructorCall::new(lines(0, 4, 4), Some(COLOUR)))
        .with_call(ConstructorCall::new(lines(3, 2, 2), Some(COLOUR)))
        .with_call(ConstructorCall::new(lines(2, 2, 2), Some(COLOUR)));

    let diagnostics = validate(&program);
    assert_eq!(codes_of(&diagnostics), vec!["E4"]);
    assert_eq!(diagnostics[0].file, FileId::new(2));
}

#[test]
fn test_subtype_construction_is_attributed_to_the_enum() {
    let colour = colour_symbol(COLOUR, "Colour").with_declaration(lines(0, 0, 10));
    let shade = TypeSymbol::new(SHADE, "Shade").with_base(COLOUR);
    let program = Program::new(TypeTable::from_iter([colour, shade]))
        .with_call(ConstructorCall::new(lines(1, 0, 0), Some(SHADE)))
        .with_call(ConstructorCall::new(lines(0, 3, 3), Some(SHADE)))
        .with_call(ConstructorCall::new(lines(1, 1, 1), None));

    let diagnostics = validate(&program);
    assert_eq!(count_with_code(&diagnostics, codes::CONSTRUCTED_OUTSIDE_ENUM), 1);
    assert_message_contains(&diagnostics, codes::CONSTRUCTED_OUTSIDE_ENUM, "'Colour'");
}

#[test]
fn test_nested_enum_in_non_partial_parents() {
    let symbol = colour_symbol(COLOUR, "Colour").with_declaration(lines(0, 2, 8));
    let unit = SourceUnit::new(
        FileId::new(0),
        "",
        TypeDecl::class("Colour")
            .with_modifiers([Modifier::Public, Modifier::Partial])
            .with_span(Span::from_coords(2, 0, 8, 0)),
    )
    .with_symbol(symbol.clone())
    .with_enclosing(EnclosingType::new("Palette", TypeKind::Class, [Modifier::Public]))
    .with_enclosing(EnclosingType::new("Swatch", TypeKind::Record, [Modifier::Public]));
    let program = Program::new(TypeTable::from_iter([symbol])).with_declaration(unit);

    let diagnostics = validate(&program);
    assert_eq!(codes_of(&diagnostics), vec!["E2", "E2"]);
    assert_message_contains(&diagnostics, codes::CONTAINING_TYPE_NOT_PARTIAL, "'Swatch'");
    assert_message_contains(&diagnostics, codes::CONTAINING_TYPE_NOT_PARTIAL, "'Palette'");
}

#[test]
fn test_unannotated_types_are_ignored() {
    let plain = TypeSymbol::new(TypeId::new(9), "Plain").with_accessibility(Accessibility::Public);
    let unit =
        SourceUnit::new(FileId::new(0), "", TypeDecl::class("Plain")).with_symbol(plain.clone());
    let program = Program::new(TypeTable::from_iter([plain]))
        .with_declaration(unit)
        .with_call(ConstructorCall::new(lines(4, 0, 0), Some(TypeId::new(9))));

    assert!(validate(&program).is_empty());
}

#[test]
fn test_cancelled_validation() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = validate_program(&misused_program(), &AttributeName::marker(), &cancel);
    assert_eq!(result, Err(powerenum::AnalysisError::Cancelled));
}
