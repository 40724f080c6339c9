//! Incremental behaviour of the generation pipeline, observed through the
//! database's execution log.

use crate::helpers::fixtures::*;
use powerenum::hir::{CompilationMetadata, LanguageVersion};
use powerenum::syntax::TypeId;
use powerenum::{CompilationFeatures, EnumDefinition, GeneratorHost};
use rstest::rstest;

fn host_with(count: u32) -> GeneratorHost {
    let mut host = GeneratorHost::default();
    host.set_compilation(CompilationMetadata::new(LanguageVersion::V11));
    for i in 0..count {
        let name = format!("Colour{i}");
        let text = format!("partial class {name} {{ }}");
        host.set_declaration(
            name.clone(),
            enum_unit(i, TypeId::new(i + 1), &name, &["Red", "Green"], &text),
        );
    }
    host
}

fn run_silently(host: &mut GeneratorHost) -> Vec<String> {
    let mut emitted = Vec::new();
    host.run(&mut |definition: &EnumDefinition, _: &CompilationFeatures| {
        emitted.push(definition.type_info.name.to_string());
    });
    emitted
}

/// Stage executions caused by editing the text of one declaration.
fn executions_after_single_edit(count: u32) -> usize {
    let mut host = host_with(count);
    run_silently(&mut host);

    host.set_declaration(
        "Colour0",
        enum_unit(
            0,
            TypeId::new(1),
            "Colour0",
            &["Red", "Green"],
            "partial class Colour0 { /* edited */ }",
        ),
    );
    host.db().record_executions();
    let emitted = run_silently(&mut host);
    assert_eq!(emitted, vec!["Colour0"]);
    host.db().take_executions().len()
}

#[test]
fn test_unchanged_rerun_executes_no_stage() {
    let mut host = host_with(4);
    assert_eq!(run_silently(&mut host).len(), 4);

    for i in 0..4 {
        let name = format!("Colour{i}");
        let text = format!("partial class {name} {{ }}");
        let unit = enum_unit(i, TypeId::new(i + 1), &name, &["Red", "Green"], &text);
        host.set_declaration(name, unit);
    }
    host.db().record_executions();

    assert!(run_silently(&mut host).is_empty());
    assert!(host.db().take_executions().is_empty());
}

#[rstest]
#[case(2)]
#[case(8)]
#[case(32)]
fn test_single_edit_cost_is_independent_of_declaration_count(#[case] count: u32) {
    // Re-analysis of the edited declaration, then the collection and the join.
    assert_eq!(executions_after_single_edit(count), 3);
}

#[test]
fn test_metadata_change_reaches_every_unit() {
    let mut host = host_with(3);
    run_silently(&mut host);

    host.set_compilation(CompilationMetadata::new(LanguageVersion::V7));
    let emitted = run_silently(&mut host);
    assert_eq!(emitted, vec!["Colour0", "Colour1", "Colour2"]);
    assert!(
        host.generation_units()
            .iter()
            .all(|unit| {
                !unit.features.file_local_types() && unit.features.expression_bodied_members()
            })
    );
}

#[test]
fn test_equal_metadata_is_not_a_change() {
    let mut host = host_with(2);
    run_silently(&mut host);

    host.set_compilation(CompilationMetadata::new(LanguageVersion::V11));
    host.db().record_executions();
    assert!(run_silently(&mut host).is_empty());
    assert!(host.db().take_executions().is_empty());
}
