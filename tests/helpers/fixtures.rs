//! Declaration fixtures.
//!
//! The host front-end is out of scope for this crate, so tests build the
//! declaration model directly. `Colour` is the running example.

use powerenum::syntax::{
    Accessibility, AttributeName, Block, ConstructorDecl, ConstructorOrigin, ConstructorSymbol,
    Expr, FieldDecl, Modifier, ParameterSymbol, PropertyBody, PropertyDecl, ResolvedType,
    SourceUnit, Stmt, TypeDecl, TypeId, TypeRef, TypeSymbol,
};
use powerenum::{FileId, Location, Span};

pub const COLOUR: TypeId = TypeId::new(1);

pub const COLOUR_TEXT: &str = r##"[PowerEnum]
public partial class Colour(string hex)
{
    public static Colour Red { get; } = new("#f00");
    public static Colour Green { get; } = new("#0f0");
}"##;

pub fn colour_ref() -> TypeRef {
    TypeRef::resolved("Colour", "global::Paint.Colour")
}

/// `new(...)` whose type is the enum itself.
pub fn new_item(target: TypeId) -> Expr {
    Expr::new_object(Some(ResolvedType::new(target)))
}

pub fn static_property(name: &str, target: TypeId) -> PropertyDecl {
    PropertyDecl::auto_get(
        [Modifier::Public, Modifier::Static],
        colour_ref(),
        name,
        Some(new_item(target)),
    )
}

pub fn static_field(name: &str, target: TypeId) -> FieldDecl {
    FieldDecl::new(
        [Modifier::Private, Modifier::Static],
        colour_ref(),
        name,
        Some(new_item(target)),
    )
}

/// `public static Colour {name} => {field};`
pub fn exposing_property(name: &str, field: &str) -> PropertyDecl {
    PropertyDecl::new(
        [Modifier::Public, Modifier::Static],
        colour_ref(),
        name,
        PropertyBody::Expression(Expr::name(field)),
    )
}

/// `static Colour() { {name} = new(...); ... }`
pub fn static_constructor<'a>(
    names: impl IntoIterator<Item = &'a str>,
    target: TypeId,
) -> ConstructorDecl {
    let statements = names
        .into_iter()
        .map(|name| Stmt::Expr(Expr::assign(Expr::name(name), new_item(target))));
    ConstructorDecl::new([Modifier::Static], Some(Block::new(statements)))
}

pub fn colour_symbol(id: TypeId, name: &str) -> TypeSymbol {
    TypeSymbol::new(id, name)
        .with_namespace("Paint")
        .with_accessibility(Accessibility::Public)
        .with_attribute(AttributeName::marker())
}

/// `public partial class {name}(string hex)` with one item per name.
pub fn enum_unit(file: u32, id: TypeId, name: &str, items: &[&str], text: &str) -> SourceUnit {
    let decl = items.iter().fold(
        TypeDecl::class(name).with_modifiers([Modifier::Public, Modifier::Partial]),
        |decl, item| decl.with_member(static_property(item, id)),
    );
    let symbol = colour_symbol(id, name).with_constructor(
        ConstructorSymbol::new(Accessibility::Public, ConstructorOrigin::Primary)
            .with_parameter(ParameterSymbol::new("hex", "string")),
    );
    SourceUnit::new(FileId::new(file), text, decl).with_symbol(symbol)
}

pub fn colour_unit() -> SourceUnit {
    enum_unit(0, COLOUR, "Colour", &["Red", "Green"], COLOUR_TEXT)
}

/// A location spanning `start_line..end_line` of `file`.
pub fn lines(file: u32, start_line: usize, end_line: usize) -> Location {
    Location::new(FileId::new(file), Span::from_coords(start_line, 0, end_line, 0))
}
