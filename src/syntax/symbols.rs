//! Resolved-symbol handles supplied by the host's semantic model.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::modifiers::Accessibility;
use crate::base::constants::{MARKER_ATTRIBUTE_NAME, MARKER_ATTRIBUTE_NAMESPACE};
use crate::base::Location;

/// Host identity of a named type. Equal ids denote the same type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

/// An attribute class applied to a type, by metadata name and namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeName {
    pub name: SmolStr,
    pub namespace: SmolStr,
}

impl AttributeName {
    pub fn new(name: impl Into<SmolStr>, namespace: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// The attribute that opts a type into generation.
    pub fn marker() -> Self {
        Self::new(MARKER_ATTRIBUTE_NAME, MARKER_ATTRIBUTE_NAMESPACE)
    }
}

/// Where an instance constructor comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructorOrigin {
    /// Parameters declared on the type header itself.
    Primary,
    /// An explicit constructor member declared at this location.
    Declared(Location),
    /// Compiler-provided default constructor; no syntax exists.
    Implicit,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSymbol {
    pub name: SmolStr,
    /// Fully qualified display of the parameter type.
    pub type_name: SmolStr,
}

impl ParameterSymbol {
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorSymbol {
    pub accessibility: Accessibility,
    pub parameters: Vec<ParameterSymbol>,
    pub origin: ConstructorOrigin,
}

impl ConstructorSymbol {
    pub fn new(accessibility: Accessibility, origin: ConstructorOrigin) -> Self {
        Self {
            accessibility,
            parameters: Vec::new(),
            origin,
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterSymbol) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn is_primary(&self) -> bool {
        self.origin == ConstructorOrigin::Primary
    }
}

/// Semantic view of a named type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeSymbol {
    pub id: TypeId,
    /// Name including type parameters, e.g. `Colour` or `Wrapper<T>`.
    pub name: SmolStr,
    /// Containing namespace, `None` for the global namespace.
    pub namespace: Option<SmolStr>,
    /// Globally qualified display, e.g. `global::Paint.Colour`.
    pub qualified_name: SmolStr,
    pub accessibility: Accessibility,
    pub base: Option<TypeId>,
    pub attributes: Vec<AttributeName>,
    pub instance_constructors: Vec<ConstructorSymbol>,
    /// Static initializers across all partial declarations of the type.
    pub static_initializer_count: usize,
    /// Every partial declaration of the type.
    pub declarations: Vec<Location>,
}

impl TypeSymbol {
    pub fn new(id: TypeId, name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        Self {
            id,
            qualified_name: SmolStr::new(format!("global::{name}")),
            name,
            namespace: None,
            accessibility: Accessibility::Internal,
            base: None,
            attributes: Vec::new(),
            instance_constructors: Vec::new(),
            static_initializer_count: 0,
            declarations: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<SmolStr>) -> Self {
        let namespace = namespace.into();
        self.qualified_name = SmolStr::new(format!("global::{}.{}", namespace, self.name));
        self.namespace = Some(namespace);
        self
    }

    pub fn with_qualified_name(mut self, qualified_name: impl Into<SmolStr>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_base(mut self, base: TypeId) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeName) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorSymbol) -> Self {
        self.instance_constructors.push(constructor);
        self
    }

    pub fn with_static_initializers(mut self, count: usize) -> Self {
        self.static_initializer_count = count;
        self
    }

    pub fn with_declaration(mut self, location: Location) -> Self {
        self.declarations.push(location);
        self
    }

    pub fn has_attribute(&self, attribute: &AttributeName) -> bool {
        self.attributes.contains(attribute)
    }
}

/// All named types of one compilation, keyed by identity.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: FxHashMap<TypeId, TypeSymbol>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type, replacing any previous symbol with the same id.
    pub fn insert(&mut self, symbol: TypeSymbol) {
        self.types.insert(symbol.id, symbol);
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.types.get(&id)
    }

    pub fn base_of(&self, id: TypeId) -> Option<TypeId> {
        self.types.get(&id).and_then(|symbol| symbol.base)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeSymbol> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeSymbol>>(iter: I) -> Self {
        let mut table = TypeTable::new();
        for symbol in iter {
            table.insert(symbol);
        }
        table
    }
}
