//! The canonical model produced for each annotated declaration.
//!
//! Every type here derives structural equality: the pipeline relies on it
//! to decide whether a stage's output changed.

use smol_str::SmolStr;

use crate::base::constants::{
    GENERATED_NAMESPACE_ROOT, INTERNAL_LOWER_PREFIX, INTERNAL_UPPER_PREFIX,
};
use crate::base::{MemberKind, derive_name};

/// One lexically enclosing type, for reconstructing nesting in emitted code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentType {
    pub name: SmolStr,
    /// Declaration keyword, e.g. `class` or `record struct`.
    pub keyword: SmolStr,
    /// Generic constraint clauses as written.
    pub constraints: SmolStr,
}

/// Identity of the enumerated type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumTypeInfo {
    pub namespace: Option<SmolStr>,
    pub name: SmolStr,
    /// Accessibility keyword of the type.
    pub visibility: SmolStr,
    pub qualified_name: SmolStr,
    /// Enclosing types, outermost first.
    pub parents: Vec<ParentType>,
}

impl EnumTypeInfo {
    /// `Outer.Inner.` for nested types, empty otherwise.
    pub fn parents_dotted(&self) -> String {
        self.parents
            .iter()
            .map(|parent| format!("{}.", parent.name))
            .collect()
    }

    /// Namespace, enclosing types and name joined with dots.
    pub fn local_qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}{}", namespace, self.parents_dotted(), self.name),
            None => format!("{}{}", self.parents_dotted(), self.name),
        }
    }

    /// Namespace that generated helper types for this enum live in.
    pub fn generated_namespace(&self) -> String {
        format!("{}.{}", GENERATED_NAMESPACE_ROOT, self.local_qualified_name())
    }
}

/// One item of the enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDeclaration {
    pub name: SmolStr,
    /// The emitter must synthesize an accessor (and storage) for this item.
    pub needs_accessor: bool,
}

impl ItemDeclaration {
    pub fn new(name: impl Into<SmolStr>, needs_accessor: bool) -> Self {
        Self {
            name: name.into(),
            needs_accessor,
        }
    }
}

/// Which constructor shape a property schema was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyOrigin {
    Primary,
    Partial,
}

/// A per-item data property derived from a constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySchema {
    pub property_name: SmolStr,
    pub field_name: SmolStr,
    pub parameter_name: SmolStr,
    pub origin: PropertyOrigin,
    /// Fully qualified display of the property type.
    pub type_name: SmolStr,
    pub description: Option<String>,
}

/// Everything the emitter needs to generate one enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDefinition {
    pub type_info: EnumTypeInfo,
    /// Items in value order: index `i` has value `i`.
    pub items: Vec<ItemDeclaration>,
    pub properties: Vec<PropertySchema>,
    /// Accessibility keyword for the forward-declared constructor, when the
    /// schema came from one.
    pub partial_constructor_visibility: Option<String>,
    pub fingerprint: u64,
}

impl EnumDefinition {
    /// Numeric value of the item called `name`.
    pub fn item_value(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn internal_shared_member_name(&self) -> String {
        format!(
            "{}_shared_{}",
            INTERNAL_LOWER_PREFIX,
            derive_name(self.fingerprint, MemberKind::SharedMember)
        )
    }

    pub fn internal_struct_member_name(&self) -> String {
        format!(
            "{}_{}",
            INTERNAL_LOWER_PREFIX,
            derive_name(self.fingerprint, MemberKind::StructMember)
        )
    }

    pub fn internal_shared_type_name(&self) -> String {
        format!(
            "{}_Shared_{}",
            INTERNAL_UPPER_PREFIX,
            derive_name(self.fingerprint, MemberKind::SharedType)
        )
    }

    pub fn internal_struct_type_name(&self) -> String {
        format!(
            "{}_{}",
            INTERNAL_UPPER_PREFIX,
            derive_name(self.fingerprint, MemberKind::StructType)
        )
    }
}
