//! Compilation-wide capability probes.
//!
//! The host describes the types its compilation can see; the capability
//! stage turns that into a small set of flags the emitter switches on.

use smol_str::SmolStr;

use crate::base::constants::metadata;
use crate::syntax::Accessibility;

/// Ordinal of a host language version (`6`, `7`, `1100` for 11.0, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageVersion(pub u32);

impl LanguageVersion {
    pub const V6: Self = Self(6);
    pub const V7: Self = Self(7);
    pub const V11: Self = Self(1100);
}

/// A constructor of a known type, reduced to what the probes look at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownConstructor {
    pub accessibility: Accessibility,
    /// Metadata names of the parameter types.
    pub parameter_types: Vec<SmolStr>,
}

/// A type visible to the compilation, by metadata name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownType {
    pub metadata_name: SmolStr,
    pub accessibility: Accessibility,
    /// Declared in the assembly being compiled rather than a reference.
    pub from_current_assembly: bool,
    pub constructors: Vec<KnownConstructor>,
}

impl KnownType {
    /// A public type from a referenced assembly with no constructors listed.
    pub fn referenced(metadata_name: impl Into<SmolStr>) -> Self {
        Self {
            metadata_name: metadata_name.into(),
            accessibility: Accessibility::Public,
            from_current_assembly: false,
            constructors: Vec::new(),
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn in_current_assembly(mut self) -> Self {
        self.from_current_assembly = true;
        self
    }

    pub fn with_constructor(
        mut self,
        accessibility: Accessibility,
        parameter_types: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        self.constructors.push(KnownConstructor {
            accessibility,
            parameter_types: parameter_types.into_iter().map(SmolStr::new_static).collect(),
        });
        self
    }
}

/// Snapshot of one compilation, as far as the capability probes need it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationMetadata {
    pub language_version: LanguageVersion,
    /// Nullable reference annotations are enabled.
    pub nullable_annotations: bool,
    /// Every visible type the probes might ask about. A metadata name may
    /// appear more than once (polyfills next to the real thing).
    pub known_types: Vec<KnownType>,
}

impl CompilationMetadata {
    pub fn new(language_version: LanguageVersion) -> Self {
        Self {
            language_version,
            ..Self::default()
        }
    }

    pub fn with_nullable_annotations(mut self, enabled: bool) -> Self {
        self.nullable_annotations = enabled;
        self
    }

    pub fn with_type(mut self, ty: KnownType) -> Self {
        self.known_types.push(ty);
        self
    }

    pub fn types_named<'a>(
        &'a self,
        metadata_name: &'a str,
    ) -> impl Iterator<Item = &'a KnownType> {
        self.known_types
            .iter()
            .filter(move |ty| ty.metadata_name == metadata_name)
    }

    pub fn has_type(&self, metadata_name: &str) -> bool {
        self.types_named(metadata_name).next().is_some()
    }
}

/// Capability flags shared by every enum generated in one compilation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationFeatures {
    pub immutable_array: bool,
    pub frozen_dictionary: bool,
    pub nullable_annotations: bool,
    pub not_null_when: bool,
    pub system_text_json: bool,
    pub newtonsoft_json: bool,
    pub language_version: LanguageVersion,
}

impl CompilationFeatures {
    pub fn probe(metadata: &CompilationMetadata) -> Self {
        Self {
            immutable_array: metadata.has_type(metadata::IMMUTABLE_ARRAY),
            frozen_dictionary: metadata.has_type(metadata::FROZEN_DICTIONARY),
            nullable_annotations: metadata.nullable_annotations,
            not_null_when: has_usable_not_null_when(metadata),
            system_text_json: metadata.has_type(metadata::STJ_CONVERTER)
                && metadata.has_type(metadata::STJ_CONVERTER_ATTRIBUTE),
            newtonsoft_json: metadata.has_type(metadata::NEWTONSOFT_CONVERTER)
                && metadata.has_type(metadata::NEWTONSOFT_CONVERTER_ATTRIBUTE),
            language_version: metadata.language_version,
        }
    }

    /// Nullable suffix for reference types: `?` or nothing.
    pub fn null_q(&self) -> &'static str {
        if self.nullable_annotations { "?" } else { "" }
    }

    /// Null-forgiving operator: `!` or nothing.
    pub fn null_bang(&self) -> &'static str {
        if self.nullable_annotations { "!" } else { "" }
    }

    pub fn readonly_auto_properties(&self) -> bool {
        self.language_version >= LanguageVersion::V6
    }

    pub fn expression_bodied_members(&self) -> bool {
        self.language_version >= LanguageVersion::V6
    }

    pub fn out_variable_declarations(&self) -> bool {
        self.language_version >= LanguageVersion::V7
    }

    pub fn file_local_types(&self) -> bool {
        self.language_version >= LanguageVersion::V11
    }
}

/// Some libraries polyfill the attribute internally, and older frameworks
/// ship it with a non-public constructor. Neither can be used.
fn has_usable_not_null_when(metadata: &CompilationMetadata) -> bool {
    metadata
        .types_named(metadata::NOT_NULL_WHEN)
        .filter(|ty| ty.from_current_assembly || ty.accessibility == Accessibility::Public)
        .flat_map(|ty| &ty.constructors)
        .any(|ctor| {
            ctor.accessibility == Accessibility::Public
                && matches!(ctor.parameter_types.as_slice(), [only] if only == metadata::BOOLEAN)
        })
}
