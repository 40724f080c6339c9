//! Domain constants shared by the pipeline and the validator.

/// Simple name of the marker attribute that opts a type into generation.
pub const MARKER_ATTRIBUTE_NAME: &str = "PowerEnumAttribute";

/// Namespace the marker attribute lives in.
pub const MARKER_ATTRIBUTE_NAMESPACE: &str = "PowerEnum";

/// Prefix for generated internal type names.
pub const INTERNAL_UPPER_PREFIX: &str = "_PowerEnum_Internal";

/// Prefix for generated internal member names.
pub const INTERNAL_LOWER_PREFIX: &str = "_powerEnum_internal";

/// Root namespace for generated helper types.
pub const GENERATED_NAMESPACE_ROOT: &str = "PowerEnum.Generated";

/// Metadata names probed by the capability stage.
pub mod metadata {
    pub const IMMUTABLE_ARRAY: &str = "System.Collections.Immutable.ImmutableArray";
    pub const FROZEN_DICTIONARY: &str = "System.Collections.Frozen.FrozenDictionary";
    pub const NOT_NULL_WHEN: &str = "System.Diagnostics.CodeAnalysis.NotNullWhenAttribute";
    pub const STJ_CONVERTER: &str = "System.Text.Json.Serialization.JsonConverter`1";
    pub const STJ_CONVERTER_ATTRIBUTE: &str =
        "System.Text.Json.Serialization.JsonConverterAttribute";
    pub const NEWTONSOFT_CONVERTER: &str = "Newtonsoft.Json.JsonConverter`1";
    pub const NEWTONSOFT_CONVERTER_ATTRIBUTE: &str = "Newtonsoft.Json.JsonConverterAttribute";
    pub const BOOLEAN: &str = "System.Boolean";
}
