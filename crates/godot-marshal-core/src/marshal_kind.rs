//! Marshal kinds: every host type shape the conversion layer understands.

use std::fmt;

/// Classification of a host type for choosing a conversion strategy.
///
/// Produced by the classifier; a type outside this closed set is
/// unsupported and has no kind at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarshalKind {
    Boolean,
    Char,
    SByte,
    Int16,
    Int32,
    Int64,
    Byte,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    String,

    // Value types of the runtime library
    Vector2,
    Vector2i,
    Rect2,
    Rect2i,
    Transform2D,
    Vector3,
    Vector3i,
    Basis,
    Quaternion,
    Transform3D,
    Vector4,
    Vector4i,
    Projection,
    Aabb,
    Color,
    Plane,
    Callable,
    SignalInfo,

    Enum,

    // Arrays
    ByteArray,
    Int32Array,
    Int64Array,
    Float32Array,
    Float64Array,
    StringArray,
    Vector2Array,
    Vector3Array,
    ColorArray,
    GodotObjectOrDerivedArray,
    SystemArrayOfStringName,
    SystemArrayOfNodePath,
    SystemArrayOfRid,

    // Variant
    Variant,

    // Classes
    GodotObjectOrDerived,
    StringName,
    NodePath,
    Rid,
    GodotDictionary,
    GodotArray,
    GodotGenericDictionary,
    GodotGenericArray,
}

impl MarshalKind {
    /// Every kind, in declaration order.
    pub const ALL: [MarshalKind; 54] = [
        MarshalKind::Boolean,
        MarshalKind::Char,
        MarshalKind::SByte,
        MarshalKind::Int16,
        MarshalKind::Int32,
        MarshalKind::Int64,
        MarshalKind::Byte,
        MarshalKind::UInt16,
        MarshalKind::UInt32,
        MarshalKind::UInt64,
        MarshalKind::Single,
        MarshalKind::Double,
        MarshalKind::String,
        MarshalKind::Vector2,
        MarshalKind::Vector2i,
        MarshalKind::Rect2,
        MarshalKind::Rect2i,
        MarshalKind::Transform2D,
        MarshalKind::Vector3,
        MarshalKind::Vector3i,
        MarshalKind::Basis,
        MarshalKind::Quaternion,
        MarshalKind::Transform3D,
        MarshalKind::Vector4,
        MarshalKind::Vector4i,
        MarshalKind::Projection,
        MarshalKind::Aabb,
        MarshalKind::Color,
        MarshalKind::Plane,
        MarshalKind::Callable,
        MarshalKind::SignalInfo,
        MarshalKind::Enum,
        MarshalKind::ByteArray,
        MarshalKind::Int32Array,
        MarshalKind::Int64Array,
        MarshalKind::Float32Array,
        MarshalKind::Float64Array,
        MarshalKind::StringArray,
        MarshalKind::Vector2Array,
        MarshalKind::Vector3Array,
        MarshalKind::ColorArray,
        MarshalKind::GodotObjectOrDerivedArray,
        MarshalKind::SystemArrayOfStringName,
        MarshalKind::SystemArrayOfNodePath,
        MarshalKind::SystemArrayOfRid,
        MarshalKind::Variant,
        MarshalKind::GodotObjectOrDerived,
        MarshalKind::StringName,
        MarshalKind::NodePath,
        MarshalKind::Rid,
        MarshalKind::GodotDictionary,
        MarshalKind::GodotArray,
        MarshalKind::GodotGenericDictionary,
        MarshalKind::GodotGenericArray,
    ];

    /// Get the name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            MarshalKind::Boolean => "Boolean",
            MarshalKind::Char => "Char",
            MarshalKind::SByte => "SByte",
            MarshalKind::Int16 => "Int16",
            MarshalKind::Int32 => "Int32",
            MarshalKind::Int64 => "Int64",
            MarshalKind::Byte => "Byte",
            MarshalKind::UInt16 => "UInt16",
            MarshalKind::UInt32 => "UInt32",
            MarshalKind::UInt64 => "UInt64",
            MarshalKind::Single => "Single",
            MarshalKind::Double => "Double",
            MarshalKind::String => "String",
            MarshalKind::Vector2 => "Vector2",
            MarshalKind::Vector2i => "Vector2i",
            MarshalKind::Rect2 => "Rect2",
            MarshalKind::Rect2i => "Rect2i",
            MarshalKind::Transform2D => "Transform2D",
            MarshalKind::Vector3 => "Vector3",
            MarshalKind::Vector3i => "Vector3i",
            MarshalKind::Basis => "Basis",
            MarshalKind::Quaternion => "Quaternion",
            MarshalKind::Transform3D => "Transform3D",
            MarshalKind::Vector4 => "Vector4",
            MarshalKind::Vector4i => "Vector4i",
            MarshalKind::Projection => "Projection",
            MarshalKind::Aabb => "AABB",
            MarshalKind::Color => "Color",
            MarshalKind::Plane => "Plane",
            MarshalKind::Callable => "Callable",
            MarshalKind::SignalInfo => "SignalInfo",
            MarshalKind::Enum => "Enum",
            MarshalKind::ByteArray => "ByteArray",
            MarshalKind::Int32Array => "Int32Array",
            MarshalKind::Int64Array => "Int64Array",
            MarshalKind::Float32Array => "Float32Array",
            MarshalKind::Float64Array => "Float64Array",
            MarshalKind::StringArray => "StringArray",
            MarshalKind::Vector2Array => "Vector2Array",
            MarshalKind::Vector3Array => "Vector3Array",
            MarshalKind::ColorArray => "ColorArray",
            MarshalKind::GodotObjectOrDerivedArray => "GodotObjectOrDerivedArray",
            MarshalKind::SystemArrayOfStringName => "SystemArrayOfStringName",
            MarshalKind::SystemArrayOfNodePath => "SystemArrayOfNodePath",
            MarshalKind::SystemArrayOfRid => "SystemArrayOfRID",
            MarshalKind::Variant => "Variant",
            MarshalKind::GodotObjectOrDerived => "GodotObjectOrDerived",
            MarshalKind::StringName => "StringName",
            MarshalKind::NodePath => "NodePath",
            MarshalKind::Rid => "RID",
            MarshalKind::GodotDictionary => "GodotDictionary",
            MarshalKind::GodotArray => "GodotArray",
            MarshalKind::GodotGenericDictionary => "GodotGenericDictionary",
            MarshalKind::GodotGenericArray => "GodotGenericArray",
        }
    }

    /// Check if this kind takes the generic-collection fast path when
    /// synthesizing conversions.
    pub const fn is_generic_collection(self) -> bool {
        matches!(
            self,
            MarshalKind::GodotGenericDictionary | MarshalKind::GodotGenericArray
        )
    }

    /// Number of type arguments the generic-collection fast path names.
    pub const fn generic_arity(self) -> usize {
        match self {
            MarshalKind::GodotGenericDictionary => 2,
            MarshalKind::GodotGenericArray => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for MarshalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
