//! Variant tags of the tagged-variant runtime.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::names;

/// Type discriminant of a runtime variant.
///
/// Discriminants match the runtime's own numbering so a tag can be emitted
/// either by name or as an integer constant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[repr(i32)]
pub enum VariantTag {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2i = 6,
    Rect2 = 7,
    Rect2i = 8,
    Vector3 = 9,
    Vector3i = 10,
    Transform2d = 11,
    Vector4 = 12,
    Vector4i = 13,
    Plane = 14,
    Quaternion = 15,
    Aabb = 16,
    Basis = 17,
    Transform3d = 18,
    Projection = 19,
    Color = 20,
    StringName = 21,
    NodePath = 22,
    Rid = 23,
    Object = 24,
    Callable = 25,
    Signal = 26,
    Dictionary = 27,
    Array = 28,
    PackedByteArray = 29,
    PackedInt32Array = 30,
    PackedInt64Array = 31,
    PackedFloat32Array = 32,
    PackedFloat64Array = 33,
    PackedStringArray = 34,
    PackedVector2Array = 35,
    PackedVector3Array = 36,
    PackedColorArray = 37,
}

impl VariantTag {
    /// Number of tags.
    pub const COUNT: usize = 38;

    /// Member name in the runtime's variant type enum.
    pub const fn name(self) -> &'static str {
        match self {
            VariantTag::Nil => "Nil",
            VariantTag::Bool => "Bool",
            VariantTag::Int => "Int",
            VariantTag::Float => "Float",
            VariantTag::String => "String",
            VariantTag::Vector2 => "Vector2",
            VariantTag::Vector2i => "Vector2i",
            VariantTag::Rect2 => "Rect2",
            VariantTag::Rect2i => "Rect2i",
            VariantTag::Vector3 => "Vector3",
            VariantTag::Vector3i => "Vector3i",
            VariantTag::Transform2d => "Transform2d",
            VariantTag::Vector4 => "Vector4",
            VariantTag::Vector4i => "Vector4i",
            VariantTag::Plane => "Plane",
            VariantTag::Quaternion => "Quaternion",
            VariantTag::Aabb => "Aabb",
            VariantTag::Basis => "Basis",
            VariantTag::Transform3d => "Transform3d",
            VariantTag::Projection => "Projection",
            VariantTag::Color => "Color",
            VariantTag::StringName => "StringName",
            VariantTag::NodePath => "NodePath",
            VariantTag::Rid => "Rid",
            VariantTag::Object => "Object",
            VariantTag::Callable => "Callable",
            VariantTag::Signal => "Signal",
            VariantTag::Dictionary => "Dictionary",
            VariantTag::Array => "Array",
            VariantTag::PackedByteArray => "PackedByteArray",
            VariantTag::PackedInt32Array => "PackedInt32Array",
            VariantTag::PackedInt64Array => "PackedInt64Array",
            VariantTag::PackedFloat32Array => "PackedFloat32Array",
            VariantTag::PackedFloat64Array => "PackedFloat64Array",
            VariantTag::PackedStringArray => "PackedStringArray",
            VariantTag::PackedVector2Array => "PackedVector2Array",
            VariantTag::PackedVector3Array => "PackedVector3Array",
            VariantTag::PackedColorArray => "PackedColorArray",
        }
    }

    /// Fully qualified enum member, ready to embed in generated source.
    pub fn qualified_name(self) -> String {
        format!("{}.{}", names::VARIANT_TYPE, self.name())
    }

    /// Check if this tag denotes one of the packed array types.
    pub const fn is_packed_array(self) -> bool {
        (self as i32) >= (VariantTag::PackedByteArray as i32)
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
