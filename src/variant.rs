//! Marshal kind to variant tag mapping.
//!
//! Many kinds collapse onto one tag: every integer width and enums become
//! `Int`, both float widths become `Float`, both dictionary forms become
//! `Dictionary`, and object arrays, arrays of `StringName`/`NodePath`/`RID`
//! and both array forms become `Array`.

use godot_marshal_core::{MarshalKind, VariantTag};

/// Variant tag a value of `kind` is stored under.
///
/// `None` means the kind has no tag of its own and is only representable
/// through the generic array and dictionary conversions. Callers must not
/// treat it as an error.
pub const fn variant_tag(kind: MarshalKind) -> Option<VariantTag> {
    let tag = match kind {
        MarshalKind::Boolean => VariantTag::Bool,
        MarshalKind::Char
        | MarshalKind::SByte
        | MarshalKind::Int16
        | MarshalKind::Int32
        | MarshalKind::Int64
        | MarshalKind::Byte
        | MarshalKind::UInt16
        | MarshalKind::UInt32
        | MarshalKind::UInt64
        | MarshalKind::Enum => VariantTag::Int,
        MarshalKind::Single | MarshalKind::Double => VariantTag::Float,
        MarshalKind::String => VariantTag::String,
        MarshalKind::Vector2 => VariantTag::Vector2,
        MarshalKind::Vector2i => VariantTag::Vector2i,
        MarshalKind::Rect2 => VariantTag::Rect2,
        MarshalKind::Rect2i => VariantTag::Rect2i,
        MarshalKind::Transform2D => VariantTag::Transform2d,
        MarshalKind::Vector3 => VariantTag::Vector3,
        MarshalKind::Vector3i => VariantTag::Vector3i,
        MarshalKind::Basis => VariantTag::Basis,
        MarshalKind::Quaternion => VariantTag::Quaternion,
        MarshalKind::Transform3D => VariantTag::Transform3d,
        MarshalKind::Vector4 => VariantTag::Vector4,
        MarshalKind::Vector4i => VariantTag::Vector4i,
        MarshalKind::Projection => VariantTag::Projection,
        MarshalKind::Aabb => VariantTag::Aabb,
        MarshalKind::Color => VariantTag::Color,
        MarshalKind::Plane => VariantTag::Plane,
        MarshalKind::Callable => VariantTag::Callable,
        MarshalKind::SignalInfo => VariantTag::Signal,
        MarshalKind::ByteArray => VariantTag::PackedByteArray,
        MarshalKind::Int32Array => VariantTag::PackedInt32Array,
        MarshalKind::Int64Array => VariantTag::PackedInt64Array,
        MarshalKind::Float32Array => VariantTag::PackedFloat32Array,
        MarshalKind::Float64Array => VariantTag::PackedFloat64Array,
        MarshalKind::StringArray => VariantTag::PackedStringArray,
        MarshalKind::Vector2Array => VariantTag::PackedVector2Array,
        MarshalKind::Vector3Array => VariantTag::PackedVector3Array,
        MarshalKind::ColorArray => VariantTag::PackedColorArray,
        MarshalKind::GodotObjectOrDerivedArray
        | MarshalKind::SystemArrayOfStringName
        | MarshalKind::SystemArrayOfNodePath
        | MarshalKind::SystemArrayOfRid => VariantTag::Array,
        MarshalKind::Variant => VariantTag::Nil,
        MarshalKind::GodotObjectOrDerived => VariantTag::Object,
        MarshalKind::StringName => VariantTag::StringName,
        MarshalKind::NodePath => VariantTag::NodePath,
        MarshalKind::Rid => VariantTag::Rid,
        MarshalKind::GodotDictionary | MarshalKind::GodotGenericDictionary => {
            VariantTag::Dictionary
        }
        MarshalKind::GodotArray | MarshalKind::GodotGenericArray => VariantTag::Array,
    };
    Some(tag)
}
