//! Marshal classification.
//!
//! Maps a host type descriptor to its [`MarshalKind`], or `None` when the type
//! is outside the supported set. Rules apply in strict precedence order:
//!
//! 1. special types (`bool`, numeric widths, `char`, `string`)
//! 2. enums
//! 3. runtime structs, by exact name
//! 4. single-dimension arrays, by element
//! 5. classes and interfaces: object hierarchy first, then runtime classes
//!    and collections by namespace and exact name
//!
//! Classification is a pure function of the descriptor and the [`TypeCache`].

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use godot_marshal_core::{MarshalKind, SpecialType, TypeKind, TypeSymbol, names};
use godot_marshal_registry::TypeCache;

/// Runtime value types recognized by simple name.
static GODOT_STRUCTS: LazyLock<FxHashMap<&'static str, MarshalKind>> = LazyLock::new(|| {
    [
        ("Vector2", MarshalKind::Vector2),
        ("Vector2i", MarshalKind::Vector2i),
        ("Rect2", MarshalKind::Rect2),
        ("Rect2i", MarshalKind::Rect2i),
        ("Transform2D", MarshalKind::Transform2D),
        ("Vector3", MarshalKind::Vector3),
        ("Vector3i", MarshalKind::Vector3i),
        ("Basis", MarshalKind::Basis),
        ("Quaternion", MarshalKind::Quaternion),
        ("Transform3D", MarshalKind::Transform3D),
        ("Vector4", MarshalKind::Vector4),
        ("Vector4i", MarshalKind::Vector4i),
        ("Projection", MarshalKind::Projection),
        ("AABB", MarshalKind::Aabb),
        ("Color", MarshalKind::Color),
        ("Plane", MarshalKind::Plane),
        ("RID", MarshalKind::Rid),
        ("Callable", MarshalKind::Callable),
        ("SignalInfo", MarshalKind::SignalInfo),
        ("Variant", MarshalKind::Variant),
    ]
    .into_iter()
    .collect()
});

/// Runtime element types with a dedicated array kind.
static GODOT_ARRAY_ELEMENTS: LazyLock<FxHashMap<&'static str, MarshalKind>> =
    LazyLock::new(|| {
        [
            ("Vector2", MarshalKind::Vector2Array),
            ("Vector3", MarshalKind::Vector3Array),
            ("Color", MarshalKind::ColorArray),
            ("StringName", MarshalKind::SystemArrayOfStringName),
            ("NodePath", MarshalKind::SystemArrayOfNodePath),
            ("RID", MarshalKind::SystemArrayOfRid),
        ]
        .into_iter()
        .collect()
    });

/// Classify a host type.
///
/// Returns `None` for unsupported types. That is an expected outcome: the
/// caller skips the member and reports a diagnostic.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn classify<T: TypeSymbol>(ty: &T, cache: &TypeCache) -> Option<MarshalKind> {
    let kind = classify_type(ty, cache);
    match kind {
        Some(kind) => tracing::trace!(%kind, "classified marshal type"),
        None => tracing::trace!(
            type_name = %ty.full_qualified_name(),
            "unsupported marshal type"
        ),
    }
    kind
}

fn classify_type<T: TypeSymbol>(ty: &T, cache: &TypeCache) -> Option<MarshalKind> {
    if let Some(kind) = special_kind(ty.special_type()) {
        return Some(kind);
    }

    match ty.type_kind() {
        TypeKind::Enum => Some(MarshalKind::Enum),
        TypeKind::Struct => {
            if ty.is_in_host_namespace() {
                GODOT_STRUCTS.get(ty.name()).copied()
            } else {
                None
            }
        }
        TypeKind::Array => classify_array(ty, cache),
        TypeKind::Class | TypeKind::Interface | TypeKind::Other => classify_reference(ty, cache),
    }
}

/// Kind of a special type; takes precedence over every structural rule.
const fn special_kind(special: SpecialType) -> Option<MarshalKind> {
    match special {
        SpecialType::None => None,
        SpecialType::Boolean => Some(MarshalKind::Boolean),
        SpecialType::Char => Some(MarshalKind::Char),
        SpecialType::SByte => Some(MarshalKind::SByte),
        SpecialType::Int16 => Some(MarshalKind::Int16),
        SpecialType::Int32 => Some(MarshalKind::Int32),
        SpecialType::Int64 => Some(MarshalKind::Int64),
        SpecialType::Byte => Some(MarshalKind::Byte),
        SpecialType::UInt16 => Some(MarshalKind::UInt16),
        SpecialType::UInt32 => Some(MarshalKind::UInt32),
        SpecialType::UInt64 => Some(MarshalKind::UInt64),
        SpecialType::Single => Some(MarshalKind::Single),
        SpecialType::Double => Some(MarshalKind::Double),
        SpecialType::String => Some(MarshalKind::String),
    }
}

/// Packed array kind for an array of a special element type.
const fn packed_array_kind(element: SpecialType) -> Option<MarshalKind> {
    match element {
        SpecialType::Byte => Some(MarshalKind::ByteArray),
        SpecialType::Int32 => Some(MarshalKind::Int32Array),
        SpecialType::Int64 => Some(MarshalKind::Int64Array),
        SpecialType::Single => Some(MarshalKind::Float32Array),
        SpecialType::Double => Some(MarshalKind::Float64Array),
        SpecialType::String => Some(MarshalKind::StringArray),
        _ => None,
    }
}

fn classify_array<T: TypeSymbol>(ty: &T, cache: &TypeCache) -> Option<MarshalKind> {
    if ty.array_rank() != 1 {
        return None;
    }

    let element = ty.element_type()?;

    if let Some(kind) = packed_array_kind(element.special_type()) {
        return Some(kind);
    }

    if cache.is_godot_object_or_derived(element) {
        return Some(MarshalKind::GodotObjectOrDerivedArray);
    }

    if element.is_in_host_namespace() {
        return GODOT_ARRAY_ELEMENTS.get(element.name()).copied();
    }

    None
}

fn classify_reference<T: TypeSymbol>(ty: &T, cache: &TypeCache) -> Option<MarshalKind> {
    if cache.is_godot_object_or_derived(ty) {
        return Some(MarshalKind::GodotObjectOrDerived);
    }

    if ty.containing_assembly() != Some(names::ASSEMBLY) {
        return None;
    }

    match ty.containing_namespace_name()? {
        names::NAMESPACE => match ty.name() {
            "StringName" => Some(MarshalKind::StringName),
            "NodePath" => Some(MarshalKind::NodePath),
            _ => None,
        },
        names::COLLECTIONS_NAMESPACE_NAME
            if ty.containing_namespace() == Some(names::COLLECTIONS_NAMESPACE) =>
        {
            classify_collection(ty)
        }
        _ => None,
    }
}

fn classify_collection<T: TypeSymbol>(ty: &T) -> Option<MarshalKind> {
    let (plain, generic) = match ty.name() {
        "Dictionary" => (MarshalKind::GodotDictionary, MarshalKind::GodotGenericDictionary),
        "Array" => (MarshalKind::GodotArray, MarshalKind::GodotGenericArray),
        _ => return None,
    };

    if !ty.is_generic_type() {
        return Some(plain);
    }

    // The fast-path conversions name each argument, so the arity must match.
    (ty.type_arguments().len() == generic.generic_arity()).then_some(generic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use godot_marshal_core::HostType;

    fn cache() -> TypeCache {
        TypeCache::from_object_hash(HostType::godot_class("Object").type_hash())
    }

    fn object() -> HostType {
        HostType::godot_class("Object")
    }

    #[test]
    fn special_types_map_one_to_one() {
        let cases = [
            (SpecialType::Boolean, MarshalKind::Boolean),
            (SpecialType::Char, MarshalKind::Char),
            (SpecialType::SByte, MarshalKind::SByte),
            (SpecialType::Int16, MarshalKind::Int16),
            (SpecialType::Int32, MarshalKind::Int32),
            (SpecialType::Int64, MarshalKind::Int64),
            (SpecialType::Byte, MarshalKind::Byte),
            (SpecialType::UInt16, MarshalKind::UInt16),
            (SpecialType::UInt32, MarshalKind::UInt32),
            (SpecialType::UInt64, MarshalKind::UInt64),
            (SpecialType::Single, MarshalKind::Single),
            (SpecialType::Double, MarshalKind::Double),
            (SpecialType::String, MarshalKind::String),
        ];
        for (special, expected) in cases {
            assert_eq!(
                classify(&HostType::special(special), &cache()),
                Some(expected),
                "{special}"
            );
        }
    }

    #[test]
    fn enums_ignore_namespace() {
        let user = HostType::enumeration("Game", "Game", "Direction");
        let runtime = HostType::enumeration(names::ASSEMBLY, names::NAMESPACE, "Error");
        assert_eq!(classify(&user, &cache()), Some(MarshalKind::Enum));
        assert_eq!(classify(&runtime, &cache()), Some(MarshalKind::Enum));
    }

    #[test]
    fn every_runtime_struct_recognized() {
        for (name, kind) in GODOT_STRUCTS.iter() {
            assert_eq!(
                classify(&HostType::godot_struct(*name), &cache()),
                Some(*kind),
                "{name}"
            );
        }
        assert_eq!(GODOT_STRUCTS.len(), 20);
    }

    #[test]
    fn struct_outside_runtime_unsupported() {
        let other_assembly = HostType::structure("Game", "Godot", "Vector2");
        let other_namespace = HostType::structure(names::ASSEMBLY, "Godot.Internal", "Vector2");
        let unknown_name = HostType::godot_struct("Vector5");

        assert_eq!(classify(&other_assembly, &cache()), None);
        assert_eq!(classify(&other_namespace, &cache()), None);
        assert_eq!(classify(&unknown_name, &cache()), None);
    }

    #[test]
    fn array_of_struct_outside_runtime_unsupported() {
        let foreign = HostType::array(HostType::structure("Game", "Godot", "Vector2"));
        assert_eq!(classify(&foreign, &cache()), None);
        assert_eq!(
            classify(&HostType::array(HostType::godot_struct("Vector2")), &cache()),
            Some(MarshalKind::Vector2Array)
        );
    }

    #[test]
    fn root_name_in_other_assembly_unsupported() {
        let foreign_root = HostType::class("Game", "Godot", "Object");
        let player = HostType::class("Game", "Game", "Player").with_base(foreign_root.clone());

        assert_eq!(classify(&foreign_root, &cache()), None);
        assert_eq!(classify(&player, &cache()), None);
        assert_eq!(classify(&HostType::array(player), &cache()), None);
    }

    #[test]
    fn struct_names_match_exactly() {
        assert_eq!(classify(&HostType::godot_struct("Aabb"), &cache()), None);
        assert_eq!(classify(&HostType::godot_struct("rid"), &cache()), None);
    }

    #[test]
    fn packed_arrays_by_element() {
        let cases = [
            (SpecialType::Byte, MarshalKind::ByteArray),
            (SpecialType::Int32, MarshalKind::Int32Array),
            (SpecialType::Int64, MarshalKind::Int64Array),
            (SpecialType::Single, MarshalKind::Float32Array),
            (SpecialType::Double, MarshalKind::Float64Array),
            (SpecialType::String, MarshalKind::StringArray),
        ];
        for (element, expected) in cases {
            let ty = HostType::array(HostType::special(element));
            assert_eq!(classify(&ty, &cache()), Some(expected), "{element}[]");
        }
    }

    #[test]
    fn arrays_of_other_specials_unsupported() {
        for element in [SpecialType::Boolean, SpecialType::Int16, SpecialType::UInt32] {
            let ty = HostType::array(HostType::special(element));
            assert_eq!(classify(&ty, &cache()), None, "{element}[]");
        }
    }

    #[test]
    fn object_arrays() {
        let node = HostType::godot_class("Node").with_base(object());
        assert_eq!(
            classify(&HostType::array(node), &cache()),
            Some(MarshalKind::GodotObjectOrDerivedArray)
        );
        assert_eq!(
            classify(&HostType::array(object()), &cache()),
            Some(MarshalKind::GodotObjectOrDerivedArray)
        );
    }

    #[test]
    fn runtime_element_arrays() {
        let cases = [
            (HostType::godot_struct("Vector2"), MarshalKind::Vector2Array),
            (HostType::godot_struct("Vector3"), MarshalKind::Vector3Array),
            (HostType::godot_struct("Color"), MarshalKind::ColorArray),
            (HostType::godot_class("StringName"), MarshalKind::SystemArrayOfStringName),
            (HostType::godot_class("NodePath"), MarshalKind::SystemArrayOfNodePath),
            (HostType::godot_struct("RID"), MarshalKind::SystemArrayOfRid),
        ];
        for (element, expected) in cases {
            let name = element.full_qualified_name();
            assert_eq!(classify(&HostType::array(element), &cache()), Some(expected), "{name}");
        }
    }

    #[test]
    fn arrays_of_unlisted_runtime_types_unsupported() {
        let ty = HostType::array(HostType::godot_struct("Basis"));
        assert_eq!(classify(&ty, &cache()), None);
    }

    #[test]
    fn multidimensional_arrays_unsupported() {
        for rank in [0, 2, 3] {
            let bytes = HostType::array_of_rank(HostType::special(SpecialType::Byte), rank);
            let nodes = HostType::array_of_rank(object(), rank);
            assert_eq!(classify(&bytes, &cache()), None);
            assert_eq!(classify(&nodes, &cache()), None);
        }
    }

    #[test]
    fn object_hierarchy_wins_over_names() {
        let fake = HostType::godot_class("StringName").with_base(object());
        assert_eq!(
            classify(&fake, &cache()),
            Some(MarshalKind::GodotObjectOrDerived)
        );
    }

    #[test]
    fn user_classes_deriving_from_object() {
        let node = HostType::godot_class("Node").with_base(object());
        let player = HostType::class("Game", "Game.Actors", "Player").with_base(node);
        assert_eq!(
            classify(&player, &cache()),
            Some(MarshalKind::GodotObjectOrDerived)
        );
    }

    #[test]
    fn plain_user_classes_unsupported() {
        let ty = HostType::class("Game", "Game", "Inventory");
        assert_eq!(classify(&ty, &cache()), None);
        let iface = HostType::interface("Game", "Game", "IDamageable");
        assert_eq!(classify(&iface, &cache()), None);
    }

    #[test]
    fn runtime_classes_by_name() {
        assert_eq!(
            classify(&HostType::godot_class("StringName"), &cache()),
            Some(MarshalKind::StringName)
        );
        assert_eq!(
            classify(&HostType::godot_class("NodePath"), &cache()),
            Some(MarshalKind::NodePath)
        );
        assert_eq!(classify(&HostType::godot_class("GD"), &cache()), None);
    }

    #[test]
    fn collections_namespace_must_be_fully_qualified() {
        let nested = HostType::class(names::ASSEMBLY, "Godot.Internal.Collections", "Array");
        assert_eq!(classify(&nested, &cache()), None);
    }

    #[test]
    fn collections_from_other_assemblies_unsupported() {
        let ty = HostType::class("Game", names::COLLECTIONS_NAMESPACE, "Dictionary");
        assert_eq!(classify(&ty, &cache()), None);
    }

    #[test]
    fn plain_and_generic_collections() {
        let int = HostType::special(SpecialType::Int32);
        let dict = HostType::godot_collection("Dictionary");
        let array = HostType::godot_collection("Array");

        assert_eq!(classify(&dict, &cache()), Some(MarshalKind::GodotDictionary));
        assert_eq!(classify(&array, &cache()), Some(MarshalKind::GodotArray));
        assert_eq!(
            classify(
                &dict.with_type_arguments(vec![int.clone(), int.clone()]),
                &cache()
            ),
            Some(MarshalKind::GodotGenericDictionary)
        );
        assert_eq!(
            classify(&array.with_type_arguments(vec![int]), &cache()),
            Some(MarshalKind::GodotGenericArray)
        );
    }

    #[test]
    fn generic_collections_with_wrong_arity_unsupported() {
        let int = HostType::special(SpecialType::Int32);
        let dict = HostType::godot_collection("Dictionary").with_type_arguments(vec![int.clone()]);
        let array =
            HostType::godot_collection("Array").with_type_arguments(vec![int.clone(), int]);

        assert_eq!(classify(&dict, &cache()), None);
        assert_eq!(classify(&array, &cache()), None);
    }

    #[test]
    fn other_collections_unsupported() {
        assert_eq!(classify(&HostType::godot_collection("List"), &cache()), None);
    }
}
