//! The type descriptor interface supplied by a compiler front end.

use crate::{SpecialType, TypeHash, TypeKind, names};

/// Upper bound on base-type chain walks.
///
/// Chains are finite and acyclic; the bound only stops a misbehaving
/// front end from hanging classification.
pub const MAX_BASE_DEPTH: usize = 256;

/// Read-only view of a host type.
///
/// The marshaling crates never create or mutate descriptors; they only query
/// the facets below. A front end wraps its own symbols in this trait, and
/// [`HostType`](crate::HostType) is an owned implementation for drivers and
/// tests without one.
pub trait TypeSymbol: Sized {
    /// Special (built-in) tag, [`SpecialType::None`] for everything else.
    fn special_type(&self) -> SpecialType;

    /// Structural kind.
    fn type_kind(&self) -> TypeKind;

    /// Simple name without namespace or generic arguments (`Dictionary`).
    fn name(&self) -> &str;

    /// Name of the containing assembly, if known.
    fn containing_assembly(&self) -> Option<&str>;

    /// Full dotted name of the containing namespace (`Godot.Collections`).
    fn containing_namespace(&self) -> Option<&str>;

    /// Generic type arguments, empty for non-generic types.
    fn type_arguments(&self) -> &[Self];

    /// Array rank, 0 for non-array types.
    fn array_rank(&self) -> usize;

    /// Element type of an array.
    fn element_type(&self) -> Option<&Self>;

    /// Direct base type.
    fn base_type(&self) -> Option<&Self>;

    /// Fully qualified name as written in generated source, including the
    /// `global::` prefix and generic arguments.
    fn full_qualified_name(&self) -> String;

    /// Identity of this type.
    fn type_hash(&self) -> TypeHash;

    /// Last segment of the containing namespace (`Collections`).
    fn containing_namespace_name(&self) -> Option<&str> {
        self.containing_namespace()
            .map(|ns| ns.rsplit('.').next().unwrap_or(ns))
    }

    /// Check if this is an instantiated generic type.
    fn is_generic_type(&self) -> bool {
        !self.type_arguments().is_empty()
    }

    /// Check if this type lives in the runtime assembly's primary namespace.
    fn is_in_host_namespace(&self) -> bool {
        self.containing_assembly() == Some(names::ASSEMBLY)
            && self.containing_namespace_name() == Some(names::NAMESPACE)
    }

    /// Walk the base-type chain looking for `candidate`.
    ///
    /// The type itself counts, so a type derives from itself.
    fn derives_from(&self, candidate: TypeHash) -> bool {
        let mut current = Some(self);
        for _ in 0..MAX_BASE_DEPTH {
            match current {
                Some(ty) if ty.type_hash() == candidate => return true,
                Some(ty) => current = ty.base_type(),
                None => return false,
            }
        }
        false
    }

    /// Element type for collection hints.
    ///
    /// Arrays yield their element, instantiated generics their first argument.
    fn array_element_type(&self) -> Option<&Self> {
        if self.type_kind().is_array() {
            return self.element_type();
        }
        self.type_arguments().first()
    }
}
