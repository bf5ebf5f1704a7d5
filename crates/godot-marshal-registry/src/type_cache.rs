//! TypeCache - well-known types resolved once per compilation.

use godot_marshal_core::{RegistryError, TypeHash, TypeSymbol, names};

/// Lookup of types by fully qualified metadata name.
///
/// Implemented by whatever front end owns the compilation being generated
/// for; [`TypeTable`](crate::TypeTable) is the in-memory implementation.
pub trait Compilation {
    /// Descriptor type handed out by this compilation.
    type Symbol: TypeSymbol;

    /// Resolve a type by metadata name (`Godot.Object`).
    fn type_by_metadata_name(&self, metadata_name: &str) -> Option<&Self::Symbol>;
}

/// Handles of well-known runtime types.
///
/// Built once per compilation and passed explicitly to classification.
/// Immutable after construction, so it can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCache {
    godot_object: TypeHash,
}

impl TypeCache {
    /// Resolve the well-known types from a compilation.
    ///
    /// Fails if the root object type is missing, which means the runtime
    /// library is not referenced or is incompatible.
    pub fn new<C: Compilation>(compilation: &C) -> Result<Self, RegistryError> {
        let godot_object = resolve(compilation, names::OBJECT_METADATA_NAME)?;
        Ok(Self { godot_object })
    }

    /// Build a cache directly from a known root object identity.
    pub const fn from_object_hash(godot_object: TypeHash) -> Self {
        Self { godot_object }
    }

    /// Identity of the root object type.
    pub const fn godot_object_type(&self) -> TypeHash {
        self.godot_object
    }

    /// Check if `ty` is the root object type or derives from it.
    pub fn is_godot_object_or_derived<T: TypeSymbol>(&self, ty: &T) -> bool {
        ty.derives_from(self.godot_object)
    }
}

fn resolve<C: Compilation>(compilation: &C, metadata_name: &str) -> Result<TypeHash, RegistryError> {
    match compilation.type_by_metadata_name(metadata_name) {
        Some(ty) => {
            let hash = ty.type_hash();
            tracing::debug!(name = metadata_name, %hash, "resolved well-known type");
            Ok(hash)
        }
        None => {
            tracing::debug!(name = metadata_name, "well-known type not found");
            Err(RegistryError::TypeNotFound {
                name: metadata_name.to_string(),
            })
        }
    }
}
