//! TypeTable - in-memory compilation keyed by metadata name.
//!
//! Drivers without a compiler front end register [`HostType`] descriptors
//! here and resolve well-known types through the [`Compilation`] trait.
//!
//! # Example
//!
//! ```
//! use godot_marshal_core::HostType;
//! use godot_marshal_registry::{Compilation, TypeTable};
//!
//! let mut table = TypeTable::new();
//! table.register(HostType::godot_class("Object")).unwrap();
//!
//! assert!(table.type_by_metadata_name("Godot.Object").is_some());
//! ```

use rustc_hash::FxHashMap;

use godot_marshal_core::{HostType, RegistryError};

use crate::Compilation;

/// Types stored by metadata name.
#[derive(Debug, Default)]
pub struct TypeTable {
    types: FxHashMap<String, HostType>,
}

impl TypeTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under its metadata name.
    ///
    /// Fails if a type with the same metadata name is already present.
    pub fn register(&mut self, ty: HostType) -> Result<(), RegistryError> {
        let name = ty.metadata_name();
        if self.types.contains_key(&name) {
            return Err(RegistryError::DuplicateType { name });
        }
        self.types.insert(name, ty);
        Ok(())
    }

    /// Check if a type exists by metadata name.
    pub fn contains(&self, metadata_name: &str) -> bool {
        self.types.contains_key(metadata_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Compilation for TypeTable {
    type Symbol = HostType;

    fn type_by_metadata_name(&self, metadata_name: &str) -> Option<&HostType> {
        self.types.get(metadata_name)
    }
}
