//! Type registry for Godot marshaling.
//!
//! Resolves the well-known root object type once per compilation and hands
//! the result to the classifier as an explicit [`TypeCache`] value.

mod type_cache;
mod type_table;

pub use type_cache::{Compilation, TypeCache};
pub use type_table::TypeTable;

pub use godot_marshal_core::RegistryError;
