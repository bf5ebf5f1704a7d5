//! Shared data model for Godot marshaling code generation.
//!
//! - [`TypeSymbol`]: read-only host type descriptor supplied by a front end
//! - [`HostType`]: owned descriptor implementation
//! - [`MarshalKind`]: closed classification of host types
//! - [`VariantTag`]: the tagged-variant runtime's type discriminants
//! - [`TypeHash`]: deterministic type identity

mod error;
mod host_type;
mod marshal_kind;
pub mod names;
mod symbol;
mod type_hash;
mod types;
mod variant_tag;

pub use error::{MarshalError, MarshalResult, RegistryError, SynthesisError};
pub use host_type::HostType;
pub use marshal_kind::MarshalKind;
pub use symbol::{MAX_BASE_DEPTH, TypeSymbol};
pub use type_hash::{TypeHash, hash_constants};
pub use types::{SpecialType, TypeKind};
pub use variant_tag::VariantTag;
