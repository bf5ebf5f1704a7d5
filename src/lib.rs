//! Marshal type classification and conversion expression synthesis for
//! Godot C# bindings.
//!
//! A code generator drives three steps per member type:
//!
//! 1. [`classify`] the type into a [`MarshalKind`] (or skip it as unsupported)
//! 2. map the kind to its [`VariantTag`] with [`variant_tag`]
//! 3. [`synthesize`] the conversion expressions it embeds in generated source
//!
//! # Example
//!
//! ```
//! use godot_marshal::{
//!     HostType, MarshalKind, SpecialType, TypeCache, TypeTable, VariantTag, classify,
//!     native_variant_to_managed_expr, variant_tag,
//! };
//!
//! let mut table = TypeTable::new();
//! table.register(HostType::godot_class("Object")).unwrap();
//! let cache = TypeCache::new(&table).unwrap();
//!
//! let ty = HostType::special(SpecialType::Boolean);
//! let kind = classify(&ty, &cache).unwrap();
//! assert_eq!(kind, MarshalKind::Boolean);
//! assert_eq!(variant_tag(kind), Some(VariantTag::Bool));
//! assert_eq!(
//!     native_variant_to_managed_expr("args[0]", &ty, kind).unwrap(),
//!     "global::Godot.NativeInterop.VariantUtils.ConvertTo<bool>(args[0])"
//! );
//! ```

mod classify;
mod expr;
mod marshaler;
mod variant;

pub use classify::classify;
pub use expr::{
    ExprDirection, append_managed_to_native_variant_expr, append_managed_to_variant_expr,
    append_native_variant_to_managed_expr, append_variant_to_managed_expr,
    managed_to_native_variant_expr, managed_to_variant_expr, native_variant_to_managed_expr,
    synthesize, variant_to_managed_expr,
};
pub use marshaler::{MarshalPlan, Marshaler};
pub use variant::variant_tag;

pub use godot_marshal_core::{
    HostType, MarshalError, MarshalKind, MarshalResult, RegistryError, SpecialType,
    SynthesisError, TypeHash, TypeKind, TypeSymbol, VariantTag, names,
};
pub use godot_marshal_registry::{Compilation, TypeCache, TypeTable};
