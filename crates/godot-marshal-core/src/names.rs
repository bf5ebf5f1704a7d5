//! Well-known names of the host runtime library.
//!
//! Emitted expressions reference these symbols verbatim. If the runtime
//! renames an entry point, this is the only place to change.

/// Assembly that ships the runtime's managed types.
pub const ASSEMBLY: &str = "GodotSharp";

/// Primary namespace (compared by simple name).
pub const NAMESPACE: &str = "Godot";

/// Simple name of the collections namespace.
pub const COLLECTIONS_NAMESPACE_NAME: &str = "Collections";

/// Fully qualified collections namespace.
pub const COLLECTIONS_NAMESPACE: &str = "Godot.Collections";

/// Metadata name of the root object type every engine object derives from.
pub const OBJECT_METADATA_NAME: &str = "Godot.Object";

/// Static utility class converting between native variants and managed values.
pub const VARIANT_UTILS: &str = "global::Godot.NativeInterop.VariantUtils";

/// Boxed variant struct.
pub const VARIANT: &str = "global::Godot.Variant";

/// Enum of variant type tags.
pub const VARIANT_TYPE: &str = "global::Godot.Variant.Type";

/// Prefix of fully qualified names in generated source.
pub const GLOBAL_PREFIX: &str = "global::";
