//! Structural kind of a host type.

/// Structural kind reported by the front end for a named or array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Enumeration, classified without looking at its underlying width.
    Enum,
    /// Value type (struct).
    Struct,
    /// Array of any rank.
    Array,
    /// Reference type (class).
    Class,
    Interface,
    /// Delegates, pointers, type parameters and anything else.
    Other,
}

impl TypeKind {
    /// Check if this is an array kind.
    pub const fn is_array(self) -> bool {
        matches!(self, TypeKind::Array)
    }
}
