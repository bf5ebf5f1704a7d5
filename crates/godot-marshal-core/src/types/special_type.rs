//! Special (built-in) host types.

use std::fmt;

/// Built-in host types the front end tags directly on a descriptor.
///
/// Anything that is not one of these carries [`SpecialType::None`] and is
/// classified structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialType {
    #[default]
    None,
    Boolean,
    Char,
    SByte,
    Int16,
    Int32,
    Int64,
    Byte,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    String,
}

impl SpecialType {
    /// Language keyword used when the type is written in generated source.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            SpecialType::None => None,
            SpecialType::Boolean => Some("bool"),
            SpecialType::Char => Some("char"),
            SpecialType::SByte => Some("sbyte"),
            SpecialType::Int16 => Some("short"),
            SpecialType::Int32 => Some("int"),
            SpecialType::Int64 => Some("long"),
            SpecialType::Byte => Some("byte"),
            SpecialType::UInt16 => Some("ushort"),
            SpecialType::UInt32 => Some("uint"),
            SpecialType::UInt64 => Some("ulong"),
            SpecialType::Single => Some("float"),
            SpecialType::Double => Some("double"),
            SpecialType::String => Some("string"),
        }
    }

    /// Simple metadata name inside the `System` namespace.
    pub const fn metadata_name(self) -> Option<&'static str> {
        match self {
            SpecialType::None => None,
            SpecialType::Boolean => Some("Boolean"),
            SpecialType::Char => Some("Char"),
            SpecialType::SByte => Some("SByte"),
            SpecialType::Int16 => Some("Int16"),
            SpecialType::Int32 => Some("Int32"),
            SpecialType::Int64 => Some("Int64"),
            SpecialType::Byte => Some("Byte"),
            SpecialType::UInt16 => Some("UInt16"),
            SpecialType::UInt32 => Some("UInt32"),
            SpecialType::UInt64 => Some("UInt64"),
            SpecialType::Single => Some("Single"),
            SpecialType::Double => Some("Double"),
            SpecialType::String => Some("String"),
        }
    }
}

impl fmt::Display for SpecialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword().unwrap_or("<none>"))
    }
}
