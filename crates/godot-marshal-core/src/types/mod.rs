//! Basic host type facets.

mod special_type;
mod type_kind;

pub use special_type::SpecialType;
pub use type_kind::TypeKind;
