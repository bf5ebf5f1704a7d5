//! Error types for the marshaling crates.
//!
//! ## Error Hierarchy
//!
//! ```text
//! MarshalError (top-level wrapper)
//! ├── RegistryError  - fatal setup errors resolving well-known types
//! └── SynthesisError - malformed descriptors reaching expression synthesis
//! ```
//!
//! An unsupported type is not an error: classification returns `None`.

use thiserror::Error;

use crate::MarshalKind;

/// Errors raised while resolving well-known runtime types.
///
/// These mean the runtime library is missing or incompatible; code
/// generation cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required type is not present in the compilation.
    #[error("Type not found: '{name}'.")]
    TypeNotFound { name: String },

    /// Two types were registered under the same metadata name.
    #[error("duplicate type '{name}'")]
    DuplicateType { name: String },
}

/// Errors raised while synthesizing conversion expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// A generic collection kind was paired with a descriptor lacking the
    /// type argument its conversion names.
    #[error("{kind} conversion for '{type_name}' needs type argument {index}")]
    MissingTypeArgument {
        kind: MarshalKind,
        type_name: String,
        index: usize,
    },

    /// The descriptor carries more type arguments than the kind's conversion
    /// names.
    #[error("{kind} conversion for '{type_name}' takes {expected} type arguments, found {found}")]
    TypeArgumentCount {
        kind: MarshalKind,
        type_name: String,
        expected: usize,
        found: usize,
    },
}

/// Top-level error wrapping every phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Result alias for marshaling operations.
pub type MarshalResult<T> = Result<T, MarshalError>;
