//! Owned type descriptor.
//!
//! [`HostType`] implements [`TypeSymbol`] over plain data so drivers can
//! describe types without a live compiler.
//!
//! # Example
//!
//! ```
//! use godot_marshal_core::{HostType, SpecialType, TypeSymbol};
//!
//! let object = HostType::godot_class("Object");
//! let node = HostType::godot_class("Node").with_base(object.clone());
//! assert!(node.derives_from(object.type_hash()));
//!
//! let ints = HostType::array(HostType::special(SpecialType::Int32));
//! assert_eq!(ints.full_qualified_name(), "int[]");
//! ```

use crate::{SpecialType, TypeHash, TypeKind, TypeSymbol, names};

/// Assembly reported for special types.
const CORE_LIBRARY: &str = "System.Private.CoreLib";

/// An immutable, owned description of a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostType {
    name: String,
    kind: TypeKind,
    special: SpecialType,
    assembly: Option<String>,
    namespace: Option<String>,
    type_arguments: Vec<HostType>,
    element: Option<Box<HostType>>,
    rank: usize,
    base: Option<Box<HostType>>,
}

impl HostType {
    fn named(
        kind: TypeKind,
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        Self {
            name: name.into(),
            kind,
            special: SpecialType::None,
            assembly: Some(assembly.into()),
            namespace: (!namespace.is_empty()).then_some(namespace),
            type_arguments: Vec::new(),
            element: None,
            rank: 0,
            base: None,
        }
    }

    /// Create a descriptor for a special (built-in) type.
    ///
    /// Passing [`SpecialType::None`] yields an anonymous `Other` type.
    pub fn special(special: SpecialType) -> Self {
        let kind = match special {
            SpecialType::None => TypeKind::Other,
            SpecialType::String => TypeKind::Class,
            _ => TypeKind::Struct,
        };
        let mut ty = Self::named(
            kind,
            CORE_LIBRARY,
            "System",
            special.metadata_name().unwrap_or_default(),
        );
        ty.special = special;
        ty
    }

    /// Create an enum type.
    pub fn enumeration(
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::named(TypeKind::Enum, assembly, namespace, name)
    }

    /// Create a struct type.
    pub fn structure(
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::named(TypeKind::Struct, assembly, namespace, name)
    }

    /// Create a class type.
    pub fn class(
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::named(TypeKind::Class, assembly, namespace, name)
    }

    /// Create an interface type.
    pub fn interface(
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::named(TypeKind::Interface, assembly, namespace, name)
    }

    /// Create a type of kind `Other` (delegates, pointers, ...).
    pub fn other(
        assembly: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::named(TypeKind::Other, assembly, namespace, name)
    }

    /// Create a struct in the runtime's primary namespace.
    pub fn godot_struct(name: impl Into<String>) -> Self {
        Self::structure(names::ASSEMBLY, names::NAMESPACE, name)
    }

    /// Create a class in the runtime's primary namespace.
    pub fn godot_class(name: impl Into<String>) -> Self {
        Self::class(names::ASSEMBLY, names::NAMESPACE, name)
    }

    /// Create a class in the runtime's collections namespace.
    pub fn godot_collection(name: impl Into<String>) -> Self {
        Self::class(names::ASSEMBLY, names::COLLECTIONS_NAMESPACE, name)
    }

    /// Create a single-dimension array.
    pub fn array(element: HostType) -> Self {
        Self::array_of_rank(element, 1)
    }

    /// Create an array of the given rank.
    pub fn array_of_rank(element: HostType, rank: usize) -> Self {
        Self {
            name: String::new(),
            kind: TypeKind::Array,
            special: SpecialType::None,
            assembly: None,
            namespace: None,
            type_arguments: Vec::new(),
            element: Some(Box::new(element)),
            rank,
            base: None,
        }
    }

    /// Set the direct base type.
    pub fn with_base(mut self, base: HostType) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    /// Set the generic type arguments, turning this into a constructed type.
    pub fn with_type_arguments(mut self, args: Vec<HostType>) -> Self {
        self.type_arguments = args;
        self
    }

    /// Metadata name used for lookups (``Godot.Collections.Array`1``).
    ///
    /// Arrays have no metadata name and return their display name.
    pub fn metadata_name(&self) -> String {
        if self.kind.is_array() {
            return self.full_qualified_name();
        }
        let mut name = match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        };
        if !self.type_arguments.is_empty() {
            name.push('`');
            name.push_str(&self.type_arguments.len().to_string());
        }
        name
    }
}

impl TypeSymbol for HostType {
    fn special_type(&self) -> SpecialType {
        self.special
    }

    fn type_kind(&self) -> TypeKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn containing_assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    fn containing_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn type_arguments(&self) -> &[Self] {
        &self.type_arguments
    }

    fn array_rank(&self) -> usize {
        self.rank
    }

    fn element_type(&self) -> Option<&Self> {
        self.element.as_deref()
    }

    fn base_type(&self) -> Option<&Self> {
        self.base.as_deref()
    }

    fn full_qualified_name(&self) -> String {
        if let Some(keyword) = self.special.keyword() {
            return keyword.to_string();
        }

        if let Some(element) = &self.element {
            let commas = ",".repeat(self.rank.saturating_sub(1));
            return format!("{}[{commas}]", element.full_qualified_name());
        }

        let mut out = String::from(names::GLOBAL_PREFIX);
        if let Some(ns) = &self.namespace {
            out.push_str(ns);
            out.push('.');
        }
        out.push_str(&self.name);

        if !self.type_arguments.is_empty() {
            let args: Vec<String> = self
                .type_arguments
                .iter()
                .map(TypeSymbol::full_qualified_name)
                .collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }

    fn type_hash(&self) -> TypeHash {
        if let Some(element) = &self.element {
            return TypeHash::from_array(element.type_hash(), self.rank);
        }

        let metadata_name = self.metadata_name();
        let definition = match &self.assembly {
            Some(assembly) => TypeHash::from_assembly_name(assembly, &metadata_name),
            None => TypeHash::from_name(&metadata_name),
        };

        if self.type_arguments.is_empty() {
            return definition;
        }

        let args: Vec<TypeHash> = self
            .type_arguments
            .iter()
            .map(TypeSymbol::type_hash)
            .collect();
        TypeHash::from_generic_instance(definition, &args)
    }
}
