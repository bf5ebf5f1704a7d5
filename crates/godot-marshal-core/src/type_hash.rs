//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] identifies a host type by a 64-bit hash computed from its
//! metadata name. Two descriptors of the same type produced by different
//! lookups compare equal, which is all the base-type walk needs to detect
//! derivation from the root object type.
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that named types,
//! arrays and generic instances never collide with each other.
//!
//! # Examples
//!
//! ```
//! use godot_marshal_core::TypeHash;
//!
//! let object = TypeHash::from_assembly_name("GodotSharp", "Godot.Object");
//! assert_eq!(object, TypeHash::from_assembly_name("GodotSharp", "Godot.Object"));
//!
//! // The same name in another assembly is another type
//! assert_ne!(object, TypeHash::from_assembly_name("Game", "Godot.Object"));
//!
//! // Rank participates in array identity
//! let one = TypeHash::from_array(object, 1);
//! let two = TypeHash::from_array(object, 2);
//! assert_ne!(one, two);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant used when folding component hashes together
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for named type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for the containing assembly
    pub const ASSEMBLY: u64 = 0x3c6ef372fe94f82b;

    /// Domain marker for array type hashes
    pub const ARRAY: u64 = 0x6a09e667f3bcc908;

    /// Argument position mixing constants.
    /// Each position gets a unique constant so argument order matters.
    pub const ARG_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a host type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a fully qualified metadata name
    /// (e.g. `Godot.Object`, ``Godot.Collections.Array`1``).
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a type hash from a metadata name qualified by its containing
    /// assembly.
    ///
    /// Types with the same metadata name in different assemblies are distinct.
    #[inline]
    pub fn from_assembly_name(assembly: &str, name: &str) -> Self {
        let hash = Self::from_name(name).0.wrapping_mul(hash_constants::SEP);
        TypeHash(hash ^ hash_constants::ASSEMBLY ^ xxh64(assembly.as_bytes(), 0))
    }

    /// Create the hash of an array type from its element hash and rank.
    #[inline]
    pub fn from_array(element: TypeHash, rank: usize) -> Self {
        let hash = hash_constants::ARRAY ^ element.0;
        TypeHash(hash.wrapping_mul(hash_constants::SEP).wrapping_add(rank as u64))
    }

    /// Create the hash of a constructed generic type from its definition
    /// and type argument hashes.
    ///
    /// Argument order matters: `Dictionary<int, string>` and
    /// `Dictionary<string, int>` hash differently.
    #[inline]
    pub fn from_generic_instance(definition: TypeHash, args: &[TypeHash]) -> Self {
        let mut hash = definition.0;
        for (i, arg) in args.iter().enumerate() {
            let marker = hash_constants::ARG_MARKERS
                .get(i)
                .copied()
                .unwrap_or_else(|| hash_constants::ARG_MARKERS[0].wrapping_add(i as u64));
            // wrapping_mul keeps the fold non-commutative
            hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ arg.0);
        }
        TypeHash(hash)
    }

}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
