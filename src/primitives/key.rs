//! Structural type identity.
//!
//! A `TypeKey` is a 128-bit FNV-1a hash over a type's structure: leaf
//! names are hashed from their path, constructors fold the keys of their
//! arguments in order. Two spellings of the same type always produce the
//! same key; distinct types collide only on a 128-bit hash collision.

use super::const_utils::{fnv1a_128_feed, fnv1a_128_str};

/// Separator fed before every folded argument, so `F<G<A>, B>` and
/// `F<G<A, B>>` hash differently.
const ARG_TAG: &[u8] = b"<";
const LEN_TAG: &[u8] = b";";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey(u128);

impl TypeKey {
    /// Key of a leaf (or of a constructor before its arguments).
    pub const fn named(name: &str) -> Self {
        TypeKey(fnv1a_128_str(name))
    }

    /// Fold one type argument into the key.
    pub const fn with(self, arg: TypeKey) -> Self {
        let hash = fnv1a_128_feed(self.0, ARG_TAG);
        TypeKey(fnv1a_128_feed(hash, &arg.0.to_le_bytes()))
    }

    /// Fold a length (array extent, const parameter) into the key.
    pub const fn with_len(self, len: usize) -> Self {
        let hash = fnv1a_128_feed(self.0, LEN_TAG);
        TypeKey(fnv1a_128_feed(hash, &(len as u64).to_le_bytes()))
    }

    /// Const equality.
    pub const fn same(self, other: TypeKey) -> bool {
        self.0 == other.0
    }
}
