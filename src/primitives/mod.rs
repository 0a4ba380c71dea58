//! # Layer 0: Primitives
//!
//! Basic building blocks for the classification layer:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `peano.rs`: Peano numbers for level indexing.
//! - `key.rs`: Structural type identity keys.
//! - `const_utils.rs`: Const folds and hashing.

pub mod bool;
pub mod const_utils;
pub mod key;
pub mod peano;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use const_utils::{all_of, any_of, key_in, max_of};
pub use key::TypeKey;
pub use peano::{S, Z};
pub use peano::{D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16};
