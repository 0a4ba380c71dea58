#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library types
// - alloc: enables alloc types in no_std

//! # tola-reflect
//!
//! Compile-time type classification for reflection engines.
//!
//! **Every answer is a constant or a type alias. Nothing runs.**
//!
//! ## Questions answered
//!
//! | Query | Item | Example |
//! |-------|------|---------|
//! | Raw identity | [`RawOf<T>`] | `RawOf<&*const i32> == i32` |
//! | Pointer depth | [`pointer_depth`] | `pointer_depth::<*mut *mut u8>() == 2` |
//! | Array rank | [`rank`], [`RankType`] | `rank::<[[u8; 4]; 2]>() == 2` |
//! | Capabilities | [`has_capability!`] | `has_capability!(W: GetType)` |
//! | List membership | [`contains`], [`is_in_list`] | `contains::<i32, (bool, i32)>()` |
//! | Size/alignment | [`max_size`], [`max_align`] | `max_size::<(u8, f64)>() == 8` |
//! | Opaque address | [`address_of`] | `address_of(&ptr_chain)` |
//! | Decay / ownership | [`DecayOf`], [`is_unique_owner`] | `DecayOf<&[i32; 5]> == [i32; 5]` |
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Peano (D0-D16), TypeKey, const folds           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Descriptors                                             |
//! |  - TypeShape (raw, depth, decay, key), ArrayAdapter, Decompose    |
//! |  - core / alloc / std registrations                               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Queries                                                 |
//! |  - Type lists, capability probes, pointer normalization           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Descriptor                                              |
//! |  - One const value per type for the registration layer            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_reflect::prelude::*;
//!
//! #[derive(TypeShape)]
//! struct Widget;
//!
//! impl GetType for Widget {
//!     fn get_type(&self) -> Type { Type::of::<Widget>() }
//! }
//!
//! const DEPTH: usize = pointer_depth::<*const *const Widget>();
//! const REFLECTED: bool = has_capability!(&Widget: GetType);
//! ```

// Allow `::tola_reflect` to work inside the crate itself
extern crate self as tola_reflect;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for define_probe! / has_capability!
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Descriptors and Decomposition
// =============================================================================
pub mod shape;
pub mod array;
mod impls;

// =============================================================================
// Layer 2: Queries
// =============================================================================
pub mod list;
pub mod probe;
pub mod ptr;

// =============================================================================
// Layer 3: Aggregated Descriptor
// =============================================================================
pub mod descriptor;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, Present};
pub use primitives::key::TypeKey;
pub use primitives::peano::{S, Z};
pub use primitives::peano::{D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16};
pub use primitives::const_utils::{all_of, any_of};

pub use shape::{
    is_pointer, is_unique_owner, pointer_depth, same_type,
    DecayFn, DecayOf, FnDecay, InnermostPointerOf, PointeeOf, RawOf, TypeShape,
};
pub use array::{
    extent, is_array, is_char_row, rank,
    ArrayAdapter, Decompose, InnermostOf, RankType, RawElementOf,
};
pub use list::{contains, is_in_list, list_len, max_align, max_size, IntoTypeList, ListContainer, TypeList, Types};
pub use probe::{Capabilities, DerivedInfo, GetDerivedInfo, GetPtr, GetType, Type};
pub use ptr::address_of;
pub use descriptor::Descriptor;

// Re-export proc-macros
pub use macros::TypeShape;

/// Common items for type classification.
pub mod prelude {
    pub use crate::{
        // Core Traits
        ArrayAdapter, Decompose, TypeShape, IntoTypeList, TypeList,
        // Aliases
        RawOf, DecayOf, PointeeOf, InnermostPointerOf, RankType, InnermostOf, RawElementOf,
        // Queries
        pointer_depth, is_pointer, is_unique_owner, same_type,
        is_array, rank, extent, is_char_row,
        contains, is_in_list, max_size, max_align,
        address_of,
        Descriptor, Types,
    };
    pub use crate::probe::{
        Capabilities, DerivedInfo, Type,
        GetType, GetPtr, GetDerivedInfo,
        GetTypeProbe, GetPtrProbe, GetDerivedInfoProbe,
        GetTypeFallback, GetPtrFallback, GetDerivedInfoFallback,
    };
    pub use crate::{capabilities, define_probe, has_capability, type_list_container};
}
