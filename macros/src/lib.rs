//! Procedural macros for the tola-reflect type classification layer
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(TypeShape)]` | struct/enum/union | Register a type as a leaf descriptor |
//! | `#[shape(element = T)]` | helper attribute | Register the type as array-like over `T` |
//! | `peano!(n)` | - | Generate `D0..Dn` Peano aliases |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(TypeShape)]
//! struct Point { x: f32, y: f32 }
//!
//! #[derive(TypeShape)]
//! #[shape(element = T)]
//! struct Column<T> { cells: Vec<T> }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive `TypeShape` and `ArrayAdapter` for a user type.
///
/// The generated key is built from `module_path!()`, the type name and the
/// key of every type parameter, so `Wrapper<i32>` and `Wrapper<u32>` get
/// distinct identities. Every type parameter gains a `TypeShape` bound.
///
/// `#[shape(element = T)]` marks the type as array-like with element `T`.
#[proc_macro_derive(TypeShape, attributes(shape))]
pub fn derive_type_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_type_shape(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
