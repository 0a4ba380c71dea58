//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeShape)]` | on struct/enum/union | Register a leaf or array-like type |

mod type_shape;

pub use type_shape::expand_derive_type_shape;
