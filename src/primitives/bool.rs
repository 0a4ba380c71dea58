//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Adapters answer "is this array-like?" with one of these, and pointer
//! descriptors use `If` to pick between layers without overlapping impls.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector).
    /// Branches may be unsized so that `str` or `[T]` leaves can be selected.
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then: ?Sized, Else: ?Sized> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then: ?Sized, Else: ?Sized> = Else;
}
