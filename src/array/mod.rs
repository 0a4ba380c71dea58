//! # Layer 1: Array/Rank Decomposition
//!
//! An [`ArrayAdapter`] answers one question per type: "is this array-like,
//! and if so what is one level down?". [`Decompose`] walks that relation
//! until a level reports `IsArray = Absent`, collecting every level:
//!
//! ```text
//! [[[i32; 4]; 10]; 2]
//!    Level 0: [[[i32; 4]; 10]; 2]
//!    Level 1: [[i32; 4]; 10]
//!    Level 2: [i32; 4]
//!    Level 3: i32              <- leaf, Element = Self
//! rank = 3
//! ```
//!
//! The decomposer never names a concrete family. Native arrays, slices and
//! sequence containers are registered in [`crate::impls`]; user types opt
//! in with `#[derive(TypeShape)]` + `#[shape(element = T)]`.

mod levels;

pub use levels::{End, Level, LevelAt, LevelList};

use crate::primitives::{Absent, Bool, Present};
use crate::shape::{RawOf, TypeShape};

/// Pluggable single-step array adapter.
///
/// Non-array types set `IsArray = Absent` and `Element = Self` (the fixed
/// point). References forward to their referent, so array-likeness is
/// judged with references removed but raw pointers kept.
pub trait ArrayAdapter {
    /// `Present` if the type decomposes one level.
    type IsArray: Bool;

    /// The element type one level down (`Self` for leaves).
    type Element: ?Sized;

    /// Compile-time extent of native fixed-size arrays. `None` for
    /// references, even to arrays.
    const EXTENT: Option<usize> = None;
}

/// Recursive decomposition into levels.
///
/// Blanket-implemented for every [`ArrayAdapter`].
pub trait Decompose {
    /// Number of array-like levels (0 for non-array types).
    const RANK: usize;

    /// `Level<Self, Level<Element, .. End>>`, outermost first, leaf last.
    type Levels: LevelList;

    /// The innermost non-decomposable element.
    type Innermost: ?Sized;
}

/// One decomposition step, dispatched on `T::IsArray`.
#[doc(hidden)]
pub trait DecomposeStep<T: ?Sized> {
    const RANK: usize;
    type Levels: LevelList;
    type Innermost: ?Sized;
}

impl<T: ?Sized> DecomposeStep<T> for Absent {
    const RANK: usize = 0;
    type Levels = Level<T, End>;
    type Innermost = T;
}

impl<T> DecomposeStep<T> for Present
where
    T: ?Sized + ArrayAdapter,
    T::Element: Decompose,
{
    const RANK: usize = <T::Element as Decompose>::RANK + 1;
    type Levels = Level<T, <T::Element as Decompose>::Levels>;
    type Innermost = <T::Element as Decompose>::Innermost;
}

impl<T> Decompose for T
where
    T: ?Sized + ArrayAdapter,
    T::IsArray: DecomposeStep<T>,
{
    const RANK: usize = <T::IsArray as DecomposeStep<T>>::RANK;
    type Levels = <T::IsArray as DecomposeStep<T>>::Levels;
    type Innermost = <T::IsArray as DecomposeStep<T>>::Innermost;
}

/// The type at decomposition level `N` (a Peano index, see `D0..D16`).
pub type RankType<T, N> = <<T as Decompose>::Levels as LevelAt<N>>::Out;

/// The innermost element of `T`.
pub type InnermostOf<T> = <T as Decompose>::Innermost;

/// The innermost element of `T` with its raw identity taken.
pub type RawElementOf<T> = RawOf<<T as Decompose>::Innermost>;

/// True if `T` (references removed) is array-like.
#[inline(always)]
pub const fn is_array<T: ?Sized + ArrayAdapter>() -> bool {
    <T::IsArray as Bool>::VALUE
}

/// Number of array-like levels of `T`.
#[inline(always)]
pub const fn rank<T: ?Sized + Decompose>() -> usize {
    T::RANK
}

/// Extent of a native fixed-size array, `None` otherwise.
#[inline(always)]
pub const fn extent<T: ?Sized + ArrayAdapter>() -> Option<usize> {
    T::EXTENT
}

/// True iff `T` is a one-dimensional native array whose element is `char`
/// once pointers are stripped (`[char; N]`, `[*const char; N]`).
///
/// References are not native arrays.
#[inline(always)]
pub const fn is_char_row<T>() -> bool
where
    T: ?Sized + ArrayAdapter + Decompose,
    T::Innermost: TypeShape,
{
    T::EXTENT.is_some()
        && T::RANK == 1
        && <RawElementOf<T> as TypeShape>::KEY.same(<char as TypeShape>::KEY)
}
