//! Level lists produced by decomposition.

use core::marker::PhantomData;

use crate::primitives::{S, Z};

/// One decomposition level: `H` followed by the remaining levels `T`.
pub struct Level<H: ?Sized, T>(PhantomData<T>, PhantomData<H>);

/// End of a level list.
pub struct End;

/// Length of a level list (`rank + 1`).
pub trait LevelList {
    const LEN: usize;
}

impl LevelList for End {
    const LEN: usize = 0;
}

impl<H: ?Sized, T: LevelList> LevelList for Level<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Peano-indexed access into a level list.
///
/// Indexing past the leaf is a compile error.
pub trait LevelAt<N> {
    type Out: ?Sized;
}

impl<H: ?Sized, T> LevelAt<Z> for Level<H, T> {
    type Out = H;
}

impl<H: ?Sized, T: LevelAt<N>, N> LevelAt<S<N>> for Level<H, T> {
    type Out = T::Out;
}
