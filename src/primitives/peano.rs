//! Peano numbers for indexing decomposition levels.

use core::marker::PhantomData;

/// Zero (base case)
pub struct Z;

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);

// Generate D0..D16 using proc-macro
macros::peano!(16);
