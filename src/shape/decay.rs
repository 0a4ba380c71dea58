//! Function-to-pointer decay.
//!
//! Function items and closures have unnameable types, so their decay is
//! expressed as a trait over the call signature instead of a
//! `TypeShape::Decayed` entry. `Args` is the argument tuple; it keeps the
//! per-arity impls from overlapping.
//!
//! ```ignore
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! fn pointer_type<F: FnDecay<Args>, Args>(_: F) -> PhantomData<F::Pointer> {
//!     PhantomData
//! }
//!
//! let _: PhantomData<fn(i32) -> i32> = pointer_type(double);
//! ```

/// Decays a callable to the `fn` pointer type with the same signature.
pub trait FnDecay<Args> {
    type Pointer;
}

macro_rules! fn_decay {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> FnDecay<($($arg,)*)> for F
        where
            F: Fn($($arg),*) -> R,
        {
            type Pointer = fn($($arg),*) -> R;
        }
    };
}

fn_decay!();
fn_decay!(A);
fn_decay!(A, B);
fn_decay!(A, B, C);
fn_decay!(A, B, C, D);
fn_decay!(A, B, C, D, E);
fn_decay!(A, B, C, D, E, G);
fn_decay!(A, B, C, D, E, G, H);
fn_decay!(A, B, C, D, E, G, H, I);
