//! Function-pointer descriptors.
//!
//! Function pointers are leaves: never stripped, never counted as pointer
//! depth. An elided reference parameter makes the pointer higher-ranked
//! (`fn(&u8)` is `for<'a> fn(&'a u8)`), which no `fn(A)` impl covers, so
//! leading reference parameters get their own shapes:
//!
//! ```text
//! fn(A, ..) -> R
//! for<'a> fn(&'a P, A, ..) -> R
//! for<'a> fn(&'a mut P, A, ..) -> R
//! for<'a, 'b> fn(&'a P, &'b Q, A, ..) -> R
//! ```
//!
//! Each shape exists for `fn`, `unsafe fn`, `extern "C" fn` and
//! `unsafe extern "C" fn`, up to eight parameters in total.

// `for<'a> fn(&'a P)` and `fn(&'static P)` are distinct types.
#![allow(coherence_leak_check)]

use crate::primitives::{Absent, TypeKey};
use crate::{ArrayAdapter, TypeShape};

macro_rules! fn_shape {
    (@plain [$($abi:tt)*] $name:literal; $($arg:ident),*) => {
        impl<R: TypeShape, $($arg: TypeShape),*> TypeShape for $($abi)* fn($($arg),*) -> R {
            crate::__leaf_shape!(
                TypeKey::named($name).with(R::KEY)$(.with(<$arg as TypeShape>::KEY))*
            );
        }

        impl<R, $($arg),*> ArrayAdapter for $($abi)* fn($($arg),*) -> R {
            type IsArray = Absent;
            type Element = Self;
        }
    };
    (@shared [$($abi:tt)*] $name:literal; $($arg:ident),*) => {
        fn_shape!(@bound [$($abi)*] $name; ['a] [&'a P] [P => "&'_"]; $($arg),*);
    };
    (@unique [$($abi:tt)*] $name:literal; $($arg:ident),*) => {
        fn_shape!(@bound [$($abi)*] $name; ['a] [&'a mut P] [P => "&'_ mut"]; $($arg),*);
    };
    (@shared2 [$($abi:tt)*] $name:literal; $($arg:ident),*) => {
        fn_shape!(@bound [$($abi)*] $name; ['a, 'b] [&'a P, &'b Q] [P => "&'_", Q => "&'_"]; $($arg),*);
    };
    (@bound [$($abi:tt)*] $name:literal;
        [$($lt:lifetime),+] [$($lead:tt)*] [$($ref:ident => $tag:literal),+];
        $($arg:ident),*
    ) => {
        impl<R: TypeShape, $($ref: ?Sized + TypeShape,)+ $($arg: TypeShape),*> TypeShape
            for for<$($lt),+> $($abi)* fn($($lead)* $(, $arg)*) -> R
        {
            crate::__leaf_shape!(
                TypeKey::named($name)
                    .with(R::KEY)
                    $(.with(TypeKey::named($tag).with(<$ref as TypeShape>::KEY)))+
                    $(.with(<$arg as TypeShape>::KEY))*
            );
        }

        impl<R, $($ref: ?Sized,)+ $($arg),*> ArrayAdapter
            for for<$($lt),+> $($abi)* fn($($lead)* $(, $arg)*) -> R
        {
            type IsArray = Absent;
            type Element = Self;
        }
    };
    ($shape:ident; $($arg:ident),*) => {
        fn_shape!(@$shape [] "fn"; $($arg),*);
        fn_shape!(@$shape [unsafe] "unsafe fn"; $($arg),*);
        fn_shape!(@$shape [extern "C"] "extern \"C\" fn"; $($arg),*);
        fn_shape!(@$shape [unsafe extern "C"] "unsafe extern \"C\" fn"; $($arg),*);
    };
}

fn_shape!(plain;);
fn_shape!(plain; A);
fn_shape!(plain; A, B);
fn_shape!(plain; A, B, C);
fn_shape!(plain; A, B, C, D);
fn_shape!(plain; A, B, C, D, E);
fn_shape!(plain; A, B, C, D, E, F);
fn_shape!(plain; A, B, C, D, E, F, G);
fn_shape!(plain; A, B, C, D, E, F, G, H);

fn_shape!(shared;);
fn_shape!(shared; A);
fn_shape!(shared; A, B);
fn_shape!(shared; A, B, C);
fn_shape!(shared; A, B, C, D);
fn_shape!(shared; A, B, C, D, E);
fn_shape!(shared; A, B, C, D, E, F);
fn_shape!(shared; A, B, C, D, E, F, G);

fn_shape!(unique;);
fn_shape!(unique; A);
fn_shape!(unique; A, B);
fn_shape!(unique; A, B, C);
fn_shape!(unique; A, B, C, D);
fn_shape!(unique; A, B, C, D, E);
fn_shape!(unique; A, B, C, D, E, F);
fn_shape!(unique; A, B, C, D, E, F, G);

fn_shape!(shared2;);
fn_shape!(shared2; A);
fn_shape!(shared2; A, B);
fn_shape!(shared2; A, B, C);
fn_shape!(shared2; A, B, C, D);
fn_shape!(shared2; A, B, C, D, E);
fn_shape!(shared2; A, B, C, D, E, F);
