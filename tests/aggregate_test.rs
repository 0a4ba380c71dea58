use core::marker::PhantomData;
use core::mem::{align_of, size_of};

use static_assertions::const_assert_eq;
use tola_reflect::prelude::*;
use tola_reflect::{max_align_of, max_size_of};

#[repr(C, align(32))]
#[derive(TypeShape)]
#[allow(dead_code)]
struct Aligned([u8; 3]);

const_assert_eq!(max_size::<(char, i32, f64)>(), size_of::<f64>());
const_assert_eq!(max_align::<(char, i32, f64)>(), align_of::<f64>());

#[test]
fn test_max_size() {
    assert_eq!(max_size::<(char, i32, f64)>(), size_of::<f64>());
    assert_eq!(max_size::<(u8,)>(), 1);
    assert_eq!(max_size::<(u8, [u8; 40], u64)>(), 40);
    assert_eq!(max_size::<((), bool)>(), 1);
}

#[test]
fn test_max_align() {
    assert_eq!(max_align::<(char, i32, f64)>(), align_of::<f64>());
    assert_eq!(max_align::<(u8, [u8; 40])>(), 1);
    assert_eq!(max_align::<(u8, Aligned, u16)>(), 32);
    assert_eq!(max_size::<(u8, Aligned)>(), 32);
}

#[test]
fn test_wrapped_lists_aggregate_like_bare_lists() {
    assert_eq!(max_size::<Types<(char, i32, f64)>>(), max_size::<(char, i32, f64)>());
    assert_eq!(max_align::<PhantomData<(u8, u32)>>(), align_of::<u32>());
}

#[test]
fn test_variadic_macros() {
    assert_eq!(max_size_of!(u8, u16, u32), 4);
    assert_eq!(max_align_of!(u8, u16), 2);
    assert_eq!(max_size_of!(Aligned), 32);
}

#[test]
fn test_pointer_sizes() {
    assert_eq!(max_size::<(*const u8, &u8)>(), size_of::<usize>());
    assert_eq!(max_size::<(&str, u8)>(), 2 * size_of::<usize>());
}
