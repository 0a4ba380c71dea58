//! Array/rank decomposition over native arrays, slices and containers.

use std::collections::VecDeque;

use static_assertions::assert_type_eq_all;
use tola_reflect::prelude::*;
use tola_reflect::array::{LevelList, Level, End};
use tola_reflect::{D0, D1, D2, D3};

// `int[2][10][4]`
type Cube = [[[i32; 4]; 10]; 2];

assert_type_eq_all!(RankType<Cube, D0>, Cube);
assert_type_eq_all!(RankType<Cube, D1>, [[i32; 4]; 10]);
assert_type_eq_all!(RankType<Cube, D2>, [i32; 4]);
assert_type_eq_all!(RankType<Cube, D3>, i32);

assert_type_eq_all!(
    <Vec<Vec<u8>> as Decompose>::Levels,
    Level<Vec<Vec<u8>>, Level<Vec<u8>, Level<u8, End>>>
);

#[test]
fn test_native_array_rank() {
    assert_eq!(rank::<Cube>(), 3);
    assert_eq!(rank::<[u8; 16]>(), 1);
    assert_eq!(rank::<[[u8; 2]; 2]>(), 2);
    assert_eq!(<<Cube as Decompose>::Levels as LevelList>::LEN, 4);
}

#[test]
fn test_non_array_has_rank_zero() {
    assert_eq!(rank::<i32>(), 0);
    assert_eq!(rank::<String>(), 0);
    assert_eq!(rank::<Option<[i32; 3]>>(), 0);
    assert_eq!(rank::<*const [i32; 3]>(), 0);
    assert!(!is_array::<f64>());
    assert_type_eq_all!(RankType<f64, D0>, f64);
    assert_type_eq_all!(<f64 as ArrayAdapter>::Element, f64);
}

#[test]
fn test_container_rank() {
    assert_eq!(rank::<Vec<i32>>(), 1);
    assert_eq!(rank::<Vec<Vec<i32>>>(), 2);
    assert_eq!(rank::<VecDeque<[u8; 4]>>(), 2);
    assert_eq!(rank::<[Vec<bool>; 3]>(), 2);
    assert_eq!(rank::<[u16]>(), 1);
    assert_type_eq_all!(InnermostOf<Vec<[Vec<char>; 2]>>, char);
}

#[test]
fn test_array_likeness_sees_through_references_only() {
    assert!(is_array::<[i32; 3]>());
    assert!(is_array::<&[i32; 3]>());
    assert!(is_array::<&mut Vec<i32>>());
    assert!(is_array::<&[i32]>());
    assert!(!is_array::<*const [i32; 3]>());
    assert_eq!(rank::<&[[u8; 2]; 3]>(), 2);
}

#[test]
fn test_raw_element_type() {
    assert_type_eq_all!(RawElementOf<[[*const u8; 2]; 3]>, u8);
    assert_type_eq_all!(RawElementOf<Vec<&u64>>, u64);
    assert_type_eq_all!(RawElementOf<&mut i32>, i32);
}

#[test]
fn test_extent() {
    assert_eq!(extent::<[u8; 7]>(), Some(7));
    assert_eq!(extent::<&[u8; 7]>(), None);
    assert!(is_array::<&[u8; 7]>());
    assert_eq!(extent::<[u8]>(), None);
    assert_eq!(extent::<Vec<u8>>(), None);
    assert_eq!(extent::<u8>(), None);
}

#[test]
fn test_char_row() {
    assert!(is_char_row::<[char; 10]>());
    assert!(is_char_row::<[*const char; 4]>());
    assert!(is_char_row::<[&char; 4]>());
    assert!(!is_char_row::<&[char; 3]>());
    assert!(!is_char_row::<&mut [char; 3]>());
    assert!(!is_char_row::<[*const [char; 2]; 4]>());
    assert!(!is_char_row::<[i32; 10]>());
    assert!(!is_char_row::<char>());
    assert!(!is_char_row::<[[char; 2]; 2]>());
    assert!(!is_char_row::<Vec<char>>());
    assert!(!is_char_row::<[char]>());
}

#[test]
fn test_user_adapter() {
    #[derive(TypeShape)]
    #[shape(element = T)]
    #[allow(dead_code)]
    struct Column<T> {
        cells: Vec<T>,
    }

    assert!(is_array::<Column<f32>>());
    assert_eq!(rank::<Column<[f32; 3]>>(), 2);
    assert_type_eq_all!(RankType<Column<Column<u8>>, D1>, Column<u8>);
    assert_type_eq_all!(InnermostOf<Column<Column<u8>>>, u8);
}
