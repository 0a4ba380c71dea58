use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

scalar_shape! {
    std::path::PathBuf,
    std::path::Path,
    std::ffi::OsString,
    std::ffi::OsStr,
    std::time::Instant,
    std::time::SystemTime,
}

// Maps and sets are registered with the default hasher only.
generic_shape! {
    "std::sync::Mutex" => Mutex<?Sized T>,
    "std::sync::RwLock" => RwLock<?Sized T>,
    "std::collections::HashMap" => HashMap<K, V>,
    "std::collections::HashSet" => HashSet<T>,
}
